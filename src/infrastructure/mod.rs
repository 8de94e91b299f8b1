//! Infrastructure layer - Process-wide services

pub mod logging;

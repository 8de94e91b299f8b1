//! CLI module for the DreamLayer API
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API (default when no subcommand is given)
//! - `routes`: print the available endpoints and exit

pub mod routes;
pub mod serve;

use clap::{Parser, Subcommand};

pub use serve::ServeArgs;

/// DreamLayer API - Minimal image generation backend
#[derive(Parser)]
#[command(name = "dreamlayer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server (default mode)
    Serve(ServeArgs),

    /// Print the available endpoints
    Routes,
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(ServeArgs::default())
    }
}

//! Routes command - prints the endpoint listing shown at startup

use crate::api::router::ENDPOINTS;

/// Print the available endpoints to stdout
pub fn run() {
    print!("{}", endpoint_listing());
}

/// Startup banner printed by `serve` before binding
pub fn startup_banner(port: u16) -> String {
    format!(
        "Starting DreamLayer Simple API on port {}\n{}",
        port,
        endpoint_listing()
    )
}

fn endpoint_listing() -> String {
    let mut out = String::from("Available endpoints:\n");

    for endpoint in ENDPOINTS {
        out.push_str(&format!(
            "  {:<4} {} - {}\n",
            endpoint.method, endpoint.path, endpoint.description
        ));
    }

    out
}

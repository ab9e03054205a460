use clap::Parser;

/// Entry point for the drud-local site inventory tool.
///
/// Lists the sites running in local containers, waits for site containers to publish their
/// ports, and lists locally stored legacy environment snapshots.
///
/// # Errors
///
/// Returns an error if the command fails (e.g., missing home directory, unreachable
/// container runtime, or a container that never publishes a port).
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug cargo run -- port acme-prod-web
/// ```
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    drud_local::run(drud_local::cli::Cli::parse())
}

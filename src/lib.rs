//! drud-local: Inventory of locally running multi-container sites.
//!
//! This library classifies running containers by their naming convention, folds them into
//! per-site records with a merged status, and waits for containers to publish their ports.
use std::io::Write;
use std::time::Duration;

use cli::{Cli, Command};
use report::ListOptions;
use runtime::DockerSource;
use watcher::PortWatcher;

pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod filter;
pub mod fsutil;
pub mod inventory;
pub mod naming;
pub mod render;
pub mod report;
pub mod runtime;
pub mod watcher;

/// Runs a single CLI command.
///
/// # Errors
///
/// Possible errors include:
/// - Missing home directory or invalid environment variables.
/// - Failure to reach the container runtime.
/// - Failure to check the local project directories.
/// - A container that doesn't publish a port within the retry budget.
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config::Config::from_env()?;
    if let Some(home) = cli.home {
        config.base_dir = home;
    }
    log::debug!("Final base directory: {}", config.base_dir.display());

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::List { all, legacy, json } => {
            let source = DockerSource::connect()?;
            let options = ListOptions {
                all,
                legacy_only: legacy,
            };
            let inventory = report::collect_inventory(&source, &config.base_dir, options)?;
            if json {
                render::render_json(&mut stdout, &inventory)?;
            } else {
                render::render_site_list(&mut stdout, &inventory, &config.base_dir)?;
            }
        }
        Command::Port {
            name,
            attempts,
            delay,
        } => {
            let mut policy = config.retry;
            if let Some(attempts) = attempts {
                policy = policy.with_max_attempts(attempts);
            }
            if let Some(secs) = delay {
                policy = policy.with_delay(Duration::from_secs(secs));
            }

            let watcher = PortWatcher::new(DockerSource::connect()?, policy);
            let port = watcher.await_port(&name)?;
            writeln!(stdout, "{port}")?;
        }
        Command::Snapshots => {
            let dir = config.base_dir.join(naming::NamingScheme::Legacy.label());
            for snapshot in filter::legacy_snapshots(&dir)? {
                writeln!(stdout, "{snapshot}")?;
            }
        }
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "drud-local", version, about = "Inspect locally running sites")]
pub struct Cli {
    /// Base directory of local projects (overrides `DRUD_HOME`).
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the sites running locally.
    List {
        /// Include containers that don't belong to a local project.
        #[arg(long)]
        all: bool,
        /// Only list sites of the legacy naming scheme.
        #[arg(long)]
        legacy: bool,
        /// Print the sites as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Wait until a container publishes a port and print it.
    Port {
        /// Name, or part of the name, of the container.
        name: String,
        /// Attempts before giving up (overrides `DRUD_PORT_ATTEMPTS`).
        #[arg(long)]
        attempts: Option<u32>,
        /// Seconds between two attempts (overrides `DRUD_PORT_DELAY_SECS`).
        #[arg(long, value_name = "SECS")]
        delay: Option<u64>,
    },
    /// List the locally stored legacy environment snapshots.
    Snapshots,
}

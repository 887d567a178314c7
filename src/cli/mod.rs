//! Command-line interface

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Atlas API - user, team and membership management service
#[derive(Debug, Parser)]
#[command(name = "atlas-api", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
    /// Apply pending schema migrations and exit
    Migrate {
        /// Revert the most recently applied migration instead
        #[arg(long)]
        revert: bool,
    },
}

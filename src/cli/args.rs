//! CLI argument definitions using clap
//!
//! Commands:
//! - itemstore serve [--config <path>] [--host <host>] [--port <port>] [--mongo-uri <uri>] [--memory]
//! - itemstore check [--config <path>] [--mongo-uri <uri>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// itemstore - CRUD HTTP service over a MongoDB item collection
#[derive(Parser, Debug)]
#[command(name = "itemstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Arguments shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to JSON configuration file (defaults apply when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI")]
    pub mongo_uri: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        common: CommonArgs,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Use the in-memory store instead of MongoDB
        #[arg(long)]
        memory: bool,
    },

    /// Check that the store is reachable and exit
    Check {
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

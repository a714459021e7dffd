//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Marquee - marketing collateral for movies that don't exist
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Marketing collateral for movies that don't exist", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(short, long, global = true, env = "MARQUEE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Export spans through OpenTelemetry (filtered by RUST_LOG)
    #[arg(long, global = true)]
    pub telemetry: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Gather research once and print it as JSON
    Gather,

    /// Regenerate one movie and print it as JSON
    Regenerate {
        /// Movie identifier
        #[arg(long)]
        slug: String,

        /// Title to generate from
        #[arg(long)]
        title: String,
    },
}

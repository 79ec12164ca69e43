//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--port <port>]

use clap::{Parser, Subcommand};

/// Bookshelf - a book and review catalog server
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        /// Port to listen on (overrides PORT from the environment)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

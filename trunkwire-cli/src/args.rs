//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trunkwire")]
#[command(version, about = "Dynamic Trunking Protocol frame decoder", long_about = None)]
pub struct Cli {
    /// Verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode hex-encoded DTP payloads (no Ethernet/LLC/SNAP headers)
    Decode {
        /// One payload per argument; spaces, ':' and '-' separators are allowed
        #[arg(value_name = "HEX", required = true)]
        payloads: Vec<String>,
    },

    /// Decode hex-encoded Ethernet frames, one per line
    Frames {
        /// Read frames from a file instead of stdin
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// List registered decoders
    Protocols,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

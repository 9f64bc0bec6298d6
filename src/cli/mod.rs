//! CLI argument parsing for courier
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --mode, --unreachable

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use courier_core::graph::{RelaxationMode, UnreachablePolicy};
pub use output::OutputFormat;
use parse::{parse_mode, parse_policy};

/// Courier - cost of the farthest delivery from the depot
#[derive(Parser, Debug)]
#[command(name = "courier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, courier_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file
    #[arg(long, global = true, env = "COURIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Relaxation mode (settle, single-pass)
    #[arg(long, global = true, value_parser = parse_mode)]
    pub mode: Option<RelaxationMode>,

    /// Unreachable node policy (reject, exclude)
    #[arg(long, global = true, value_parser = parse_policy)]
    pub unreachable: Option<UnreachablePolicy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cost of the farthest node from the origin
    Solve {
        /// Edge list file, `-` or absent for stdin
        input: Option<PathBuf>,
    },

    /// Print every node's adjacency list after relaxation
    Show {
        /// Edge list file, `-` or absent for stdin
        input: Option<PathBuf>,
    },

    /// Check the engine's distances against Dijkstra
    Verify {
        /// Edge list file, `-` or absent for stdin
        input: Option<PathBuf>,
    },
}

impl Commands {
    pub fn input(&self) -> Option<&PathBuf> {
        match self {
            Commands::Solve { input } | Commands::Show { input } | Commands::Verify { input } => {
                input.as_ref()
            }
        }
    }
}

//! Courier - farthest-delivery cost from a depot over an undirected road map
//!
//! Reads an edge list, relaxes shortest distances from node 0 and reports the
//! largest of them.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use courier_core::error::ExitCode as CourierExitCode;
use courier_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let informational = matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            );
            // clap fails before `Cli.format` exists; honour a JSON request anyway
            if argv_format_json && !informational {
                let courier_error = cli::parse::usage_error(&err);
                eprintln!("{}", courier_error.to_json());
                return ExitCode::from(courier_error.exit_code() as u8);
            }
            err.exit();
        }
    };

    let directive = logging::level_for(cli.verbose, cli.quiet, cli.log_level.as_deref());
    if let Err(e) = logging::init_tracing(&directive, cli.log_json) {
        eprintln!("warning: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(CourierExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}

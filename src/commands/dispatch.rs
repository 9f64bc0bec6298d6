//! Command dispatch logic for courier

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use courier_core::bail_usage;
use courier_core::config::CourierConfig;
use courier_core::error::Result;
use courier_core::graph::EdgeList;
use courier_core::parse::parse_edge_list;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{show, solve, verify};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a CourierConfig,
    pub start: Instant,
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = CourierConfig::resolve(cli.config.as_deref())?
        .with_overrides(cli.mode, cli.unreachable);
    debug!(
        elapsed = ?start.elapsed(),
        mode = %config.relaxation.mode,
        unreachable = %config.reduce.unreachable,
        format = %cli.format,
        "resolve_config"
    );

    let input = cli.command.as_ref().and_then(Commands::input);
    let edges = load_edges(input, &config)?;
    debug!(elapsed = ?start.elapsed(), num_nodes = edges.num_nodes, "load_input");

    let ctx = CommandContext {
        cli,
        config: &config,
        start,
    };

    match &cli.command {
        None | Some(Commands::Solve { .. }) => solve::execute(&ctx, &edges),
        Some(Commands::Show { .. }) => show::execute(&ctx, &edges),
        Some(Commands::Verify { .. }) => verify::execute(&ctx, &edges),
    }
}

fn load_edges(input: Option<&PathBuf>, config: &CourierConfig) -> Result<EdgeList> {
    let text = match input {
        Some(path) if path.as_os_str() != "-" => read_file(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_edge_list(&text, config.graph.max_nodes)
}

fn read_file(path: &Path) -> Result<String> {
    if path.is_dir() {
        bail_usage!(format!("input is a directory: {}", path.display()));
    }
    Ok(fs::read_to_string(path)?)
}

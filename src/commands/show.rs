//! `courier show` - adjacency lists with relaxed distances

use courier_core::error::Result;
use courier_core::graph::EdgeList;
use courier_core::survey;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

pub fn execute(ctx: &CommandContext, edges: &EdgeList) -> Result<()> {
    let (graph, trace) = survey::relax(edges, ctx.config)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "relax");

    match ctx.cli.format {
        OutputFormat::Human => {
            print!("{}", graph);
            if !ctx.cli.quiet {
                let order: Vec<String> = trace.visit_order.iter().map(|id| id.to_string()).collect();
                println!();
                println!("visit order: {}", order.join(" "));
                println!("sweeps: {}", trace.sweeps);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "mode": ctx.config.relaxation.mode,
                "nodes": graph.nodes(),
                "trace": trace,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

//! `courier verify` - cross-check relaxed distances against Dijkstra

use courier_core::error::Result;
use courier_core::graph::EdgeList;
use courier_core::survey;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

pub fn execute(ctx: &CommandContext, edges: &EdgeList) -> Result<()> {
    let survey = survey::verify(edges, ctx.config)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "verify");

    match ctx.cli.format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "ok: {} nodes match the reference ({} mode, farthest {})",
                    survey.distances.len(),
                    survey.mode,
                    survey.farthest
                );
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "verified": true,
                "survey": survey,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

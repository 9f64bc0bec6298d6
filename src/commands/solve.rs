//! `courier solve` - print the farthest delivery cost

use courier_core::error::Result;
use courier_core::graph::EdgeList;
use courier_core::survey;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

pub fn execute(ctx: &CommandContext, edges: &EdgeList) -> Result<()> {
    let survey = survey::survey(edges, ctx.config)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), sweeps = survey.trace.sweeps, "survey");

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", survey.farthest),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&survey)?),
    }
    Ok(())
}

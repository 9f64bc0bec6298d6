//! Build, relax and reduce: the farthest-reachable-cost pipeline

use std::time::Instant;

use serde::Serialize;

use crate::config::CourierConfig;
use crate::error::{CourierError, Result};
use crate::graph::{
    reference_distances, Distance, EccentricityReducer, EdgeList, Graph, GraphBuilder,
    RelaxationMode, RelaxationTrace, ShortestPathEngine, ORIGIN,
};
use crate::trace_time;

/// Outcome of surveying one graph from the origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Survey {
    pub mode: RelaxationMode,
    /// Largest distance-to-origin over the non-origin nodes
    pub farthest: u64,
    /// Per-node distances, `null` in JSON for unreached nodes
    pub distances: Vec<Distance>,
    pub trace: RelaxationTrace,
}

/// Build the graph and run the engine in the configured mode
#[tracing::instrument(skip_all, fields(num_nodes = edges.num_nodes, mode = %config.relaxation.mode))]
pub fn relax(edges: &EdgeList, config: &CourierConfig) -> Result<(Graph, RelaxationTrace)> {
    let start = Instant::now();
    let mut graph = GraphBuilder::from_edge_list(edges, config.graph.max_nodes)?;
    let trace = ShortestPathEngine::new(config.relaxation.mode).run(&mut graph);
    trace_time!(start, "relax", sweeps = trace.sweeps);
    Ok((graph, trace))
}

/// Survey a graph: the farthest distance from the origin plus the run trace
#[tracing::instrument(skip_all, fields(num_nodes = edges.num_nodes))]
pub fn survey(edges: &EdgeList, config: &CourierConfig) -> Result<Survey> {
    let mode = config.relaxation.mode;

    // Nothing to travel to: skip the engine entirely
    if edges.num_nodes <= 1 {
        GraphBuilder::from_edge_list(edges, config.graph.max_nodes)?;
        return Ok(Survey {
            mode,
            farthest: 0,
            distances: vec![Distance::ZERO; edges.num_nodes],
            trace: RelaxationTrace::default(),
        });
    }

    let (graph, trace) = relax(edges, config)?;
    reduce(graph, trace, config)
}

/// The single-integer answer: cost of the farthest node from the origin
pub fn farthest_reachable_cost(edges: &EdgeList, config: &CourierConfig) -> Result<u64> {
    Ok(survey(edges, config)?.farthest)
}

/// Survey a graph and cross-check every distance against reference Dijkstra
#[tracing::instrument(skip_all, fields(num_nodes = edges.num_nodes))]
pub fn verify(edges: &EdgeList, config: &CourierConfig) -> Result<Survey> {
    let (graph, trace) = relax(edges, config)?;

    let start = Instant::now();
    let reference = reference_distances(&graph, ORIGIN);
    trace_time!(start, "reference_distances");

    for (node, (engine, expected)) in graph.distances().into_iter().zip(reference).enumerate() {
        if engine != expected {
            tracing::debug!(node, %engine, %expected, "verification_mismatch");
            return Err(CourierError::VerificationFailed {
                node,
                engine: engine.to_string(),
                reference: expected.to_string(),
            });
        }
    }

    reduce(graph, trace, config)
}

fn reduce(graph: Graph, trace: RelaxationTrace, config: &CourierConfig) -> Result<Survey> {
    let farthest = EccentricityReducer::new(config.reduce.unreachable).reduce(&graph)?;
    tracing::debug!(farthest, "survey_complete");
    Ok(Survey {
        mode: config.relaxation.mode,
        farthest,
        distances: graph.distances(),
        trace,
    })
}

use crate::bail_invalid;
use crate::error::{CourierError, Result};
use crate::graph::model::Graph;
use crate::graph::queue::EdgeQueue;
use crate::graph::types::{Distance, NodeId, Weight, ORIGIN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How far the engine goes beyond one greedy sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelaxationMode {
    /// Exactly one greedy sweep; stops when the frontier drains
    SinglePass,
    /// Greedy sweeps that resume from reached-but-unvisited nodes,
    /// repeated until no distance improves
    #[default]
    Settle,
}

impl FromStr for RelaxationMode {
    type Err = CourierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "single-pass" | "single_pass" => Ok(RelaxationMode::SinglePass),
            "settle" => Ok(RelaxationMode::Settle),
            other => bail_invalid!("relaxation mode", other),
        }
    }
}

impl fmt::Display for RelaxationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelaxationMode::SinglePass => write!(f, "single-pass"),
            RelaxationMode::Settle => write!(f, "settle"),
        }
    }
}

/// Bitmap of nodes already enqueued during one sweep
#[derive(Debug, Clone)]
pub struct VisitedSet {
    marks: Vec<bool>,
}

impl VisitedSet {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            marks: vec![false; num_nodes],
        }
    }

    /// Mark a node; returns true if it was not marked before
    pub fn insert(&mut self, id: NodeId) -> bool {
        !std::mem::replace(&mut self.marks[id.index()], true)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.marks[id.index()]
    }

    pub fn len(&self) -> usize {
        self.marks.iter().filter(|m| **m).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.marks.iter().any(|m| *m)
    }

    pub fn clear(&mut self) {
        self.marks.fill(false);
    }
}

/// One improvement of a node's distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relaxation {
    pub node: NodeId,
    pub from: Distance,
    pub to: Distance,
}

/// What a run did: first-sweep visit order, every improvement, sweep count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelaxationTrace {
    pub visit_order: Vec<NodeId>,
    pub relaxations: Vec<Relaxation>,
    pub sweeps: usize,
}

/// Greedy breadth-first relaxation from the origin.
///
/// Each sweep pops a node, enqueues the first not-yet-visited entry of its
/// weight-ordered adjacency list (at most one push per pop), then relaxes
/// every neighbour through it. In `SinglePass` mode that is the whole run.
/// A single sweep is not a fixed point in general: a chain can stall on an
/// incomplete graph, and a node can improve after it was popped. `Settle`
/// resumes stalled sweeps from the nearest reached node and repeats sweeps
/// until nothing improves, which converges to true shortest distances for
/// non-negative weights within `num_nodes` sweeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathEngine {
    mode: RelaxationMode,
}

impl ShortestPathEngine {
    pub fn new(mode: RelaxationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RelaxationMode {
        self.mode
    }

    /// Relax `graph` in place and report what happened
    #[tracing::instrument(skip(self, graph), fields(mode = %self.mode, num_nodes = graph.len()))]
    pub fn run(&self, graph: &mut Graph) -> RelaxationTrace {
        let mut trace = RelaxationTrace::default();
        if graph.is_empty() {
            return trace;
        }

        if let Some(previous) = graph.relax(ORIGIN, Distance::ZERO) {
            trace.relaxations.push(Relaxation {
                node: ORIGIN,
                from: previous,
                to: Distance::ZERO,
            });
        }

        let mut visited = VisitedSet::new(graph.len());
        loop {
            visited.clear();
            trace.sweeps += 1;
            let first = trace.sweeps == 1;
            let improved = self.sweep(graph, &mut visited, &mut trace, first);

            if self.mode == RelaxationMode::SinglePass || !improved {
                break;
            }
            if trace.sweeps >= graph.len() {
                tracing::warn!(sweeps = trace.sweeps, "sweep limit reached while still improving");
                break;
            }
        }

        tracing::debug!(
            sweeps = trace.sweeps,
            visited = trace.visit_order.len(),
            improvements = trace.relaxations.len(),
            "relaxation_complete"
        );
        trace
    }

    /// One greedy sweep from the origin; true if any distance improved
    fn sweep(
        &self,
        graph: &mut Graph,
        visited: &mut VisitedSet,
        trace: &mut RelaxationTrace,
        record_visits: bool,
    ) -> bool {
        let before = trace.relaxations.len();
        let mut frontier = EdgeQueue::new();
        visited.insert(ORIGIN);
        frontier.append_fifo(ORIGIN, Weight::ZERO);

        loop {
            while let Some(entry) = frontier.pop_front() {
                let v = entry.peer;
                if record_visits {
                    trace.visit_order.push(v);
                }
                let base = graph.distance(v);
                tracing::trace!(node = %v, min = %base, "exploring");

                let mut pushed = false;
                for i in 0..graph.neighbors(v).len() {
                    let Some(edge) = graph.neighbors(v).get(i) else {
                        break;
                    };
                    if !pushed && visited.insert(edge.peer) {
                        frontier.append_fifo(edge.peer, edge.weight);
                        pushed = true;
                        tracing::trace!(node = %edge.peer, "pushing");
                    }
                    let candidate = base.extend(edge.weight);
                    if let Some(previous) = graph.relax(edge.peer, candidate) {
                        trace.relaxations.push(Relaxation {
                            node: edge.peer,
                            from: previous,
                            to: candidate,
                        });
                    }
                }
            }

            if self.mode == RelaxationMode::SinglePass {
                break;
            }
            match nearest_unvisited(graph, visited) {
                Some(next) => {
                    tracing::debug!(node = %next, "resuming stalled sweep");
                    visited.insert(next);
                    frontier.append_fifo(next, Weight::ZERO);
                }
                None => break,
            }
        }

        trace.relaxations.len() > before
    }
}

/// Reached (finite) but unvisited node with the smallest distance, lowest id on ties
fn nearest_unvisited(graph: &Graph, visited: &VisitedSet) -> Option<NodeId> {
    graph
        .nodes()
        .iter()
        .filter(|n| !visited.contains(n.id) && n.distance_to_origin.is_finite())
        .min_by_key(|n| (n.distance_to_origin, n.id))
        .map(|n| n.id)
}

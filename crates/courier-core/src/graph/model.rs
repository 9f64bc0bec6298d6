use crate::graph::queue::EdgeQueue;
use crate::graph::types::{Distance, NodeId, Weight};
use serde::Serialize;
use std::fmt;

/// A node and its weight-ordered adjacency list
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    /// Mutated only by the relaxation engine, never increases
    pub distance_to_origin: Distance,
    pub neighbors: EdgeQueue,
}

impl Node {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            distance_to_origin: Distance::INFINITY,
            neighbors: EdgeQueue::new(),
        }
    }
}

/// Fixed-size arena of nodes indexed by `NodeId`
///
/// Built once by `GraphBuilder`; afterwards only `distance_to_origin`
/// changes. Every id handed to the accessors below must be `< len()`.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub(crate) fn with_nodes(num_nodes: usize) -> Self {
        Self {
            nodes: (0..num_nodes).map(|i| Node::new(NodeId::new(i))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn neighbors(&self, id: NodeId) -> &EdgeQueue {
        &self.nodes[id.index()].neighbors
    }

    pub fn distance(&self, id: NodeId) -> Distance {
        self.nodes[id.index()].distance_to_origin
    }

    pub fn distances(&self) -> Vec<Distance> {
        self.nodes.iter().map(|n| n.distance_to_origin).collect()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    pub(crate) fn insert_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.nodes[from.index()]
            .neighbors
            .insert_by_weight(to, weight);
    }

    /// Lower a node's distance to `candidate` if it is shorter.
    ///
    /// Returns the previous distance when the node improved.
    pub(crate) fn relax(&mut self, id: NodeId, candidate: Distance) -> Option<Distance> {
        let node = &mut self.nodes[id.index()];
        if candidate < node.distance_to_origin {
            let previous = node.distance_to_origin;
            node.distance_to_origin = candidate;
            Some(previous)
        } else {
            None
        }
    }

    /// Every entry `u -> v (w)` has its mirror `v -> u (w)`
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().all(|node| {
            node.neighbors.iter().all(|edge| {
                self.node(edge.peer)
                    .is_some_and(|peer| peer.neighbors.contains(node.id, edge.weight))
            })
        })
    }
}

/// Adjacency listing, one node per line:
/// `min dist: 35 (1 -5-> 2) (1 -20-> 3) (1 -50-> 0)`
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "min dist: {}", node.distance_to_origin)?;
            for edge in &node.neighbors {
                write!(f, " ({} -{}-> {})", node.id, edge.weight, edge.peer)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

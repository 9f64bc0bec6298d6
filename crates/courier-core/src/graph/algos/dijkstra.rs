use crate::graph::model::Graph;
use crate::graph::types::{Distance, NodeId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: NodeId,
    pub cost: Distance,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Textbook Dijkstra with a global binary heap.
///
/// Reads only adjacency, never the graph's stored distances, so it can check
/// the relaxation engine's output on the same graph. Unreached nodes come
/// back as `Distance::INFINITY`.
#[tracing::instrument(skip(graph), fields(num_nodes = graph.len()))]
pub fn reference_distances(graph: &Graph, origin: NodeId) -> Vec<Distance> {
    let mut dist = vec![Distance::INFINITY; graph.len()];
    if !graph.contains(origin) {
        return dist;
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    dist[origin.index()] = Distance::ZERO;
    heap.push(Reverse(HeapEntry {
        node: origin,
        cost: Distance::ZERO,
    }));

    while let Some(Reverse(HeapEntry { node, cost })) = heap.pop() {
        // Stale entry, a shorter path was already settled
        if cost > dist[node.index()] {
            continue;
        }
        for edge in graph.neighbors(node) {
            let candidate = cost.extend(edge.weight);
            if candidate < dist[edge.peer.index()] {
                dist[edge.peer.index()] = candidate;
                heap.push(Reverse(HeapEntry {
                    node: edge.peer,
                    cost: candidate,
                }));
            }
        }
    }

    dist
}

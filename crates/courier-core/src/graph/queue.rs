use crate::graph::types::{NodeId, Weight};
use serde::Serialize;
use std::collections::VecDeque;

/// One direction of an undirected edge, as held in a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub peer: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(peer: NodeId, weight: Weight) -> Self {
        Self { peer, weight }
    }
}

/// Ordered sequence of edges
///
/// Adjacency lists are filled only through [`EdgeQueue::insert_by_weight`] and
/// stay non-decreasing by weight. The relaxation frontier uses the same type
/// as a plain FIFO through [`EdgeQueue::append_fifo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EdgeQueue {
    entries: VecDeque<Edge>,
}

impl EdgeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping weights non-decreasing.
    ///
    /// The scan passes every entry whose weight is `<=` the new weight, so a
    /// new entry lands after all existing entries of equal weight.
    pub fn insert_by_weight(&mut self, peer: NodeId, weight: Weight) {
        let at = self
            .entries
            .iter()
            .position(|current| current.weight > weight)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, Edge::new(peer, weight));
    }

    /// Append to the tail regardless of weight
    pub fn append_fifo(&mut self, peer: NodeId, weight: Weight) {
        self.entries.push_back(Edge::new(peer, weight));
    }

    /// Remove and return the first entry, `None` when empty
    pub fn pop_front(&mut self) -> Option<Edge> {
        self.entries.pop_front()
    }

    pub fn front(&self) -> Option<&Edge> {
        self.entries.front()
    }

    /// Entry at `index` by value, `None` past the end
    pub fn get(&self, index: usize) -> Option<Edge> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.entries.iter()
    }

    pub fn contains(&self, peer: NodeId, weight: Weight) -> bool {
        self.entries
            .iter()
            .any(|e| e.peer == peer && e.weight == weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EdgeQueue {
    type Item = &'a Edge;
    type IntoIter = std::collections::vec_deque::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

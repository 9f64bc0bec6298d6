use crate::error::{CourierError, Result};
use crate::graph::model::Graph;
use crate::graph::types::{NodeId, Weight};
use std::collections::HashSet;

/// Largest graph accepted unless configured otherwise
pub const DEFAULT_MAX_NODES: usize = 100;

/// Heaviest accepted edge. Any simple path of fewer than 2^32 such edges
/// sums below `u64::MAX`, so distances never clamp.
pub const MAX_WEIGHT: u64 = u32::MAX as u64;

/// One undirected edge as declared by its supplier: `node` declares an edge
/// to `neighbor`. Weights stay signed here so negatives can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDeclaration {
    pub node: usize,
    pub neighbor: usize,
    pub weight: i64,
}

impl EdgeDeclaration {
    pub fn new(node: usize, neighbor: usize, weight: i64) -> Self {
        Self {
            node,
            neighbor,
            weight,
        }
    }
}

/// Node count plus every declared edge, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub num_nodes: usize,
    pub declarations: Vec<EdgeDeclaration>,
}

impl EdgeList {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            declarations: Vec::new(),
        }
    }

    pub fn declare(mut self, node: usize, neighbor: usize, weight: i64) -> Self {
        self.declarations
            .push(EdgeDeclaration::new(node, neighbor, weight));
        self
    }
}

/// Populates adjacency lists from edge declarations.
///
/// Each accepted declaration is inserted in both directions, which is what
/// keeps the graph symmetric. The first invalid declaration aborts the build.
#[derive(Debug)]
pub struct GraphBuilder {
    graph: Graph,
    declared: HashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new(num_nodes: usize) -> Result<Self> {
        Self::with_max_nodes(num_nodes, DEFAULT_MAX_NODES)
    }

    pub fn with_max_nodes(num_nodes: usize, max_nodes: usize) -> Result<Self> {
        if num_nodes > max_nodes {
            return Err(CourierError::InvalidNodeCount {
                count: i64::try_from(num_nodes).unwrap_or(i64::MAX),
                max: max_nodes,
            });
        }
        Ok(Self {
            graph: Graph::with_nodes(num_nodes),
            declared: HashSet::new(),
        })
    }

    /// Build a graph from a full edge list
    #[tracing::instrument(skip(edges), fields(num_nodes = edges.num_nodes, declarations = edges.declarations.len()))]
    pub fn from_edge_list(edges: &EdgeList, max_nodes: usize) -> Result<Graph> {
        let mut builder = Self::with_max_nodes(edges.num_nodes, max_nodes)?;
        for decl in &edges.declarations {
            builder.declare(decl.node, decl.neighbor, decl.weight)?;
        }
        Ok(builder.build())
    }

    /// Add the undirected edge `{node, neighbor}` with the given weight
    pub fn declare(&mut self, node: usize, neighbor: usize, weight: i64) -> Result<&mut Self> {
        let num_nodes = self.graph.len();
        if node >= num_nodes {
            return Err(CourierError::NodeOutOfRange { node, num_nodes });
        }
        if node == 0 {
            return Err(CourierError::OriginDeclaration { neighbor });
        }
        if neighbor >= num_nodes {
            return Err(CourierError::NodeOutOfRange {
                node: neighbor,
                num_nodes,
            });
        }
        if node == neighbor {
            return Err(CourierError::SelfLoop { node });
        }
        let weight = u64::try_from(weight).map_err(|_| CourierError::NegativeWeight {
            node,
            neighbor,
            weight,
        })?;
        if weight > MAX_WEIGHT {
            return Err(CourierError::WeightTooLarge {
                node,
                neighbor,
                weight,
                max: MAX_WEIGHT,
            });
        }

        let (a, b) = (NodeId::new(node), NodeId::new(neighbor));
        if !self.declared.insert((a.min(b), a.max(b))) {
            return Err(CourierError::DuplicateEdge { node, neighbor });
        }

        let weight = Weight::from(weight);
        self.graph.insert_edge(a, b, weight);
        self.graph.insert_edge(b, a, weight);
        tracing::trace!(%a, %b, %weight, "edge");
        Ok(self)
    }

    pub fn build(self) -> Graph {
        debug_assert!(self.graph.is_symmetric());
        tracing::debug!(
            num_nodes = self.graph.len(),
            edges = self.graph.edge_count(),
            "graph_built"
        );
        self.graph
    }
}

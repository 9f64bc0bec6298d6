//! Graph model and shortest-path operations
//!
//! - `types`: node ids, weights and distances
//! - `queue`: weight-ordered edge queues
//! - `model`: the node arena
//! - `builder`: adjacency construction from edge declarations
//! - `algos`: relaxation, eccentricity and the reference Dijkstra

pub mod algos;
pub mod builder;
pub mod model;
pub mod queue;
pub mod types;

pub use algos::{
    reference_distances, EccentricityReducer, RelaxationMode, RelaxationTrace,
    ShortestPathEngine, UnreachablePolicy,
};
pub use builder::{EdgeDeclaration, EdgeList, GraphBuilder, DEFAULT_MAX_NODES, MAX_WEIGHT};
pub use model::{Graph, Node};
pub use queue::{Edge, EdgeQueue};
pub use types::{Distance, NodeId, Weight, ORIGIN};

//! Graph algorithm implementations
//!
//! - `relax`: greedy breadth-first relaxation from the origin
//! - `eccentricity`: maximum distance-to-origin reduction
//! - `dijkstra`: textbook reference used to check the engine

pub mod dijkstra;
pub mod eccentricity;
pub mod relax;

pub use dijkstra::reference_distances;
pub use eccentricity::{EccentricityReducer, UnreachablePolicy};
pub use relax::{Relaxation, RelaxationMode, RelaxationTrace, ShortestPathEngine, VisitedSet};

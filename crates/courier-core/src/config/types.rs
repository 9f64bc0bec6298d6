//! Configuration type definitions

use crate::graph::builder::DEFAULT_MAX_NODES;
use crate::graph::{RelaxationMode, UnreachablePolicy};
use serde::{Deserialize, Serialize};

/// Courier configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierConfig {
    /// Graph construction limits
    #[serde(default)]
    pub graph: GraphConfig,

    /// Relaxation engine settings
    #[serde(default)]
    pub relaxation: RelaxationConfig,

    /// Eccentricity reduction settings
    #[serde(default)]
    pub reduce: ReduceConfig,
}

/// Limits applied while reading and building graphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Largest accepted node count
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_nodes: default_max_nodes(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaxationConfig {
    #[serde(default)]
    pub mode: RelaxationMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceConfig {
    /// Policy for nodes the engine never reached
    #[serde(default)]
    pub unreachable: UnreachablePolicy,
}

fn default_max_nodes() -> usize {
    DEFAULT_MAX_NODES
}

use crate::bail_invalid;
use crate::error::{CourierError, Result};
use crate::graph::model::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with nodes still at infinity after relaxation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachablePolicy {
    /// Fail with `CourierError::Unreachable`
    #[default]
    Reject,
    /// Leave unreached nodes out of the maximum
    Exclude,
}

impl FromStr for UnreachablePolicy {
    type Err = CourierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(UnreachablePolicy::Reject),
            "exclude" => Ok(UnreachablePolicy::Exclude),
            other => bail_invalid!("unreachable policy", other),
        }
    }
}

impl fmt::Display for UnreachablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreachablePolicy::Reject => write!(f, "reject"),
            UnreachablePolicy::Exclude => write!(f, "exclude"),
        }
    }
}

/// Maximum distance-to-origin over every non-origin node
#[derive(Debug, Clone, Copy, Default)]
pub struct EccentricityReducer {
    policy: UnreachablePolicy,
}

impl EccentricityReducer {
    pub fn new(policy: UnreachablePolicy) -> Self {
        Self { policy }
    }

    pub fn reduce(&self, graph: &Graph) -> Result<u64> {
        let mut farthest = 0;
        for node in graph.nodes().iter().skip(1) {
            match (node.distance_to_origin.value(), self.policy) {
                (Some(cost), _) => farthest = farthest.max(cost),
                (None, UnreachablePolicy::Reject) => {
                    return Err(CourierError::Unreachable {
                        node: node.id.index(),
                    })
                }
                (None, UnreachablePolicy::Exclude) => {
                    tracing::warn!(node = %node.id, "excluding unreachable node");
                }
            }
        }
        Ok(farthest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::relax::ShortestPathEngine;
    use crate::graph::builder::{EdgeList, GraphBuilder, DEFAULT_MAX_NODES};

    fn relaxed(edges: &EdgeList) -> Graph {
        let mut graph = GraphBuilder::from_edge_list(edges, DEFAULT_MAX_NODES).unwrap();
        ShortestPathEngine::default().run(&mut graph);
        graph
    }

    #[test]
    fn test_star_graph_takes_heaviest_spoke() {
        let edges = EdgeList::new(5)
            .declare(1, 0, 3)
            .declare(2, 0, 9)
            .declare(3, 0, 1)
            .declare(4, 0, 6);
        let farthest = EccentricityReducer::default().reduce(&relaxed(&edges)).unwrap();
        assert_eq!(farthest, 9);
    }

    #[test]
    fn test_single_node_is_zero() {
        let graph = GraphBuilder::new(1).unwrap().build();
        let farthest = EccentricityReducer::default().reduce(&graph).unwrap();
        assert_eq!(farthest, 0);
    }

    #[test]
    fn test_zero_weight_edges() {
        let edges = EdgeList::new(3).declare(1, 0, 0).declare(2, 1, 0);
        let farthest = EccentricityReducer::default().reduce(&relaxed(&edges)).unwrap();
        assert_eq!(farthest, 0);
    }

    #[test]
    fn test_reject_reports_lowest_unreached_node() {
        let edges = EdgeList::new(4).declare(2, 0, 5);
        let err = EccentricityReducer::new(UnreachablePolicy::Reject)
            .reduce(&relaxed(&edges))
            .unwrap_err();
        assert!(matches!(err, CourierError::Unreachable { node: 1 }));
    }

    #[test]
    fn test_exclude_skips_unreached_nodes() {
        let edges = EdgeList::new(4).declare(2, 0, 5);
        let farthest = EccentricityReducer::new(UnreachablePolicy::Exclude)
            .reduce(&relaxed(&edges))
            .unwrap();
        assert_eq!(farthest, 5);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "exclude".parse::<UnreachablePolicy>().unwrap(),
            UnreachablePolicy::Exclude
        );
        assert!("ignore".parse::<UnreachablePolicy>().is_err());
    }
}

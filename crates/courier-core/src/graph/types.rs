use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Dense 0-based node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

/// The node every distance is measured from
pub const ORIGIN: NodeId = NodeId(0);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn is_origin(&self) -> bool {
        *self == ORIGIN
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative cost of traversing one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub fn new(weight: u64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Weight {
    fn from(weight: u64) -> Self {
        Weight(weight)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Best-known cost from the origin to a node
///
/// `INFINITY` marks a node no path has reached yet and is kept apart from
/// every finite cost, including `u64::MAX`. It orders above every finite
/// distance, so `min` relaxation works unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distance(Option<u64>);

impl Distance {
    pub const ZERO: Distance = Distance(Some(0));
    pub const INFINITY: Distance = Distance(None);

    pub fn new(cost: u64) -> Self {
        Distance(Some(cost))
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_some()
    }

    /// The finite cost, or `None` for `INFINITY`
    pub fn value(&self) -> Option<u64> {
        self.0
    }

    /// Cost of continuing this path over one more edge.
    ///
    /// A finite path stays finite; sums past `u64::MAX` clamp there.
    pub fn extend(self, weight: Weight) -> Distance {
        match self.0 {
            Some(cost) => Distance(Some(cost.saturating_add(weight.value()))),
            None => Self::INFINITY,
        }
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl From<u64> for Distance {
    fn from(cost: u64) -> Self {
        Distance::new(cost)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(cost) => write!(f, "{}", cost),
            None => write!(f, "inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

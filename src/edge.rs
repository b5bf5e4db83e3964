use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// Whether `Edge(u, v)` is directed depends on the graph it belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Edge weights are signed integers; negative weights are first-class citizens.
pub type Weight = i64;

/// Weight assumed for edges that do not carry an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches an optional weight to the edge
    pub fn with_weight(self, weight: Option<Weight>) -> WeightedEdge {
        WeightedEdge {
            edge: self,
            weight,
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge together with its (optional) weight as stored in a graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge {
    pub edge: Edge,
    pub weight: Option<Weight>,
}

impl WeightedEdge {
    /// Source endpoint
    pub fn source(&self) -> Node {
        self.edge.0
    }

    /// Target endpoint
    pub fn target(&self) -> Node {
        self.edge.1
    }

    /// The weight used by numeric algorithms: the stored weight or [`DEFAULT_WEIGHT`]
    pub fn cost(&self) -> Weight {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{}[{}]", self.edge, w),
            None => write!(f, "{}", self.edge),
        }
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge(value.0, value.1).with_weight(Some(value.2))
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1).with_weight(None)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(value: Edge) -> Self {
        value.with_weight(None)
    }
}

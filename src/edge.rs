use std::fmt::{Debug, Display};

use crate::node::*;

/// An edge is defined by two nodes/endpoints.
/// Is is up to the graph whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Number of edges of a graph. Undirected edges are counted once.
pub type NumEdges = u32;

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
    /// Returns true if the endpoint with smaller index comes first.
    /// Used to list every undirected edge only once.
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }
}

/// An edge together with its weight
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    pub edge: Edge,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(u: Node, v: Node, weight: Weight) -> Self {
        Self {
            edge: Edge(u, v),
            weight,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalized_edges() {
        assert!(Edge(1, 3).is_normalized());
        assert!(Edge(2, 2).is_normalized());
        assert!(!Edge(3, 1).is_normalized());
        assert_eq!(WeightedEdge::new(0, 4, -7).edge, Edge(0, 4));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge(0, 5)), "(0,5)");
        assert_eq!(format!("{:?}", Edge(0, 5)), "(0,5)");
    }
}

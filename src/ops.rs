use std::ops::Range;

use crate::{edge::*, node::*};

/// Distinguishes directed from undirected graphs at runtime.
/// The orientation of a graph is fixed when it is built.
pub trait GraphType {
    /// Returns *true* if edges are one-way
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge `(u, v)` is also stored as `(v, u)`
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all nodes.
    /// In contrast to `self.vertices()`, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V in canonical node order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge `{u, v}` is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (out-)neighbors of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the weight of the edge `(u, v)` if it exists
    /// ** Panics if `u >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.weighted_neighbors_of(u)
            .find_map(|(x, w)| (x == v).then_some(w))
    }

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).any(|x| x == v)
    }

    /// Returns the first remaining neighbor of `u`, if any
    /// ** Panics if `u >= n` **
    fn first_neighbor_of(&self, u: Node) -> Option<Node> {
        self.neighbors_of(u).next()
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all adjacency entries in canonical order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all adjacency entries together with their weights
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.weighted_neighbors_of(u)
                .map(move |(v, w)| WeightedEdge::new(u, v, w))
        })
    }
}

/// Static in/out-degrees that are fixed when the graph is built.
///
/// For undirected graphs both values coincide with the degree of the node,
/// where a self-loop contributes `2`.
pub trait DegreeCount: GraphNodeOrder {
    /// Returns the number of edges ending in `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of edges starting in `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes;
}

/// Maps between node indices and the user-facing string IDs of the nodes.
pub trait Labelled: GraphNodeOrder {
    /// Returns the label of `u`
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str;

    /// Returns the node carrying `label`, if any
    fn node_of(&self, label: &str) -> Option<Node>;

    /// Translates a sequence of nodes into owned labels
    fn labels_of<I>(&self, nodes: I) -> Vec<String>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .map(|u| self.label_of(u).to_string())
            .collect()
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing {
    /// Adds the edge `(u, v)` with weight `w` to the graph (for undirected graphs also `(v, u)`).
    /// If the edge was present, its weight is overwritten in place.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool;

    /// Removes the edge `(u, v)` (for undirected graphs also `(v, u)`).
    /// If the edge was removed, returns *true* and *false* otherwise.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes the edge `(u, v)`.
    /// ** Panics if the edge is not present **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v));
    }
}

/// Graphs that can produce their transpose
pub trait GraphTranspose: Sized {
    /// Returns a fresh graph with the same nodes in which every adjacency entry
    /// `(u, v)` of weight `w` is replaced by `(v, u)` of weight `w`.
    /// For undirected graphs the result is structurally identical to `self`.
    fn transposed(&self) -> Self;
}

use fxhash::FxHashMap;
use tracing::debug;

use super::*;

/// A labelled, integer-weighted graph that is either directed or undirected.
///
/// Nodes are kept in an arena in the order their IDs first appeared; the graph owns the
/// label of every node and an index to resolve labels back to nodes. Every node stores an
/// insertion-ordered [`WeightedNeighborhood`]. An undirected edge `{u, v}` is stored as the
/// two adjacency entries `(u, v)` and `(v, u)`.
///
/// In- and out-degrees are recorded while edges are added and are *not* updated when edges
/// are removed again; they describe the graph as it was built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    labels: Vec<String>,
    index: FxHashMap<String, Node>,
    nbs: Vec<WeightedNeighborhood>,
    in_degrees: Vec<NumNodes>,
    out_degrees: Vec<NumNodes>,
    num_edges: NumEdges,
}

impl Graph {
    /// Creates an empty graph without nodes
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    /// Builds a graph from a list of node IDs and a list of edge records `[from, to, weight?]`.
    ///
    /// Bad input degrades silently:
    /// - duplicate node IDs collapse onto their first occurrence,
    /// - records with fewer than two tokens are dropped,
    /// - records naming an unknown node ID are dropped,
    /// - a missing or non-integer weight token becomes [`DEFAULT_WEIGHT`],
    /// - repeating an edge overwrites its weight.
    ///
    /// # Examples
    /// ```
    /// use graphtrace::prelude::*;
    ///
    /// let graph = Graph::build(["A", "B", "C"], [["A", "B", "4"], ["B", "C", "x"]], true);
    ///
    /// let a = graph.node_of("A").unwrap();
    /// let b = graph.node_of("B").unwrap();
    /// let c = graph.node_of("C").unwrap();
    /// assert_eq!(graph.weight_of(a, b), Some(4));
    /// assert_eq!(graph.weight_of(b, c), Some(1));
    /// assert_eq!(graph.number_of_edges(), 2);
    /// ```
    pub fn build<I, S, E, R, T>(node_ids: I, edges: E, directed: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut graph = Self::new(directed);
        for id in node_ids {
            graph.add_node(id.as_ref());
        }

        for record in edges {
            if let Some(WeightedEdge {
                edge: Edge(u, v),
                weight,
            }) = graph.resolve_edge_record(record.as_ref())
            {
                graph.try_add_edge(u, v, weight);
            }
        }

        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            directed,
            "built graph"
        );

        graph
    }

    /// Adds a node with the given label and returns it.
    /// If the label is already known, the existing node is returned.
    pub fn add_node(&mut self, label: &str) -> Node {
        if let Some(&u) = self.index.get(label) {
            return u;
        }

        let u = self.labels.len() as Node;
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), u);
        self.nbs.push(WeightedNeighborhood::new());
        self.in_degrees.push(0);
        self.out_degrees.push(0);
        u
    }

    /// Translates an edge record into an edge between known nodes.
    /// Returns `None` for records that cannot be resolved.
    fn resolve_edge_record<T: AsRef<str>>(&self, record: &[T]) -> Option<WeightedEdge> {
        let [from, to, rest @ ..] = record else {
            debug!(tokens = record.len(), "dropping short edge record");
            return None;
        };

        let (from, to) = (from.as_ref(), to.as_ref());
        let (Some(u), Some(v)) = (self.node_of(from), self.node_of(to)) else {
            debug!(from, to, "dropping edge record with unknown endpoint");
            return None;
        };

        let weight = rest
            .first()
            .and_then(|token| token.as_ref().parse::<Weight>().ok())
            .unwrap_or(DEFAULT_WEIGHT);

        Some(WeightedEdge::new(u, v, weight))
    }
}

impl GraphType for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].weighted()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }

    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.nbs[u as usize].weight_of(v)
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }

    fn first_neighbor_of(&self, u: Node) -> Option<Node> {
        self.nbs[u as usize].first()
    }
}

impl DegreeCount for Graph {
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_degrees[u as usize]
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_degrees[u as usize]
    }
}

impl Labelled for Graph {
    fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }
}

impl GraphEdgeEditing for Graph {
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        if self.nbs[u as usize].try_add_neighbor(v, w) {
            if !self.directed {
                self.nbs[v as usize].try_add_neighbor(u, w);
            }
            return true;
        }

        self.num_edges += 1;
        self.out_degrees[u as usize] += 1;
        self.in_degrees[v as usize] += 1;

        if !self.directed {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u, w));
            }
            // {u, v} is also the edge (v, u); a self-loop thereby counts twice
            self.out_degrees[v as usize] += 1;
            self.in_degrees[u as usize] += 1;
        }

        false
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_remove_neighbor(v) {
            return false;
        }

        if !self.directed && u != v {
            assert!(self.nbs[v as usize].try_remove_neighbor(u));
        }
        self.num_edges -= 1;
        true
    }
}

impl GraphTranspose for Graph {
    fn transposed(&self) -> Self {
        let mut transposed = Self {
            directed: self.directed,
            labels: self.labels.clone(),
            index: self.index.clone(),
            nbs: vec![WeightedNeighborhood::new(); self.len()],
            in_degrees: self.out_degrees.clone(),
            out_degrees: self.in_degrees.clone(),
            num_edges: self.num_edges,
        };

        for WeightedEdge {
            edge: Edge(u, v),
            weight,
        } in self.weighted_edges()
        {
            transposed.nbs[v as usize].try_add_neighbor(u, weight);
        }

        transposed
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::graph;
    use itertools::Itertools;

    #[test]
    fn directed_edge_adds_one_entry() {
        let g = graph(&["A", "B"], &["A B 3"], true);
        let (a, b) = (0, 1);

        assert!(g.is_directed());
        assert_eq!(g.neighbors_of(a).collect_vec(), vec![b]);
        assert_eq!(g.degree_of(b), 0);
        assert_eq!(g.weight_of(a, b), Some(3));
        assert_eq!((g.out_degree_of(a), g.in_degree_of(a)), (1, 0));
        assert_eq!((g.out_degree_of(b), g.in_degree_of(b)), (0, 1));
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn undirected_edge_adds_both_entries() {
        let g = graph(&["A", "B"], &["A B 3"], false);
        let (a, b) = (0, 1);

        assert!(g.is_undirected());
        assert_eq!(g.weight_of(a, b), Some(3));
        assert_eq!(g.weight_of(b, a), Some(3));
        for u in [a, b] {
            assert_eq!(g.in_degree_of(u), 1);
            assert_eq!(g.out_degree_of(u), 1);
        }
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn malformed_input_degrades_silently() {
        let g = Graph::build(
            ["A", "B", "A"],
            vec![
                vec!["A"],
                vec!["A", "Z"],
                vec!["Z", "B", "2"],
                vec!["A", "B", "heavy"],
                vec![],
            ],
            true,
        );

        assert_eq!(g.number_of_nodes(), 2);
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.weight_of(0, 1), Some(DEFAULT_WEIGHT));
        assert_eq!(g.label_of(0), "A");
        assert_eq!(g.node_of("B"), Some(1));
        assert_eq!(g.node_of("Z"), None);
    }

    #[test]
    fn repeated_edge_overwrites_weight() {
        let g = graph(&["A", "B", "C"], &["A B 1", "A C", "A B 7", "B A 9"], false);

        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.neighbors_of(0).collect_vec(), vec![1, 2]);
        assert_eq!(g.weight_of(0, 1), Some(9));
        assert_eq!(g.weight_of(1, 0), Some(9));
        assert_eq!(g.in_degree_of(0), 2);
    }

    #[test]
    fn self_loops() {
        let g = graph(&["A"], &["A A"], false);
        assert_eq!(g.degree_of(0), 1);
        assert_eq!(g.in_degree_of(0), 2);
        assert_eq!(g.out_degree_of(0), 2);

        let g = graph(&["A"], &["A A"], true);
        assert_eq!(g.in_degree_of(0), 1);
        assert_eq!(g.out_degree_of(0), 1);
    }

    #[test]
    fn remove_edges() {
        let mut g = graph(&["A", "B", "C"], &["A B", "B C", "C C"], false);

        assert!(g.try_remove_edge(1, 0));
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert!(!g.try_remove_edge(0, 1));

        assert!(g.try_remove_edge(2, 2));
        assert_eq!(g.number_of_edges(), 1);
        // degrees describe the graph as built
        assert_eq!(g.in_degree_of(0), 1);
    }

    #[test]
    fn transpose() {
        let g = graph(&["A", "B", "C"], &["A B 2", "A C 3", "C B 4"], true);
        let t = g.transposed();

        assert_eq!(
            t.edges(false).sorted().collect_vec(),
            vec![Edge(1, 0), Edge(1, 2), Edge(2, 0)]
        );
        assert_eq!(t.weight_of(1, 2), Some(4));
        assert_eq!(t.in_degree_of(0), g.out_degree_of(0));
        assert_eq!(t.label_of(2), "C");

        let g = graph(&["A", "B", "C"], &["A B", "B C"], false);
        let t = g.transposed();
        assert_eq!(
            t.edges(false).sorted().collect_vec(),
            g.edges(false).sorted().collect_vec()
        );
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::*;

/// An edge record of a [`GraphSpec`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeRecord {
    /// `[from, to, weight?]`; any further tokens are ignored
    Tokens(Vec<Value>),
    /// `{from, to, weight?}`
    Object {
        from: Value,
        to: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<Value>,
    },
}

impl EdgeRecord {
    pub fn new(from: &str, to: &str, weight: Weight) -> Self {
        EdgeRecord::Object {
            from: Value::from(from),
            to: Value::from(to),
            weight: Some(Value::from(weight)),
        }
    }

    /// Returns the record as string tokens as expected by [`Graph::build`].
    /// A `null` token renders as an empty token, which never names a node nor parses as a
    /// weight. An object with a `null` or missing weight yields no weight token at all.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            EdgeRecord::Tokens(tokens) => tokens.iter().map(token_string).collect(),
            EdgeRecord::Object { from, to, weight } => [Some(from), Some(to), weight.as_ref()]
                .into_iter()
                .flatten()
                .map(token_string)
                .collect(),
        }
    }
}

fn token_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Serializable description of a graph: node IDs, edge records and orientation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSpec {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeRecord>,
    pub directed: bool,
}

impl GraphSpec {
    /// Builds the graph described by `self`
    pub fn into_graph(self) -> Graph {
        let directed = self.directed;
        self.to_graph(directed)
    }

    /// Builds the graph described by `self` with the given orientation
    pub fn to_graph(&self, directed: bool) -> Graph {
        Graph::build(&self.nodes, self.edges.iter().map(EdgeRecord::tokens), directed)
    }

    /// Describes `graph`; every undirected edge is listed once
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType + Labelled,
    {
        let nodes = graph.labels_of(graph.vertices());
        let edges = graph
            .weighted_edges()
            .filter(|e| graph.is_directed() || e.edge.is_normalized())
            .map(|WeightedEdge { edge: Edge(u, v), weight }| {
                EdgeRecord::new(graph.label_of(u), graph.label_of(v), weight)
            })
            .collect();

        Self {
            nodes,
            edges,
            directed: graph.is_directed(),
        }
    }
}

impl From<&Graph> for GraphSpec {
    fn from(graph: &Graph) -> Self {
        Self::from_graph(graph)
    }
}

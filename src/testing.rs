//! Helpers shared by the unit tests of this crate.

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Builds a graph from node IDs and edge records written as `"U V"` or `"U V WEIGHT"`
pub(crate) fn graph(nodes: &[&str], edges: &[&str], directed: bool) -> Graph {
    let records = edges
        .iter()
        .map(|e| e.split_whitespace().collect_vec())
        .collect_vec();
    Graph::build(nodes.iter().copied(), records, directed)
}

/// Creates a graph with nodes `v0..v{n-1}` and at most `m_ub` random weighted edges
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m_ub: u32, directed: bool) -> Graph {
    let labels = (0..n).map(|u| format!("v{u}")).collect_vec();
    let records = (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            let w: Weight = rng.random_range(-5..10);
            vec![labels[u as usize].clone(), labels[v as usize].clone(), w.to_string()]
        })
        .collect_vec();

    Graph::build(&labels, records, directed)
}

/// Counts the tokens of the form `{name}:...`
pub(crate) fn count_tokens(tokens: &[String], name: &str) -> usize {
    let prefix = format!("{name}:");
    tokens.iter().filter(|t| t.starts_with(&prefix)).count()
}

/// Returns the arguments of all tokens named `name` in sorted order
pub(crate) fn token_args(tokens: &[String], name: &str) -> Vec<String> {
    let prefix = format!("{name}:");
    tokens
        .iter()
        .filter_map(|t| t.strip_prefix(&prefix).map(str::to_string))
        .sorted()
        .collect()
}

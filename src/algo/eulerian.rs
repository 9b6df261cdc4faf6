/*!
Eulerian paths and circuits via Hierholzer's algorithm.

Existence is decided from the static degrees of the graph:
- undirected: no odd-degree node yields a circuit, exactly two yield a path starting at the
  first odd node,
- directed: all nodes balanced yields a circuit, exactly one node with `out - in = 1` and one
  with `out - in = -1` yield a path starting at the former.

The walk consumes a private copy of the adjacency, so the graph remains usable afterwards.
If the walk ends before every edge was used, the edges are spread over several components and
there is no Eulerian walk.
*/

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerianKind {
    /// Closed walk; first and last node coincide
    Circuit,
    /// Open walk between the two unbalanced nodes
    Path,
}

/// A walk that uses every edge of the graph exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerianWalk {
    pub kind: EulerianKind,
    pub path: Vec<Node>,
}

pub trait Eulerian:
    AdjacencyList + DegreeCount + GraphType + GraphEdgeOrder + GraphEdgeEditing + Clone
{
    /// Returns the kind of Eulerian walk the degrees admit and the node to start it from
    fn eulerian_start(&self) -> Option<(EulerianKind, Node)> {
        if self.is_empty() {
            return None;
        }

        let (kind, start) = if self.is_directed() {
            let mut sources = Vec::new();
            let mut sinks = 0;
            for u in self.vertices() {
                match self.out_degree_of(u) as i64 - self.in_degree_of(u) as i64 {
                    0 => {}
                    1 => sources.push(u),
                    -1 => sinks += 1,
                    _ => return None,
                }
            }

            match (sources.as_slice(), sinks) {
                ([], 0) => (EulerianKind::Circuit, None),
                (&[s], 1) => (EulerianKind::Path, Some(s)),
                _ => return None,
            }
        } else {
            let odd = self
                .vertices()
                .filter(|&u| self.in_degree_of(u) % 2 == 1)
                .collect_vec();

            match odd.as_slice() {
                [] => (EulerianKind::Circuit, None),
                &[s, _] => (EulerianKind::Path, Some(s)),
                _ => return None,
            }
        };

        let start = start
            .or_else(|| self.vertices().find(|&u| self.degree_of(u) > 0))
            .unwrap_or(0);

        Some((kind, start))
    }

    /// Computes an Eulerian path or circuit, if one exists.
    ///
    /// # Examples
    /// ```
    /// use graphtrace::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(["A", "B", "C"], [["A", "B"], ["B", "C"]], false);
    /// let walk = g.eulerian_walk().unwrap();
    ///
    /// assert_eq!(walk.kind, EulerianKind::Path);
    /// assert_eq!(g.labels_of(walk.path), vec!["A", "B", "C"]);
    /// ```
    fn eulerian_walk(&self) -> Option<EulerianWalk> {
        debug!(
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            directed = self.is_directed(),
            "eulerian walk"
        );

        let (kind, start) = self.eulerian_start()?;
        let mut remaining = self.clone();
        let mut path = Vec::with_capacity(self.number_of_edges() as usize + 1);
        hierholzer(&mut remaining, start, &mut path);

        if !remaining.is_singleton() {
            debug!(
                unused = remaining.number_of_edges(),
                "edges spread over several components"
            );
            return None;
        }

        path.reverse();
        Some(EulerianWalk { kind, path })
    }

    /// Returns the nodes of an Eulerian walk, or an empty vector if none exists
    fn eulerian_path(&self) -> Vec<Node> {
        self.eulerian_walk().map(|w| w.path).unwrap_or_default()
    }
}

impl<G> Eulerian for G where
    G: AdjacencyList + DegreeCount + GraphType + GraphEdgeOrder + GraphEdgeEditing + Clone
{
}

/// Consumes every edge reachable from `u` and pushes nodes in reverse walk order
fn hierholzer<G>(graph: &mut G, u: Node, path: &mut Vec<Node>)
where
    G: AdjacencyList + GraphEdgeEditing,
{
    while let Some(v) = graph.first_neighbor_of(u) {
        graph.remove_edge(u, v);
        hierholzer(graph, v, path);
    }
    path.push(u);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn assert_is_walk(g: &Graph, walk: &EulerianWalk) {
        assert_eq!(walk.path.len(), g.number_of_edges() as usize + 1);

        let mut remaining = g.clone();
        for (&u, &v) in walk.path.iter().tuple_windows() {
            remaining.remove_edge(u, v);
        }
        assert!(remaining.is_singleton());

        if walk.kind == EulerianKind::Circuit {
            assert_eq!(walk.path.first(), walk.path.last());
        }
    }

    #[test]
    fn undirected_square() {
        let g = graph(&["A", "B", "C", "D"], &["A B", "B C", "C D", "D A"], false);
        let walk = g.eulerian_walk().unwrap();

        assert_eq!(walk.kind, EulerianKind::Circuit);
        assert_eq!(g.labels_of(walk.path.iter().copied()), vec!["A", "B", "C", "D", "A"]);
        assert_is_walk(&g, &walk);
    }

    #[test]
    fn undirected_path_between_odd_nodes() {
        let g = graph(&["A", "B", "C", "D"], &["A B", "B C", "C D"], false);
        let walk = g.eulerian_walk().unwrap();

        assert_eq!(walk.kind, EulerianKind::Path);
        assert_eq!(walk.path.first(), Some(&0));
        assert_eq!(walk.path.last(), Some(&3));
        assert_eq!(g.labels_of(walk.path.iter().copied()), vec!["A", "B", "C", "D"]);
        assert_is_walk(&g, &walk);
    }

    #[test]
    fn directed_path() {
        let g = graph(&["A", "B", "C"], &["B C", "A B"], true);
        let walk = g.eulerian_walk().unwrap();

        assert_eq!(walk.kind, EulerianKind::Path);
        assert_eq!(g.labels_of(walk.path), vec!["A", "B", "C"]);
    }

    #[test]
    fn four_odd_nodes() {
        let g = graph(&["A", "B", "C", "D"], &["A B", "A C", "A D"], false);
        assert_eq!(g.eulerian_start(), None);
        assert!(g.eulerian_path().is_empty());
    }

    #[test]
    fn unbalanced_directed() {
        let g = graph(&["A", "B", "C"], &["A B", "A C"], true);
        assert!(g.eulerian_walk().is_none());
    }

    #[test]
    fn disconnected_edges() {
        let g = graph(
            &["A", "B", "C", "D", "E", "F"],
            &["A B", "B C", "C A", "D E", "E F", "F D"],
            false,
        );
        assert_eq!(g.eulerian_start(), Some((EulerianKind::Circuit, 0)));
        assert!(g.eulerian_walk().is_none());
    }

    #[test]
    fn circuit_starts_at_first_node_with_edges() {
        let g = graph(&["X", "A", "B"], &["A B", "B A"], true);
        let walk = g.eulerian_walk().unwrap();
        assert_eq!(g.labels_of(walk.path), vec!["A", "B", "A"]);

        let g = graph(&["X", "Y"], &[], true);
        let walk = g.eulerian_walk().unwrap();
        assert_eq!(walk.path, vec![0]);

        assert!(graph(&[], &[], false).eulerian_walk().is_none());
    }

    #[test]
    fn graph_is_reusable() {
        let g = graph(&["A", "B", "C"], &["A B", "B C", "C A"], true);
        let first = g.eulerian_walk();

        assert!(first.is_some());
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.eulerian_walk(), first);
        assert_eq!(g.strongly_connected_components().len(), 1);
    }

    #[test]
    fn random_walks_use_every_edge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for directed in [false, true] {
            for _ in 0..100 {
                let g = random_graph(rng, 6, 8, directed);
                if let Some(walk) = g.eulerian_walk() {
                    assert_is_walk(&g, &walk);
                }
            }
        }
    }
}

/*!
Topological ordering and acyclicity checks.

For directed graphs we use Kahn's algorithm with a FIFO queue, so nodes of equal rank appear in
canonical node order. [`KahnSearch`] exposes the algorithm as a lazy iterator.

Undirected graphs have no orientation to sort by: they count as acyclic if the cycle analysis
finds nothing, in which case the order is the reversed DFS post-order of all components.
*/

use std::collections::VecDeque;

use super::*;

/// Result of [`Topological::topological_order`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopoOrder {
    pub order: Vec<Node>,
    pub acyclic: bool,
}

/// Iterator implementing Kahn's algorithm over a directed graph.
///
/// If the graph has a cycle, iteration terminates early without covering all nodes.
pub struct KahnSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<'a, G> KahnSearch<'a, G>
where
    G: AdjacencyList + DegreeCount,
{
    /// Copies the static in-degrees and seeds the queue with all sources in node order
    pub fn new(graph: &'a G) -> Self {
        let in_degs = graph.vertices().map(|u| graph.in_degree_of(u)).collect_vec();

        let queue = in_degs
            .iter()
            .enumerate()
            .filter_map(|(u, &d)| (d == 0).then_some(u as Node))
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }

    /// Returns *true* if the graph has no node of in-degree zero left to process
    pub fn is_stuck(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<G> Iterator for KahnSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

pub trait Topological: AdjacencyList + DegreeCount + GraphType {
    /// Returns a lazy Kahn iterator; only meaningful for directed graphs
    fn kahn_search(&self) -> KahnSearch<'_, Self> {
        KahnSearch::new(self)
    }

    /// Computes a topological order and decides acyclicity.
    ///
    /// - directed: Kahn's algorithm; a graph without any source yields `([], false)`,
    ///   otherwise `acyclic` holds iff every node was ordered.
    /// - undirected: `([], false)` if there is a cycle, and the reversed DFS post-order otherwise.
    ///
    /// # Examples
    /// ```
    /// use graphtrace::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(["A", "B", "C"], [["A", "C"], ["C", "B"]], true);
    /// let topo = g.topological_order();
    ///
    /// assert!(topo.acyclic);
    /// assert_eq!(g.labels_of(topo.order), vec!["A", "C", "B"]);
    /// ```
    fn topological_order(&self) -> TopoOrder {
        debug!(
            nodes = self.number_of_nodes(),
            directed = self.is_directed(),
            "topological order"
        );

        if self.is_directed() {
            let search = self.kahn_search();
            if search.is_stuck() {
                return TopoOrder::default();
            }

            let order = search.collect_vec();
            let acyclic = order.len() == self.len();
            return TopoOrder { order, acyclic };
        }

        if self.has_cycle() {
            return TopoOrder::default();
        }

        let mut order = self.dfs_post_order();
        order.reverse();
        TopoOrder {
            order,
            acyclic: true,
        }
    }

    /// Returns *true* if the graph is a DAG (or a forest if undirected)
    fn is_acyclic(&self) -> bool {
        self.topological_order().acyclic
    }

    /// Returns all nodes in the order in which a DFS over all components finishes them
    fn dfs_post_order(&self) -> Vec<Node> {
        let mut visited = vec![false; self.len()];
        let mut order = Vec::with_capacity(self.len());

        fn visit<G: AdjacencyList>(graph: &G, u: Node, visited: &mut [bool], order: &mut Vec<Node>) {
            visited[u as usize] = true;
            for v in graph.neighbors_of(u) {
                if !visited[v as usize] {
                    visit(graph, v, visited, order);
                }
            }
            order.push(u);
        }

        for u in self.vertices_range() {
            if !visited[u as usize] {
                visit(self, u, &mut visited, &mut order);
            }
        }

        order
    }
}

impl<G> Topological for G where G: AdjacencyList + DegreeCount + GraphType {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn diamond() {
        let g = graph(&["A", "B", "C", "D"], &["A B", "A C", "B D", "C D"], true);
        let topo = g.topological_order();

        assert!(topo.acyclic);
        assert_eq!(g.labels_of(topo.order), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn fifo_order_between_sources() {
        let g = graph(&["A", "B", "C", "D"], &["B A", "D C"], true);
        let topo = g.topological_order();

        assert!(topo.acyclic);
        assert_eq!(g.labels_of(topo.order), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn directed_cycle_without_sources() {
        let g = graph(&["A", "B", "C"], &["A B", "B C", "C A"], true);
        assert_eq!(g.topological_order(), TopoOrder::default());
    }

    #[test]
    fn directed_cycle_behind_source() {
        let g = graph(&["S", "A", "B"], &["S A", "A B", "B A"], true);
        let topo = g.topological_order();

        assert!(!topo.acyclic);
        assert_eq!(g.labels_of(topo.order), vec!["S"]);
    }

    /// The running in-degrees start from the degrees the graph was built with
    #[test]
    fn kahn_seeds_from_static_in_degrees() {
        let mut g = graph(&["A", "B", "C"], &["A B", "B C"], true);
        assert_eq!(g.kahn_search().collect_vec(), vec![0, 1, 2]);

        // B keeps its in-degree as built and is never released
        g.remove_edge(0, 1);
        assert_eq!(g.in_degree_of(1), 1);
        assert_eq!(g.kahn_search().collect_vec(), vec![0]);
        assert_eq!(
            g.topological_order(),
            TopoOrder {
                order: vec![0],
                acyclic: false
            }
        );
    }

    #[test]
    fn empty_graph() {
        let g = graph(&[], &[], true);
        assert_eq!(g.topological_order(), TopoOrder::default());

        let g = graph(&[], &[], false);
        assert_eq!(
            g.topological_order(),
            TopoOrder {
                order: vec![],
                acyclic: true
            }
        );
    }

    #[test]
    fn undirected_forest() {
        let g = graph(&["A", "B", "C", "D"], &["A B", "A C", "D C"], false);
        let topo = g.topological_order();

        assert!(topo.acyclic);
        // post-order: B, D, C, A
        assert_eq!(g.labels_of(topo.order), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn undirected_cycle() {
        let g = graph(&["A", "B", "C"], &["A B", "B C", "C A"], false);
        assert!(!g.is_acyclic());
        assert!(g.topological_order().order.is_empty());
    }

    #[test]
    fn kahn_respects_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for _ in 0..50 {
            let g = random_graph(rng, 12, 14, true);
            let topo = g.topological_order();

            let mut rank = vec![None; g.len()];
            for (i, &u) in topo.order.iter().enumerate() {
                assert!(rank[u as usize].replace(i).is_none());
            }

            if topo.acyclic {
                assert_eq!(topo.order.len(), g.len());
                for Edge(u, v) in g.edges(false) {
                    assert!(rank[u as usize] < rank[v as usize]);
                }
            }
            assert_eq!(topo.acyclic, !g.has_cycle());
        }
    }
}

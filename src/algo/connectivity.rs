use std::cmp::Reverse;

use super::*;

pub trait Connectivity: AdjacencyList + GraphTranspose {
    /// Returns the strongly connected components of the graph using Kosaraju's algorithm.
    ///
    /// Components are emitted in decreasing order of the finishing time of their first node
    /// in a DFS over the graph; nodes within a component appear in the DFS order of the
    /// transposed graph. For undirected graphs these are the connected components.
    ///
    /// # Examples
    /// ```
    /// use graphtrace::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(["A", "B", "C"], [["A", "B"], ["B", "A"], ["B", "C"]], true);
    /// let sccs = g.strongly_connected_components();
    ///
    /// assert_eq!(sccs.len(), 2);
    /// assert_eq!(g.labels_of(sccs[0].iter().copied()), vec!["A", "B"]);
    /// assert_eq!(g.labels_of(sccs[1].iter().copied()), vec!["C"]);
    /// ```
    fn strongly_connected_components(&self) -> Vec<Vec<Node>> {
        Kosaraju::new(self).compute()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphTranspose {}

/// Entry and exit times of every node in one DFS forest over the graph
#[derive(Debug, Clone)]
struct DfsTimes {
    tin: Vec<Timestamp>,
    tout: Vec<Timestamp>,
    timer: Timestamp,
}

impl DfsTimes {
    fn compute<G: AdjacencyList>(graph: &G) -> Self {
        let mut times = Self {
            tin: vec![0; graph.len()],
            tout: vec![0; graph.len()],
            timer: 0,
        };

        for u in graph.vertices_range() {
            if times.tin[u as usize] == 0 {
                times.visit(graph, u);
            }
        }

        times
    }

    fn visit<G: AdjacencyList>(&mut self, graph: &G, u: Node) {
        self.timer += 1;
        self.tin[u as usize] = self.timer;

        for v in graph.neighbors_of(u) {
            if self.tin[v as usize] == 0 {
                self.visit(graph, v);
            }
        }

        self.timer += 1;
        self.tout[u as usize] = self.timer;
    }
}

struct Kosaraju<'a, G> {
    graph: &'a G,
    visited: Vec<bool>,
}

impl<'a, G> Kosaraju<'a, G>
where
    G: AdjacencyList + GraphTranspose,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: vec![false; graph.len()],
        }
    }

    fn compute(mut self) -> Vec<Vec<Node>> {
        debug!(nodes = self.graph.number_of_nodes(), "kosaraju");

        let times = DfsTimes::compute(self.graph);
        let order = self
            .graph
            .vertices_range()
            .sorted_by_key(|&u| Reverse(times.tout[u as usize]))
            .collect_vec();

        let transposed = self.graph.transposed();
        let mut components = Vec::new();
        for u in order {
            if self.visited[u as usize] {
                continue;
            }

            let mut component = Vec::new();
            self.collect(&transposed, u, &mut component);
            components.push(component);
        }

        components
    }

    fn collect(&mut self, transposed: &G, u: Node, component: &mut Vec<Node>) {
        self.visited[u as usize] = true;
        component.push(u);

        for v in transposed.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.collect(transposed, v, component);
            }
        }
    }
}

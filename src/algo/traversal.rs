/*!
Trace-emitting graph traversals.

Both traversals cover the whole graph: once a search runs dry, it restarts at the next
unvisited node in canonical node order, producing a spanning forest. Alongside the
[`Trace`] they report the parent of every node in that forest.

- **DFS** is recursive and closes nodes in post-order:
  `node:U`, then for every tree edge `edge:U:V` .. recursion .. `deEdge:U:V`, finally `deNode:U`.
- **BFS** processes every dequeued node `U` in two passes over the neighbors that were
  unvisited at the start of `U`'s turn: `bold:U`, `edge:U:V node:V` per neighbor, `deBold:U`,
  then `deEdge:U:V` per neighbor (marking and enqueueing it), finally `deNode:U`.
  Every root additionally emits `node:S` before it is dequeued.
*/

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::*;

/// Result of a trace-emitting traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceForest {
    /// The recorded steps
    pub trace: Trace,
    /// `parents[u]` is the node `u` was discovered from, `None` for roots
    pub parents: Vec<Option<Node>>,
}

impl TraceForest {
    /// Returns the roots of the forest in the order they were visited
    pub fn roots(&self) -> impl Iterator<Item = Node> + '_ {
        self.trace.iter().filter_map(|e| match *e {
            TraceEvent::Node(u) if self.parents[u as usize].is_none() => Some(u),
            _ => None,
        })
    }
}

/// Provides trace-emitting traversals directly on graphs
pub trait TraceTraversal: AdjacencyList {
    /// Runs a depth-first search over all components and returns its trace and forest.
    fn dfs_forest(&self) -> TraceForest {
        DfsTrace::new(self).compute()
    }

    /// Runs a breadth-first search over all components and returns its trace and forest.
    fn bfs_forest(&self) -> TraceForest {
        BfsTrace::new(self).compute()
    }

    /// Returns the trace of a depth-first search over all components.
    ///
    /// # Examples
    /// ```
    /// use graphtrace::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(["A", "B"], [["A", "B"]], true);
    /// assert_eq!(
    ///     g.dfs_trace().tokens(&g),
    ///     vec!["node:A", "edge:A:B", "node:B", "deNode:B", "deEdge:A:B", "deNode:A"]
    /// );
    /// ```
    fn dfs_trace(&self) -> Trace {
        self.dfs_forest().trace
    }

    /// Returns the trace of a breadth-first search over all components.
    fn bfs_trace(&self) -> Trace {
        self.bfs_forest().trace
    }
}

impl<G> TraceTraversal for G where G: AdjacencyList {}

struct DfsTrace<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: Vec<bool>,
    parents: Vec<Option<Node>>,
    trace: Trace,
}

impl<'a, G> DfsTrace<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: vec![false; graph.len()],
            parents: vec![None; graph.len()],
            trace: Trace::new(),
        }
    }

    fn compute(mut self) -> TraceForest {
        debug!(nodes = self.graph.number_of_nodes(), "dfs trace");

        for u in self.graph.vertices_range() {
            if !self.visited[u as usize] {
                self.visit(u);
            }
        }

        TraceForest {
            trace: self.trace,
            parents: self.parents,
        }
    }

    fn visit(&mut self, u: Node) {
        self.visited[u as usize] = true;
        self.trace.push(TraceEvent::Node(u));

        for v in self.graph.neighbors_of(u) {
            if self.visited[v as usize] {
                continue;
            }

            self.parents[v as usize] = Some(u);
            self.trace.push(TraceEvent::Edge(u, v));
            self.visit(v);
            self.trace.push(TraceEvent::DeEdge(u, v));
        }

        self.trace.push(TraceEvent::DeNode(u));
    }
}

struct BfsTrace<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: Vec<bool>,
    parents: Vec<Option<Node>>,
    queue: VecDeque<Node>,
    trace: Trace,
}

impl<'a, G> BfsTrace<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: vec![false; graph.len()],
            parents: vec![None; graph.len()],
            queue: VecDeque::new(),
            trace: Trace::new(),
        }
    }

    fn compute(mut self) -> TraceForest {
        debug!(nodes = self.graph.number_of_nodes(), "bfs trace");

        for s in self.graph.vertices_range() {
            if !self.visited[s as usize] {
                self.search_from(s);
            }
        }

        TraceForest {
            trace: self.trace,
            parents: self.parents,
        }
    }

    fn search_from(&mut self, s: Node) {
        self.visited[s as usize] = true;
        self.trace.push(TraceEvent::Node(s));
        self.queue.push_back(s);

        while let Some(u) = self.queue.pop_front() {
            self.trace.push(TraceEvent::Bold(u));

            // both passes work on the neighbors that are unvisited *now*
            let frontier: SmallVec<[Node; 8]> = self
                .graph
                .neighbors_of(u)
                .filter(|&v| !self.visited[v as usize])
                .collect();

            for &v in &frontier {
                self.trace.push(TraceEvent::Edge(u, v));
                self.trace.push(TraceEvent::Node(v));
            }

            self.trace.push(TraceEvent::DeBold(u));

            for &v in &frontier {
                self.visited[v as usize] = true;
                self.parents[v as usize] = Some(u);
                self.queue.push_back(v);
                self.trace.push(TraceEvent::DeEdge(u, v));
            }

            self.trace.push(TraceEvent::DeNode(u));
        }
    }
}

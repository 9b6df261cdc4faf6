use super::*;

/// Tri-color state of a node during a depth-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Not yet discovered
    #[default]
    White,
    /// On the current DFS stack
    Grey,
    /// Fully processed
    Black,
}

/// Result of [`CycleDetection::detect_cycles`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub trace: Trace,
    /// One closed path `[v, .., u, v]` per back edge `(u, v)` in discovery order
    pub cycles: Vec<Vec<Node>>,
}

impl CycleReport {
    /// Returns *true* if at least one cycle was found
    pub fn has_cycle(&self) -> bool {
        !self.cycles.is_empty()
    }
}

pub trait CycleDetection: AdjacencyList + GraphType {
    /// Runs a tri-color DFS over all components and reports every back edge as a cycle.
    ///
    /// In undirected graphs the edge leading back to the DFS parent is not a cycle.
    ///
    /// # Examples
    /// ```
    /// use graphtrace::{prelude::*, algo::*};
    ///
    /// let g = Graph::build(["A", "B", "C"], [["A", "B"], ["B", "C"], ["C", "A"]], true);
    /// let report = g.detect_cycles();
    ///
    /// assert_eq!(report.cycles.len(), 1);
    /// assert_eq!(g.labels_of(report.cycles[0].iter().copied()), vec!["A", "B", "C", "A"]);
    /// ```
    fn detect_cycles(&self) -> CycleReport;

    /// Returns *true* if the graph contains a cycle
    fn has_cycle(&self) -> bool {
        self.detect_cycles().has_cycle()
    }
}

impl<G> CycleDetection for G
where
    G: AdjacencyList + GraphType,
{
    fn detect_cycles(&self) -> CycleReport {
        CycleSearch::new(self).compute()
    }
}

struct CycleSearch<'a, G>
where
    G: AdjacencyList + GraphType,
{
    graph: &'a G,
    colors: Vec<Color>,
    parents: Vec<Option<Node>>,
    // (start, end) of every back edge end -> start
    back_edges: Vec<(Node, Node)>,
    trace: Trace,
}

impl<'a, G> CycleSearch<'a, G>
where
    G: AdjacencyList + GraphType,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            colors: vec![Color::White; graph.len()],
            parents: vec![None; graph.len()],
            back_edges: Vec::new(),
            trace: Trace::new(),
        }
    }

    fn compute(mut self) -> CycleReport {
        debug!(
            nodes = self.graph.number_of_nodes(),
            directed = self.graph.is_directed(),
            "cycle detection"
        );

        for u in self.graph.vertices_range() {
            if self.colors[u as usize] == Color::White {
                self.visit(u);
            }
        }

        let cycles = self
            .back_edges
            .iter()
            .map(|&(start, end)| self.cycle_path(start, end))
            .collect();

        CycleReport {
            trace: self.trace,
            cycles,
        }
    }

    fn visit(&mut self, u: Node) {
        self.colors[u as usize] = Color::Grey;
        self.trace.push(TraceEvent::Grey(u));

        let skip_parent = self.graph.is_undirected();
        for v in self.graph.neighbors_of(u) {
            if skip_parent && self.parents[u as usize] == Some(v) {
                continue;
            }

            self.trace.push(TraceEvent::Edge(u, v));
            match self.colors[v as usize] {
                Color::White => {
                    self.parents[v as usize] = Some(u);
                    self.visit(v);
                }
                Color::Black => {}
                Color::Grey => {
                    trace!(u, v, "back edge");
                    self.trace.push(TraceEvent::Cycle(u, v));
                    self.back_edges.push((v, u));
                }
            }
            self.trace.push(TraceEvent::DeEdge(u, v));
        }

        self.colors[u as usize] = Color::Black;
        self.trace.push(TraceEvent::Black(u));
    }

    /// Follows the tree from `end` up to its ancestor `start` and closes the path
    fn cycle_path(&self, start: Node, end: Node) -> Vec<Node> {
        let mut path = vec![end];
        let mut u = end;
        while u != start {
            match self.parents[u as usize] {
                Some(p) => {
                    path.push(p);
                    u = p;
                }
                None => break,
            }
        }

        path.reverse();
        path.push(start);
        path
    }
}

/*!
Articulation points and bridges via Tarjan's low-link values.

A single DFS forest with a shared clock computes the discovery time `tin[u]` and the low-link
`low[u]` of every node. After returning from a tree edge `(u, v)`:
- `low[v] > tin[u]` makes `(u, v)` a bridge,
- `low[v] >= tin[u]` makes a non-root `u` an articulation point.

A root is an articulation point if it has more than one tree child. The edge leading back to
the tree parent is ignored regardless of the orientation of the graph.
*/

use super::*;

/// Result of [`Cuts::articulation_points_and_bridges`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutReport {
    pub trace: Trace,
    /// Articulation points in the order they were first detected; each appears once
    pub articulation_points: Vec<Node>,
    /// Bridges `(parent, child)` in the orientation of their tree edge
    pub bridges: Vec<Edge>,
}

pub trait Cuts: AdjacencyList {
    /// Computes articulation points and bridges of all components.
    fn articulation_points_and_bridges(&self) -> CutReport {
        CutSearch::new(self).compute()
    }

    /// Returns the articulation points of the graph in detection order
    fn articulation_points(&self) -> Vec<Node> {
        self.articulation_points_and_bridges().articulation_points
    }

    /// Returns the bridges of the graph in detection order
    fn bridges(&self) -> Vec<Edge> {
        self.articulation_points_and_bridges().bridges
    }
}

impl<G> Cuts for G where G: AdjacencyList {}

struct CutSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    colors: Vec<Color>,
    parents: Vec<Option<Node>>,
    tin: Vec<Timestamp>,
    low: Vec<Timestamp>,
    is_articulation_point: Vec<bool>,
    timer: Timestamp,
    root: Node,
    root_children: NumNodes,
    report: CutReport,
}

impl<'a, G> CutSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            colors: vec![Color::White; n],
            parents: vec![None; n],
            tin: vec![0; n],
            low: vec![0; n],
            is_articulation_point: vec![false; n],
            timer: 0,
            root: INVALID_NODE,
            root_children: 0,
            report: CutReport::default(),
        }
    }

    fn compute(mut self) -> CutReport {
        debug!(nodes = self.graph.number_of_nodes(), "articulation points and bridges");

        for u in self.graph.vertices_range() {
            if self.colors[u as usize] != Color::White {
                continue;
            }

            self.root = u;
            self.root_children = 0;
            self.visit(u);
        }

        self.report
    }

    fn push(&mut self, event: TraceEvent) {
        self.report.trace.push(event);
    }

    fn label(&mut self, u: Node) {
        self.push(TraceEvent::Label {
            node: u,
            discovery: self.tin[u as usize],
            low: self.low[u as usize],
        });
    }

    fn mark_articulation_point(&mut self, u: Node) {
        trace!(u, "articulation point");
        self.push(TraceEvent::ArticulationPoint(u));
        if !self.is_articulation_point[u as usize] {
            self.is_articulation_point[u as usize] = true;
            self.report.articulation_points.push(u);
        }
    }

    fn visit(&mut self, u: Node) {
        let ui = u as usize;

        self.timer += 1;
        self.colors[ui] = Color::Grey;
        self.tin[ui] = self.timer;
        self.low[ui] = self.timer;
        self.push(TraceEvent::Grey(u));
        self.label(u);

        for v in self.graph.neighbors_of(u) {
            let vi = v as usize;
            if self.parents[ui] == Some(v) {
                continue;
            }

            self.push(TraceEvent::Edge(u, v));
            match self.colors[vi] {
                Color::Grey => {
                    self.low[ui] = self.low[ui].min(self.tin[vi]);
                    self.label(u);
                }
                Color::Black => {
                    self.low[ui] = self.low[ui].min(self.low[vi]);
                    self.label(u);
                }
                Color::White => {
                    if u == self.root {
                        self.root_children += 1;
                    }

                    self.parents[vi] = Some(u);
                    self.visit(v);
                    self.low[ui] = self.low[ui].min(self.low[vi]);
                    self.label(u);

                    if self.low[vi] > self.tin[ui] {
                        trace!(u, v, "bridge");
                        self.push(TraceEvent::Bridge(u, v));
                        self.report.bridges.push(Edge(u, v));
                    }

                    if self.low[vi] >= self.tin[ui] && u != self.root {
                        self.mark_articulation_point(u);
                    }
                }
            }
            self.push(TraceEvent::DeEdge(u, v));
        }

        if u == self.root && self.root_children > 1 {
            self.mark_articulation_point(u);
        }

        self.colors[ui] = Color::Black;
        self.push(TraceEvent::White(u));
    }
}

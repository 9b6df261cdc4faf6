/*!
Step-by-step traces of graph algorithms.

Trace-emitting algorithms record a sequence of [`TraceEvent`]s while they run. A visualization
layer replays them as string tokens such as `node:A`, `edge:A:B` or `label:B:2:1`, obtained via
[`Trace::tokens`]. Events refer to nodes by index; labels are only resolved when rendering.

| Event | Token |
|---|---|
| [`TraceEvent::Node`] | `node:U` |
| [`TraceEvent::DeNode`] | `deNode:U` |
| [`TraceEvent::Edge`] | `edge:U:V` |
| [`TraceEvent::DeEdge`] | `deEdge:U:V` |
| [`TraceEvent::Bold`] | `bold:U` |
| [`TraceEvent::DeBold`] | `deBold:U` |
| [`TraceEvent::Grey`] | `grey:U` |
| [`TraceEvent::Black`] | `black:U` |
| [`TraceEvent::White`] | `white:U` |
| [`TraceEvent::Cycle`] | `cycle:U:V` |
| [`TraceEvent::Label`] | `label:U:TIN:LOW` |
| [`TraceEvent::Bridge`] | `bridge:U:V` |
| [`TraceEvent::ArticulationPoint`] | `ap:U` |
*/

use std::fmt::{self, Display};

use super::*;

/// A single visualization step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    /// Node is visited for the first time
    Node(Node),
    /// Node is fully processed
    DeNode(Node),
    /// Edge is highlighted before it is followed
    Edge(Node, Node),
    /// Edge highlight is removed
    DeEdge(Node, Node),
    /// Node is the current frontier node of a BFS
    Bold(Node),
    /// Frontier highlight is removed
    DeBold(Node),
    /// Node is put on the DFS stack
    Grey(Node),
    /// Node is taken off the DFS stack
    Black(Node),
    /// Node is finished by the articulation point search. The token name `white`
    /// is kept for compatibility with existing visualizers.
    White(Node),
    /// Back edge closing a cycle
    Cycle(Node, Node),
    /// Discovery time and low-link of a node changed
    Label {
        node: Node,
        discovery: Timestamp,
        low: Timestamp,
    },
    /// Edge is a bridge
    Bridge(Node, Node),
    /// Node is an articulation point
    ArticulationPoint(Node),
}

impl TraceEvent {
    /// Returns the token name of the event
    pub fn name(&self) -> &'static str {
        match self {
            TraceEvent::Node(_) => "node",
            TraceEvent::DeNode(_) => "deNode",
            TraceEvent::Edge(..) => "edge",
            TraceEvent::DeEdge(..) => "deEdge",
            TraceEvent::Bold(_) => "bold",
            TraceEvent::DeBold(_) => "deBold",
            TraceEvent::Grey(_) => "grey",
            TraceEvent::Black(_) => "black",
            TraceEvent::White(_) => "white",
            TraceEvent::Cycle(..) => "cycle",
            TraceEvent::Label { .. } => "label",
            TraceEvent::Bridge(..) => "bridge",
            TraceEvent::ArticulationPoint(_) => "ap",
        }
    }

    /// Returns a displayable version of the event that renders node labels of `graph`
    pub fn labelled<'a, G: Labelled>(&'a self, graph: &'a G) -> LabelledEvent<'a, G> {
        LabelledEvent { event: self, graph }
    }
}

/// A [`TraceEvent`] bound to the graph it was recorded on; its `Display` is the token.
pub struct LabelledEvent<'a, G> {
    event: &'a TraceEvent,
    graph: &'a G,
}

impl<G: Labelled> Display for LabelledEvent<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |u: Node| self.graph.label_of(u);
        let name = self.event.name();

        match *self.event {
            TraceEvent::Node(u)
            | TraceEvent::DeNode(u)
            | TraceEvent::Bold(u)
            | TraceEvent::DeBold(u)
            | TraceEvent::Grey(u)
            | TraceEvent::Black(u)
            | TraceEvent::White(u)
            | TraceEvent::ArticulationPoint(u) => write!(f, "{name}:{}", label(u)),
            TraceEvent::Edge(u, v)
            | TraceEvent::DeEdge(u, v)
            | TraceEvent::Cycle(u, v)
            | TraceEvent::Bridge(u, v) => write!(f, "{name}:{}:{}", label(u), label(v)),
            TraceEvent::Label {
                node,
                discovery,
                low,
            } => write!(f, "{name}:{}:{discovery}:{low}", label(node)),
        }
    }
}

/// An ordered, finite sequence of [`TraceEvent`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// Returns the number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns *true* if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns an iterator over all events
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    /// Renders every event as a string token using the node labels of `graph`
    pub fn tokens<G: Labelled>(&self, graph: &G) -> Vec<String> {
        self.events
            .iter()
            .map(|event| event.labelled(graph).to_string())
            .collect()
    }
}

impl From<Vec<TraceEvent>> for Trace {
    fn from(events: Vec<TraceEvent>) -> Self {
        Self { events }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::graph;

    #[test]
    fn tokens_use_labels() {
        let g = graph(&["A", "B"], &["A B"], true);
        let trace = Trace::from(vec![
            TraceEvent::Node(0),
            TraceEvent::Edge(0, 1),
            TraceEvent::Label {
                node: 1,
                discovery: 2,
                low: 1,
            },
            TraceEvent::White(1),
            TraceEvent::ArticulationPoint(0),
            TraceEvent::DeBold(1),
        ]);

        assert_eq!(
            trace.tokens(&g),
            vec!["node:A", "edge:A:B", "label:B:2:1", "white:B", "ap:A", "deBold:B"]
        );
        assert_eq!(trace.len(), 6);
    }

    #[test]
    fn empty_trace() {
        let g = graph(&[], &[], false);
        let trace = Trace::new();
        assert!(trace.is_empty());
        assert!(trace.tokens(&g).is_empty());
    }
}

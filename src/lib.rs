/*!
`graphtrace` runs classical graph algorithms on small labelled graphs and records every step
they take, so that a visualizer can replay the run.

# Representation

A [`Graph`](crate::repr::Graph) is either **directed** or **undirected** (decided at runtime)
and carries an integer weight on every edge. Nodes are identified by string IDs; internally
they are numbered `0..n` as `u32` in the order their IDs first appeared. For **edges**, we use
a simple tuple-struct `Edge(Node, Node)`.

Neighbors are kept in insertion order. Together with the node order this makes every
algorithm deterministic: the same input always produces the same trace.

# Algorithms

All algorithms are implemented via traits on the graph itself, see [`algo`]:
- DFS and BFS over all components with a step trace,
- cycle detection with the reconstructed cycles,
- topological order and acyclicity,
- strongly connected components (Kosaraju),
- articulation points and bridges (Tarjan),
- Eulerian paths and circuits (Hierholzer).

Traces are sequences of [`TraceEvent`](crate::algo::TraceEvent)s that render as string tokens
like `node:A` or `edge:A:B`.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph,
- [`algo`] includes the algorithm traits,
- [`io`] reads and writes graphs as JSON specifications,
- [`analysis`] selects an algorithm by name and collects its results by node label.

In most use-cases, `use graphtrace::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod analysis;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};

/// `graphtrace::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}

/*!
# Node Representation

Nodes are stored in an arena and addressed by their index `Node = u32` in the range `0..n`.
The order of indices is the order in which node IDs first appeared while building the graph;
every algorithm in this crate iterates nodes in this order, which makes their output
deterministic.

The user-facing ID of a node is its *label* (see [`Labelled`](crate::ops::Labelled)).
*/

/// Nodes are indices from `0` to `n - 1` into the node arena of a graph
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Edge weights are signed integers; a missing or malformed weight becomes [`DEFAULT_WEIGHT`]
pub type Weight = i64;

/// Weight assigned to edges whose weight token is missing or not an integer
pub const DEFAULT_WEIGHT: Weight = 1;

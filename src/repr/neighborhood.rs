use std::{iter::Copied, slice::Iter};

use smallvec::SmallVec;

use crate::node::*;

/// Number of neighbors stored inline before spilling to the heap
const INLINE_NEIGHBORS: usize = 4;

/// An insertion-ordered map `neighbor -> weight`.
///
/// Each neighbor is stored at most once. Re-inserting a neighbor only updates its weight
/// and keeps its position, so iteration order is the order in which neighbors first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedNeighborhood {
    entries: SmallVec<[(Node, Weight); INLINE_NEIGHBORS]>,
}

impl WeightedNeighborhood {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.entries.len() as NumNodes
    }

    /// Returns an iterator over all neighbors in insertion order
    pub fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.entries.iter().map(|&(v, _)| v)
    }

    /// Returns an iterator over `(neighbor, weight)` in insertion order
    pub fn weighted(&self) -> Copied<Iter<'_, (Node, Weight)>> {
        self.entries.iter().copied()
    }

    /// Returns the first neighbor, if any
    pub fn first(&self) -> Option<Node> {
        self.entries.first().map(|&(v, _)| v)
    }

    fn position_of(&self, v: Node) -> Option<usize> {
        self.entries.iter().position(|&(x, _)| x == v)
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.position_of(v).is_some()
    }

    /// Returns the weight stored for `v`
    pub fn weight_of(&self, v: Node) -> Option<Weight> {
        self.position_of(v).map(|i| self.entries[i].1)
    }

    /// Adds `v` with weight `w`, or overwrites the weight if `v` is already present.
    /// Returns *true* if the node was in the Neighborhood before.
    pub fn try_add_neighbor(&mut self, v: Node, w: Weight) -> bool {
        match self.position_of(v) {
            Some(i) => {
                self.entries[i].1 = w;
                true
            }
            None => {
                self.entries.push((v, w));
                false
            }
        }
    }

    /// Tries to remove a neighbor from the Neighborhood while keeping the order of the others.
    /// Returns *true* if the node was in the Neighborhood before.
    pub fn try_remove_neighbor(&mut self, v: Node) -> bool {
        match self.position_of(v) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }
}

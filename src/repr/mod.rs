/*!
# Graph Representation

A single representation backs every analysis in this crate: [`Graph`], an arena of labelled
nodes with insertion-ordered [`WeightedNeighborhood`]s. The orientation of the graph is a
runtime property (see [`GraphType`]) as the same input may be analysed either way.

All access from algorithms goes through the traits in [`ops`](crate::ops), so algorithms
never depend on the concrete representation.
*/

use crate::{edge::*, node::*, ops::*};

mod graph;
mod neighborhood;

pub use graph::*;
pub use neighborhood::*;

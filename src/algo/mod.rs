/*!
# Graph Algorithms

This module provides the **trace-emitting algorithms** of this crate, built on top of the
operation traits in [`ops`](crate::ops). All algorithms are re-exported at the top level of
this module, so you can simply do:
```rust
use graphtrace::{prelude::*, algo::*};
```
and gain access to traversal, cycle detection, topological ordering, connectivity, cuts and
Eulerian walks directly on a [`Graph`].

Every algorithm allocates its scratch state per call and only borrows the graph, so a graph
can be analysed any number of times. Results are plain data; an algorithm never fails.
*/

mod connectivity;
mod cuts;
mod cycles;
mod eulerian;
mod topo;
mod trace;
mod traversal;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::prelude::*;

pub use connectivity::*;
pub use cuts::*;
pub use cycles::*;
pub use eulerian::*;
pub use topo::*;
pub use trace::*;
pub use traversal::*;

/// Value of the shared DFS clock; the first tick yields `1`
pub type Timestamp = u32;

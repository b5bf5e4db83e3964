/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
Most algorithms are exposed as traits implemented on every suitable graph (e.g.
`graph.bellman_ford(source)`), configurable ones additionally as structs (e.g. [`Prim`]).
*/

mod centrality;
mod clique;
mod community;
mod connectivity;
mod mst;
mod shortest_path;
mod traversal;

use crate::prelude::*;

pub use centrality::*;
pub use clique::*;
pub use community::*;
pub use connectivity::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;

/*!
`wgraphs` is a library of algorithms on graphs whose edges carry optional signed weights:

- shortest paths with negative-cycle detection and reconstruction (Bellman-Ford),
- edge-betweenness centrality (Brandes) and community detection (Girvan-Newman),
- approximation of large cliques and independent sets,
- minimum spanning trees (Prim),
- a randomized graph synthesizer to build graphs with guaranteed structural properties
  (connectivity, strong connectivity, cliques, negative cycles, weights) and to repair
  negative cycles again.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
New nodes are always appended, so ids handed out by a graph remain valid.
**Edges** are tuple-structs `Edge(Node, Node)`; a stored edge additionally carries an
`Option<Weight>` where `Weight = i64`. Algorithms needing numbers treat unweighted edges as
[`DEFAULT_WEIGHT`](crate::edge::DEFAULT_WEIGHT).

### Directed vs Undirected

Whether a graph is directed is a runtime tag of [`Graph`](crate::repr::Graph):

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)` and reported
  in its normalized orientation (`u <= v`).
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are distinct.

Every algorithm branches on this tag.

# Design

Algorithms are provided as traits implemented on the graphs themselves
(e.g. `graph.bellman_ford(s)`), configurable ones additionally as structs using the
*Builder* / *Setter* pattern (e.g. [`Prim`](crate::algo::Prim)). Random graphs are
described by an immutable [`GraphBuilder`](crate::gens::GraphBuilder) whose `build`
method interprets an ordered list of transforms.

Operations that modify their input (Girvan-Newman and the negative-cycle repair) take the
graph by mutable reference; clone it beforehand if the original must survive.

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representations,
- [`algo`] includes the algorithm traits and result types,
- [`gens`] includes the graph synthesizer and deterministic substructures such as paths, cycles, cliques,
- [`error`] includes [`GraphError`] returned by fallible operations.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let graph = Graph::from_edges(3, true, [(0, 1, 2), (1, 2, -1), (0, 2, 3)]);
let tree = graph.bellman_ford(0).unwrap();
assert_eq!(tree.distance(2), Some(1));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}

/*!
Minimum spanning trees following Prim's algorithm.

Directed graphs are traversed as if they were undirected; the tree keeps the orientation and
weight each selected edge has in the input. Unweighted edges cost [`DEFAULT_WEIGHT`].

# Examples
```
use wgraphs::{prelude::*, algo::*};

let graph = Graph::from_edges(3, false, [(0, 1, 4), (1, 2, -1), (0, 2, 2)]);
let tree = graph.minimum_spanning_tree().unwrap();
assert_eq!(tree.ordered_edges(), vec![
    WeightedEdge::from((0, 2, 2)),
    WeightedEdge::from((1, 2, -1)),
]);
```
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::error::Result;

use super::*;

/// Configuration of Prim's algorithm using the *Builder* pattern
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim {
    start: Node,
}

impl Prim {
    /// Starts at node `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node the tree is grown from
    pub fn start(mut self, u: Node) -> Self {
        self.start = u;
        self
    }

    /// Computes a minimum spanning tree of `graph` as a new graph with the same nodes
    /// and directedness.
    ///
    /// Fails with [`GraphError::DisconnectedGraph`] if not every node is reachable from the
    /// start node (ignoring directions).
    /// ** Panics if the graph is non-empty and the start node is out of range **
    pub fn run<G>(&self, graph: &G) -> Result<G>
    where
        G: DirectedAdjacencyList + WeightedAdjacency + GraphEdgeEditing,
    {
        let n = graph.number_of_nodes();
        let mut tree = G::new(n, graph.is_directed());
        if n == 0 {
            return Ok(tree);
        }
        assert!(self.start < n, "start node {} out of range", self.start);

        let mut in_tree = graph.vertex_bitset_unset();
        let mut heap = BinaryHeap::new();
        let mut reached = 0;

        let enter = |u: Node, heap: &mut BinaryHeap<Reverse<(Weight, Node, WeightedEdge)>>| {
            for e in graph.edges_of(u, false) {
                heap.push(Reverse((e.cost(), e.target(), e)));
            }
            if graph.is_directed() {
                for v in graph.in_neighbors_of(u) {
                    let e = Edge(v, u).with_weight(graph.weight_of(v, u).unwrap());
                    heap.push(Reverse((e.cost(), v, e)));
                }
            }
        };

        in_tree.set_bit(self.start);
        reached += 1;
        enter(self.start, &mut heap);

        while let Some(Reverse((_, far, e))) = heap.pop() {
            if in_tree.set_bit(far) {
                continue;
            }

            tree.try_add_weighted_edge(e.source(), e.target(), e.weight);
            reached += 1;
            if reached == n {
                return Ok(tree);
            }

            enter(far, &mut heap);
        }

        if reached < n {
            return Err(GraphError::DisconnectedGraph { reached, total: n });
        }

        Ok(tree)
    }
}

/// Prim's algorithm as a method on the graph itself
pub trait MinimumSpanningTree: DirectedAdjacencyList + WeightedAdjacency + GraphEdgeEditing {
    /// Computes a minimum spanning tree grown from node `0`; see [`Prim::run`]
    fn minimum_spanning_tree(&self) -> Result<Self>
    where
        Self: Sized,
    {
        Prim::new().run(self)
    }
}

impl<G> MinimumSpanningTree for G where G: DirectedAdjacencyList + WeightedAdjacency + GraphEdgeEditing {}

/*!
# Substructure Generators

Deterministic wiring of **paths**, **cycles** and **cliques** between existing nodes.

Edges that already exist are kept; if a weight is given, it overwrites the weight of both new
and existing edges, so a substructure with a fixed weight is guaranteed afterwards.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = Graph::new_directed(5);
g.connect_path([0, 1, 2], None);
g.connect_cycle([2, 3, 4], Some(-1));
g.connect_clique([0, 2, 4], None);

assert_eq!(g.number_of_edges(), 10);
assert_eq!(g.weight_of(4, 2), Some(Some(-1)));
assert_eq!(g.weight_of(2, 4), Some(None));
```
*/

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures: GraphEdgeEditing + GraphType {
    /// Adds the edge `(u, v)` if missing and sets its weight if `weight` is given
    fn connect(&mut self, u: Node, v: Node, weight: Option<Weight>) {
        if self.try_add_weighted_edge(u, v, weight) && weight.is_some() {
            self.set_weight(u, v, weight);
        }
    }

    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Option<Weight>)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.connect(u, v, weight);
        }
    }

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and
    /// the last node is connected back to the first. A single node receives a loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Option<Weight>)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.connect(prev, cur, weight);
                prev = cur;
            }

            self.connect(prev, first, weight);
        }
    }

    /// Connects all distinct pairs of the given nodes (in both directions for directed graphs)
    fn connect_clique<C>(&mut self, nodes: C, weight: Option<Weight>)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                if u == v {
                    continue;
                }

                self.connect(u, v, weight);
                if self.is_directed() {
                    self.connect(v, u, weight);
                }
            }
        }
    }
}

impl<G> GeneratorSubstructures for G where G: GraphEdgeEditing + GraphType {}

/// Substructures placed on random or newly created nodes
pub trait RandomSubstructures: GeneratorSubstructures + GraphNodeEditing {
    /// Returns `size` fresh nodes if `add_new_nodes` and otherwise `size` distinct existing
    /// nodes in random order.
    /// Fails with [`GraphError::SizeError`] if the graph has fewer than `size` nodes.
    fn pick_nodes<R: Rng>(&mut self, rng: &mut R, size: NumNodes, add_new_nodes: bool) -> Result<Vec<Node>> {
        if add_new_nodes {
            return Ok(self.add_nodes(size).collect());
        }

        let available = self.number_of_nodes();
        if size > available {
            return Err(GraphError::SizeError {
                requested: size,
                available,
            });
        }

        let mut nodes = rand::seq::index::sample(rng, available as usize, size as usize)
            .into_iter()
            .map(|u| u as Node)
            .collect_vec();
        nodes.shuffle(rng);
        Ok(nodes)
    }

    /// Connects `size` random (or new) nodes to a clique and returns them
    fn add_random_clique<R: Rng>(&mut self, rng: &mut R, size: NumNodes, add_new_nodes: bool) -> Result<Vec<Node>> {
        let nodes = self.pick_nodes(rng, size, add_new_nodes)?;
        self.connect_clique(nodes.iter().copied(), None);
        Ok(nodes)
    }

    /// Connects `length` random (or new) nodes to a cycle and returns them in cycle order.
    /// If `negative_weight`, every cycle edge is forced to weight `-1`.
    fn add_random_cycle<R: Rng>(
        &mut self,
        rng: &mut R,
        length: NumNodes,
        add_new_nodes: bool,
        negative_weight: bool,
    ) -> Result<Vec<Node>> {
        let nodes = self.pick_nodes(rng, length, add_new_nodes)?;
        self.connect_cycle(nodes.iter().copied(), negative_weight.then_some(-1));
        Ok(nodes)
    }
}

impl<G> RandomSubstructures for G where G: GeneratorSubstructures + GraphNodeEditing {}

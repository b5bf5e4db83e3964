/*!
# Random Spanning Structures

Random edges that make a graph connected:

- [`RandomSpanningTree::add_random_spanning_tree`] grows a uniformly shuffled tree over all
  nodes from a random root, every edge oriented away from the root.
- [`RandomSpanningTree::connect_components`] only joins the existing (weakly) connected
  components, adding exactly one edge less than there are components.
*/

use itertools::Itertools;
use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom, index},
};
use tracing::trace;

use super::*;
use crate::algo::Connectivity;

/// Random spanning structures as methods on the graph itself
pub trait RandomSpanningTree: DirectedAdjacencyList + GraphEdgeEditing {
    /// Attaches the nodes in random order, each to a uniformly chosen node attached before.
    /// Every edge is oriented away from the root, which is returned (`None` for empty graphs).
    /// Edges that already exist are kept as they are.
    fn add_random_spanning_tree<R: Rng>(&mut self, rng: &mut R) -> Option<Node> {
        let mut order = self.vertices().collect_vec();
        order.shuffle(rng);

        let root = *order.first()?;
        for i in 1..order.len() {
            let u = order[rng.random_range(0..i)];
            self.try_add_edge(u, order[i]);
        }

        Some(root)
    }

    /// Joins two randomly chosen components by an edge between random members until the
    /// graph is (weakly) connected.
    fn connect_components<R: Rng>(&mut self, rng: &mut R) {
        let mut components = self.connected_components().collect_vec();

        while components.len() > 1 {
            let picked = index::sample(rng, components.len(), 2);
            let (i, j) = (picked.index(0), picked.index(1));

            let u = *components[i].choose(rng).unwrap();
            let v = *components[j].choose(rng).unwrap();
            trace!(u, v, "joining components");
            self.add_edge(u, v);

            let first = components.swap_remove(i.max(j));
            let mut second = components.swap_remove(i.min(j));
            second.extend(first);
            components.push(second);
        }
    }
}

impl<G> RandomSpanningTree for G where G: DirectedAdjacencyList + GraphEdgeEditing {}

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// A neighbor entry: the adjacent node and the weight of the connecting edge
pub type Neighbor = (Node, Option<Weight>);

/// Trait for methods on the weighted Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors and edge weights in the Neighborhood
    fn weighted_neighbors(&self) -> impl Iterator<Item = Neighbor> + '_;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors().map(|(v, _)| v)
    }

    /// Returns the weight towards `v` if `v` is in the Neighborhood
    fn weight_of(&self, v: Node) -> Option<Option<Weight>> {
        self.weighted_neighbors()
            .find_map(|(u, w)| (u == v).then_some(w))
    }

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_of(v).is_some()
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before (its weight is left untouched).
    fn try_add_neighbor(&mut self, u: Node, weight: Option<Weight>) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u, weight);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// This might lead to Multi-Edges
    fn add_neighbor(&mut self, u: Node, weight: Option<Weight>);

    /// Overwrites the weight towards `u`. Returns *true* if `u` is a neighbor.
    fn set_weight(&mut self, u: Node, weight: Option<Weight>) -> bool;

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns the weight of the removed entry if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> Option<Option<Weight>>;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

macro_rules! impl_slice_neighborhood {
    ($self:ident) => {
        fn num_of_neighbors(&$self) -> NumNodes {
            $self.0.len() as NumNodes
        }

        fn weighted_neighbors(&$self) -> impl Iterator<Item = Neighbor> + '_ {
            $self.0.iter().copied()
        }

        fn add_neighbor(&mut $self, u: Node, weight: Option<Weight>) {
            $self.0.push((u, weight));
        }

        fn set_weight(&mut $self, u: Node, weight: Option<Weight>) -> bool {
            match $self.0.iter_mut().find(|(v, _)| *v == u) {
                Some(entry) => {
                    entry.1 = weight;
                    true
                }
                None => false,
            }
        }

        fn try_remove_neighbor(&mut $self, u: Node) -> Option<Option<Weight>> {
            let (pos, _) = $self.0.iter().find_position(|(x, _)| *x == u)?;
            Some($self.0.remove(pos).1)
        }

        fn clear(&mut $self) {
            $self.0.clear();
        }
    };
}

/// Basic Neighborhood-Impl. using `Vec<Neighbor>`
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<Neighbor>);

impl Neighborhood for ArrNeighborhood {
    impl_slice_neighborhood!(self);
}

/// Like `ArrNeighborhood` but uses `SmallVec<[Neighbor; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone, Debug)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Neighbor; N]>)
where
    [Neighbor; N]: Array<Item = Neighbor>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Neighbor; N]: Array<Item = Neighbor>,
{
    impl_slice_neighborhood!(self);
}

/*!
# Graph Representations

A single adjacency-list representation [`WeightedGraph`] backs both directed and undirected
graphs; the orientation is a runtime tag chosen at construction. The storage of each
neighborhood is pluggable via the [`Neighborhood`] trait:

- [`ArrNeighborhood`] stores neighbors in a `Vec`,
- [`SparseNeighborhood`] stores up to `N` neighbors inline (`SmallVec`).

[`Graph`] is the default choice and uses sparse neighborhoods.
*/

use crate::{ops::*, *};

mod graph;
mod neighborhood;

pub use graph::*;
pub use neighborhood::*;

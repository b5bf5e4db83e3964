/*!
# Graph Synthesis

This module provides a randomized graph synthesizer that builds graphs with guaranteed
structural properties, together with the building blocks it is made of.

A [`GraphBuilder`] is an immutable configuration: the number of nodes, the directedness and an
ordered list of [`Transform`]s. Every configuration method consumes the builder and returns a
new one, so a builder can be cloned and branched freely. [`GraphBuilder::build`] starts from
isolated nodes and applies the transforms in order; every step works on a fresh snapshot of the
graph produced by the previous step.

The typical usage workflow is:

1. Create a builder (`GraphBuilder::new()`).
2. Configure it (e.g. `.nodes(20).directed().strongly_connected(true).weighted(-3..10)`).
3. Materialize it with `build(&mut rng)` as often as needed.

# Example

```rust
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use wgraphs::{prelude::*, algo::*, gens::*};

let rng = &mut Pcg64Mcg::seed_from_u64(3);
let builder = GraphBuilder::new()
    .nodes(12)
    .directed()
    .strongly_connected(true)
    .random_edges(0.1, true)
    .weighted(-4..10)
    .remove_negative_cycles();

let graph = builder.build(rng).unwrap();
assert!(graph.is_strongly_connected());
assert!(graph.find_negative_cycle().is_none());
```

The individual transforms are also available as traits on every suitable graph
(e.g. [`RandomEdges`], [`RandomSubstructures`], [`NegativeCycleRepair`]).
*/

use std::ops::Range;

use rand::Rng;
use tracing::{debug, instrument, trace};

use crate::{error::Result, prelude::*};

mod negative_cycles;
mod random_edges;
mod spanning_tree;
mod strongly_connected;
mod substructures;
mod weights;

pub use negative_cycles::*;
pub use random_edges::*;
pub use spanning_tree::*;
pub use strongly_connected::*;
pub use substructures::*;
pub use weights::*;

/// A single step of a [`GraphBuilder`] pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// See [`RandomEdges::add_random_edges`]
    RandomEdges { p: f64, allow_reverse: bool },
    /// See [`RandomEdges::complete`]
    Complete,
    /// See [`RandomSubstructures::add_random_clique`]
    Clique { size: NumNodes, add_new_nodes: bool },
    /// See [`RandomSpanningTree::connect_components`]
    Connected,
    /// See [`StronglyConnectedConstruction::make_strongly_connected`]
    StronglyConnected { allow_back_edges: bool },
    /// See [`RandomSpanningTree::add_random_spanning_tree`]
    SpanningTree,
    /// See [`RandomWeights::assign_random_weights`]
    Weighted { range: Range<Weight> },
    /// See [`RandomSubstructures::add_random_cycle`]
    Cycle {
        length: NumNodes,
        add_new_nodes: bool,
        negative_weight: bool,
    },
    /// See [`NegativeCycleRepair::remove_negative_cycles`]
    RemoveNegativeCycles,
}

impl Transform {
    /// Applies the transform to `graph` in place
    pub fn apply<R: Rng>(&self, graph: &mut Graph, rng: &mut R) -> Result<()> {
        match self {
            Transform::RandomEdges { p, allow_reverse } => {
                graph.add_random_edges(rng, *p, *allow_reverse)?;
            }
            Transform::Complete => graph.complete(),
            Transform::Clique {
                size,
                add_new_nodes,
            } => {
                graph.add_random_clique(rng, *size, *add_new_nodes)?;
            }
            Transform::Connected => graph.connect_components(rng),
            Transform::StronglyConnected { allow_back_edges } => {
                graph.make_strongly_connected(rng, *allow_back_edges)?;
            }
            Transform::SpanningTree => {
                graph.add_random_spanning_tree(rng);
            }
            Transform::Weighted { range } => {
                graph.assign_random_weights(rng, range.clone())?;
            }
            Transform::Cycle {
                length,
                add_new_nodes,
                negative_weight,
            } => {
                graph.add_random_cycle(rng, *length, *add_new_nodes, *negative_weight)?;
            }
            Transform::RemoveNegativeCycles => {
                graph.remove_negative_cycles();
            }
        }

        Ok(())
    }
}

/// Immutable configuration of a random graph using the *Builder* pattern.
///
/// Defaults to an undirected graph without nodes and without transforms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphBuilder {
    n: NumNodes,
    directed: bool,
    transforms: Vec<Transform>,
}

impl GraphBuilder {
    /// Creates an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of initially isolated nodes
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Builds directed graphs
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Builds undirected graphs
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    /// Appends an arbitrary transform
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Appends [`Transform::RandomEdges`]
    pub fn random_edges(self, p: f64, allow_reverse: bool) -> Self {
        self.transform(Transform::RandomEdges { p, allow_reverse })
    }

    /// Appends [`Transform::Complete`]
    pub fn complete(self) -> Self {
        self.transform(Transform::Complete)
    }

    /// Appends [`Transform::Clique`]
    pub fn clique(self, size: NumNodes, add_new_nodes: bool) -> Self {
        self.transform(Transform::Clique {
            size,
            add_new_nodes,
        })
    }

    /// Appends [`Transform::Connected`]
    pub fn connected(self) -> Self {
        self.transform(Transform::Connected)
    }

    /// Appends [`Transform::StronglyConnected`]
    pub fn strongly_connected(self, allow_back_edges: bool) -> Self {
        self.transform(Transform::StronglyConnected { allow_back_edges })
    }

    /// Appends [`Transform::SpanningTree`]
    pub fn spanning_tree(self) -> Self {
        self.transform(Transform::SpanningTree)
    }

    /// Appends [`Transform::Weighted`]
    pub fn weighted(self, range: Range<Weight>) -> Self {
        self.transform(Transform::Weighted { range })
    }

    /// Appends [`Transform::Cycle`]
    pub fn cycle(self, length: NumNodes, add_new_nodes: bool, negative_weight: bool) -> Self {
        self.transform(Transform::Cycle {
            length,
            add_new_nodes,
            negative_weight,
        })
    }

    /// Appends [`Transform::RemoveNegativeCycles`]
    pub fn remove_negative_cycles(self) -> Self {
        self.transform(Transform::RemoveNegativeCycles)
    }

    /// Number of initial nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns *true* if directed graphs are built
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The configured transforms in order of application
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Materializes the configuration: starts with isolated nodes and applies all transforms
    /// in order, each on a fresh snapshot of the previous graph.
    /// The first failing transform aborts the build.
    #[instrument(
        level = "debug",
        skip(self, rng),
        fields(n = self.n, directed = self.directed, steps = self.transforms.len())
    )]
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<Graph> {
        let mut graph = Graph::new(self.n, self.directed);

        for (step, transform) in self.transforms.iter().enumerate() {
            let mut next = graph.clone();
            transform.apply(&mut next, rng)?;
            trace!(step, ?transform, n = next.number_of_nodes(), m = next.number_of_edges());
            graph = next;
        }

        debug!(n = graph.number_of_nodes(), m = graph.number_of_edges(), "graph built");
        Ok(graph)
    }
}

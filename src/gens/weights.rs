/*!
# Random Weights

Assigns uniformly distributed weights to edges that carry none.
*/

use std::ops::Range;

use itertools::Itertools;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::*;

/// Random edge weights as a method on the graph itself
pub trait RandomWeights: AdjacencyList + GraphEdgeEditing {
    /// Draws a weight uniformly from `range` for every edge without a weight;
    /// existing weights are kept.
    /// Fails with [`GraphError::EmptyWeightRange`] if `range` is empty.
    fn assign_random_weights<R: Rng>(&mut self, rng: &mut R, range: Range<Weight>) -> Result<()> {
        let distr = Uniform::new(range.start, range.end).map_err(|_| GraphError::EmptyWeightRange)?;

        let unweighted = self
            .edges()
            .filter(|e| e.weight.is_none())
            .map(|e| e.edge)
            .collect_vec();

        for Edge(u, v) in unweighted {
            self.set_weight(u, v, Some(distr.sample(rng)));
        }

        Ok(())
    }
}

impl<G> RandomWeights for G where G: AdjacencyList + GraphEdgeEditing {}

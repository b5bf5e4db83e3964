/*!
# Negative Cycle Repair

Raises edge weights until no negative cycle is reachable from any node. Every repair adds the
negated total weight of a detected cycle to one of its edges, preferring an edge with
non-negative weight, so the repaired cycle weighs exactly zero afterwards.

Weights only ever increase, thus the total weight of any cycle never decreases and every
detected (simple) cycle is repaired at most once.
*/

use tracing::{debug, instrument};

use super::*;
use crate::algo::ShortestPaths;

/// Negative cycle repair as a method on the graph itself
pub trait NegativeCycleRepair: AdjacencyList + WeightedAdjacency + GraphEdgeEditing + GraphEdgeOrder {
    /// Repairs negative cycles until none is left and returns the number of repairs.
    ///
    /// **The graph is modified in place**; clone it beforehand if the original is still needed.
    #[instrument(
        level = "debug",
        skip(self),
        fields(n = self.number_of_nodes(), m = self.number_of_edges())
    )]
    fn remove_negative_cycles(&mut self) -> usize {
        let mut repairs = 0;

        while let Some(negative_cycle) = self.find_negative_cycle() {
            let cycle = negative_cycle.cycle();
            let total = cycle.total_weight(&*self);
            debug_assert!(total < 0);

            let edges = negative_cycle.edges();
            let Edge(u, v) = edges
                .iter()
                .copied()
                .find(|&Edge(u, v)| self.cost_of(u, v).unwrap() >= 0)
                .unwrap_or(edges[0]);

            let weight = self.cost_of(u, v).unwrap() - total;
            debug!(%cycle, total, edge = %Edge(u, v), weight, "repairing negative cycle");
            self.set_weight(u, v, Some(weight));

            repairs += 1;
        }

        repairs
    }
}

impl<G> NegativeCycleRepair for G where G: AdjacencyList + WeightedAdjacency + GraphEdgeEditing + GraphEdgeOrder {}

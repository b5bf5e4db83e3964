/*!
Edge-betweenness centrality following Brandes' algorithm.

The betweenness of an edge is the fraction of shortest paths (in number of hops) between all
ordered pairs of distinct nodes that pass through it, normalized by `1 / (n(n-1))`.
Undirected edges are scored under their normalized orientation, directed edges as stored.
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// Relative tolerance used to decide whether two scores are tied
pub const CENTRALITY_TOLERANCE: f64 = 1e-9;

/// Betweenness score of every edge of a graph
#[derive(Clone, Debug, Default)]
pub struct EdgeCentrality {
    scores: FxHashMap<Edge, f64>,
    directed: bool,
}

impl EdgeCentrality {
    fn key(&self, e: Edge) -> Edge {
        if self.directed { e } else { e.normalized() }
    }

    /// Returns the score of an edge or `None` if the edge was not part of the graph.
    /// For undirected graphs both orientations are accepted.
    pub fn score(&self, e: impl Into<Edge>) -> Option<f64> {
        self.scores.get(&self.key(e.into())).copied()
    }

    /// Returns the maximum score or `None` if there are no edges
    pub fn max(&self) -> Option<f64> {
        self.scores.values().copied().reduce(f64::max)
    }

    /// Returns all edges (sorted) whose score is within the relative `tolerance` of the maximum
    pub fn argmax_all(&self, tolerance: f64) -> Vec<Edge> {
        let Some(max) = self.max() else {
            return Vec::new();
        };

        self.scores
            .iter()
            .filter(|&(_, &score)| max - score <= tolerance * max.abs())
            .map(|(&e, _)| e)
            .sorted()
            .collect()
    }

    /// Iterates over all edges and their scores in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        self.scores.iter().map(|(&e, &score)| (e, score))
    }

    /// Number of scored edges
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns *true* if no edge was scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Edge-betweenness centrality as a method on the graph itself
pub trait EdgeBetweenness: AdjacencyList + Sized {
    /// Computes the edge-betweenness of every edge in `O(nm)`.
    /// Edge weights are ignored; path lengths are measured in hops.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, false, [(0, 1), (1, 2)]);
    /// let centrality = g.edge_betweenness();
    /// assert!((centrality.score((1, 0)).unwrap() - 4.0 / 6.0).abs() < 1e-12);
    /// ```
    fn edge_betweenness(&self) -> EdgeCentrality {
        let n = self.len();
        let mut centrality = EdgeCentrality {
            scores: self.edges().map(|e| (e.edge, 0.0)).collect(),
            directed: self.is_directed(),
        };

        let mut order = Vec::with_capacity(n);
        let mut queue = VecDeque::with_capacity(n);
        let mut predecessors: Vec<Vec<Node>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0f64; n];
        let mut delta = vec![0.0f64; n];
        let mut depth: Vec<Option<Node>> = vec![None; n];

        for s in self.vertices() {
            predecessors.iter_mut().for_each(Vec::clear);
            sigma.fill(0.0);
            delta.fill(0.0);
            depth.fill(None);

            sigma[s as usize] = 1.0;
            depth[s as usize] = Some(0);
            queue.push_back(s);

            // count shortest paths from `s` layer by layer
            while let Some(u) = queue.pop_front() {
                order.push(u);
                let du = depth[u as usize].unwrap();

                for v in self.neighbors_of(u) {
                    if depth[v as usize].is_none() {
                        depth[v as usize] = Some(du + 1);
                        queue.push_back(v);
                    }

                    if depth[v as usize] == Some(du + 1) {
                        sigma[v as usize] += sigma[u as usize];
                        predecessors[v as usize].push(u);
                    }
                }
            }

            // accumulate dependencies in reverse order of discovery
            while let Some(w) = order.pop() {
                let coeff = (1.0 + delta[w as usize]) / sigma[w as usize];
                for &v in &predecessors[w as usize] {
                    let contribution = sigma[v as usize] * coeff;
                    let key = centrality.key(Edge(v, w));
                    *centrality.scores.get_mut(&key).unwrap() += contribution;
                    delta[v as usize] += contribution;
                }
            }
        }

        if n > 1 {
            let scale = 1.0 / (n as f64 * (n as f64 - 1.0));
            centrality.scores.values_mut().for_each(|x| *x *= scale);
        }

        centrality
    }
}

impl<G: AdjacencyList + Sized> EdgeBetweenness for G {}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{brute_force_edge_betweenness, random_graph};

    fn assert_matches_brute_force(graph: &Graph) {
        let centrality = graph.edge_betweenness();
        let reference = brute_force_edge_betweenness(graph);

        assert_eq!(centrality.len(), reference.len());
        for (e, score) in reference {
            let computed = centrality.score(e).unwrap();
            assert!(
                (computed - score).abs() < 1e-9,
                "edge {e}: brandes {computed} vs brute force {score}"
            );
        }
    }

    #[test]
    fn path() {
        let graph = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
        let centrality = graph.edge_betweenness();

        // (0,1) lies on paths between 0 and {1,2,3} in both directions
        assert!((centrality.score((0, 1)).unwrap() - 6.0 / 12.0).abs() < 1e-12);
        assert!((centrality.score((2, 1)).unwrap() - 8.0 / 12.0).abs() < 1e-12);
        assert_eq!(centrality.argmax_all(CENTRALITY_TOLERANCE), vec![Edge(1, 2)]);
        assert_eq!(centrality.score((0, 2)), None);
    }

    #[test]
    fn directed_edges_are_scored_as_stored() {
        let graph = Graph::from_edges(3, true, [(0, 1), (1, 2), (2, 0)]);
        let centrality = graph.edge_betweenness();

        // each edge carries 3 of the 6 ordered pairs
        for e in [(0, 1), (1, 2), (2, 0)] {
            assert!((centrality.score(e).unwrap() - 0.5).abs() < 1e-12);
        }
        assert_eq!(centrality.score((1, 0)), None);
        assert_eq!(centrality.argmax_all(CENTRALITY_TOLERANCE).len(), 3);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new_undirected(3);
        let centrality = graph.edge_betweenness();
        assert!(centrality.is_empty());
        assert_eq!(centrality.max(), None);
        assert!(centrality.argmax_all(CENTRALITY_TOLERANCE).is_empty());
    }

    #[test]
    fn matches_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for directed in [false, true] {
            for _ in 0..30 {
                let n = rng.random_range(2..16);
                let p = rng.random_range(0.1..0.6);
                let mut graph = random_graph(rng, n, p, directed);
                if rng.random_bool(0.2) {
                    graph.try_add_edge(0, 0);
                }
                assert_matches_brute_force(&graph);
            }
        }
    }
}

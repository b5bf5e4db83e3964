/*!
# Random Edges

Adds every missing edge between distinct nodes independently with probability `p`
(a `G(n,p)` model on top of the current graph). Node pairs are enumerated as ordered pairs for
directed and as unordered pairs for undirected graphs, so loops are never added.
*/

use rand::Rng;

use super::*;
use crate::utils::Probability;

/// Random and complete edge sets as methods on the graph itself
pub trait RandomEdges: AdjacencyTest + GraphEdgeEditing + GraphType {
    /// Adds each missing edge `(u, v)` with `u != v` with probability `p`.
    ///
    /// If `allow_reverse` is *false* and the graph is directed, `(u, v)` is skipped
    /// whenever `(v, u)` exists at that moment, so no antiparallel pairs are created.
    /// Fails with [`GraphError::InvalidProbability`] if `p` is not within `[0, 1]`.
    fn add_random_edges<R: Rng>(&mut self, rng: &mut R, p: f64, allow_reverse: bool) -> Result<()> {
        if !p.is_valid_probability() {
            return Err(GraphError::InvalidProbability(p));
        }

        let directed = self.is_directed();
        let n = self.number_of_nodes();
        for u in 0..n {
            for v in (if directed { 0 } else { u + 1 })..n {
                if u == v || self.has_edge(u, v) {
                    continue;
                }

                if directed && !allow_reverse && self.has_edge(v, u) {
                    continue;
                }

                if rng.random_bool(p) {
                    self.add_edge(u, v);
                }
            }
        }

        Ok(())
    }

    /// Adds every missing edge between distinct nodes
    fn complete(&mut self) {
        let n = self.number_of_nodes();
        for u in 0..n {
            for v in 0..n {
                if u != v && (self.is_directed() || u < v) {
                    self.try_add_edge(u, v);
                }
            }
        }
    }
}

impl<G> RandomEdges for G where G: AdjacencyTest + GraphEdgeEditing + GraphType {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn invalid_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let mut graph = Graph::new_directed(4);
        assert_eq!(
            graph.add_random_edges(rng, 1.5, true),
            Err(GraphError::InvalidProbability(1.5))
        );
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        let mut graph = Graph::new_undirected(6);
        graph.add_random_edges(rng, 0.0, true).unwrap();
        assert!(graph.is_singleton_graph());

        graph.add_random_edges(rng, 1.0, true).unwrap();
        assert_eq!(graph.number_of_edges(), 15);

        let mut graph = Graph::new_directed(6);
        graph.add_random_edges(rng, 1.0, true).unwrap();
        assert_eq!(graph.number_of_edges(), 30);
        assert!(graph.vertices().all(|u| !graph.has_edge(u, u)));
    }

    #[test]
    fn without_reverse_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let mut graph = Graph::new_directed(10);
        graph.add_random_edges(rng, 1.0, false).unwrap();
        assert_eq!(graph.number_of_edges(), 45);

        let mut graph = Graph::from_edges(10, true, [(3, 1), (5, 2)]);
        graph.add_random_edges(rng, 0.7, false).unwrap();
        assert!(graph.edges().all(|e| !graph.has_edge(e.target(), e.source())));
        assert!(graph.has_edge(3, 1) && !graph.has_edge(1, 3));
    }

    #[test]
    fn existing_edges_are_kept() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        let mut graph = Graph::from_edges(5, true, [(0, 1, -3), (2, 2, 4)]);
        graph.add_random_edges(rng, 0.5, true).unwrap();
        assert_eq!(graph.weight_of(0, 1), Some(Some(-3)));
        assert_eq!(graph.weight_of(2, 2), Some(Some(4)));

        graph.complete();
        assert_eq!(graph.number_of_edges(), 21);
        assert_eq!(graph.weight_of(0, 1), Some(Some(-3)));
    }
}

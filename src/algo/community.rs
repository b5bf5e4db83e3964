/*!
Community detection by iteratively deleting the edges of maximum betweenness (Girvan-Newman).

Only the first split is computed: edges are removed until the graph falls apart into more
than one (weakly) connected component, and these components are the communities.
*/

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use super::*;

/// Result of [`GirvanNewman::girvan_newman`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommunitySplit {
    /// Partition of all nodes; every community is sorted and communities are ordered by their first node
    pub communities: Vec<Vec<Node>>,
    /// Edges left in the graph after the split (only if requested)
    pub surviving_edges: Option<Vec<WeightedEdge>>,
}

impl CommunitySplit {
    /// Number of communities
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    /// Returns *true* if the graph had no nodes
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    /// Returns the index of the community containing `u`
    pub fn community_of(&self, u: Node) -> Option<usize> {
        self.communities
            .iter()
            .position(|community| community.binary_search(&u).is_ok())
    }
}

/// Girvan-Newman community detection as a method on the graph itself
pub trait GirvanNewman: DirectedAdjacencyList + GraphEdgeEditing + GraphEdgeOrder + Sized {
    /// Removes all edges tied for the maximum edge-betweenness until the graph has more than one
    /// connected component and returns these components.
    ///
    /// **The graph is modified in place**; clone it beforehand if the original is still needed.
    /// A graph that is already disconnected (or has no edges left) is returned as is.
    /// If `keep_edges` is set, the edges remaining after the split are returned as well.
    #[instrument(
        level = "debug",
        skip(self),
        fields(n = self.number_of_nodes(), m = self.number_of_edges())
    )]
    fn girvan_newman(&mut self, keep_edges: bool) -> CommunitySplit {
        let mut components = self.connected_components().collect_vec();
        let mut round = 0;

        while components.len() == 1 && !self.is_singleton_graph() {
            let centrality = self.edge_betweenness();
            let removed = centrality.argmax_all(CENTRALITY_TOLERANCE);
            debug!(
                round,
                removed = removed.len(),
                max = ?centrality.max(),
                "removing edges of maximum betweenness"
            );
            trace!(?removed);

            self.remove_edges(removed);
            components = self.connected_components().collect_vec();
            round += 1;
        }

        debug!(rounds = round, communities = components.len(), "graph split");

        CommunitySplit {
            communities: sort_components(components),
            surviving_edges: keep_edges.then(|| self.ordered_edges()),
        }
    }
}

impl<G> GirvanNewman for G where G: DirectedAdjacencyList + GraphEdgeEditing + GraphEdgeOrder + Sized {}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_graph;

    fn assert_partition(split: &CommunitySplit, n: NumNodes) {
        let all = split.communities.iter().flatten().copied().sorted().collect_vec();
        assert_eq!(all, (0..n).collect_vec());
    }

    #[test]
    fn two_triangles() {
        let mut graph = Graph::from_edges(
            6,
            false,
            [(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 4, 1), (4, 5, 1), (5, 3, 1), (2, 3, 9)],
        );
        let original = graph.clone();

        let split = graph.girvan_newman(true);
        assert_eq!(split.communities, vec![vec![0, 1, 2], vec![3, 4, 5]]);
        assert_eq!(split.community_of(4), Some(1));

        let surviving = split.surviving_edges.unwrap();
        assert_eq!(surviving.len(), 6);
        assert!(surviving.iter().all(|e| e.weight == Some(1)));

        // the bridge was removed from the graph, but not from the clone
        assert!(!graph.has_edge(2, 3));
        assert_eq!(graph.number_of_edges(), 6);
        assert!(original.has_edge(2, 3));
        assert_eq!(original.number_of_edges(), 7);
    }

    #[test]
    fn ties_are_removed_together() {
        // all edges of a cycle share the same betweenness
        let mut graph = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let split = graph.girvan_newman(true);

        assert_eq!(split.len(), 4);
        assert_eq!(split.surviving_edges, Some(Vec::new()));
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn disconnected_graph_is_untouched() {
        let mut graph = Graph::from_edges(4, false, [(0, 1), (2, 3)]);
        let split = graph.girvan_newman(false);

        assert_eq!(split.communities, vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(split.surviving_edges, None);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn trivial_graphs() {
        let mut graph = Graph::new_undirected(0);
        assert!(graph.girvan_newman(false).is_empty());

        let mut graph = Graph::from_edges(1, true, [(0, 0)]);
        let split = graph.girvan_newman(true);
        assert_eq!(split.communities, vec![vec![0]]);
        assert_eq!(split.surviving_edges, Some(Vec::new()));
    }

    #[test]
    fn random_graphs_split() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for directed in [false, true] {
            for _ in 0..30 {
                let n = rng.random_range(2..20);
                let p = rng.random_range(0.1..0.7);
                let mut graph = random_graph(rng, n, p, directed);
                let before = graph.number_of_connected_components();
                let m = graph.number_of_edges();

                let split = graph.clone().girvan_newman(false);
                assert_partition(&split, n);

                if before == 1 {
                    assert!(split.len() > 1);
                } else {
                    assert_eq!(split.len() as NumNodes, before);
                }

                let split_with_edges = graph.girvan_newman(true);
                assert_eq!(split_with_edges.communities, split.communities);
                assert_eq!(split_with_edges.surviving_edges, Some(graph.ordered_edges()));
                assert!(graph.number_of_edges() <= m);
            }
        }
    }
}

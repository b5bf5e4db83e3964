//! Shared test utilities: a macro exercising the graph operation traits of a representation
//! and reference algorithms the optimized implementations are compared against.

use std::{cmp::Reverse, collections::BinaryHeap, ops::Range};

use fxhash::FxHashMap;
use rand::Rng;

use crate::{prelude::*, utils::DisjointSet};

/// Every graph should implement the basic operation traits consistently
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        mod $env {
            use super::*;
            use crate::testing::test_graph_ops;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random (partially weighted) edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<WeightedEdge> {
                let mut edges: Vec<WeightedEdge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let weight = rng.random_bool(0.5).then(|| rng.random_range(-5..10));

                    if $undirected {
                        Edge(u, v).normalized().with_weight(weight)
                    } else {
                        Edge(u, v).with_weight(weight)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup_by_key(|e| e.edge);

                edges
            }

            fn adjacency_matrix(n: NumNodes, edges: &[WeightedEdge], reverse: bool) -> Vec<NodeBitSet> {
                let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                for e in edges {
                    let Edge(u, v) = if reverse { e.edge.reverse() } else { e.edge };
                    adj_matrix[u as usize].set_bit(v);

                    if $undirected {
                        adj_matrix[v as usize].set_bit(u);
                    }
                }
                adj_matrix
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n, !$undirected);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_directed(), !$undirected);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.max_degree(), 0);
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphNodeEditing) => {
        #[test]
        fn graph_node_editing() {
            let mut graph = <$graph>::new(3, !$undirected);
            graph.add_edge(0, 2);

            assert_eq!(graph.add_node(), 3);
            assert_eq!(graph.add_nodes(4), 4..8);
            assert_eq!(graph.number_of_nodes(), 8);

            graph.add_edge(7, 3);
            assert!(graph.has_edge(0, 2));
            assert!(graph.has_edge(7, 3));
            assert_eq!(graph.number_of_edges(), 2);
            assert_eq!(graph.degree_of(5), 0);
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let adj_matrix = adjacency_matrix(n, &edges, false);

                        let graph = <$graph>::from_edges(n, !$undirected, edges.clone());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.ordered_edges(), edges);

                        for u in 0..n {
                            assert_eq!(
                                NodeBitSet::new_with_bits_set(n, graph.neighbors_of(u)),
                                adj_matrix[u as usize]
                            );
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                        }

                        let loops = edges.iter().filter(|e| e.edge.is_loop()).count();
                        let expected_arcs = if $undirected { 2 * edges.len() - loops } else { edges.len() };
                        assert_eq!(graph.arcs().count(), expected_arcs);
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let adj_matrix_in = adjacency_matrix(n, &edges, true);

                        let graph = <$graph>::from_edges(n, !$undirected, edges);

                        for u in 0..n {
                            assert_eq!(
                                NodeBitSet::new_with_bits_set(n, graph.in_neighbors_of(u)),
                                adj_matrix_in[u as usize]
                            );
                            assert_eq!(graph.in_degree_of(u), adj_matrix_in[u as usize].cardinality());
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: WeightedAdjacency) => {
        #[test]
        fn test_weighted_adjacency() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20] {
                let edges = random_edges(rng, n, 3 * n);
                let mut graph = <$graph>::from_edges(n, !$undirected, edges.clone());

                for e in &edges {
                    let Edge(u, v) = e.edge;
                    assert_eq!(graph.weight_of(u, v), Some(e.weight));
                    assert_eq!(graph.cost_of(u, v), Some(e.cost()));
                    if $undirected {
                        assert_eq!(graph.weight_of(v, u), Some(e.weight));
                    }

                    assert!(graph.set_weight(u, v, Some(42)));
                    assert_eq!(graph.weight_of(v, u).is_some(), graph.has_edge(v, u));
                    if $undirected {
                        assert_eq!(graph.weight_of(v, u), Some(Some(42)));
                    }
                }

                assert!(graph.edges().all(|e| e.weight == Some(42)));

                let absent = graph.vertices().cartesian_product(graph.vertices()).find(|&(u, v)| !graph.has_edge(u, v));
                if let Some((u, v)) = absent {
                    assert_eq!(graph.weight_of(u, v), None);
                    assert!(!graph.set_weight(u, v, Some(1)));
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n, !$undirected);
                        let mut adj_matrix = adjacency_matrix(n, &edges, false);

                        for e in &edges {
                            assert!(!graph.try_add_weighted_edge(e.source(), e.target(), e.weight));
                            assert!(graph.try_add_weighted_edge(e.source(), e.target(), Some(0)));
                            if $undirected {
                                assert!(graph.try_add_edge(e.target(), e.source()));
                            }
                        }
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if adj_matrix[u as usize].clear_bit(v) {
                                assert!(graph.try_remove_edge(u, v).is_some());
                                m -= 1;

                                if $undirected && u != v {
                                    assert!(adj_matrix[v as usize].clear_bit(u));
                                }
                            } else {
                                assert!(graph.try_remove_edge(u, v).is_none());
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        let remaining = graph.edges().map(|e| e.edge).collect_vec();
                        assert_eq!(remaining.len() as NumEdges, m);
                        graph.remove_edges(remaining);
                        assert!(graph.is_singleton_graph());
                        assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Creates a random graph on `n` nodes without loops where each possible edge
/// exists independently with probability `p`
pub fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Graph {
    let mut graph = Graph::new(n, directed);
    for u in 0..n {
        for v in 0..n {
            if u != v && (directed || u < v) && rng.random_bool(p) {
                graph.add_edge(u, v);
            }
        }
    }
    graph
}

/// Like [`random_graph`] but every edge carries a weight drawn uniformly from `weights`
pub fn random_weighted_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    directed: bool,
    weights: Range<Weight>,
) -> Graph {
    let mut graph = random_graph(rng, n, p, directed);
    for e in graph.ordered_edges() {
        graph.set_weight(e.source(), e.target(), Some(rng.random_range(weights.clone())));
    }
    graph
}

/// Textbook Dijkstra for non-negative costs; `None` marks unreachable nodes
pub fn dijkstra<G: AdjacencyList>(graph: &G, source: Node) -> Vec<Option<Weight>> {
    let mut distances = vec![None; graph.len()];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if distances[u as usize].is_some() {
            continue;
        }
        distances[u as usize] = Some(d);

        for e in graph.arcs_of(u) {
            assert!(e.cost() >= 0);
            if distances[e.target() as usize].is_none() {
                heap.push(Reverse((d + e.cost(), e.target())));
            }
        }
    }

    distances
}

/// Edge betweenness by counting, for every ordered pair `(s, t)`, the fraction of shortest
/// `s-t` paths (in hops) that use each arc. Undirected edges are keyed by their normalized
/// orientation. Scores are scaled by `1 / (n(n-1))`.
pub fn brute_force_edge_betweenness<G: AdjacencyList>(graph: &G) -> FxHashMap<Edge, f64> {
    let n = graph.len();

    // hop distances and shortest path counts between all pairs
    let mut dist = vec![vec![None; n]; n];
    let mut sigma = vec![vec![0.0f64; n]; n];
    for s in graph.vertices() {
        let mut layer = vec![s];
        dist[s as usize][s as usize] = Some(0usize);
        sigma[s as usize][s as usize] = 1.0;

        let mut depth = 0;
        while !layer.is_empty() {
            depth += 1;
            let mut next = Vec::new();
            for &u in &layer {
                for v in graph.neighbors_of(u) {
                    match dist[s as usize][v as usize] {
                        None => {
                            dist[s as usize][v as usize] = Some(depth);
                            sigma[s as usize][v as usize] += sigma[s as usize][u as usize];
                            next.push(v);
                        }
                        Some(d) if d == depth => {
                            sigma[s as usize][v as usize] += sigma[s as usize][u as usize];
                        }
                        _ => {}
                    }
                }
            }
            layer = next;
        }
    }

    let mut scores = FxHashMap::default();
    for e in graph.edges() {
        scores.insert(e.edge, 0.0);
    }

    for s in 0..n {
        for t in (0..n).filter(|&t| t != s) {
            let Some(d_st) = dist[s][t] else {
                continue;
            };

            for e in graph.arcs() {
                let (u, v) = (e.source() as usize, e.target() as usize);
                if u == v {
                    continue;
                }
                let on_shortest_path = match (dist[s][u], dist[v][t]) {
                    (Some(d_su), Some(d_vt)) => d_su + 1 + d_vt == d_st,
                    _ => false,
                };
                if on_shortest_path {
                    let key = if graph.is_directed() { e.edge } else { e.edge.normalized() };
                    *scores.get_mut(&key).unwrap() += sigma[s][u] * sigma[v][t] / sigma[s][t];
                }
            }
        }
    }

    if n > 1 {
        let scale = 1.0 / (n * (n - 1)) as f64;
        scores.values_mut().for_each(|x| *x *= scale);
    }

    scores
}

/// Kruskal's algorithm on the underlying undirected graph; returns the total cost
/// of a minimum spanning forest
pub fn kruskal_weight<G: AdjacencyList>(graph: &G) -> Weight {
    let mut edges = graph.edges().collect::<Vec<_>>();
    edges.sort_by_key(|e| e.cost());

    let mut sets = DisjointSet::new(graph.number_of_nodes());
    edges
        .into_iter()
        .filter(|e| sets.union(e.source(), e.target()))
        .map(|e| e.cost())
        .sum()
}

/// Installs a fmt subscriber writing every event to the test output;
/// later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

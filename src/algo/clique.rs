/*!
Randomized approximation of a maximum clique and a maximum independent set (Ramsey pivoting).

A random pivot `v` splits the candidates into its neighbors and its non-neighbors. A clique of
the neighbors extended by `v` is a clique, an independent set of the non-neighbors extended by `v`
is independent; the larger candidates of both branches are kept. Only structural validity of the
returned sets is guaranteed, not optimality.

On directed graphs two nodes count as adjacent if edges in both directions exist and as
non-adjacent if neither exists; a node with an edge in only one direction to the pivot is
dropped from both branches.
*/

use rand::Rng;

use super::*;

/// A clique and an independent set of the same graph; both are sorted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliqueIndependentSet {
    pub clique: Vec<Node>,
    pub independent_set: Vec<Node>,
}

enum Task {
    Solve(Vec<Node>),
    Combine(Node),
}

/// Clique / independent set approximation and verification as methods on the graph itself
pub trait CliqueApproximation: DirectedAdjacencyList + AdjacencyTest + Sized {
    /// Approximates a maximum clique and a maximum independent set simultaneously.
    /// The subproblems are processed with an explicit work stack, so deep pivot chains do not
    /// exhaust the call stack.
    fn approximate_clique_and_independent_set<R: Rng>(&self, rng: &mut R) -> CliqueIndependentSet {
        let mut tasks = vec![Task::Solve(self.vertices().collect())];
        let mut results: Vec<(Vec<Node>, Vec<Node>)> = Vec::new();

        let mut out_nbs = self.vertex_bitset_unset();
        let mut in_nbs = self.vertex_bitset_unset();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Solve(mut nodes) => {
                    if nodes.is_empty() {
                        results.push((Vec::new(), Vec::new()));
                        continue;
                    }

                    let pivot = nodes.swap_remove(rng.random_range(0..nodes.len()));

                    out_nbs.clear_all();
                    in_nbs.clear_all();
                    for v in self.neighbors_of(pivot) {
                        out_nbs.set_bit(v);
                    }
                    if self.is_directed() {
                        for v in self.in_neighbors_of(pivot) {
                            in_nbs.set_bit(v);
                        }
                    } else {
                        for v in self.neighbors_of(pivot) {
                            in_nbs.set_bit(v);
                        }
                    }

                    let mut adjacent = Vec::new();
                    let mut non_adjacent = Vec::new();
                    for u in nodes {
                        match (out_nbs.get_bit(u), in_nbs.get_bit(u)) {
                            (true, true) => adjacent.push(u),
                            (false, false) => non_adjacent.push(u),
                            _ => {}
                        }
                    }

                    tasks.push(Task::Combine(pivot));
                    tasks.push(Task::Solve(non_adjacent));
                    tasks.push(Task::Solve(adjacent));
                }
                Task::Combine(pivot) => {
                    let (c2, mut i2) = results.pop().unwrap();
                    let (mut c1, i1) = results.pop().unwrap();

                    let clique = if c1.len() + 1 >= c2.len() {
                        c1.push(pivot);
                        c1
                    } else {
                        c2
                    };

                    let independent_set = if i2.len() + 1 >= i1.len() {
                        i2.push(pivot);
                        i2
                    } else {
                        i1
                    };

                    results.push((clique, independent_set));
                }
            }
        }

        let (mut clique, mut independent_set) = results.pop().unwrap();
        debug_assert!(results.is_empty());

        clique.sort_unstable();
        independent_set.sort_unstable();
        CliqueIndependentSet {
            clique,
            independent_set,
        }
    }

    /// Returns *true* if all distinct pairs of `nodes` are adjacent
    /// (in both directions for directed graphs)
    fn is_clique(&self, nodes: &[Node]) -> bool {
        nodes.iter().enumerate().all(|(i, &u)| {
            nodes[i + 1..]
                .iter()
                .all(|&v| u == v || self.has_bidirected_edge(u, v))
        })
    }

    /// Returns *true* if no two distinct nodes of `nodes` are connected by an edge
    fn is_independent_set(&self, nodes: &[Node]) -> bool {
        nodes.iter().enumerate().all(|(i, &u)| {
            nodes[i + 1..]
                .iter()
                .all(|&v| u == v || !self.has_any_edge(u, v))
        })
    }
}

impl<G> CliqueApproximation for G where G: DirectedAdjacencyList + AdjacencyTest + Sized {}

/*!
Single-source shortest paths with negative edge weights (Bellman-Ford).

The outcome is a tagged result: either a [`ShortestPathTree`] or a [`NegativeCycle`]
reachable from the source. For undirected graphs every edge is relaxed in both
orientations, hence a negative undirected edge already forms a negative cycle `(u, v)`.
*/

use std::fmt::Display;

use thiserror::Error;

use super::*;

/// A simple cycle given by its nodes in traversal order.
///
/// Two cycles are equal iff they induce the same successor relation, i.e. equality
/// is invariant under rotation: `(0, 1, 2) == (1, 2, 0) != (0, 2, 1)`.
#[derive(Clone, Debug)]
pub struct Cycle {
    nodes: Vec<Node>,
}

impl Cycle {
    /// Creates a cycle `nodes[0] -> nodes[1] -> ... -> nodes[k - 1] -> nodes[0]`
    /// ** Panics if `nodes` is empty **
    pub fn new(nodes: Vec<Node>) -> Self {
        assert!(!nodes.is_empty(), "a cycle needs at least one node");
        Self { nodes }
    }

    /// Nodes of the cycle in traversal order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes (and edges) on the cycle
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always *false*: cycles contain at least one node
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the edges `(nodes[i], nodes[i + 1])` of the cycle including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.len()).map(|i| Edge(self.nodes[i], self.nodes[(i + 1) % self.len()]))
    }

    /// Returns the node following `u` on the cycle or `None` if `u` is not on the cycle
    pub fn successor(&self, u: Node) -> Option<Node> {
        let pos = self.nodes.iter().position(|&v| v == u)?;
        Some(self.nodes[(pos + 1) % self.len()])
    }

    /// Sums the cost (see [`WeightedEdge::cost`]) of all edges on the cycle
    /// ** Panics if an edge of the cycle is not present in `graph` **
    pub fn total_weight<G: WeightedAdjacency>(&self, graph: &G) -> Weight {
        self.edges()
            .map(|Edge(u, v)| {
                graph
                    .cost_of(u, v)
                    .unwrap_or_else(|| panic!("cycle edge ({u},{v}) not in graph"))
            })
            .sum()
    }
}

impl PartialEq for Cycle {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .edges()
                .all(|Edge(u, v)| other.successor(u) == Some(v))
    }
}

impl Eq for Cycle {}

impl Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, u) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{u}")?;
        }
        write!(f, ")")
    }
}

/// Signals that a cycle of negative total weight is reachable from the source
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("negative cycle composed of {cycle}")]
pub struct NegativeCycle {
    cycle: Cycle,
}

impl NegativeCycle {
    /// The offending cycle
    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// Edges of the offending cycle, e.g. for highlighting
    pub fn edges(&self) -> Vec<Edge> {
        self.cycle.edges().collect()
    }

    pub fn into_cycle(self) -> Cycle {
        self.cycle
    }
}

/// Distances and predecessors of all nodes w.r.t. a single source.
/// Unreached nodes have neither distance nor predecessor.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: Node,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<OptionalNode>>,
}

impl ShortestPathTree {
    /// The node all distances are measured from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the length of a shortest path from the source to `v` or `None` if `v` is unreached
    pub fn distance(&self, v: Node) -> Option<Weight> {
        self.distances[v as usize]
    }

    /// Returns the predecessor of `v` on a shortest path from the source.
    /// The source and unreached nodes have no predecessor.
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize].map(|p| p.get())
    }

    /// Returns *true* if there is a path from the source to `v`
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize].is_some()
    }

    /// Returns the nodes of a shortest path from the source to `v` (both included)
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.distance(v)?;

        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.predecessor(u) {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the edges `(predecessor(v), v)` of the shortest path tree
    pub fn tree_edges(&self) -> Vec<Edge> {
        (0..self.predecessors.len() as Node)
            .filter_map(|v| self.predecessor(v).map(|u| Edge(u, v)))
            .collect()
    }
}

/// Shortest paths as methods on the graph itself
pub trait ShortestPaths: AdjacencyList + Sized {
    /// Computes shortest paths from `source` with the Bellman-Ford algorithm in `O(nm)`.
    ///
    /// Unweighted edges count as [`DEFAULT_WEIGHT`]. If a cycle of negative total weight is
    /// reachable from `source`, it is reconstructed and returned as error instead.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, true, [(0, 1, 4), (0, 2, 1), (2, 1, -2)]);
    /// let tree = g.bellman_ford(0).unwrap();
    /// assert_eq!(tree.distance(1), Some(-1));
    /// assert_eq!(tree.path_to(1), Some(vec![0, 2, 1]));
    /// ```
    /// ** Panics if `source >= n` **
    fn bellman_ford(&self, source: Node) -> Result<ShortestPathTree, NegativeCycle> {
        assert!(source < self.number_of_nodes());

        let n = self.len();
        let arcs: Vec<(Node, Node, Weight)> = self
            .arcs()
            .map(|e| (e.source(), e.target(), e.cost()))
            .collect();

        let mut distances: Vec<Option<Weight>> = vec![None; n];
        let mut predecessors: Vec<Option<OptionalNode>> = vec![None; n];
        distances[source as usize] = Some(0);

        for _ in 1..n {
            let mut changed = false;
            for &arc in &arcs {
                changed |= relax(&mut distances, &mut predecessors, arc);
            }

            if !changed {
                return Ok(ShortestPathTree {
                    source,
                    distances,
                    predecessors,
                });
            }
        }

        // One more full pass: a further improvement proves a reachable negative cycle
        let mut last_relaxed = None;
        for &arc in &arcs {
            if relax(&mut distances, &mut predecessors, arc) {
                last_relaxed = Some(arc.1);
            }
        }

        match last_relaxed {
            None => Ok(ShortestPathTree {
                source,
                distances,
                predecessors,
            }),
            Some(v) => Err(NegativeCycle {
                cycle: trace_predecessor_cycle(&predecessors, v),
            }),
        }
    }

    /// Returns the first negative cycle reachable from any node or `None` if the graph has none
    fn find_negative_cycle(&self) -> Option<NegativeCycle> {
        self.vertices().find_map(|s| self.bellman_ford(s).err())
    }
}

impl<G: AdjacencyList + Sized> ShortestPaths for G {}

/// Relaxes the arc `(u, v)` of weight `w` and returns *true* if the distance of `v` improved
fn relax(
    distances: &mut [Option<Weight>],
    predecessors: &mut [Option<OptionalNode>],
    (u, v, w): (Node, Node, Weight),
) -> bool {
    let Some(du) = distances[u as usize] else {
        return false;
    };

    let candidate = du.saturating_add(w);
    if distances[v as usize].is_none_or(|dv| candidate < dv) {
        distances[v as usize] = Some(candidate);
        predecessors[v as usize] = OptionalNode::new(u);
        true
    } else {
        false
    }
}

/// Walks backwards from `start` along predecessors until a node repeats and returns the
/// cycle through the repeated node in forward order.
fn trace_predecessor_cycle(predecessors: &[Option<OptionalNode>], start: Node) -> Cycle {
    let pred = |u: Node| -> Node {
        predecessors[u as usize]
            .expect("predecessor chain of a node relaxed in round n ends in a cycle")
            .get()
    };

    let mut visited = NodeBitSet::new(predecessors.len() as NumNodes);
    let mut u = start;
    while !visited.set_bit(u) {
        u = pred(u);
    }

    let mut nodes = vec![u];
    let mut v = pred(u);
    while v != u {
        nodes.push(v);
        v = pred(v);
    }
    nodes.reverse();

    Cycle::new(nodes)
}

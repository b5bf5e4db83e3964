/*!
Breadth-first graph traversal.

[`BFS`] yields the nodes reachable from a start node in breadth-first order. Edges are
followed in their stored direction unless the search is told to ignore directions, in which
case a directed graph is traversed as its underlying undirected graph (weak reachability).
*/

use std::collections::VecDeque;

use super::*;

/// Breadth-first traversal iterator.
///
/// Maintains an explicit queue of nodes to visit and a bitset of nodes that were already
/// discovered.
pub struct BFS<'a, G>
where
    G: DirectedAdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
    ignore_direction: bool,
}

impl<G> Iterator for BFS<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        if self.ignore_direction {
            for v in self.graph.undirected_neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.queue.push_back(v);
                }
            }
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.queue.push_back(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.queue.len()),
        )
    }
}

impl<'a, G> BFS<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
            ignore_direction: false,
        }
    }

    /// Follow edges in both directions.
    /// For undirected graphs this is a non-op.
    pub fn ignore_direction(mut self) -> Self {
        self.ignore_direction = true;
        self
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(u) => {
                self.visited.set_bit(u);
                self.queue.push_back(u);
                true
            }
        }
    }
}

/// Traversals as methods on the graph itself
pub trait Traversal: DirectedAdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(2, false, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns *true* if there is a path from `u` to `v` (respecting directions)
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).any(|w| w == v)
    }
}

impl<G> Traversal for G where G: DirectedAdjacencyList + Sized {}

/*!
# Strongly Connected Construction

Turns an edgeless directed graph into a strongly connected one with few edges:
a random spanning tree oriented away from its root is traversed depth-first while maintaining
discovery times and low-links. Whenever a non-root node would close a strongly connected
component of its own (its low-link equals its discovery time), a back edge from a random node
of its subtree to a random node discovered earlier is added. No component except the one of
the root is ever closed, so all earlier nodes still belong to it and are valid targets.

For undirected graphs the spanning tree alone suffices.
*/

use itertools::Itertools;
use rand::{Rng, seq::IndexedRandom};
use tracing::trace;

use super::{spanning_tree::RandomSpanningTree, *};

/// Strongly connected construction as a method on the graph itself
pub trait StronglyConnectedConstruction:
    DirectedAdjacencyList + AdjacencyTest + GraphEdgeEditing + GraphEdgeOrder
{
    /// Adds a random spanning tree and the back edges needed to make the graph strongly
    /// connected.
    ///
    /// If `allow_back_edges` is *false*, no back edge `(x, y)` is added if `(y, x)` exists,
    /// so the result contains no pair of antiparallel edges.
    /// Fails with [`GraphError::StronglyConnectedConstruction`] if the graph already has edges
    /// or if no legal back edge exists (e.g. for two nodes without antiparallel edges).
    fn make_strongly_connected<R: Rng>(&mut self, rng: &mut R, allow_back_edges: bool) -> Result<()> {
        if !self.is_singleton_graph() {
            return Err(GraphError::StronglyConnectedConstruction(format!(
                "graph already has {} edges",
                self.number_of_edges()
            )));
        }

        let Some(root) = self.add_random_spanning_tree(rng) else {
            return Ok(());
        };

        if self.is_undirected() {
            return Ok(());
        }

        let mut search = LowLinkSearch::new(self.len());
        search.visit(&*self, root);

        while let Some((u, neighbors)) = search.stack.last_mut() {
            let u = *u;
            if let Some(v) = neighbors.next() {
                match search.discovery[v as usize] {
                    None => search.visit(&*self, v),
                    Some(time) => search.lower(u, time),
                }
                continue;
            }

            search.stack.pop();

            let time = search.discovery[u as usize].unwrap();
            if time > 0 && search.low[u as usize] == time {
                let (x, y) = pick_back_edge(&*self, rng, &search.order, time, allow_back_edges)?;
                let (x, y) = (search.order[x as usize], search.order[y as usize]);
                trace!(closing = u, x, y, "adding back edge");
                self.add_edge(x, y);
                search.low[u as usize] = search.discovery[y as usize].unwrap();
            }

            if let Some(&(parent, _)) = search.stack.last() {
                search.lower(parent, search.low[u as usize]);
            }
        }

        Ok(())
    }
}

impl<G> StronglyConnectedConstruction for G where
    G: DirectedAdjacencyList + AdjacencyTest + GraphEdgeEditing + GraphEdgeOrder
{
}

/// State of the depth-first search over the spanning tree
struct LowLinkSearch {
    discovery: Vec<Option<Node>>,
    low: Vec<Node>,
    /// nodes in order of discovery
    order: Vec<Node>,
    stack: Vec<(Node, std::vec::IntoIter<Node>)>,
}

impl LowLinkSearch {
    fn new(n: usize) -> Self {
        Self {
            discovery: vec![None; n],
            low: vec![0; n],
            order: Vec::with_capacity(n),
            stack: Vec::with_capacity(n),
        }
    }

    fn visit<G: AdjacencyList>(&mut self, graph: &G, u: Node) {
        let time = self.order.len() as Node;
        self.discovery[u as usize] = Some(time);
        self.low[u as usize] = time;
        self.order.push(u);
        self.stack.push((u, graph.neighbors_of(u).collect_vec().into_iter()));
    }

    fn lower(&mut self, u: Node, time: Node) {
        self.low[u as usize] = self.low[u as usize].min(time);
    }
}

/// Chooses discovery times `(x, y)` with `x` in the subtree `first..order.len()` and `y < first`.
/// Starts at a random node of the subtree and tries the remaining ones in order if it has
/// no legal target.
fn pick_back_edge<G: AdjacencyTest, R: Rng>(
    graph: &G,
    rng: &mut R,
    order: &[Node],
    first: Node,
    allow_back_edges: bool,
) -> Result<(Node, Node)> {
    let last = order.len() as Node;
    let offset = rng.random_range(first..last);

    for x in (offset..last).chain(first..offset) {
        let targets = (0..first)
            .filter(|&y| allow_back_edges || !graph.has_edge(order[y as usize], order[x as usize]))
            .collect_vec();

        if let Some(&y) = targets.choose(rng) {
            return Ok((x, y));
        }
    }

    Err(GraphError::StronglyConnectedConstruction(format!(
        "no legal back edge leaves the subtree of node {}",
        order[first as usize]
    )))
}

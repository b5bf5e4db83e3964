use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Every graph carries a runtime tag telling algorithms whether its edges are directed.
///
/// Algorithms must branch on this tag: for undirected graphs an edge `{u, v}` can be
/// traversed in both orientations, for directed graphs only from `u` to `v`.
pub trait GraphType {
    /// Returns *true* if edges of this graph are directed
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges of this graph are undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// As nodes are always `0..n`, the range does not borrow the graph.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge `{u, v}` is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns an iterator over the (out-)neighbors of a given vertex together with the
    /// weight of the connecting edge.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Option<Weight>)> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// For directed graphs, these are the out-neighbors.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| Edge(u, v).with_weight(w))
            .filter(move |e| !only_normalized || e.edge.is_normalized())
    }

    /// Returns an iterator over all edges in the graph where every edge is reported exactly once:
    /// undirected edges in their normalized orientation, directed edges as stored.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        let only_normalized = self.is_undirected();
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges (see [`AdjacencyList::edges`]) in sorted order.
    fn ordered_edges(&self) -> Vec<WeightedEdge> {
        self.edges().sorted().collect_vec()
    }

    /// Returns an iterator over all arcs that may be traversed from `u`:
    /// this equals `edges_of(u, false)` for both directed and undirected graphs,
    /// as undirected edges are stored in both neighborhoods.
    fn arcs_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges_of(u, false)
    }

    /// Returns an iterator over all arcs of the graph.
    /// Undirected edges are reported in both orientations.
    fn arcs(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| self.arcs_of(u))
    }
}

/// Access to incoming neighborhoods.
/// For undirected graphs, incoming and outgoing neighborhoods coincide.
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns every node connected to `u` ignoring edge directions.
    /// A node might be reported twice if edges in both directions exist.
    /// ** Panics if `u >= n` **
    fn undirected_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let incoming = self.is_directed().then(|| self.in_neighbors_of(u));
        self.neighbors_of(u).chain(incoming.into_iter().flatten())
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// Note that for undirected graphs with edge {u,v} this function always returns *true*.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }

    /// Returns *true* if (u,v) or (v,u) exists
    /// ** Panics if `u >= n || v >= n` **
    fn has_any_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) || self.has_edge(v, u)
    }
}

/// Access to the weights stored on edges
pub trait WeightedAdjacency: AdjacencyTest {
    /// Returns `None` if the edge `(u, v)` does not exist and `Some(weight)` otherwise.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Option<Weight>>;

    /// Returns the numeric weight (see [`WeightedEdge::cost`]) of an existing edge `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    fn cost_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.weight_of(u, v).map(|w| w.unwrap_or(DEFAULT_WEIGHT))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes, directed: bool) -> Self;
}

/// Provides functions to append nodes.
///
/// Nodes are never removed, so ids handed out here stay valid for the lifetime of the graph.
pub trait GraphNodeEditing: GraphNodeOrder {
    /// Appends a new singleton node and returns its id
    fn add_node(&mut self) -> Node;

    /// Appends `k` new singleton nodes and returns their ids
    fn add_nodes(&mut self, k: NumNodes) -> Range<Node> {
        let first = self.number_of_nodes();
        for _ in 0..k {
            self.add_node();
        }
        first..first + k
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* with an optional weight to the graph.
    /// Returns *true* exactly if the edge was present previously; in this case nothing changes.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: Option<Weight>) -> bool;

    /// Adds the unweighted edge *(u,v)* to the graph.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        self.try_add_weighted_edge(u, v, None)
    }

    /// Adds the unweighted edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v), "edge ({u},{v}) already present");
    }

    /// Adds the edge *(u,v)* with the given weight to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) {
        assert!(
            !self.try_add_weighted_edge(u, v, Some(weight)),
            "edge ({u},{v}) already present"
        );
    }

    /// Adds all edges in the collection
    /// ** Panics if any edge is already present **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for e in edges.into_iter().map(|e| e.into()) {
            assert!(
                !self.try_add_weighted_edge(e.source(), e.target(), e.weight),
                "edge {} already present",
                e.edge
            );
        }
    }

    /// Overwrites the weight of the existing edge *(u,v)*.
    /// Returns *true* if the edge exists (and was updated).
    /// ** Panics if `u >= n || v >= n` **
    fn set_weight(&mut self, u: Node, v: Node, weight: Option<Weight>) -> bool;

    /// Removes the edge *(u,v)* from the graph.
    /// If the edge was removed, returns its weight.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Option<Weight>>;

    /// Removes the edge *(u,v)* from the graph.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(
            self.try_remove_edge(u, v).is_some(),
            "edge ({u},{v}) not present"
        );
    }

    /// Removes all edges in the collection
    /// ** Panics if the any edge (u, v) in `edges` is not present or u, v >= n **
    fn remove_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.remove_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over (weighted) edges
    fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n, directed);
        graph.add_edges(edges);
        graph
    }
}

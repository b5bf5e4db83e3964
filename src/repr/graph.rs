use super::*;

/// Adjacency-list graph whose edges carry an optional [`Weight`].
///
/// - Undirected edges `{u, v}` are stored in the neighborhoods of both endpoints
///   (a loop `{u, u}` only once) and counted once.
/// - Directed graphs additionally store incoming neighborhoods for cheap reverse traversal.
#[derive(Clone, Debug)]
pub struct WeightedGraph<Nbs: Neighborhood> {
    out_nbs: Vec<Nbs>,
    in_nbs: Vec<Nbs>,
    num_edges: NumEdges,
    directed: bool,
}

/// Default graph representation using sparse neighborhoods
pub type Graph = WeightedGraph<SparseNeighborhood>;

/// Graph representation using plain `Vec`-neighborhoods; prefer for dense graphs
pub type DenseGraph = WeightedGraph<ArrNeighborhood>;

impl<Nbs: Neighborhood> WeightedGraph<Nbs> {
    /// Creates a directed graph with `n` singleton nodes
    pub fn new_directed(n: NumNodes) -> Self {
        Self::new(n, true)
    }

    /// Creates an undirected graph with `n` singleton nodes
    pub fn new_undirected(n: NumNodes) -> Self {
        Self::new(n, false)
    }

    fn incoming(&self) -> &[Nbs] {
        if self.directed {
            &self.in_nbs
        } else {
            &self.out_nbs
        }
    }
}

impl<Nbs: Neighborhood> GraphType for WeightedGraph<Nbs> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for WeightedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for WeightedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for WeightedGraph<Nbs> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Option<Weight>)> + '_ {
        self.out_nbs[u as usize].weighted_neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> DirectedAdjacencyList for WeightedGraph<Nbs> {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.incoming()[u as usize].neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.incoming()[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for WeightedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> WeightedAdjacency for WeightedGraph<Nbs> {
    fn weight_of(&self, u: Node, v: Node) -> Option<Option<Weight>> {
        assert!(v < self.number_of_nodes());
        self.out_nbs[u as usize].weight_of(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for WeightedGraph<Nbs> {
    fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            out_nbs: vec![Nbs::default(); n as usize],
            in_nbs: if directed {
                vec![Nbs::default(); n as usize]
            } else {
                Vec::new()
            },
            num_edges: 0,
            directed,
        }
    }
}

impl<Nbs: Neighborhood> GraphNodeEditing for WeightedGraph<Nbs> {
    fn add_node(&mut self) -> Node {
        let u = self.number_of_nodes();
        assert!(u < INVALID_NODE);

        self.out_nbs.push(Nbs::default());
        if self.directed {
            self.in_nbs.push(Nbs::default());
        }
        u
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for WeightedGraph<Nbs> {
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: Option<Weight>) -> bool {
        assert!(v < self.number_of_nodes());
        if self.out_nbs[u as usize].try_add_neighbor(v, weight) {
            return true;
        }

        if self.directed {
            self.in_nbs[v as usize].add_neighbor(u, weight);
        } else if u != v {
            assert!(!self.out_nbs[v as usize].try_add_neighbor(u, weight));
        }

        self.num_edges += 1;
        false
    }

    fn set_weight(&mut self, u: Node, v: Node, weight: Option<Weight>) -> bool {
        assert!(v < self.number_of_nodes());
        if !self.out_nbs[u as usize].set_weight(v, weight) {
            return false;
        }

        if self.directed {
            assert!(self.in_nbs[v as usize].set_weight(u, weight));
        } else if u != v {
            assert!(self.out_nbs[v as usize].set_weight(u, weight));
        }
        true
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Option<Weight>> {
        assert!(v < self.number_of_nodes());
        let weight = self.out_nbs[u as usize].try_remove_neighbor(v)?;

        if self.directed {
            assert!(self.in_nbs[v as usize].try_remove_neighbor(u).is_some());
        } else if u != v {
            assert!(self.out_nbs[v as usize].try_remove_neighbor(u).is_some());
        }

        self.num_edges -= 1;
        Some(weight)
    }
}

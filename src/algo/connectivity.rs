use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Component decompositions as methods on the graph itself
pub trait Connectivity: DirectedAdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Directed graphs are treated as their underlying undirected graph, i.e. the
    /// components are weakly connected.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of (weakly) connected components
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns *true* if the graph has at most one (weakly) connected component
    fn is_connected(&self) -> bool {
        self.connected_components().nth(1).is_none()
    }

    /// Returns an iterator over the strongly connected components of the graph
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }

    /// Returns *true* if every node can reach every other node
    fn is_strongly_connected(&self) -> bool {
        self.strongly_connected_components().nth(1).is_none()
    }
}

impl<G> Connectivity for G where G: DirectedAdjacencyList + Sized {}

/// Iterator over the (weakly) connected components of a graph
pub struct ConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0).ignore_direction()),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Implementation of Tarjan's Algorithm for Strongly Connected Components.
/// It is designed as an iterator that emits the nodes of one strongly connected component at a
/// time. Observe that the order of nodes within a component is non-deterministic; the order of the
/// components themselves are in the reverse topological order of the SCCs (i.e. if each SCC
/// were contracted into a single node).
///
/// Undirected graphs are supported as well; their SCCs are the connected components.
pub struct StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    graph: &'a G,
    idx: Node,

    states: Vec<NodeState>,
    potentially_unvisited: usize,

    path_stack: Vec<Node>,

    call_stack: Vec<StackFrame>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: DirectedAdjacencyList,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            idx: 0,
            states: vec![Default::default(); graph.len()],
            potentially_unvisited: 0,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Finds the next node not covered by a previous search and pushes it as a new root
    fn next_unvisited_node(&mut self) -> Option<Node> {
        while self.potentially_unvisited < self.graph.len() {
            if !self.states[self.potentially_unvisited].visited {
                let v = self.potentially_unvisited as Node;
                self.push_node(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Put a pristine stack frame on the call stack. Roughly speaking, this is the first step
    /// to a recursive call of search.
    fn push_node(&mut self, node: Node, parent: Option<Node>) {
        self.call_stack.push(StackFrame {
            node,
            parent: parent.unwrap_or(node),
            initial_stack_len: 0,
            first_call: true,
            neighbors: self.graph.neighbors_of(node).collect_vec().into_iter(),
        });
    }

    fn search(&mut self) -> Option<Vec<Node>> {
        // Recursion is simulated by `self.call_stack`; every frame keeps its own neighbor
        // iterator so processing can be paused when a component is emitted and resumed later.
        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len() as Node;

                self.states[v as usize].visit(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            for w in frame.neighbors.by_ref() {
                let w_state = self.states[w as usize];

                if !w_state.visited {
                    self.push_node(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[v as usize].try_lower_link(w_state.index);
                }
            }

            let frame = self.call_stack.pop().unwrap();
            let state = self.states[v as usize];

            self.states[frame.parent as usize].try_lower_link(state.low_link);

            if state.is_root() {
                let component = self.path_stack.split_off(frame.initial_stack_len as usize);

                for &w in &component {
                    self.states[w as usize].on_stack = false;
                }

                debug_assert_eq!(*component.first().unwrap(), v);

                return Some(component);
            }
        }

        None
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Vec<Node>;

    /// Returns either a vector of node ids that form an SCC or None if no further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: DirectedAdjacencyList {}

#[derive(Debug, Clone)]
struct StackFrame {
    node: Node,
    parent: Node,
    initial_stack_len: Node,
    first_call: bool,
    neighbors: std::vec::IntoIter<Node>,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    visited: bool,
    on_stack: bool,
    index: Node,
    low_link: Node,
}

impl NodeState {
    fn visit(&mut self, u: Node) {
        debug_assert!(!self.visited);
        self.index = u;
        self.low_link = u;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: Node) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Sorts the nodes in each component increasingly and then the components by their first node.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

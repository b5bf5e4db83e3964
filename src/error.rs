//! Error types returned by fallible algorithms and by [`GraphBuilder::build`](crate::gens::GraphBuilder::build).
//!
//! Misuse of the basic graph API (node ids out of range, removing absent edges through the
//! panicking methods) is a programming error and panics instead.

use thiserror::Error;

use crate::{algo::NegativeCycle, node::NumNodes};

/// Errors produced by graph algorithms and generators.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A cycle of negative total weight is reachable, so shortest paths are undefined.
    #[error(transparent)]
    NegativeCycleDetected(#[from] NegativeCycle),
    /// More existing nodes were requested than the graph has.
    #[error("requested {requested} nodes but only {available} are available")]
    SizeError {
        /// Number of nodes the transform needs.
        requested: NumNodes,
        /// Number of nodes in the graph.
        available: NumNodes,
    },
    /// No legal back edge could be added while making the graph strongly connected.
    #[error("cannot construct strongly connected graph: {0}")]
    StronglyConnectedConstruction(String),
    /// Not every node is reachable from the start of a spanning tree.
    #[error("graph is disconnected: reached {reached} of {total} nodes")]
    DisconnectedGraph {
        /// Number of nodes reached from the start node.
        reached: NumNodes,
        /// Number of nodes in the graph.
        total: NumNodes,
    },
    /// A probability outside of `[0, 1]` was configured.
    #[error("probability {0} is not within [0, 1]")]
    InvalidProbability(f64),
    /// An empty weight range was configured.
    #[error("weight range must not be empty")]
    EmptyWeightRange,
}

/// Convenient result alias for operations that may fail with [`GraphError`].
pub type Result<T> = std::result::Result<T, GraphError>;

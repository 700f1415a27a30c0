//! Percolation on implicit bit-flip graphs
//!
//! Provides the graphs and the cluster-growth engine run over them:
//! - Topologies computing neighbours from a node's encoding (hypercube, PXP)
//! - Fixed-capacity traversal containers
//! - DFS and Dijkstra cluster growth, largest-component selection
//! - Dense adjacency matrix construction

pub mod algos;
pub mod container;
pub mod matrix;
pub mod model;
pub mod pxp;
pub mod topology;
pub mod types;

pub use algos::{
    ClusterGrower, ClusterHamiltonian, Enumeration, LargestCluster, LargestClusterDistances,
    Percolation,
};
pub use container::{BoundedQueue, BoundedStack};
pub use matrix::AdjacencyMatrix;
pub use model::ModelTopology;
pub use pxp::Pxp;
pub use topology::{Hypercube, Topology};
pub use types::{Concentration, Dimension, Model, Node};

//! Percolation cluster algorithms
//!
//! Contains the growth engines and the operations built on them:
//! - `dfs`: depth-first cluster growth, cluster sizes and labelling
//! - `dijkstra`: breadth-first growth with hop-distance relaxation
//! - `hamiltonian`: dense adjacency matrices of sampled edges
//! - `selector`: largest-component enumeration shared by all of the above
//! - `shared`: the percolation problem and its growth engine

pub mod dfs;
pub mod dijkstra;
pub mod hamiltonian;
pub mod selector;
pub mod shared;

pub use dfs::LargestCluster;
pub use dijkstra::LargestClusterDistances;
pub use hamiltonian::ClusterHamiltonian;
pub use selector::{enumerate_components, Enumeration};
pub use shared::{ClusterGrower, Percolation};

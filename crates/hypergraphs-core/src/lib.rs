//! Hypergraphs Core Library
//!
//! Percolation cluster growth on the hypercube and the PXP (Fibonacci cube)
//! graph: cluster sizes, hop distances, largest components and adjacency
//! matrices, computed without ever materialising the graph.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maths;
pub mod rng;
pub mod stats;

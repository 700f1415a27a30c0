//! Command implementations for hypergraphs

pub mod clusters;
pub mod dispatch;
pub mod hamiltonian;
pub mod largest;
pub mod paths;
pub mod report;
pub mod sites;

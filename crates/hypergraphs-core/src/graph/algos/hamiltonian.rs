//! Adjacency ("Hamiltonian") matrix construction
//!
//! Three shapes share the dense symmetric matrix of [`AdjacencyMatrix`]:
//! the whole percolated graph with no traversal, one DFS cluster grown from
//! a given node, and the largest cluster of a full enumeration. Every matrix
//! has side `node_count`; only examined candidate edges are ever written.

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::selector::{enumerate_components, Enumeration};
use crate::graph::algos::shared::Percolation;
use crate::graph::container::{alloc_filled, BoundedStack};
use crate::graph::matrix::{AdjacencyMatrix, CONNECTED, DISCONNECTED};
use crate::graph::topology::Topology;
use crate::graph::types::{LabelSlot, Node, UNASSIGNED};
use crate::rng::UniformSource;

/// Matrix of one cluster and the number of nodes in it
#[derive(Debug, Clone, Serialize)]
pub struct ClusterHamiltonian {
    pub size: usize,
    /// Present when the cluster was chosen by a largest-component enumeration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Enumeration>,
    pub matrix: AdjacencyMatrix,
}

impl<T: Topology> Percolation<T> {
    /// Sample every candidate edge of the graph into a matrix.
    ///
    /// Each undirected edge is drawn once from each endpoint, in row order;
    /// the second draw overwrites the first in both symmetric entries.
    #[tracing::instrument(skip_all, fields(dimension = %self.topology().dimension(), p = %self.concentration()))]
    pub fn hamiltonian_full<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<AdjacencyMatrix> {
        let topology = self.topology();
        let bits = topology.dimension().bits();
        let mut matrix = AdjacencyMatrix::zeros(self.node_count())?;
        let mut grower = self.grower(source);

        for row in 0..self.node_count() {
            for bit in 0..bits {
                let Some(col) = topology.neighbor(row, bit) else {
                    continue;
                };
                let value = if grower.oracle.is_open() {
                    CONNECTED
                } else {
                    DISCONNECTED
                };
                matrix.set_edge(row, col, value);
            }
        }

        tracing::debug!(
            edges = matrix.edge_count(),
            draws = grower.draws(),
            "hamiltonian_full"
        );
        Ok(matrix)
    }

    /// Matrix of the single DFS cluster grown from `start`.
    #[tracing::instrument(skip_all, fields(dimension = %self.topology().dimension(), p = %self.concentration(), start = start))]
    pub fn hamiltonian_single<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        start: Node,
    ) -> Result<ClusterHamiltonian> {
        self.check_start(start)?;

        let mut matrix = AdjacencyMatrix::zeros(self.node_count())?;
        let mut stack = BoundedStack::with_capacity(self.stack_capacity())?;
        let mut visited = self.visited_buffer()?;

        let size = self.grower(source).grow_dfs(
            &mut stack,
            start,
            &mut visited,
            None,
            Some(&mut matrix),
        )?;

        Ok(ClusterHamiltonian {
            size,
            enumeration: None,
            matrix,
        })
    }

    /// Matrix restricted to the largest cluster of a DFS enumeration.
    ///
    /// All clusters are grown into one working matrix, then the rows of the
    /// largest (and their transposes) are copied into a fresh one.
    #[tracing::instrument(skip_all, fields(dimension = %self.topology().dimension(), p = %self.concentration(), early_exit = early_exit))]
    pub fn hamiltonian_largest<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        early_exit: bool,
    ) -> Result<ClusterHamiltonian> {
        let mut working = AdjacencyMatrix::zeros(self.node_count())?;
        let mut stack = BoundedStack::with_capacity(self.stack_capacity())?;
        let mut visited = self.visited_buffer()?;
        let mut labels = alloc_filled("labels", self.node_count(), UNASSIGNED)?;

        let mut grower = self.grower(source);
        let enumeration = enumerate_components(&mut visited, early_exit, |visited, site, label| {
            let slot = LabelSlot::new(&mut labels, label);
            grower.grow_dfs(&mut stack, site, visited, Some(slot), Some(&mut working))
        })?;

        let matrix = working.extract_component(&labels, enumeration.largest_label)?;

        Ok(ClusterHamiltonian {
            size: enumeration.largest_size,
            enumeration: Some(enumeration),
            matrix,
        })
    }
}

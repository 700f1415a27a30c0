use crate::error::{HypergraphError, Result};
use crate::graph::container::alloc_filled;
use crate::graph::topology::Topology;
use crate::graph::types::{Concentration, Node};
use crate::rng::{EdgeOracle, UniformSource};

/// One growth engine: a topology plus the oracle deciding which candidate
/// edges are open. Borrowed for the lifetime of one enumeration.
pub struct ClusterGrower<'a, T, S: ?Sized> {
    pub(crate) topology: &'a T,
    pub(crate) oracle: EdgeOracle<'a, S>,
}

impl<'a, T: Topology, S: UniformSource + ?Sized> ClusterGrower<'a, T, S> {
    pub fn new(topology: &'a T, concentration: Concentration, source: &'a mut S) -> Self {
        Self {
            topology,
            oracle: EdgeOracle::new(source, concentration),
        }
    }

    pub fn topology(&self) -> &T {
        self.topology
    }

    /// Number of candidate edges examined so far
    pub fn draws(&self) -> u64 {
        self.oracle.draws()
    }
}

/// A percolation problem on a fixed topology at a fixed concentration.
///
/// Every operation allocates its own buffers, runs to completion and drops
/// them on return, error paths included.
#[derive(Debug, Clone)]
pub struct Percolation<T> {
    topology: T,
    concentration: Concentration,
}

impl<T: Topology> Percolation<T> {
    pub fn new(topology: T, concentration: Concentration) -> Self {
        Self {
            topology,
            concentration,
        }
    }

    pub fn topology(&self) -> &T {
        &self.topology
    }

    pub fn concentration(&self) -> Concentration {
        self.concentration
    }

    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    pub fn grower<'a, S: UniformSource + ?Sized>(
        &'a self,
        source: &'a mut S,
    ) -> ClusterGrower<'a, T, S> {
        ClusterGrower::new(&self.topology, self.concentration, source)
    }

    pub(crate) fn check_start(&self, start: Node) -> Result<()> {
        let node_count = self.node_count();
        if start >= node_count {
            return Err(HypergraphError::InvalidStart {
                node: start,
                node_count,
            });
        }
        Ok(())
    }

    /// Fresh all-false visited array
    pub(crate) fn visited_buffer(&self) -> Result<Vec<bool>> {
        alloc_filled("visited", self.node_count(), false)
    }

    /// Worst-case DFS stack depth: one entry per undirected edge, plus the start.
    ///
    /// An edge is only examined from whichever endpoint is visited first, so
    /// it can cause at most one push.
    pub(crate) fn stack_capacity(&self) -> usize {
        self.topology.edge_count().saturating_add(1)
    }
}

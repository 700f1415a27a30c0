use serde::Serialize;

use crate::error::{HypergraphError, Result};
use crate::graph::algos::selector::{enumerate_components, Enumeration};
use crate::graph::algos::shared::{ClusterGrower, Percolation};
use crate::graph::container::{alloc_filled, BoundedStack};
use crate::graph::matrix::{AdjacencyMatrix, CONNECTED, DISCONNECTED};
use crate::graph::topology::Topology;
use crate::graph::types::{assign_label, LabelSlot, Node, UNASSIGNED};
use crate::rng::UniformSource;

impl<T: Topology, S: UniformSource + ?Sized> ClusterGrower<'_, T, S> {
    /// Grow one cluster depth-first from `start` and return its size.
    ///
    /// A node may sit on the stack several times (once per open edge reaching
    /// it before it is popped); the visited check on pop discards the
    /// duplicates. Each candidate edge from a freshly visited node to an
    /// unvisited neighbour is drawn exactly once, and when `matrix` is given
    /// its outcome is written to both symmetric entries.
    pub fn grow_dfs(
        &mut self,
        stack: &mut BoundedStack,
        start: Node,
        visited: &mut [bool],
        mut labels: Option<LabelSlot<'_>>,
        mut matrix: Option<&mut AdjacencyMatrix>,
    ) -> Result<usize> {
        if !stack.is_empty() {
            return Err(HypergraphError::Other(
                "DFS stack not empty at start of growth".to_string(),
            ));
        }
        let bits = self.topology.dimension().bits();
        let mut size = 0;

        stack.push(start)?;
        while !stack.is_empty() {
            let u = stack.pop()?;
            if visited[u] {
                continue;
            }
            visited[u] = true;
            assign_label(&mut labels, u);
            size += 1;

            for bit in 0..bits {
                let Some(v) = self.topology.neighbor(u, bit) else {
                    continue;
                };
                if visited[v] {
                    continue;
                }
                let open = self.oracle.is_open();
                if open {
                    stack.push(v)?;
                }
                if let Some(m) = matrix.as_deref_mut() {
                    m.set_edge(u, v, if open { CONNECTED } else { DISCONNECTED });
                }
            }
        }

        tracing::trace!(start, size, "dfs_cluster");
        Ok(size)
    }
}

/// Outcome of a full-graph DFS enumeration with largest-component selection
#[derive(Debug, Clone, Serialize)]
pub struct LargestCluster {
    #[serde(flatten)]
    pub enumeration: Enumeration,
    /// Nodes of the largest component, ascending
    pub nodes: Vec<Node>,
    #[serde(skip)]
    pub labels: Vec<usize>,
}

impl<T: Topology> Percolation<T> {
    /// Grow `realisations` independent clusters from `start`, resetting the
    /// visited set between runs, and return their sizes.
    #[tracing::instrument(skip_all, fields(dimension = %self.topology().dimension(), p = %self.concentration(), realisations = realisations, start = start))]
    pub fn cluster_sizes<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        realisations: usize,
        start: Node,
    ) -> Result<Vec<usize>> {
        if realisations == 0 {
            return Err(HypergraphError::InvalidRealisations(realisations));
        }
        self.check_start(start)?;

        let mut stack = BoundedStack::with_capacity(self.stack_capacity())?;
        let mut visited = self.visited_buffer()?;
        let mut sizes = alloc_filled("cluster sizes", realisations, 0)?;

        let mut grower = self.grower(source);
        for size in sizes.iter_mut() {
            visited.fill(false);
            *size = grower.grow_dfs(&mut stack, start, &mut visited, None, None)?;
        }

        tracing::debug!(draws = grower.draws(), "cluster_sizes");
        Ok(sizes)
    }

    /// Label every component with a DFS enumeration and select the largest.
    #[tracing::instrument(skip_all, fields(dimension = %self.topology().dimension(), p = %self.concentration(), early_exit = early_exit))]
    pub fn largest_cluster<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        early_exit: bool,
    ) -> Result<LargestCluster> {
        let mut stack = BoundedStack::with_capacity(self.stack_capacity())?;
        let mut visited = self.visited_buffer()?;
        let mut labels = alloc_filled("labels", self.node_count(), UNASSIGNED)?;

        let mut grower = self.grower(source);
        let enumeration = enumerate_components(&mut visited, early_exit, |visited, site, label| {
            let slot = LabelSlot::new(&mut labels, label);
            grower.grow_dfs(&mut stack, site, visited, Some(slot), None)
        })?;

        let nodes: Vec<Node> = labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == enumeration.largest_label)
            .map(|(u, _)| u)
            .collect();
        debug_assert_eq!(nodes.len(), enumeration.largest_size);

        Ok(LargestCluster {
            enumeration,
            nodes,
            labels,
        })
    }
}

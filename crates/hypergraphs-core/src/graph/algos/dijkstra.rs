use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::selector::{enumerate_components, Enumeration};
use crate::graph::algos::shared::{ClusterGrower, Percolation};
use crate::graph::container::{alloc_collect, alloc_filled, BoundedQueue};
use crate::graph::topology::Topology;
use crate::graph::types::{assign_label, LabelSlot, Node, INFINITE_DISTANCE, UNASSIGNED};
use crate::rng::UniformSource;

impl<T: Topology, S: UniformSource + ?Sized> ClusterGrower<'_, T, S> {
    /// Grow one cluster breadth-first from `start`, relaxing hop distances.
    ///
    /// `distances[start]` is set to 0 here. A node is visited and labelled
    /// when dequeued. Every unvisited neighbour of the node being expanded
    /// costs one draw; an open edge is followed only if it strictly lowers
    /// the neighbour's distance. Edges are sampled as the search goes, so the
    /// distances belong to this run's realisation rather than to a fixed
    /// random graph.
    pub fn grow_dijkstra(
        &mut self,
        queue: &mut BoundedQueue,
        start: Node,
        visited: &mut [bool],
        distances: &mut [usize],
        mut labels: Option<LabelSlot<'_>>,
    ) -> Result<usize> {
        let bits = self.topology.dimension().bits();
        let mut size = 0;

        distances[start] = 0;
        queue.enqueue(start)?;
        while !queue.is_empty() {
            let u = queue.dequeue()?;
            if visited[u] {
                continue;
            }
            visited[u] = true;
            assign_label(&mut labels, u);
            size += 1;

            let next = distances[u] + 1;
            for bit in 0..bits {
                let Some(v) = self.topology.neighbor(u, bit) else {
                    continue;
                };
                if visited[v] || !self.oracle.is_open() {
                    continue;
                }
                if next < distances[v] {
                    distances[v] = next;
                    queue.enqueue(v)?;
                }
            }
        }

        tracing::trace!(start, size, "dijkstra_cluster");
        Ok(size)
    }
}

/// Hop distances within the largest component
#[derive(Debug, Clone, Serialize)]
pub struct LargestClusterDistances {
    #[serde(flatten)]
    pub enumeration: Enumeration,
    /// One entry per node of the largest component, in ascending node order
    pub distances: Vec<usize>,
}

impl<T: Topology> Percolation<T> {
    /// FIFO capacity for one growth: each node is enqueued at most once,
    /// since breadth-first order never improves a distance a second time.
    pub(crate) fn queue_capacity(&self) -> usize {
        self.node_count()
    }

    fn distance_buffer(&self) -> Result<Vec<usize>> {
        alloc_filled("distances", self.node_count(), INFINITE_DISTANCE)
    }

    /// Distances from `start` to every node of its cluster, in ascending node order.
    #[tracing::instrument(skip_all, fields(dimension = %self.topology().dimension(), p = %self.concentration(), start = start))]
    pub fn single_cluster_distances<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        start: Node,
    ) -> Result<Vec<usize>> {
        self.check_start(start)?;

        let mut queue = BoundedQueue::with_capacity(self.queue_capacity())?;
        let mut visited = self.visited_buffer()?;
        let mut distances = self.distance_buffer()?;

        let mut grower = self.grower(source);
        let size = grower.grow_dijkstra(&mut queue, start, &mut visited, &mut distances, None)?;

        let found = alloc_collect(
            "cluster distances",
            size,
            visited
                .iter()
                .zip(&distances)
                .filter(|&(&seen, _)| seen)
                .map(|(_, &d)| d),
        )?;

        tracing::debug!(size, draws = grower.draws(), "single_cluster_distances");
        Ok(found)
    }

    /// Enumerate components with Dijkstra growth, then keep the distances of the largest.
    ///
    /// Each distance is measured from the node that seeded its component,
    /// which is the lowest unvisited node at the time.
    #[tracing::instrument(skip_all, fields(dimension = %self.topology().dimension(), p = %self.concentration(), early_exit = early_exit))]
    pub fn largest_cluster_distances<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        early_exit: bool,
    ) -> Result<LargestClusterDistances> {
        let mut queue = BoundedQueue::with_capacity(self.queue_capacity())?;
        let mut visited = self.visited_buffer()?;
        let mut distances = self.distance_buffer()?;
        let mut labels = alloc_filled("labels", self.node_count(), UNASSIGNED)?;

        let mut grower = self.grower(source);
        let enumeration = enumerate_components(&mut visited, early_exit, |visited, site, label| {
            let slot = LabelSlot::new(&mut labels, label);
            grower.grow_dijkstra(&mut queue, site, visited, &mut distances, Some(slot))
        })?;

        let kept = alloc_collect(
            "cluster distances",
            enumeration.largest_size,
            labels
                .iter()
                .zip(&distances)
                .filter(|&(&l, _)| l == enumeration.largest_label)
                .map(|(_, &d)| d),
        )?;

        Ok(LargestClusterDistances {
            enumeration,
            distances: kept,
        })
    }
}

//! Largest-component selection
//!
//! Drives one growth call per not-yet-visited node, in ascending id order,
//! and keeps the largest component seen. The growth variant (DFS or
//! Dijkstra) is supplied as a closure, so selection is written once.

use serde::Serialize;

use crate::error::Result;
use crate::graph::types::Node;

/// Components found by one enumeration pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    /// Label of the largest component (the first one found on ties)
    pub largest_label: usize,
    pub largest_size: usize,
    /// Size of each component, indexed by label
    pub component_sizes: Vec<usize>,
    /// Nodes visited across all growth calls
    pub total_visited: usize,
    /// Whether enumeration stopped with nodes still unvisited
    pub stopped_early: bool,
}

impl Enumeration {
    pub fn component_count(&self) -> usize {
        self.component_sizes.len()
    }
}

/// Enumerate components over `visited`, labelling them 0, 1, 2, ...
///
/// `grow(visited, start, label)` must grow the component containing `start`
/// and return its size. With `early_exit`, enumeration stops once the
/// largest component is at least as big as the number of unvisited nodes,
/// since no remaining component could then exceed it.
pub fn enumerate_components<F>(
    visited: &mut [bool],
    early_exit: bool,
    mut grow: F,
) -> Result<Enumeration>
where
    F: FnMut(&mut [bool], Node, usize) -> Result<usize>,
{
    let node_count = visited.len();
    let mut result = Enumeration {
        largest_label: 0,
        largest_size: 0,
        component_sizes: Vec::new(),
        total_visited: 0,
        stopped_early: false,
    };

    for site in 0..node_count {
        if visited[site] {
            continue;
        }
        let label = result.component_sizes.len();
        let size = grow(visited, site, label)?;

        result.total_visited += size;
        result.component_sizes.push(size);
        if size > result.largest_size {
            result.largest_size = size;
            result.largest_label = label;
        }

        if early_exit && result.largest_size >= node_count - result.total_visited {
            result.stopped_early = result.total_visited < node_count;
            break;
        }
    }

    tracing::debug!(
        components = result.component_count(),
        largest_size = result.largest_size,
        largest_label = result.largest_label,
        stopped_early = result.stopped_early,
        "enumerate_components"
    );
    Ok(result)
}

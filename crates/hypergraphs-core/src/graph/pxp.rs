//! PXP-constrained graph (the Fibonacci cube)
//!
//! Basis states are N-bit strings with no two adjacent set bits, open
//! boundary. Nodes are indices into the ascending table of those states, so
//! the graph has `F(N+2)` nodes. Flipping bit `i` is an edge when it removes
//! an excitation, or when it adds one whose neighbouring bits are both clear.

use crate::error::{HypergraphError, Result};
use crate::graph::topology::Topology;
use crate::graph::types::{Dimension, Node};
use crate::maths::fibonacci;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pxp {
    dimension: Dimension,
    sites: Vec<usize>,
}

impl Pxp {
    #[tracing::instrument(skip_all, fields(dimension = %dimension))]
    pub fn new(dimension: Dimension) -> Result<Self> {
        let sites = construct_sites(dimension)?;
        tracing::debug!(sites = sites.len(), "pxp_sites");
        Ok(Self { dimension, sites })
    }

    /// Ascending table of allowed basis states
    pub fn sites(&self) -> &[usize] {
        &self.sites
    }

    /// Basis state of a node
    pub fn state(&self, node: Node) -> usize {
        self.sites[node]
    }

    /// Node id of a basis state, if the state is allowed
    pub fn index_of(&self, state: usize) -> Option<Node> {
        self.sites.binary_search(&state).ok()
    }
}

/// Whether flipping bit `i` of `state` keeps it inside the constrained space
pub fn flip_allowed(state: usize, i: usize, dimension: Dimension) -> bool {
    if state & (1 << i) != 0 {
        return true;
    }
    let left_clear = i + 1 >= dimension.bits() || state & (1 << (i + 1)) == 0;
    let right_clear = i == 0 || state & (1 << (i - 1)) == 0;
    left_clear && right_clear
}

/// Build the ascending site table.
///
/// The table for N is the table for N-1 followed by the top bit prepended
/// to the table for N-2, which is itself a prefix of the table for N-1.
fn construct_sites(dimension: Dimension) -> Result<Vec<usize>> {
    let n = dimension.bits();
    let count = fibonacci(n as u64 + 2)
        .and_then(|c| usize::try_from(c).ok())
        .ok_or_else(|| HypergraphError::allocation("pxp sites", usize::MAX))?;

    let mut sites = Vec::new();
    sites
        .try_reserve_exact(count)
        .map_err(|_| HypergraphError::allocation("pxp sites", count))?;
    sites.extend([0, 1]);

    let mut prefix_len = 1;
    for k in 2..=n {
        let len_before = sites.len();
        sites.extend_from_within(..prefix_len);
        for s in &mut sites[len_before..] {
            *s |= 1 << (k - 1);
        }
        prefix_len = len_before;
    }
    debug_assert_eq!(sites.len(), count);
    Ok(sites)
}

impl Topology for Pxp {
    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn node_count(&self) -> usize {
        self.sites.len()
    }

    fn is_valid_edge(&self, node: Node, bit: usize) -> bool {
        bit < self.dimension.bits() && flip_allowed(self.sites[node], bit, self.dimension)
    }

    fn flip(&self, node: Node, bit: usize) -> Option<Node> {
        self.index_of(self.sites[node] ^ (1 << bit))
    }
}

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{HypergraphError, Result};
use crate::graph::container::alloc_filled;
use crate::graph::types::Node;

/// Entry written for an open edge
pub const CONNECTED: u8 = 1;
/// Entry written for an examined but closed edge
pub const DISCONNECTED: u8 = 0;

/// Dense square 0/1 adjacency ("Hamiltonian") matrix, row-major.
///
/// Edges are only ever written through [`AdjacencyMatrix::set_edge`], which
/// writes both `(u, v)` and `(v, u)`, so the matrix is symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    side: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    pub fn zeros(side: usize) -> Result<Self> {
        let len = side
            .checked_mul(side)
            .ok_or_else(|| HypergraphError::allocation("matrix", usize::MAX))?;
        Ok(Self {
            side,
            cells: alloc_filled("matrix", len, DISCONNECTED)?,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, u: Node, v: Node) -> u8 {
        self.cells[u * self.side + v]
    }

    /// Write `value` to both `(u, v)` and `(v, u)`
    pub fn set_edge(&mut self, u: Node, v: Node, value: u8) {
        self.cells[u * self.side + v] = value;
        self.cells[v * self.side + u] = value;
    }

    pub fn row(&self, u: Node) -> &[u8] {
        &self.cells[u * self.side..(u + 1) * self.side]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.side.max(1))
    }

    /// Number of undirected edges set
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CONNECTED).count() / 2
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.side).all(|u| (u + 1..self.side).all(|v| self.get(u, v) == self.get(v, u)))
    }

    /// Count of rows holding at least one edge
    pub fn occupied_rows(&self) -> usize {
        self.rows().filter(|r| r.contains(&CONNECTED)).count()
    }

    /// Copy the rows, and their transposed columns, of every node whose
    /// label equals `label` into a fresh zero matrix of the same side.
    pub fn extract_component(&self, labels: &[usize], label: usize) -> Result<Self> {
        let mut out = Self::zeros(self.side)?;
        for (u, _) in labels.iter().enumerate().filter(|&(_, &l)| l == label) {
            for v in 0..self.side {
                let value = self.get(u, v);
                out.cells[u * self.side + v] = value;
                out.cells[v * self.side + u] = value;
            }
        }
        Ok(out)
    }
}

impl Serialize for AdjacencyMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.side))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

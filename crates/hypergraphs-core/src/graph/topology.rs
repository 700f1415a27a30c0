use crate::graph::types::{Dimension, Node};

/// Implicit neighbour relation over the node ids `0..node_count()`.
///
/// Every node has up to `dimension()` candidate neighbours, one per bit. A
/// candidate exists when `is_valid_edge(node, bit)` holds; `flip` maps it to
/// the neighbouring node id.
pub trait Topology {
    fn dimension(&self) -> Dimension;

    fn node_count(&self) -> usize;

    fn is_valid_edge(&self, node: Node, bit: usize) -> bool;

    /// Node reached by flipping `bit`, or `None` if that flip leaves the graph
    fn flip(&self, node: Node, bit: usize) -> Option<Node>;

    /// Number of undirected edges of the unpercolated graph
    fn edge_count(&self) -> usize {
        let bits = self.dimension().bits();
        (0..self.node_count())
            .map(|u| (0..bits).filter(|&b| self.neighbor(u, b).is_some()).count())
            .sum::<usize>()
            / 2
    }

    fn neighbor(&self, node: Node, bit: usize) -> Option<Node> {
        if self.is_valid_edge(node, bit) {
            self.flip(node, bit)
        } else {
            None
        }
    }

    fn neighbors(&self, node: Node) -> Neighbors<'_, Self>
    where
        Self: Sized,
    {
        Neighbors {
            topology: self,
            node,
            bit: 0,
        }
    }
}

/// Iterator over the neighbours of one node, in ascending bit order
pub struct Neighbors<'a, T> {
    topology: &'a T,
    node: Node,
    bit: usize,
}

impl<T: Topology> Iterator for Neighbors<'_, T> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        while self.bit < self.topology.dimension().bits() {
            let bit = self.bit;
            self.bit += 1;
            if let Some(v) = self.topology.neighbor(self.node, bit) {
                return Some(v);
            }
        }
        None
    }
}

/// The N-dimensional hypercube: nodes are N-bit integers, neighbours differ in one bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hypercube {
    dimension: Dimension,
}

impl Hypercube {
    pub fn new(dimension: Dimension) -> Self {
        Self { dimension }
    }
}

impl Topology for Hypercube {
    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn node_count(&self) -> usize {
        self.dimension.hypercube_size()
    }

    fn is_valid_edge(&self, _node: Node, bit: usize) -> bool {
        bit < self.dimension.bits()
    }

    fn flip(&self, node: Node, bit: usize) -> Option<Node> {
        Some(node ^ (1usize << bit))
    }

    fn edge_count(&self) -> usize {
        self.dimension.bits().saturating_mul(self.node_count() / 2)
    }
}

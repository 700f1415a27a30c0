use crate::error::Result;
use crate::graph::pxp::Pxp;
use crate::graph::topology::{Hypercube, Topology};
use crate::graph::types::{Dimension, Model, Node};

/// Runtime choice between the two neighbour relations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelTopology {
    Hypercube(Hypercube),
    Pxp(Pxp),
}

impl ModelTopology {
    pub fn build(model: Model, dimension: Dimension) -> Result<Self> {
        Ok(match model {
            Model::Hypercube => ModelTopology::Hypercube(Hypercube::new(dimension)),
            Model::Pxp => ModelTopology::Pxp(Pxp::new(dimension)?),
        })
    }

    pub fn model(&self) -> Model {
        match self {
            ModelTopology::Hypercube(_) => Model::Hypercube,
            ModelTopology::Pxp(_) => Model::Pxp,
        }
    }
}

impl Topology for ModelTopology {
    fn dimension(&self) -> Dimension {
        match self {
            ModelTopology::Hypercube(t) => t.dimension(),
            ModelTopology::Pxp(t) => t.dimension(),
        }
    }

    fn node_count(&self) -> usize {
        match self {
            ModelTopology::Hypercube(t) => t.node_count(),
            ModelTopology::Pxp(t) => t.node_count(),
        }
    }

    fn is_valid_edge(&self, node: Node, bit: usize) -> bool {
        match self {
            ModelTopology::Hypercube(t) => t.is_valid_edge(node, bit),
            ModelTopology::Pxp(t) => t.is_valid_edge(node, bit),
        }
    }

    fn flip(&self, node: Node, bit: usize) -> Option<Node> {
        match self {
            ModelTopology::Hypercube(t) => t.flip(node, bit),
            ModelTopology::Pxp(t) => t.flip(node, bit),
        }
    }

    fn edge_count(&self) -> usize {
        match self {
            ModelTopology::Hypercube(t) => t.edge_count(),
            ModelTopology::Pxp(t) => t.edge_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_delegates_to_model() {
        let d = Dimension::new(5).unwrap();
        let cube = ModelTopology::build(Model::Hypercube, d).unwrap();
        assert_eq!(cube.model(), Model::Hypercube);
        assert_eq!(cube.node_count(), 32);

        let pxp = ModelTopology::build(Model::Pxp, d).unwrap();
        assert_eq!(pxp.model(), Model::Pxp);
        assert_eq!(pxp.node_count(), 13);
        assert_eq!(pxp.edge_count(), 20);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HypergraphError, Result};

/// A node id. For the hypercube its bit pattern is the coordinate itself;
/// for the PXP graph it is the index into the ascending site table.
pub type Node = usize;

/// Label given to nodes that no growth call has reached
pub const UNASSIGNED: usize = usize::MAX;

/// Distance of a node not (yet) reached by a Dijkstra growth
pub const INFINITE_DISTANCE: usize = usize::MAX;

/// Graph dimension N, validated so that `2^N` fits in a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Dimension(u32);

impl Dimension {
    /// Largest accepted dimension
    pub const MAX: u32 = usize::BITS - 1;

    pub fn new(dimension: u32) -> Result<Self> {
        if dimension == 0 || dimension > Self::MAX {
            return Err(HypergraphError::InvalidDimension {
                dimension,
                max: Self::MAX,
            });
        }
        Ok(Dimension(dimension))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of bits, as a loop bound
    pub fn bits(self) -> usize {
        self.0 as usize
    }

    /// `2^N`, the number of hypercube nodes
    pub fn hypercube_size(self) -> usize {
        1usize << self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge-activation probability p, validated to lie in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Concentration(f64);

impl Concentration {
    pub fn new(p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(HypergraphError::InvalidConcentration(p));
        }
        Ok(Concentration(p))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which neighbour relation to grow clusters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Every single-bit flip is an edge
    #[default]
    Hypercube,
    /// Bit flips constrained so no two adjacent bits are set (Fibonacci cube)
    Pxp,
}

impl FromStr for Model {
    type Err = HypergraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hypercube" => Ok(Model::Hypercube),
            "pxp" => Ok(Model::Pxp),
            other => Err(HypergraphError::UnknownModel(other.to_string())),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Hypercube => write!(f, "hypercube"),
            Model::Pxp => write!(f, "pxp"),
        }
    }
}

/// Component label to write while growing, together with the label sink
pub struct LabelSlot<'a> {
    pub labels: &'a mut [usize],
    pub index: usize,
}

impl<'a> LabelSlot<'a> {
    pub fn new(labels: &'a mut [usize], index: usize) -> Self {
        Self { labels, index }
    }

    fn assign(&mut self, node: Node) {
        self.labels[node] = self.index;
    }
}

/// Assign `node` its component label when labelling is requested
pub(crate) fn assign_label(slot: &mut Option<LabelSlot<'_>>, node: Node) {
    if let Some(slot) = slot.as_mut() {
        slot.assign(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_bounds() {
        assert!(Dimension::new(0).is_err());
        assert!(Dimension::new(Dimension::MAX + 1).is_err());
        assert_eq!(Dimension::new(1).unwrap().hypercube_size(), 2);
        assert_eq!(Dimension::new(10).unwrap().hypercube_size(), 1024);
    }

    #[test]
    fn test_dimension_error_carries_limit() {
        let err = Dimension::new(200).unwrap_err();
        assert!(matches!(
            err,
            HypergraphError::InvalidDimension {
                dimension: 200,
                max: Dimension::MAX
            }
        ));
    }

    #[test]
    fn test_concentration_bounds() {
        assert!(Concentration::new(0.0).is_ok());
        assert!(Concentration::new(1.0).is_ok());
        assert!(Concentration::new(0.37).is_ok());
        assert!(Concentration::new(-0.01).is_err());
        assert!(Concentration::new(1.01).is_err());
        assert!(Concentration::new(f64::NAN).is_err());
    }

    #[test]
    fn test_model_parsing() {
        assert_eq!("hypercube".parse::<Model>().unwrap(), Model::Hypercube);
        assert_eq!("PXP".parse::<Model>().unwrap(), Model::Pxp);
        assert!(matches!(
            "torus".parse::<Model>(),
            Err(HypergraphError::UnknownModel(_))
        ));
        assert_eq!(Model::Pxp.to_string(), "pxp");
    }

    #[test]
    fn test_label_slot_assign() {
        let mut labels = vec![UNASSIGNED; 4];
        let mut slot = Some(LabelSlot::new(&mut labels, 7));
        assign_label(&mut slot, 2);
        let mut none: Option<LabelSlot<'_>> = None;
        assign_label(&mut none, 1);
        assert_eq!(labels, vec![UNASSIGNED, UNASSIGNED, 7, UNASSIGNED]);
    }
}

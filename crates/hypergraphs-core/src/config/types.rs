//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::types::Model;

/// Default edge-activation probability
pub const DEFAULT_CONCENTRATION: f64 = 0.5;

/// Default number of clusters grown by `clusters`
pub const DEFAULT_REALISATIONS: usize = 1000;

/// Run defaults read from `config.toml`
///
/// Every field may be omitted; command-line flags override whatever is set here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Graph to percolate
    #[serde(default)]
    pub model: Model,

    /// Edge-activation probability p
    #[serde(default = "default_concentration")]
    pub concentration: f64,

    /// Number of independent clusters grown by `clusters`
    #[serde(default = "default_realisations")]
    pub realisations: usize,

    /// Fixed RNG seed (optional; OS entropy when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Stop largest-component enumeration once no remaining component can win
    #[serde(default = "default_early_exit")]
    pub early_exit: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            concentration: DEFAULT_CONCENTRATION,
            realisations: DEFAULT_REALISATIONS,
            seed: None,
            early_exit: default_early_exit(),
            format: OutputFormat::default(),
        }
    }
}

fn default_concentration() -> f64 {
    DEFAULT_CONCENTRATION
}

fn default_realisations() -> usize {
    DEFAULT_REALISATIONS
}

fn default_early_exit() -> bool {
    true
}

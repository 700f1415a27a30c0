//! Cluster-size statistics over repeated realisations
//!
//! For `NR` cluster sizes grown from the same start node:
//! - `n_s = count(s) / (s * NR)`, the cluster number of size `s`
//! - `w_s = count(s) / NR`, the probability the start node sits in an s-cluster
//! - `S`, the plain mean size, and `S' = Σ s·n_s / Σ n_s`

use std::collections::BTreeMap;

use serde::Serialize;

use crate::bail_invalid;
use crate::error::Result;

/// One distinct cluster size and its derived frequencies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeBin {
    pub size: usize,
    pub count: usize,
    pub cluster_number: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterStatistics {
    pub realisations: usize,
    /// One bin per distinct size, ascending
    pub bins: Vec<SizeBin>,
    pub mean_size: f64,
    pub alternative_mean_size: f64,
}

impl ClusterStatistics {
    pub fn from_sizes(sizes: &[usize]) -> Result<Self> {
        if sizes.is_empty() {
            bail_invalid!("cluster sizes", "empty sample");
        }
        if sizes.contains(&0) {
            bail_invalid!("cluster sizes", "a cluster cannot be empty");
        }

        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for &s in sizes {
            *counts.entry(s).or_default() += 1;
        }

        let nr = sizes.len() as f64;
        let bins: Vec<SizeBin> = counts
            .into_iter()
            .map(|(size, count)| SizeBin {
                size,
                count,
                cluster_number: count as f64 / (size as f64 * nr),
                weight: count as f64 / nr,
            })
            .collect();

        let mean_size = sizes.iter().map(|&s| s as f64).sum::<f64>() / nr;
        let weighted: f64 = bins.iter().map(|b| b.size as f64 * b.cluster_number).sum();
        let total: f64 = bins.iter().map(|b| b.cluster_number).sum();

        Ok(Self {
            realisations: sizes.len(),
            bins,
            mean_size,
            alternative_mean_size: weighted / total,
        })
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.bins.iter().map(|b| b.size)
    }
}

//! CLI argument parsing for hypergraphs
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --seed. Graph parameters are shared by every subcommand.

pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use hypergraphs_core::format::OutputFormat;
use hypergraphs_core::graph::Model;
use parse::{parse_format, parse_model};

/// Hypergraphs - percolation clusters on the hypercube and the PXP graph
#[derive(Parser, Debug)]
#[command(name = "hypergraphs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records) [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or directive (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "HYPERGRAPHS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Explicit config file (must exist)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// RNG seed; a fresh one is drawn and reported when absent
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph and percolation parameters
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph dimension N
    #[arg(long, short = 'n')]
    pub dimension: u32,

    /// Edge-activation probability p in [0, 1]
    #[arg(long, short = 'p')]
    pub concentration: Option<f64>,

    /// Graph model (hypercube, pxp)
    #[arg(long, value_parser = parse_model)]
    pub model: Option<Model>,
}

/// Which cluster a Hamiltonian matrix covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HamiltonianScope {
    /// Every candidate edge, no traversal
    #[default]
    Full,
    /// The cluster grown from --start
    Single,
    /// The largest cluster of a full enumeration
    Largest,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grow independent clusters from one node and report their sizes
    Clusters {
        #[command(flatten)]
        graph: GraphArgs,

        /// Number of clusters to grow [default: from config, else 1000]
        #[arg(long, short = 'r')]
        realisations: Option<usize>,

        /// Start node
        #[arg(long, short = 's', default_value_t = 0)]
        start: usize,

        /// Report cluster numbers and mean sizes instead of raw sizes
        #[arg(long)]
        stats: bool,
    },

    /// Label every component and report the largest
    Largest {
        #[command(flatten)]
        graph: GraphArgs,

        /// Enumerate every component even once the largest is certain
        #[arg(long)]
        no_early_exit: bool,
    },

    /// Hop distances within one cluster
    Paths {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        #[arg(long, short = 's', default_value_t = 0, conflicts_with = "largest")]
        start: usize,

        /// Use the largest cluster instead of the one containing --start
        #[arg(long)]
        largest: bool,

        /// Enumerate every component even once the largest is certain
        #[arg(long)]
        no_early_exit: bool,
    },

    /// Dense adjacency matrix of sampled edges
    Hamiltonian {
        #[command(flatten)]
        graph: GraphArgs,

        /// Matrix scope
        #[arg(long, value_enum, default_value_t = HamiltonianScope::Full)]
        scope: HamiltonianScope,

        /// Start node (single scope only) [default: 0]
        #[arg(long, short = 's')]
        start: Option<usize>,

        /// Enumerate every component even once the largest is certain
        #[arg(long)]
        no_early_exit: bool,
    },

    /// List the PXP site table for dimension N
    Sites {
        /// Graph dimension N
        #[arg(long, short = 'n')]
        dimension: u32,
    },
}

//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs};
use crate::commands::report::Run;
use hypergraphs_core::config::RunConfig;
use hypergraphs_core::error::Result;
use hypergraphs_core::format::OutputFormat;
use hypergraphs_core::graph::{Concentration, Dimension, ModelTopology, Percolation, Topology};
use hypergraphs_core::rng::{engine_rng, fresh_seed, EngineRng};

/// Shared context for command execution
///
/// Settings resolve as command-line flag, then config file, then built-in default.
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RunConfig,
    pub seed: u64,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: RunConfig, start: Instant) -> Self {
        let seed = cli.seed.or(config.seed).unwrap_or_else(fresh_seed);
        Self {
            cli,
            config,
            seed,
            start,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.format)
    }

    /// Engine generator for this invocation, seeded once
    pub fn rng(&self) -> EngineRng {
        engine_rng(Some(self.seed))
    }

    pub fn early_exit(&self, no_early_exit: bool) -> bool {
        !no_early_exit && self.config.early_exit
    }

    /// Validate the graph parameters and build the percolation problem
    pub fn percolation(
        &self,
        mode: &'static str,
        graph: &GraphArgs,
    ) -> Result<(Run, Percolation<ModelTopology>)> {
        let dimension = Dimension::new(graph.dimension)?;
        let concentration =
            Concentration::new(graph.concentration.unwrap_or(self.config.concentration))?;
        let model = graph.model.unwrap_or(self.config.model);

        let topology = ModelTopology::build(model, dimension)?;
        let run = Run {
            mode,
            model,
            dimension: dimension.get(),
            concentration: Some(concentration.value()),
            seed: Some(self.seed),
            node_count: topology.node_count(),
        };
        tracing::debug!(
            mode,
            %model,
            %dimension,
            %concentration,
            seed = self.seed,
            "resolved_run"
        );
        Ok((run, Percolation::new(topology, concentration)))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("hypergraphs {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Percolation clusters on the hypercube and the PXP graph.");
        println!();
        println!("Run `hypergraphs --help` for usage information.");
        Ok(())
    }
}

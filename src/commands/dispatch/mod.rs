//! Command dispatch logic for hypergraphs

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use hypergraphs_core::config::RunConfig;
use hypergraphs_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = RunConfig::discover(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => {
            cmd.execute(&ctx)?;
            debug!(elapsed = ?start.elapsed(), "execute_command");
            Ok(())
        }
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Clusters {
                graph,
                realisations,
                start,
                stats,
            } => commands::clusters::execute(ctx, graph, *realisations, *start, *stats),
            Commands::Largest {
                graph,
                no_early_exit,
            } => commands::largest::execute(ctx, graph, ctx.early_exit(*no_early_exit)),
            Commands::Paths {
                graph,
                start,
                largest,
                no_early_exit,
            } => {
                let target = if *largest {
                    commands::paths::Target::Largest {
                        early_exit: ctx.early_exit(*no_early_exit),
                    }
                } else {
                    commands::paths::Target::From(*start)
                };
                commands::paths::execute(ctx, graph, target)
            }
            Commands::Hamiltonian {
                graph,
                scope,
                start,
                no_early_exit,
            } => commands::hamiltonian::execute(
                ctx,
                graph,
                *scope,
                *start,
                ctx.early_exit(*no_early_exit),
            ),
            Commands::Sites { dimension } => commands::sites::execute(ctx, *dimension),
        }
    }
}

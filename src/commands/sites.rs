//! `hypergraphs sites` command

use hypergraphs_core::error::Result;
use hypergraphs_core::format::OutputFormat;
use hypergraphs_core::graph::{Dimension, Model, Pxp};

use crate::commands::dispatch::CommandContext;
use crate::commands::report::Run;

/// List the PXP-allowed basis states for dimension N
pub fn execute(ctx: &CommandContext, dimension: u32) -> Result<()> {
    let dimension = Dimension::new(dimension)?;
    let pxp = Pxp::new(dimension)?;
    let run = Run {
        mode: "sites",
        model: Model::Pxp,
        dimension: dimension.get(),
        concentration: None,
        seed: None,
        node_count: pxp.sites().len(),
    };
    let width = dimension.bits();

    match ctx.format() {
        OutputFormat::Json => {
            let json = run.to_json(serde_json::json!({ "sites": pxp.sites() }));
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{} PXP sites for N={}", pxp.sites().len(), dimension);
            }
            for (node, state) in pxp.sites().iter().enumerate() {
                println!("{:>8}  {:0width$b}", node, state, width = width);
            }
        }
        OutputFormat::Records => {
            println!("{}", run.header(&[]));
            for (node, state) in pxp.sites().iter().enumerate() {
                println!("S {} {}", node, state);
            }
        }
    }
    Ok(())
}

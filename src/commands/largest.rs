//! `hypergraphs largest` command

use hypergraphs_core::error::Result;
use hypergraphs_core::format::{join_values, OutputFormat};
use hypergraphs_core::graph::LargestCluster;
use hypergraphs_core::trace_time;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::report::Run;

/// Label every component and report the largest
pub fn execute(ctx: &CommandContext, graph: &GraphArgs, early_exit: bool) -> Result<()> {
    let (run, percolation) = ctx.percolation("largest", graph)?;

    let mut rng = ctx.rng();
    let largest = percolation.largest_cluster(&mut rng, early_exit)?;
    trace_time!(ctx.start, "largest_cluster", size = largest.enumeration.largest_size);

    output(ctx, &run, early_exit, &largest)
}

fn output(ctx: &CommandContext, run: &Run, early_exit: bool, largest: &LargestCluster) -> Result<()> {
    let e = &largest.enumeration;
    match ctx.format() {
        OutputFormat::Json => {
            let mut payload = serde_json::to_value(largest)?;
            if let Some(fields) = payload.as_object_mut() {
                fields.insert("early_exit".to_string(), serde_json::json!(early_exit));
            }
            println!("{}", serde_json::to_string_pretty(&run.to_json(payload))?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}", run.banner());
            }
            print!(
                "largest component: label {}, {} of {} nodes, {} components enumerated",
                e.largest_label,
                e.largest_size,
                run.node_count,
                e.component_count()
            );
            if e.stopped_early {
                print!(" (stopped early, {} nodes unvisited)", run.node_count - e.total_visited);
            }
            println!();
            println!("{}", join_values(&largest.nodes));
        }
        OutputFormat::Records => {
            println!(
                "{}",
                run.header(&[
                    ("label", e.largest_label.to_string()),
                    ("size", e.largest_size.to_string()),
                    ("components", e.component_count().to_string()),
                    ("visited", e.total_visited.to_string()),
                    ("stopped_early", e.stopped_early.to_string()),
                ])
            );
            for (label, size) in e.component_sizes.iter().enumerate() {
                println!("K {} {}", label, size);
            }
            for node in &largest.nodes {
                println!("N {}", node);
            }
        }
    }
    Ok(())
}

//! `hypergraphs paths` command
//!
//! Hop distances under percolation, either from a start node within its own
//! cluster or within the largest cluster of the graph.

use hypergraphs_core::error::Result;
use hypergraphs_core::format::{join_values, OutputFormat};
use hypergraphs_core::trace_time;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::report::Run;

/// Which cluster to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    From(usize),
    Largest { early_exit: bool },
}

pub fn execute(ctx: &CommandContext, graph: &GraphArgs, target: Target) -> Result<()> {
    let (run, percolation) = ctx.percolation("paths", graph)?;
    let mut rng = ctx.rng();

    let (distances, extra) = match target {
        Target::From(start) => {
            let distances = percolation.single_cluster_distances(&mut rng, start)?;
            (distances, serde_json::json!({ "start": start }))
        }
        Target::Largest { early_exit } => {
            let result = percolation.largest_cluster_distances(&mut rng, early_exit)?;
            let e = &result.enumeration;
            let extra = serde_json::json!({
                "largest": true,
                "early_exit": early_exit,
                "largest_label": e.largest_label,
                "components": e.component_count(),
                "stopped_early": e.stopped_early,
            });
            (result.distances, extra)
        }
    };
    trace_time!(ctx.start, "cluster_distances", size = distances.len());

    output(ctx, &run, target, extra, &distances)
}

fn summary(distances: &[usize]) -> (usize, f64) {
    let max = distances.iter().copied().max().unwrap_or(0);
    let mean = if distances.is_empty() {
        0.0
    } else {
        distances.iter().sum::<usize>() as f64 / distances.len() as f64
    };
    (max, mean)
}

fn output(
    ctx: &CommandContext,
    run: &Run,
    target: Target,
    extra: serde_json::Value,
    distances: &[usize],
) -> Result<()> {
    let (max, mean) = summary(distances);
    match ctx.format() {
        OutputFormat::Json => {
            let mut json = run.to_json(extra);
            if let Some(fields) = json.as_object_mut() {
                fields.insert("size".to_string(), serde_json::json!(distances.len()));
                fields.insert("max_distance".to_string(), serde_json::json!(max));
                fields.insert("mean_distance".to_string(), serde_json::json!(mean));
                fields.insert("distances".to_string(), serde_json::json!(distances));
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                match target {
                    Target::From(start) => println!("{}: cluster of node {}", run.banner(), start),
                    Target::Largest { .. } => println!("{}: largest cluster", run.banner()),
                }
            }
            println!(
                "size {}, max distance {}, mean distance {:.4}",
                distances.len(),
                max,
                mean
            );
            println!("{}", join_values(distances));
        }
        OutputFormat::Records => {
            let scope = match target {
                Target::From(start) => ("start", start.to_string()),
                Target::Largest { .. } => ("scope", "largest".to_string()),
            };
            println!(
                "{}",
                run.header(&[
                    scope,
                    ("size", distances.len().to_string()),
                    ("max_distance", max.to_string()),
                ])
            );
            for d in distances {
                println!("D {}", d);
            }
        }
    }
    Ok(())
}

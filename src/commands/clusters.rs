//! `hypergraphs clusters` command
//!
//! Grows independent clusters from one start node and reports each size,
//! or the derived cluster statistics with `--stats`.

use hypergraphs_core::error::Result;
use hypergraphs_core::format::{join_values, OutputFormat};
use hypergraphs_core::stats::ClusterStatistics;
use hypergraphs_core::trace_time;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::report::Run;

pub fn execute(
    ctx: &CommandContext,
    graph: &GraphArgs,
    realisations: Option<usize>,
    start: usize,
    stats: bool,
) -> Result<()> {
    let (run, percolation) = ctx.percolation("clusters", graph)?;
    let realisations = realisations.unwrap_or(ctx.config.realisations);

    let mut rng = ctx.rng();
    let sizes = percolation.cluster_sizes(&mut rng, realisations, start)?;
    trace_time!(ctx.start, "grow_clusters", realisations = realisations);

    if stats {
        let statistics = ClusterStatistics::from_sizes(&sizes)?;
        output_statistics(ctx, &run, start, &statistics)
    } else {
        output_sizes(ctx, &run, start, &sizes)
    }
}

fn output_sizes(ctx: &CommandContext, run: &Run, start: usize, sizes: &[usize]) -> Result<()> {
    match ctx.format() {
        OutputFormat::Json => {
            let json = run.to_json(serde_json::json!({
                "start": start,
                "realisations": sizes.len(),
                "sizes": sizes,
            }));
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{}: {} clusters from node {}",
                    run.banner(),
                    sizes.len(),
                    start
                );
            }
            println!("{}", join_values(sizes));
        }
        OutputFormat::Records => {
            println!(
                "{}",
                run.header(&[
                    ("start", start.to_string()),
                    ("realisations", sizes.len().to_string()),
                ])
            );
            for size in sizes {
                println!("C {}", size);
            }
        }
    }
    Ok(())
}

fn output_statistics(
    ctx: &CommandContext,
    run: &Run,
    start: usize,
    statistics: &ClusterStatistics,
) -> Result<()> {
    match ctx.format() {
        OutputFormat::Json => {
            let json = run.to_json(serde_json::json!({
                "start": start,
                "statistics": statistics,
            }));
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "{}: {} clusters from node {}",
                    run.banner(),
                    statistics.realisations,
                    start
                );
            }
            println!("S  = {:.6}", statistics.mean_size);
            println!("S' = {:.6}", statistics.alternative_mean_size);
            println!("{:>10} {:>8} {:>14} {:>10}", "size", "count", "n_s", "w_s");
            for bin in &statistics.bins {
                println!(
                    "{:>10} {:>8} {:>14.6e} {:>10.6}",
                    bin.size, bin.count, bin.cluster_number, bin.weight
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                run.header(&[
                    ("start", start.to_string()),
                    ("realisations", statistics.realisations.to_string()),
                    ("mean", statistics.mean_size.to_string()),
                    ("alt_mean", statistics.alternative_mean_size.to_string()),
                ])
            );
            for bin in &statistics.bins {
                println!(
                    "B size={} count={} n_s={} w_s={}",
                    bin.size, bin.count, bin.cluster_number, bin.weight
                );
            }
        }
    }
    Ok(())
}

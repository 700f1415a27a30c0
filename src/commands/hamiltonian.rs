//! `hypergraphs hamiltonian` command

use hypergraphs_core::bail_usage;
use hypergraphs_core::error::Result;
use hypergraphs_core::format::{join_values, OutputFormat};
use hypergraphs_core::graph::matrix::CONNECTED;
use hypergraphs_core::graph::{AdjacencyMatrix, Enumeration};
use hypergraphs_core::trace_time;

use crate::cli::{GraphArgs, HamiltonianScope};
use crate::commands::dispatch::CommandContext;
use crate::commands::report::Run;

/// Build the adjacency matrix for the requested scope
pub fn execute(
    ctx: &CommandContext,
    graph: &GraphArgs,
    scope: HamiltonianScope,
    start: Option<usize>,
    early_exit: bool,
) -> Result<()> {
    if start.is_some() && scope != HamiltonianScope::Single {
        bail_usage!("--start only applies to --scope single");
    }
    let (run, percolation) = ctx.percolation("hamiltonian", graph)?;
    let mut rng = ctx.rng();

    let (matrix, size, enumeration) = match scope {
        HamiltonianScope::Full => (percolation.hamiltonian_full(&mut rng)?, None, None),
        HamiltonianScope::Single => {
            let h = percolation.hamiltonian_single(&mut rng, start.unwrap_or(0))?;
            (h.matrix, Some(h.size), None)
        }
        HamiltonianScope::Largest => {
            let h = percolation.hamiltonian_largest(&mut rng, early_exit)?;
            (h.matrix, Some(h.size), h.enumeration)
        }
    };
    trace_time!(ctx.start, "hamiltonian", edges = matrix.edge_count());

    output(ctx, &run, scope, size, enumeration.as_ref(), &matrix)
}

fn scope_name(scope: HamiltonianScope) -> &'static str {
    match scope {
        HamiltonianScope::Full => "full",
        HamiltonianScope::Single => "single",
        HamiltonianScope::Largest => "largest",
    }
}

/// Upper-triangle edges, row by row
fn edges(matrix: &AdjacencyMatrix) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..matrix.side()).flat_map(move |u| {
        (u + 1..matrix.side())
            .filter(move |&v| matrix.get(u, v) == CONNECTED)
            .map(move |v| (u, v))
    })
}

fn output(
    ctx: &CommandContext,
    run: &Run,
    scope: HamiltonianScope,
    size: Option<usize>,
    enumeration: Option<&Enumeration>,
    matrix: &AdjacencyMatrix,
) -> Result<()> {
    match ctx.format() {
        OutputFormat::Json => {
            let mut payload = serde_json::json!({
                "scope": scope_name(scope),
                "edges": matrix.edge_count(),
                "matrix": matrix,
            });
            if let Some(fields) = payload.as_object_mut() {
                if let Some(size) = size {
                    fields.insert("size".to_string(), serde_json::json!(size));
                }
                if let Some(e) = enumeration {
                    fields.insert("enumeration".to_string(), serde_json::to_value(e)?);
                }
            }
            println!("{}", serde_json::to_string_pretty(&run.to_json(payload))?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}: {} matrix", run.banner(), scope_name(scope));
            }
            match size {
                Some(size) => println!("size {}, {} edges", size, matrix.edge_count()),
                None => println!("{} edges", matrix.edge_count()),
            }
            for row in matrix.rows() {
                println!("{}", join_values(row));
            }
        }
        OutputFormat::Records => {
            let mut extra = vec![
                ("scope", scope_name(scope).to_string()),
                ("side", matrix.side().to_string()),
                ("edges", matrix.edge_count().to_string()),
            ];
            if let Some(size) = size {
                extra.push(("size", size.to_string()));
            }
            println!("{}", run.header(&extra));
            for (u, v) in edges(matrix) {
                println!("E {} {}", u, v);
            }
        }
    }
    Ok(())
}

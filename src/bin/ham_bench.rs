//! Times both search strategies on a seeded ring-plus-chords graph.
//!
//! Set `RUST_LOG=debug` to see branch spawns and the winning branch.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use hamcycle::{
    ring_with_chords, solve_fork_join, solve_fork_join_with, solve_thread_budget, DirectedGraph,
    HamiltonianCycle, RayonExecutor,
};

#[derive(Parser)]
#[command(name = "ham-bench")]
#[command(about = "Time thread-budget and fork-join Hamiltonian cycle search", long_about = None)]
struct Cli {
    /// Number of vertices in the generated graph
    #[arg(long, default_value_t = 100)]
    vertices: usize,

    /// Random extra out-edges attempted per vertex
    #[arg(long, default_value_t = 3)]
    chords: usize,

    /// Seed for the graph generator
    #[arg(long, default_value_t = 123)]
    seed: u64,

    /// Start vertex of the cycle
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Thread budget for the thread-budget strategy
    #[arg(long, default_value_t = 8)]
    budget: usize,

    /// Worker threads for a dedicated fork-join pool, at least 1 (default: rayon's global pool)
    #[arg(long)]
    pool_threads: Option<usize>,

    /// Which strategies to run
    #[arg(long, value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,

    /// Print a JSON report instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Manual thread budget only
    ThreadBudget,
    /// Fork-join only
    ForkJoin,
    /// Both, thread budget first
    Both,
}

#[derive(Serialize)]
struct Report {
    vertices: usize,
    edges: usize,
    seed: u64,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    strategy: &'static str,
    elapsed_ms: u64,
    cycle: Option<HamiltonianCycle>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let graph = ring_with_chords(cli.vertices, cli.chords, cli.seed);
    let mut runs = Vec::new();

    if matches!(cli.strategy, Strategy::ThreadBudget | Strategy::Both) {
        if !cli.json {
            println!("Thread-budget search (budget: {})...", cli.budget);
        }
        let start = Instant::now();
        let cycle = solve_thread_budget(&graph, cli.start, cli.budget)
            .context("thread-budget search failed")?;
        runs.push(finish(&graph, "thread-budget", start, cycle, cli.json)?);
    }

    if matches!(cli.strategy, Strategy::ForkJoin | Strategy::Both) {
        if !cli.json {
            println!("Fork-join search...");
        }
        let start = Instant::now();
        let cycle = match cli.pool_threads {
            Some(threads) => {
                let executor = RayonExecutor::with_threads(threads)?;
                solve_fork_join_with(&graph, cli.start, &executor)
            }
            None => solve_fork_join(&graph, cli.start),
        }
        .context("fork-join search failed")?;
        runs.push(finish(&graph, "fork-join", start, cycle, cli.json)?);
    }

    if cli.json {
        let report = Report {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            seed: cli.seed,
            runs,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn finish(
    graph: &DirectedGraph,
    strategy: &'static str,
    start: Instant,
    cycle: Option<HamiltonianCycle>,
    quiet: bool,
) -> Result<Run> {
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if let Some(cycle) = &cycle {
        anyhow::ensure!(
            cycle.is_valid_for(graph),
            "{strategy} returned an invalid cycle: {:?}",
            cycle.vertices()
        );
    }

    if !quiet {
        println!("{strategy} time: {elapsed_ms} ms");
        match &cycle {
            Some(cycle) => println!("Result: found cycle (length {})", cycle.len()),
            None => println!("Result: no cycle found"),
        }
        println!("--------------------------------------------------");
    }

    Ok(Run {
        strategy,
        elapsed_ms,
        cycle,
    })
}

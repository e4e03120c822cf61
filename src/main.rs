use decomposition_bnb::exact::{max_clique_exact, min_vertex_cover_exact};
use decomposition_bnb::graph::generators::gnp_random_graph;
use decomposition_bnb::graph::{BaseGraph, HashMapGraph};
use decomposition_bnb::logging::build_logger_for_level;
use decomposition_bnb::objective::{MaxClique, MinVertexCover, Objective};
use decomposition_bnb::{BranchAndBound, DecompositionError, SearchResult};
use log::{info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::process;
use std::str::FromStr;
use structopt::StructOpt;

#[derive(Clone, Copy, Debug)]
enum Problem {
    Clique,
    Cover,
}

impl FromStr for Problem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clique" => Ok(Problem::Clique),
            "cover" => Ok(Problem::Cover),
            other => Err(format!("unknown problem '{}', expected clique or cover", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "decomp-cli",
    about = "Runs decomposition based branch and bound on random graphs and checks every answer against an exact solver."
)]
struct Opt {
    /// Problem to solve: clique or cover.
    #[structopt(short, long, default_value = "clique")]
    problem: Problem,

    /// Number of random graphs to check.
    #[structopt(short, long, default_value = "100")]
    rounds: usize,

    /// Smallest number of nodes of a random graph.
    #[structopt(long, default_value = "20")]
    min_nodes: usize,

    /// Largest number of nodes of a random graph.
    #[structopt(long, default_value = "40")]
    max_nodes: usize,

    /// Smallest edge probability.
    #[structopt(long, default_value = "0.01")]
    min_probability: f64,

    /// Largest edge probability.
    #[structopt(long, default_value = "0.99")]
    max_probability: f64,

    /// Largest subproblem handed to the leaf solver.
    #[structopt(short, long, default_value = "10")]
    limit: usize,

    /// Seed of the graph generator.
    #[structopt(short, long, default_value = "0")]
    seed: u64,

    /// Log verbosity, repeat for more.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run<O: Objective>(
    graph: &HashMapGraph,
    limit: usize,
    leaf_solver: fn(&HashMapGraph) -> Vec<usize>,
) -> Result<(SearchResult, usize), DecompositionError> {
    let result = BranchAndBound::<O>::with_size_limit(limit).compute(graph, leaf_solver)?;
    O::verify(graph, &result.solution).map_err(DecompositionError::LeafSolverContract)?;
    Ok((result, leaf_solver(graph).len()))
}

fn main() {
    let opt = Opt::from_args();
    build_logger_for_level(level(opt.verbose));

    if opt.min_nodes == 0 || opt.min_nodes > opt.max_nodes {
        eprintln!("node range must be non-empty and start at 1 or more");
        process::exit(2);
    }
    if !(0.0..=1.0).contains(&opt.min_probability)
        || !(0.0..=1.0).contains(&opt.max_probability)
        || opt.min_probability > opt.max_probability
    {
        eprintln!("probability range must lie within [0, 1]");
        process::exit(2);
    }

    let mut rng = StdRng::seed_from_u64(opt.seed);
    let mut failures = 0;
    for round in 0..opt.rounds {
        let n = rng.gen_range(opt.min_nodes..=opt.max_nodes);
        let p = rng.gen_range(opt.min_probability..=opt.max_probability);
        let graph = gnp_random_graph(n, p, &mut rng);

        let outcome = match opt.problem {
            Problem::Clique => run::<MaxClique>(&graph, opt.limit, max_clique_exact),
            Problem::Cover => run::<MinVertexCover>(&graph, opt.limit, min_vertex_cover_exact),
        };
        match outcome {
            Ok((result, expected)) if result.solution.len() == expected => {
                info!(
                    "round {}: n = {}, m = {}, size {} matches, {} leaf calls, {} subproblems",
                    round,
                    n,
                    graph.size(),
                    expected,
                    result.statistics.leaf_calls,
                    result.statistics.subproblems
                );
            }
            Ok((result, expected)) => {
                failures += 1;
                warn!(
                    "round {}: n = {}, p = {:.3}, found {} but the optimum is {}",
                    round,
                    n,
                    p,
                    result.solution.len(),
                    expected
                );
            }
            Err(e) => {
                failures += 1;
                warn!("round {}: n = {}, p = {:.3}, search failed: {}", round, n, p, e);
            }
        }
    }

    println!(
        "{} of {} rounds matched the exact solver",
        opt.rounds - failures,
        opt.rounds
    );
    if failures > 0 {
        process::exit(1);
    }
}

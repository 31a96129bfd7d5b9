//! Binary that reads a graph as edge list from a file or standard in, computes the four
//! dominating set and vertex cover solutions and reports their sizes and running times.

use std::error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{info, warn};

use dom_and_cover::{graph::UGraph, cust_error::ProcessingError, logging};

#[derive(Parser, Debug)]
#[command(about = "Computes dominating sets and vertex covers of an undirected graph")]
struct Args {
    /// Edge list to read, standard in if omitted.
    input: Option<PathBuf>,
    /// Graphs with more nodes skip the exact computations.
    #[arg(long, default_value_t = 40)]
    exact_limit: usize,
    /// Print the computed sets, not only their sizes.
    #[arg(long)]
    print_sets: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn run<F>(name: &str, graph: &mut UGraph, print: bool, out: &mut impl Write, compute: F)
    -> Result<Vec<usize>, Box<dyn error::Error>>
    where F: FnOnce(&mut UGraph) -> Vec<usize> {
    let start = Instant::now();
    let solution = compute(graph);
    let seconds = start.elapsed().as_secs_f64();
    writeln!(out, "{}: {} nodes in {:.3} seconds", name, solution.len(), seconds)?;
    if print {
        UGraph::write_solution(&solution, &mut *out)?;
    }
    Ok(solution)
}

fn validate(name: &str, valid: bool) -> Result<(), ProcessingError> {
    if !valid {
        return Err(ProcessingError::InvalidSolution(name.to_owned()))
    }
    Ok(())
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut graph = match &args.input {
        Some(path) => UGraph::read_edge_list(BufReader::new(File::open(path)?))?,
        None => UGraph::read_edge_list(io::stdin().lock())?,
    };
    info!("loaded graph with {} nodes and {} edges", graph.num_nodes(), graph.num_edges());

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "The graph has {} nodes and {} edges.", graph.num_nodes(), graph.num_edges())?;

    let greedy = run("Greedy dominating set", &mut graph, args.print_sets, &mut stdout,
                     UGraph::compute_greedy_dominating_set)?;
    validate("greedy dominating set", graph.is_dominating_set(&greedy))?;
    let approx = run("2-approximate vertex cover", &mut graph, args.print_sets, &mut stdout,
                     UGraph::compute_approx_vertex_cover)?;
    validate("2-approximate vertex cover", graph.is_vertex_cover(&approx))?;

    if graph.num_nodes() > args.exact_limit {
        warn!("skipping exact computations: {} nodes exceed the limit of {}",
              graph.num_nodes(), args.exact_limit);
        return Ok(())
    }
    let minimum = run("Minimum dominating set", &mut graph, args.print_sets, &mut stdout,
                      UGraph::compute_minimum_dominating_set)?;
    validate("minimum dominating set", graph.is_dominating_set(&minimum))?;
    let cover = run("Minimum vertex cover", &mut graph, args.print_sets, &mut stdout,
                    UGraph::compute_minimum_vertex_cover)?;
    validate("minimum vertex cover", graph.is_vertex_cover(&cover))?;
    Ok(())
}

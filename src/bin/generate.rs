//! Binary that writes a random graph as edge list to standard out.

use std::error;
use std::io;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dom_and_cover::generator::random_graph;
use dom_and_cover::logging;

#[derive(Parser, Debug)]
#[command(about = "Generates a random undirected graph")]
struct Args {
    #[arg(long)]
    nodes: usize,
    /// Every node draws up to `max_neighbors - 1` neighbors.
    #[arg(long)]
    max_neighbors: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = random_graph(args.nodes, args.max_neighbors, &mut rng)?;
    log::info!("generated {} nodes and {} edges", graph.num_nodes(), graph.num_edges());
    let stdout = io::stdout();
    graph.write_edge_list(stdout.lock())?;
    Ok(())
}

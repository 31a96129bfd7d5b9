//! Binary that shrinks an edge-list dataset and writes the result to standard out.

use std::error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;

use dom_and_cover::downsample::downsample_edge_list;
use dom_and_cover::logging;

#[derive(Parser, Debug)]
#[command(about = "Maps an edge list onto fewer nodes and edges")]
struct Args {
    input: PathBuf,
    #[arg(long)]
    nodes: usize,
    #[arg(long)]
    edges: usize,
    #[arg(short, long)]
    verbose: bool,
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);
    let input = BufReader::new(File::open(&args.input)?);
    let stdout = io::stdout();
    let written = downsample_edge_list(input, stdout.lock(), args.nodes, args.edges)?;
    log::info!("wrote {} edges", written);
    Ok(())
}

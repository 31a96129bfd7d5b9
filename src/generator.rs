//! Random graph generation.

use rand::seq::SliceRandom;
use rand::Rng;
use crate::cust_error::ProcessingError;
use crate::graph::UGraph;

/// Returns a random graph with the nodes `0..num_nodes`.
///
/// Every node draws a number `k` uniformly from `0..max_neighbors` and is connected to the first
/// `k` nodes of a shuffled list of all other nodes. Edges drawn twice are kept once, so a node can
/// end up with more than `max_neighbors` neighbors.
///
/// Fails if `max_neighbors` is not between 1 and `num_nodes`.
pub fn random_graph<R: Rng>(num_nodes: usize, max_neighbors: usize, rng: &mut R)
    -> Result<UGraph, ProcessingError> {
    if max_neighbors < 1 || max_neighbors > num_nodes {
        return Err(ProcessingError::InvalidParameter(format!(
            "maximum number of neighbors must be between 1 and {}, got {}",
            num_nodes, max_neighbors
        )))
    }
    let mut graph = UGraph::new();
    for node in 0..num_nodes {
        graph.add_node(node);
    }
    for node in 0..num_nodes {
        let mut potential: Vec<usize> = (0..num_nodes).filter(|other| *other != node).collect();
        let num_neighbors = rng.gen_range(0..max_neighbors);
        potential.shuffle(rng);
        for neigh in potential.into_iter().take(num_neighbors) {
            graph.add_edge(node, neigh)?;
        }
    }
    Ok(graph)
}

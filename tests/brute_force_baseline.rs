//! Compares the exact engines with a plain enumeration of all node subsets on small random graphs.

use dom_and_cover::generator::random_graph;
use dom_and_cover::graph::UGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns the members of `mask` as node identifiers of `nodes`.
fn subset(nodes: &[usize], mask: u32) -> Vec<usize> {
    nodes.iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, id)| *id)
        .collect()
}

fn brute_force_min<F: Fn(&[usize]) -> bool>(graph: &UGraph, valid: F) -> usize {
    let nodes = graph.nodes();
    (0u32..(1 << nodes.len()))
        .map(|mask| subset(&nodes, mask))
        .filter(|set| valid(set.as_slice()))
        .map(|set| set.len())
        .min()
        .expect("the full node set is always valid")
}

fn small_graphs() -> Vec<UGraph> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graphs = Vec::new();
    for _ in 0..60 {
        let num_nodes = rng.gen_range(1..=12);
        let max_neighbors = rng.gen_range(1..=num_nodes.min(5));
        graphs.push(random_graph(num_nodes, max_neighbors, &mut rng).unwrap());
    }
    graphs
}

#[test]
fn minimum_dominating_set_matches_enumeration() {
    for mut graph in small_graphs() {
        let expected = brute_force_min(&graph, |set| graph.is_dominating_set(set));
        let sol = graph.compute_minimum_dominating_set();
        assert!(graph.is_dominating_set(&sol), "invalid dominating set {:?} for\n{}", sol, graph);
        assert_eq!(sol.len(), expected, "not minimum for\n{}", graph);
        assert!(graph.is_reset());
    }
}

#[test]
fn minimum_vertex_cover_matches_enumeration() {
    for mut graph in small_graphs() {
        let expected = brute_force_min(&graph, |set| graph.is_vertex_cover(set));
        let sol = graph.compute_minimum_vertex_cover();
        assert!(graph.is_vertex_cover(&sol), "invalid vertex cover {:?} for\n{}", sol, graph);
        assert_eq!(sol.len(), expected, "not minimum for\n{}", graph);
        assert!(graph.is_reset());
    }
}

#[test]
fn heuristics_respect_bounds() {
    for mut graph in small_graphs() {
        let greedy = graph.compute_greedy_dominating_set();
        let minimum = graph.compute_minimum_dominating_set();
        assert!(graph.is_dominating_set(&greedy));
        assert!(minimum.len() <= greedy.len());

        let approx = graph.compute_approx_vertex_cover();
        let cover = graph.compute_minimum_vertex_cover();
        assert!(graph.is_vertex_cover(&approx));
        assert!(approx.len() <= 2 * cover.len());
        assert!(graph.is_reset());
    }
}

#[test]
fn repeated_calls_agree() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let mut graph = random_graph(14, 4, &mut rng).unwrap();
        let computations: [fn(&mut UGraph) -> Vec<usize>; 4] = [
            UGraph::compute_minimum_dominating_set,
            UGraph::compute_greedy_dominating_set,
            UGraph::compute_approx_vertex_cover,
            UGraph::compute_minimum_vertex_cover,
        ];
        for compute in computations {
            let first = compute(&mut graph);
            assert!(graph.is_reset());
            assert_eq!(compute(&mut graph), first);
        }
    }
}

#[test]
fn loaded_graph_is_solved() {
    let input = "# path and a triangle\n0 1\n1 2\n2 3\n3 4\n10 11\n11 12\n12 10\n";
    let mut graph = UGraph::read_edge_list(input.as_bytes()).unwrap();
    assert_eq!(graph.compute_minimum_dominating_set().len(), 3);
    assert_eq!(graph.compute_minimum_vertex_cover().len(), 4);
}

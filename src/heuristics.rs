//! Implementation of the polynomial heuristics: a greedy dominating set and the classic
//! 2-approximation for the Vertex Cover Problem.
//!
//! Both return with every marker of the graph reset to `Unassigned`.

use log::info;
use crate::graph::UGraph;
use crate::marker::{Assignment, Coverage};

impl UGraph {

    /// Counts the nodes in the closed neighborhood of `node` that are not dominated yet.
    fn undominated_in_closed_neighborhood(&self, node: usize) -> usize {
        let own = usize::from(!self.assignment(node).is_decided());
        own + self.neighbor_indices(node)
            .filter(|neigh| !self.assignment(*neigh).is_decided())
            .count()
    }

    /// Greedily computes a dominating set: repeatedly picks the node whose closed neighborhood
    /// holds the most undominated nodes, until every node is dominated. Ties go to the node
    /// inserted first.
    ///
    /// The assignment marker doubles as the dominated flag: picked nodes are `Included`, nodes
    /// dominated by a picked node are `Excluded`, undominated nodes stay `Unassigned`.
    ///
    /// Returns the picked nodes, sorted.
    pub fn compute_greedy_dominating_set(&mut self) -> Vec<usize> {
        self.reset_graph();
        let mut undominated = self.num_nodes();
        while undominated > 0 {
            let mut max_cover = 0;
            let mut max_node = None;
            for node in 0..self.num_nodes() {
                let cover = self.undominated_in_closed_neighborhood(node);
                if cover > max_cover {
                    max_cover = cover;
                    max_node = Some(node);
                }
            }
            let node = max_node.expect("an undominated node covers at least itself");
            if !self.assignment(node).is_decided() {
                undominated -= 1;
            }
            self.set_assignment(node, Assignment::Included);
            let neighbors: Vec<usize> = self.neighbor_indices(node).collect();
            for neigh in neighbors {
                if !self.assignment(neigh).is_decided() {
                    self.set_assignment(neigh, Assignment::Excluded);
                    undominated -= 1;
                }
            }
        }
        let solution = self.included_ids();
        self.reset_graph();
        info!("greedy dominating set: {} of {} nodes", solution.len(), self.num_nodes());
        solution
    }

    /// Approximates a vertex cover: for every edge that is not covered yet, adds both endpoints
    /// to the solution and covers all edges incident to either of them.
    /// The resulting solution is, in the worst case twice as large as the optimal solution.
    ///
    /// Returns the nodes in the order they were added.
    pub fn compute_approx_vertex_cover(&mut self) -> Vec<usize> {
        self.reset_graph();
        let mut solution = Vec::new();
        for edge in 0..self.num_edges() {
            if self.coverage(edge) == Coverage::Covered {
                continue
            }
            let (first, second) = self.edge_ends(edge);
            for node in [first, second] {
                for incident in self.incident_edges(node).to_vec() {
                    self.set_coverage(incident, Coverage::Covered);
                }
                solution.push(self.id(node));
            }
        }
        self.reset_graph();
        info!("2-approximate vertex cover: {} of {} nodes", solution.len(), self.num_nodes());
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(edges: &[(usize, usize)]) -> UGraph {
        let mut graph = UGraph::new();
        for (u, v) in edges {
            graph.add_edge(*u, *v).unwrap();
        }
        graph
    }

    #[test]
    fn greedy_path_test() {
        let mut graph = graph_from(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let sol = graph.compute_greedy_dominating_set();
        assert_eq!(sol, vec![1, 3]);
        assert!(graph.is_reset());
    }

    #[test]
    fn greedy_isolated_nodes_test() {
        let mut graph = graph_from(&[(0, 1), (0, 2)]);
        graph.add_node(7);
        graph.add_node(8);
        let sol = graph.compute_greedy_dominating_set();
        assert_eq!(sol, vec![0, 7, 8]);
        assert!(graph.is_dominating_set(&sol));
    }

    #[test]
    fn greedy_empty_test() {
        let mut graph = UGraph::new();
        assert!(graph.compute_greedy_dominating_set().is_empty());
        assert!(graph.compute_approx_vertex_cover().is_empty());
    }

    #[test]
    fn two_approx_test() {
        let mut graph = graph_from(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let sol = graph.compute_approx_vertex_cover();
        assert_eq!(sol, vec![0, 1, 2, 3]);
        assert!(graph.is_vertex_cover(&sol));
        assert!(graph.is_reset());
    }

    #[test]
    fn two_approx_star_test() {
        let mut graph = graph_from(&[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let sol = graph.compute_approx_vertex_cover();
        assert_eq!(sol, vec![0, 1]);
        assert!(graph.is_vertex_cover(&sol));
    }

    #[test]
    fn heuristics_repeat_test() {
        let mut graph = graph_from(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 5), (5, 4)]);
        let first = graph.compute_greedy_dominating_set();
        assert_eq!(graph.compute_greedy_dominating_set(), first);
        let first = graph.compute_approx_vertex_cover();
        assert_eq!(graph.compute_approx_vertex_cover(), first);
    }
}

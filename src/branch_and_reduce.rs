//! Exact minimum dominating set by branch and reduce.
//!
//! A node `v` is *free* if it is `Unassigned`, has no `Included` neighbor and every `Excluded`
//! neighbor of `v` already has an `Included` neighbor. Only free nodes trigger reductions: for
//! them some optimal completion dominates `v` through `v` itself or one of its `Unassigned`
//! neighbors, which is what the rules below enumerate.
//!
//! * Degree-1 rule: a free node `v` with a single `Unassigned` neighbor `w`. `w` is included and
//!   `v` excluded.
//! * Degree-2 rule: a free node `v` with exactly the `Unassigned` neighbors `u1`, `u2`. Branches
//!   on (`u1` in, `v` out), (`v` in, `u1` out, `u2` out) and (`u2` in, `u1` out, `v` out).
//!
//! If neither rule applies the remaining `Unassigned` nodes are branched exhaustively.

use log::{debug, info};
use crate::graph::UGraph;
use crate::marker::Assignment;
use crate::search_instance::SearchInstance;

enum Reduction {
    DegreeOne { v: usize, w: usize },
    DegreeTwo { v: usize, u1: usize, u2: usize },
}

impl UGraph {

    /// Computes a minimum dominating set.
    ///
    /// The greedy solution serves as initial upper bound. Among several minimum solutions the
    /// first one found in exploration order is returned, so repeated calls on the same graph
    /// agree.
    ///
    /// Returns the solution, sorted.
    pub fn compute_minimum_dominating_set(&mut self) -> Vec<usize> {
        let greedy = self.compute_greedy_dominating_set();
        let mut instance = SearchInstance::new(self, greedy.len() + 1);
        let found = instance.branch_and_reduce_inner();
        debug_assert_eq!(instance.pending_alterations(), 0, "markers were not rebuild");
        let stats = instance.stats;
        let solution = found.unwrap_or(greedy);
        debug!("dominating set search: {:?}", stats);
        self.reset_graph();
        info!("minimum dominating set: {} of {} nodes", solution.len(), self.num_nodes());
        solution
    }
}

impl SearchInstance<'_> {

    /// Checks if some `Excluded` node has no neighbor left that could dominate it.
    fn undominatable_node_exists(&self) -> bool {
        (0..self.graph.num_nodes()).any(|node| {
            self.graph.assignment(node) == Assignment::Excluded
                && self.graph
                    .neighbor_indices(node)
                    .all(|neigh| self.graph.assignment(neigh) == Assignment::Excluded)
        })
    }

    fn has_included_neighbor(&self, node: usize) -> bool {
        self.graph
            .neighbor_indices(node)
            .any(|neigh| self.graph.assignment(neigh) == Assignment::Included)
    }

    /// Returns the `Unassigned` neighbors of `node` if `node` is free, `None` otherwise.
    fn free_node_neighbors(&self, node: usize) -> Option<Vec<usize>> {
        if self.graph.assignment(node).is_decided() {
            return None
        }
        let mut unassigned = Vec::new();
        for neigh in self.graph.neighbor_indices(node) {
            match self.graph.assignment(neigh) {
                Assignment::Included => return None,
                Assignment::Excluded => {
                    if !self.has_included_neighbor(neigh) {
                        return None
                    }
                },
                Assignment::Unassigned => unassigned.push(neigh),
            }
        }
        Some(unassigned)
    }

    /// Looks for a degree-1 reduction first and for a degree-2 reduction second.
    fn find_reduction(&self) -> Option<Reduction> {
        let mut degree_two = None;
        for node in 0..self.graph.num_nodes() {
            if let Some(unassigned) = self.free_node_neighbors(node) {
                match unassigned.as_slice() {
                    [w] => return Some(Reduction::DegreeOne { v: node, w: *w }),
                    [u1, u2] if degree_two.is_none() => {
                        degree_two = Some(Reduction::DegreeTwo { v: node, u1: *u1, u2: *u2 });
                    },
                    _ => {},
                }
            }
        }
        degree_two
    }

    /// Applies `decisions`, searches the resulting instance and rebuilds the markers.
    fn reduce_branch(&mut self, decisions: &[(usize, Assignment)]) -> Option<Vec<usize>> {
        self.stats.branches += 1;
        self.put_register();
        for (node, value) in decisions {
            self.decide(*node, *value);
        }
        let solution = self.branch_and_reduce_inner();
        self.rebuild_section();
        solution
    }

    /// Returns an improved solution found below the current markers, or `None`.
    pub(crate) fn branch_and_reduce_inner(&mut self) -> Option<Vec<usize>> {
        if !self.can_improve() {
            return None
        }
        if self.undominatable_node_exists() {
            self.stats.infeasible += 1;
            return None
        }
        match self.find_reduction() {
            Some(Reduction::DegreeOne { v, w }) => {
                self.reduce_branch(&[(w, Assignment::Included), (v, Assignment::Excluded)])
            },
            Some(Reduction::DegreeTwo { v, u1, u2 }) => {
                let mut current_best = None;
                let branches = [
                    [Some((u1, Assignment::Included)), Some((v, Assignment::Excluded)), None],
                    [Some((v, Assignment::Included)), Some((u1, Assignment::Excluded)), Some((u2, Assignment::Excluded))],
                    [Some((u2, Assignment::Included)), Some((u1, Assignment::Excluded)), Some((v, Assignment::Excluded))],
                ];
                for branch in branches {
                    let decisions: Vec<_> = branch.into_iter().flatten().collect();
                    if let Some(sol) = self.reduce_branch(&decisions) {
                        current_best = Some(sol);
                    }
                }
                current_best
            },
            None => self.brute_force_inner(),
        }
    }

    /// Branches on the first `Unassigned` node, including it first and excluding it second.
    fn brute_force_inner(&mut self) -> Option<Vec<usize>> {
        if !self.can_improve() {
            return None
        }
        if self.undominatable_node_exists() {
            self.stats.infeasible += 1;
            return None
        }
        let node = match (0..self.graph.num_nodes()).find(|n| !self.graph.assignment(*n).is_decided()) {
            Some(node) => node,
            None => {
                let sol = self.graph.included_ids();
                return self.update_current_best(sol)
            },
        };
        let mut current_best = None;
        for value in [Assignment::Included, Assignment::Excluded] {
            self.stats.branches += 1;
            self.put_register();
            self.decide(node, value);
            if let Some(sol) = self.brute_force_inner() {
                current_best = Some(sol);
            }
            self.rebuild_section();
        }
        current_best
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::UGraph;

    fn graph_from(edges: &[(usize, usize)]) -> UGraph {
        let mut graph = UGraph::new();
        for (u, v) in edges {
            graph.add_edge(*u, *v).unwrap();
        }
        graph
    }

    #[test]
    fn path_test() {
        let mut graph = graph_from(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let sol = graph.compute_minimum_dominating_set();
        assert_eq!(sol, vec![1, 3]);
        assert!(graph.is_reset());
    }

    #[test]
    fn star_test() {
        let mut graph = graph_from(&[(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(graph.compute_minimum_dominating_set(), vec![0]);
    }

    #[test]
    fn triangle_test() {
        let mut graph = graph_from(&[(0, 1), (1, 2), (2, 0)]);
        let sol = graph.compute_minimum_dominating_set();
        assert_eq!(sol.len(), 1);
        assert!(graph.is_dominating_set(&sol));
    }

    #[test]
    fn greedy_is_not_optimal_test() {
        // Greedy picks the hub 0 first and needs three nodes, {1, 2} suffices.
        let mut graph = graph_from(&[
            (0, 1), (0, 3), (0, 4), (0, 5), (0, 6),
            (1, 3), (1, 4), (1, 7),
            (2, 5), (2, 6), (2, 8),
        ]);
        let greedy = graph.compute_greedy_dominating_set();
        let exact = graph.compute_minimum_dominating_set();
        assert_eq!(exact, vec![1, 2]);
        assert!(greedy.len() > exact.len());
    }

    #[test]
    fn cycle_test() {
        let mut graph = graph_from(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 0)]);
        let sol = graph.compute_minimum_dominating_set();
        assert_eq!(sol.len(), 3);
        assert!(graph.is_dominating_set(&sol));
    }

    #[test]
    fn isolated_and_empty_test() {
        let mut graph = UGraph::new();
        assert!(graph.compute_minimum_dominating_set().is_empty());
        graph.add_node(4);
        graph.add_edge(1, 2).unwrap();
        let sol = graph.compute_minimum_dominating_set();
        assert_eq!(sol.len(), 2);
        assert!(sol.contains(&4));
        assert!(graph.is_dominating_set(&sol));
    }

    #[test]
    fn repeat_test() {
        let mut graph = graph_from(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 5), (5, 4), (4, 6), (6, 7)]);
        let first = graph.compute_minimum_dominating_set();
        assert!(graph.is_reset());
        assert_eq!(graph.compute_minimum_dominating_set(), first);
        assert!(graph.is_dominating_set(&first));
    }
}

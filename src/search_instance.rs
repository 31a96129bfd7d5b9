//! Shared state of the exact search engines.
//!
//! A `SearchInstance` borrows a `UGraph` and changes its markers in place. Every change is
//! recorded in `alterations`; `put_register()` remembers the current position and
//! `rebuild_section()` undoes everything back to it. A branch is always bracketed by these two
//! calls, so sibling branches observe the same markers.

use crate::graph::UGraph;
use crate::marker::{Assignment, Coverage};

#[derive(Debug)]
pub struct SearchInstance<'g> {
    pub(crate) graph: &'g mut UGraph,
    /// Number of nodes currently marked `Included`.
    pub included: usize,
    /// Only solutions with strictly less than `upper_bound` nodes are recorded.
    pub upper_bound: usize,
    /// Records changes to the markers.
    alterations: Vec<Alteration>,
    /// An id register, that helps to control how much of the markers is rebuild.
    register: Vec<usize>,
    pub stats: SearchStats,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct SearchStats {
    /// Branching steps (reduction rules count as one branch each).
    pub branches: usize,
    /// Subtrees cut because they could not beat `upper_bound`.
    pub pruned: usize,
    /// Subtrees cut because the partial assignment was infeasible.
    pub infeasible: usize,
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
enum Alteration {
    /// `node` was `Unassigned` and got decided.
    Decide(usize),
    /// `edge` had coverage `Coverage` before.
    Cover(usize, Coverage),
}

impl<'g> SearchInstance<'g> {

    /// Creates an instance on a reset `graph`. Solutions are only accepted if they are smaller
    /// than `upper_bound`.
    pub fn new(graph: &'g mut UGraph, upper_bound: usize) -> Self {
        graph.reset_graph();
        SearchInstance {
            graph,
            included: 0,
            upper_bound,
            alterations: Vec::new(),
            register: vec![0],
            stats: SearchStats::default(),
        }
    }

    /// Sets the `Unassigned` node `node` to `value` and records the alteration.
    ///
    /// Panics if `node` was already decided or `value` is `Unassigned`: both are contract
    /// violations of the engines.
    pub fn decide(&mut self, node: usize, value: Assignment) {
        let old = self.graph.assignment(node);
        if old != Assignment::Unassigned || value == Assignment::Unassigned {
            panic!("invalid transition of node {} from {:?} to {:?}", self.graph.id(node), old, value);
        }
        self.graph.set_assignment(node, value);
        if value == Assignment::Included {
            self.included += 1;
        }
        self.alterations.push(Alteration::Decide(node));
    }

    /// Sets the coverage of `edge` and records the alteration.
    pub fn cover(&mut self, edge: usize, value: Coverage) {
        let old = self.graph.coverage(edge);
        self.graph.set_coverage(edge, value);
        self.alterations.push(Alteration::Cover(edge, old));
    }

    /// Puts a register in `self.register` to denote the current state of the markers.
    pub fn put_register(&mut self) {
        self.register.push(self.alterations.len());
    }

    /// Undoes the alterations back to the last register and pops it. The base register `0` is
    /// never lost.
    pub fn rebuild_section(&mut self) {
        let up_to = self.register.pop().expect("`self.register` should never be empty");
        while self.alterations.len() > up_to {
            match self.alterations.pop().expect("`self.alterations` > 0") {
                Alteration::Decide(node) => {
                    if self.graph.assignment(node) == Assignment::Included {
                        self.included -= 1;
                    }
                    self.graph.set_assignment(node, Assignment::Unassigned);
                },
                Alteration::Cover(edge, old) => {
                    self.graph.set_coverage(edge, old);
                },
            }
        }
        if self.register.is_empty() {
            self.register.push(0);
        }
    }

    /// Checks if the current partial solution can still lead to a recordable one.
    pub fn can_improve(&mut self) -> bool {
        if self.included >= self.upper_bound {
            self.stats.pruned += 1;
            return false
        }
        true
    }

    /// Lowers the upper bound to the size of `sol` if `sol` is smaller than it.
    /// Returns the solution if it was recorded.
    pub fn update_current_best(&mut self, sol: Vec<usize>) -> Option<Vec<usize>> {
        if sol.len() < self.upper_bound {
            self.upper_bound = sol.len();
            return Some(sol)
        }
        None
    }

    /// Returns the number of recorded alterations that have not been rebuild.
    pub fn pending_alterations(&self) -> usize {
        self.alterations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> UGraph {
        let mut graph = UGraph::new();
        for (u, v) in [(0, 1), (1, 2), (2, 3)] {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn alter_rebuild_test() {
        let mut graph = path();
        let check = graph.clone();
        {
            let mut ins = SearchInstance::new(&mut graph, 5);
            ins.put_register();
            ins.decide(1, Assignment::Included);
            ins.decide(0, Assignment::Excluded);
            ins.put_register();
            ins.decide(2, Assignment::Included);
            ins.cover(1, Coverage::Covered);
            assert_eq!(ins.included, 2);
            ins.rebuild_section();
            assert_eq!(ins.included, 1);
            assert_eq!(ins.graph.assignment(2), Assignment::Unassigned);
            assert_eq!(ins.graph.coverage(1), Coverage::Unassigned);
            assert_eq!(ins.graph.assignment(1), Assignment::Included);
            ins.rebuild_section();
            assert_eq!(ins.included, 0);
            assert_eq!(ins.pending_alterations(), 0);
        }
        assert_eq!(graph, check);
    }

    #[test]
    #[should_panic(expected = "invalid transition")]
    fn double_decide_test() {
        let mut graph = path();
        let mut ins = SearchInstance::new(&mut graph, 5);
        ins.decide(1, Assignment::Included);
        ins.decide(1, Assignment::Excluded);
    }

    #[test]
    fn bounds_test() {
        let mut graph = path();
        let mut ins = SearchInstance::new(&mut graph, 3);
        assert!(ins.update_current_best(vec![0, 1, 2]).is_none());
        assert_eq!(ins.update_current_best(vec![1, 2]), Some(vec![1, 2]));
        assert_eq!(ins.upper_bound, 2);
        ins.decide(0, Assignment::Included);
        assert!(ins.can_improve());
        ins.decide(3, Assignment::Included);
        assert!(!ins.can_improve());
        assert_eq!(ins.stats.pruned, 1);
        assert!(ins.update_current_best(vec![1, 3]).is_none());
        assert_eq!(ins.upper_bound, 2);
    }
}

//! Implementation of a bounded search tree algorithm for the minimum vertex cover.

use log::{debug, info};
use crate::graph::UGraph;
use crate::marker::{Assignment, Coverage};
use crate::search_instance::SearchInstance;

impl UGraph {

    /// Computes a minimum vertex cover.
    ///
    /// The 2-approximation serves as initial upper bound. Among several minimum solutions the
    /// first one found in exploration order is returned.
    ///
    /// Returns the solution, sorted.
    pub fn compute_minimum_vertex_cover(&mut self) -> Vec<usize> {
        let approx = self.compute_approx_vertex_cover();
        let mut instance = SearchInstance::new(self, approx.len() + 1);
        let found = instance.bounded_search_inner();
        debug_assert_eq!(instance.pending_alterations(), 0, "markers were not rebuild");
        let stats = instance.stats;
        let solution = found.unwrap_or_else(|| {
            let mut approx = approx;
            approx.sort_unstable();
            approx
        });
        debug!("vertex cover search: {:?}", stats);
        self.reset_graph();
        info!("minimum vertex cover: {} of {} nodes", solution.len(), self.num_nodes());
        solution
    }
}

impl SearchInstance<'_> {

    /// Decides `node` and updates the coverage of its incident edges: an `Included` endpoint
    /// covers the edge, two `Excluded` endpoints leave it `NotCovered`.
    fn decide_and_cover(&mut self, node: usize, value: Assignment) {
        self.decide(node, value);
        let incident = self.graph.incident_edges(node).to_vec();
        for edge in incident {
            let other = self.graph.other_end(edge, node);
            match value {
                Assignment::Included if self.graph.coverage(edge) != Coverage::Covered => {
                    self.cover(edge, Coverage::Covered);
                },
                Assignment::Excluded if self.graph.assignment(other) == Assignment::Excluded => {
                    self.cover(edge, Coverage::NotCovered);
                },
                _ => {},
            }
        }
    }

    /// Adds every `Unassigned` node that is the only possible endpoint of some edge to the
    /// included nodes. Must only be called if no edge has two `Unassigned` endpoints.
    fn complete_cover(&self) -> Vec<usize> {
        let mut solution = self.graph.included_ids();
        for node in 0..self.graph.num_nodes() {
            if self.graph.assignment(node).is_decided() {
                continue
            }
            let forced = self.graph
                .neighbor_indices(node)
                .any(|neigh| self.graph.assignment(neigh) == Assignment::Excluded);
            if forced {
                solution.push(self.graph.id(node));
            }
        }
        solution.sort_unstable();
        solution
    }

    /// Returns an improved solution found below the current markers, or `None`.
    ///
    /// Branches on the first edge `(u, v)` with two `Unassigned` endpoints in the order
    /// (`u` out, `v` in), (`u` in, `v` out), (`u` in, `v` in). Both endpoints out can never cover
    /// the edge and is not explored.
    pub(crate) fn bounded_search_inner(&mut self) -> Option<Vec<usize>> {
        if !self.can_improve() {
            return None
        }
        let mut branch_edge = None;
        for edge in 0..self.graph.num_edges() {
            if self.graph.coverage(edge) == Coverage::NotCovered {
                self.stats.infeasible += 1;
                return None
            }
            let (u, v) = self.graph.edge_ends(edge);
            if branch_edge.is_none()
                && !self.graph.assignment(u).is_decided()
                && !self.graph.assignment(v).is_decided() {
                branch_edge = Some((u, v));
            }
        }
        let (u, v) = match branch_edge {
            Some(pair) => pair,
            None => {
                let sol = self.complete_cover();
                return self.update_current_best(sol)
            },
        };
        let mut current_best = None;
        let branches = [
            (Assignment::Excluded, Assignment::Included),
            (Assignment::Included, Assignment::Excluded),
            (Assignment::Included, Assignment::Included),
        ];
        for (u_value, v_value) in branches {
            self.stats.branches += 1;
            self.put_register();
            self.decide_and_cover(u, u_value);
            self.decide_and_cover(v, v_value);
            if let Some(sol) = self.bounded_search_inner() {
                current_best = Some(sol);
            }
            self.rebuild_section();
        }
        current_best
    }
}

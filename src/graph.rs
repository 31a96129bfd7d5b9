//! Implementation of a simple, undirected graph data structure with tri-state markers on nodes
//! and edges.
//!
//! Nodes and edges are stored in flat arenas. A node is addressed from the outside by its
//! identifier and internally by its index (insertion order). Markers live in parallel vectors, so
//! flipping a marker is O(1) and resetting the graph is a single fill.

use fxhash::FxHashMap;
use log::{debug, warn};
use std::fmt;
use std::io::{self, BufRead, Write};
use crate::cust_error::{ImportError, ProcessingError};
use crate::marker::{Assignment, Coverage};

/// A simple undirected graph datastructure. The structure is static once built; only the markers
/// change during a search.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct UGraph {
    /// Node identifier per index.
    ids: Vec<usize>,
    /// Index per node identifier.
    index: FxHashMap<usize, usize>,
    /// Incident edge indices per node index.
    incident: Vec<Vec<usize>>,
    /// End points (node indices) per edge index. The endpoint with the smaller identifier comes
    /// first.
    ends: Vec<(usize, usize)>,
    /// Edge index per canonical `(min_id, max_id)` pair.
    edge_index: FxHashMap<(usize, usize), usize>,
    assignment: Vec<Assignment>,
    coverage: Vec<Coverage>,
}

// Structural functions
impl UGraph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node named `id`. Returns `true` if the node was not yet contained in `self`.
    pub fn add_node(&mut self, id: usize) -> bool {
        if self.index.contains_key(&id) {
            return false
        }
        self.insert_node(id);
        true
    }

    fn insert_node(&mut self, id: usize) -> usize {
        let idx = self.ids.len();
        self.ids.push(id);
        self.index.insert(id, idx);
        self.incident.push(Vec::new());
        self.assignment.push(Assignment::Unassigned);
        idx
    }

    fn index_or_insert(&mut self, id: usize) -> usize {
        match self.index.get(&id) {
            Some(idx) => *idx,
            None => self.insert_node(id),
        }
    }

    /// Adds the undirected edge `{u, v}`, creating missing endpoints.
    /// Returns `Ok(true)` if a new edge was inserted and `Ok(false)` if the edge already existed.
    ///
    /// Fails with `ProcessingError::SelfLoop` if `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, ProcessingError> {
        if u == v {
            return Err(ProcessingError::SelfLoop(u))
        }
        let key = (u.min(v), u.max(v));
        if self.edge_index.contains_key(&key) {
            return Ok(false)
        }
        let first = self.index_or_insert(key.0);
        let second = self.index_or_insert(key.1);
        let edge = self.ends.len();
        self.ends.push((first, second));
        self.coverage.push(Coverage::Unassigned);
        self.edge_index.insert(key, edge);
        self.incident[first].push(edge);
        self.incident[second].push(edge);
        Ok(true)
    }

    /// Returns the identifiers of all nodes in insertion order.
    pub fn nodes(&self) -> Vec<usize> {
        self.ids.clone()
    }

    /// Returns all edges as `(min_id, max_id)` pairs in insertion order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.ends
            .iter()
            .map(|(first, second)| (self.ids[*first], self.ids[*second]))
            .collect()
    }

    pub fn num_nodes(&self) -> usize {
        self.ids.len()
    }

    pub fn num_edges(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains_node(&self, id: usize) -> bool {
        self.index.contains_key(&id)
    }

    /// Checks if the edge `{u, v}` exists.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.edge_index.contains_key(&(u.min(v), u.max(v)))
    }

    /// Returns the neighbors of `id`, or `None` if `id` is not a node of `self`.
    pub fn neighbors(&self, id: usize) -> Option<Vec<usize>> {
        self.index
            .get(&id)
            .map(|idx| self.neighbor_indices(*idx).map(|n| self.ids[n]).collect())
    }

    /// Returns the degree of `id`, or `None` if `id` is not a node of `self`.
    pub fn degree(&self, id: usize) -> Option<usize> {
        self.index.get(&id).map(|idx| self.incident[*idx].len())
    }

    /// Returns the assignment marker of `id`.
    pub fn assignment_of(&self, id: usize) -> Option<Assignment> {
        self.index.get(&id).map(|idx| self.assignment[*idx])
    }

    /// Returns the coverage marker of the edge `{u, v}`.
    pub fn coverage_of(&self, u: usize, v: usize) -> Option<Coverage> {
        self.edge_index
            .get(&(u.min(v), u.max(v)))
            .map(|edge| self.coverage[*edge])
    }

    /// Sets every node and edge marker back to `Unassigned`.
    pub fn reset_graph(&mut self) {
        self.assignment.fill(Assignment::Unassigned);
        self.coverage.fill(Coverage::Unassigned);
    }

    /// Checks if every marker of `self` is `Unassigned`.
    pub fn is_reset(&self) -> bool {
        self.assignment.iter().all(|a| *a == Assignment::Unassigned)
            && self.coverage.iter().all(|c| *c == Coverage::Unassigned)
    }
}

// Index based access for the engines
impl UGraph {

    pub(crate) fn id(&self, node: usize) -> usize {
        self.ids[node]
    }

    pub(crate) fn incident_edges(&self, node: usize) -> &[usize] {
        &self.incident[node]
    }

    pub(crate) fn edge_ends(&self, edge: usize) -> (usize, usize) {
        self.ends[edge]
    }

    /// Returns the end of `edge` that is not `node`.
    pub(crate) fn other_end(&self, edge: usize, node: usize) -> usize {
        let (first, second) = self.ends[edge];
        if first == node { second } else { first }
    }

    /// Returns an `Iterator` over the neighbor indices of `node`, in edge insertion order.
    pub(crate) fn neighbor_indices(&self, node: usize) -> impl Iterator<Item=usize> + '_ {
        self.incident[node].iter().map(move |edge| self.other_end(*edge, node))
    }

    pub(crate) fn assignment(&self, node: usize) -> Assignment {
        self.assignment[node]
    }

    pub(crate) fn set_assignment(&mut self, node: usize, value: Assignment) {
        self.assignment[node] = value;
    }

    pub(crate) fn coverage(&self, edge: usize) -> Coverage {
        self.coverage[edge]
    }

    pub(crate) fn set_coverage(&mut self, edge: usize, value: Coverage) {
        self.coverage[edge] = value;
    }

    /// Returns the identifiers of all nodes marked `Included`, sorted.
    pub(crate) fn included_ids(&self) -> Vec<usize> {
        let mut included: Vec<usize> = self.assignment
            .iter()
            .enumerate()
            .filter(|(_, a)| **a == Assignment::Included)
            .map(|(node, _)| self.ids[node])
            .collect();
        included.sort_unstable();
        included
    }
}

// Validation
impl UGraph {

    /// Checks if every node of `self` is either in `set` or has a neighbor in `set`.
    /// Returns `false` if `set` names a node that does not exist.
    pub fn is_dominating_set(&self, set: &[usize]) -> bool {
        let mut member = vec![false; self.num_nodes()];
        for id in set {
            match self.index.get(id) {
                Some(idx) => member[*idx] = true,
                None => return false,
            }
        }
        (0..self.num_nodes())
            .all(|node| member[node] || self.neighbor_indices(node).any(|n| member[n]))
    }

    /// Checks if every edge of `self` has at least one endpoint in `set`.
    /// Returns `false` if `set` names a node that does not exist.
    pub fn is_vertex_cover(&self, set: &[usize]) -> bool {
        let mut member = vec![false; self.num_nodes()];
        for id in set {
            match self.index.get(id) {
                Some(idx) => member[*idx] = true,
                None => return false,
            }
        }
        self.ends.iter().all(|(first, second)| member[*first] || member[*second])
    }
}

impl UGraph {

    /// Reads an edge list and creates a `UGraph`.
    ///
    /// Every line holds one edge as two whitespace separated node identifiers. Lines whose first
    /// two tokens are not both non-negative integers are skipped, further tokens are ignored.
    /// Self-loops are skipped as well.
    pub fn read_edge_list<R: BufRead>(input: R) -> Result<Self, ImportError> {
        let mut graph = UGraph::new();
        let mut skipped = 0;
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            let mut s = line.split_whitespace();
            let pair = match (s.next(), s.next()) {
                (Some(src), Some(trg)) => src.parse::<usize>().ok().zip(trg.parse::<usize>().ok()),
                _ => None,
            };
            let (src, trg) = match pair {
                Some(pair) => pair,
                None => {
                    skipped += 1;
                    continue
                }
            };
            if graph.add_edge(src, trg).is_err() {
                warn!("line {}: skipping self-loop at node {}", number + 1, src);
            }
        }
        debug!("read {} nodes, {} edges, skipped {} malformed lines",
               graph.num_nodes(), graph.num_edges(), skipped);
        Ok(graph)
    }

    /// Writes `self` as an edge list, one `u v` pair per line.
    pub fn write_edge_list<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        for (u, v) in self.edges() {
            writeln!(out, "{} {}", u, v)?;
        }
        Ok(())
    }

    /// Writes a solution to a `Write` type, one node per line.
    pub fn write_solution<W: Write>(solution: &[usize], mut out: W) -> Result<(), io::Error> {
        for elem in solution {
            writeln!(out, "{}", elem)?;
        }
        Ok(())
    }
}

/// The line `0--> [ 1 2 ]` reads: node 0 is adjacent to node 1 and node 2.
impl fmt::Display for UGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, id) in self.ids.iter().enumerate() {
            write!(f, "{}--> [", id)?;
            for neigh in self.neighbor_indices(node) {
                write!(f, " {}", self.ids[neigh])?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

//! Shrinks an edge-list dataset to a given number of nodes and edges.

use log::debug;
use std::io::{BufRead, Write};
use crate::cust_error::{ImportError, ProcessingError};

/// Copies at most `num_edges` edges from `input` to `output`, mapping every node identifier `id`
/// to `id % num_nodes`. Edges that become self-loops are dropped, malformed lines are skipped.
///
/// Returns the number of edges written.
pub fn downsample_edge_list<R: BufRead, W: Write>(input: R, mut output: W, num_nodes: usize, num_edges: usize)
    -> Result<usize, ImportError> {
    if num_nodes == 0 {
        return Err(ProcessingError::InvalidParameter("number of nodes must be positive".to_owned()).into())
    }
    let mut written = 0;
    for line in input.lines() {
        if written >= num_edges {
            break
        }
        let line = line?;
        let mut s = line.split_whitespace();
        let pair = match (s.next(), s.next()) {
            (Some(src), Some(trg)) => src.parse::<usize>().ok().zip(trg.parse::<usize>().ok()),
            _ => None,
        };
        let (src, trg) = match pair {
            Some((src, trg)) => (src % num_nodes, trg % num_nodes),
            None => {
                debug!("skipping malformed line {:?}", line);
                continue
            },
        };
        if src == trg {
            continue
        }
        writeln!(output, "{} {}", src, trg)?;
        written += 1;
    }
    Ok(written)
}

//! This module contains all custom errors used in this library.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import: IoError")]
    IoError(#[from] std::io::Error),
    #[error("Import: {0}")]
    Processing(#[from] ProcessingError),
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// `add_edge(u, u)` was requested.
    #[error("Self-loop at node {0} is not allowed")]
    SelfLoop(usize),
    /// A raw value outside of the tri-state encoding `-1`, `0`, `1`.
    #[error("Invalid marker value: {0}")]
    InvalidMarker(i8),
    #[error("InvalidSolution: {0}")]
    InvalidSolution(String),
}

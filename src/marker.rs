//! Tri-state markers attached to nodes and edges during a search.
//!
//! The raw encoding `-1` (unassigned), `0` (excluded / not covered) and `1` (included / covered)
//! is accepted via `TryFrom<i8>`; every other value is rejected.

use crate::cust_error::ProcessingError;

/// Working state of a node, shared by the dominating set and the vertex cover engines.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Assignment {
    #[default]
    Unassigned,
    Excluded,
    Included,
}

/// Working state of an edge, only used by the vertex cover engines.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Coverage {
    #[default]
    Unassigned,
    NotCovered,
    Covered,
}

impl Assignment {
    pub fn is_decided(self) -> bool {
        self != Assignment::Unassigned
    }
}

impl TryFrom<i8> for Assignment {
    type Error = ProcessingError;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Assignment::Unassigned),
            0 => Ok(Assignment::Excluded),
            1 => Ok(Assignment::Included),
            other => Err(ProcessingError::InvalidMarker(other)),
        }
    }
}

impl TryFrom<i8> for Coverage {
    type Error = ProcessingError;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Coverage::Unassigned),
            0 => Ok(Coverage::NotCovered),
            1 => Ok(Coverage::Covered),
            other => Err(ProcessingError::InvalidMarker(other)),
        }
    }
}

impl From<Assignment> for i8 {
    fn from(a: Assignment) -> i8 {
        match a {
            Assignment::Unassigned => -1,
            Assignment::Excluded => 0,
            Assignment::Included => 1,
        }
    }
}

impl From<Coverage> for i8 {
    fn from(c: Coverage) -> i8 {
        match c {
            Coverage::Unassigned => -1,
            Coverage::NotCovered => 0,
            Coverage::Covered => 1,
        }
    }
}

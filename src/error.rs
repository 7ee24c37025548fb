use std::time::Duration;

use crate::color::{Color, Colored, VertexId};

/// why an exact search stopped before proving optimality
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// the time limit elapsed
    #[error("deadline exceeded ({0:?})")]
    DeadlineExceeded(Duration),
    /// the caller cancelled the search
    #[error("search cancelled")]
    Cancelled,
}

/// errors returned by the coloring algorithms
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    /// two adjacent vertices share a color in the partial coloring
    #[error("invalid partial coloring: {u} and {v} are adjacent and both use color {color}")]
    InvalidPartial {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
        /// shared color
        color: Color,
    },
    /// the partial coloring names a vertex the instance does not have
    #[error("invalid partial coloring: vertex {0} is not in the graph")]
    UnknownVertex(VertexId),
    /// the exact search was interrupted. `best` is still a complete and proper
    /// coloring, its number of colors is only an upper bound.
    #[error("exact search interrupted: {reason} (best so far: {} colors)", .best.k)]
    Terminated {
        /// why the search stopped
        reason: TerminationReason,
        /// best coloring found before stopping
        best: Colored,
    },
}

impl ColoringError {
    /// best-effort coloring carried by the error, if any
    pub fn best(&self) -> Option<&Colored> {
        match self {
            Self::Terminated { best, .. } => Some(best),
            _ => None,
        }
    }
}

//! Vertex coloring heuristics and exact search (DSATUR, RLF, Welsh-Powell, ...)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]


/// coloring instance base trait, colorings, color classes and checker
pub mod color;

/// error types returned by the coloring algorithms
pub mod error;

/// cancellation handles for the exact search
pub mod terminator;

/// dense re-indexing of the vertices of an instance
mod indexed;

/// validation of caller-supplied partial colorings
pub mod partial;

/// compact instance (adjacency lists, graph6 decoding)
pub mod compact_instance;

/// read/write DIMACS formats
pub mod dimacs;

/// helper and utility methods for executables
pub mod util;

/// coloring and clique solvers
pub mod solvers;

pub use color::{Color, ColoringInstance, Coloring, Colored, VertexId, color_classes, checker, CheckerResult};
pub use error::{ColoringError, TerminationReason};
pub use terminator::{Terminator, TimeTerminator, CancelToken};
pub use solvers::Algorithm;

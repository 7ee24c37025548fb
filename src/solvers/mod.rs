//! Coloring and clique solvers.

use std::fmt;
use std::str::FromStr;

use log::warn;
use rand::Rng;

use crate::color::{ColoringInstance, Coloring, Colored};
use crate::error::ColoringError;
use crate::terminator::Terminator;

use coloring::{
    backtracking_dsatur::dsatur_exact,
    greedy_dsatur::greedy_dsatur,
    greedy_rlf::greedy_rlf,
    randomized::randomized,
    san_segundo::san_segundo,
    welsh_powell::welsh_powell,
};

/// Maximum clique solvers
pub mod clique;

/// Vertex Coloring problem solvers
pub mod coloring;

/// the coloring algorithms, selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// greedy DSATUR
    Dsatur,
    /// DSATUR branch & bound
    DsaturExact,
    /// Recursive Largest First
    Rlf,
    /// bitset DSATUR with color domains
    SanSegundo,
    /// static decreasing degree order
    WelshPowell,
    /// random order (seeded by the caller)
    Randomized,
}

/// unknown algorithm name
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown coloring algorithm {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    /// every algorithm
    pub const ALL:[Algorithm; 6] = [
        Self::Dsatur, Self::DsaturExact, Self::Rlf,
        Self::SanSegundo, Self::WelshPowell, Self::Randomized,
    ];

    /// name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dsatur => "dsatur",
            Self::DsaturExact => "dsatur-exact",
            Self::Rlf => "rlf",
            Self::SanSegundo => "san-segundo",
            Self::WelshPowell => "welsh-powell",
            Self::Randomized => "randomized",
        }
    }

    /// true if the algorithm honors a partial coloring
    pub fn accepts_partial(&self) -> bool {
        !matches!(self, Self::DsaturExact | Self::Rlf)
    }

    /**
    runs the algorithm. `partial` is ignored (with a warning) by the algorithms that do
    not accept one, `terminator` is only used by the exact search and `rng` only by the
    randomized greedy.
    */
    pub fn color<R:Rng + ?Sized>(
        &self,
        inst:&dyn ColoringInstance,
        partial:Option<&Coloring>,
        terminator:Option<&dyn Terminator>,
        rng:&mut R,
    ) -> Result<Colored, ColoringError> {
        if !self.accepts_partial() && partial.map_or(false, |p| !p.is_empty()) {
            warn!("{} does not use partial colorings, ignoring it", self);
        }
        match self {
            Self::Dsatur => greedy_dsatur(inst, partial),
            Self::DsaturExact => dsatur_exact(terminator, inst),
            Self::Rlf => Ok(greedy_rlf(inst)),
            Self::SanSegundo => san_segundo(inst, partial),
            Self::WelshPowell => welsh_powell(inst, partial),
            Self::Randomized => randomized(inst, partial, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
            .find(|a| a.name() == s)
            .copied()
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

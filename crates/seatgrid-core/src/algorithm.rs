//! Algorithm selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeatingError;

/// Which placement strategy a plan uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// One group per grid column, cycling through groups.
    ColumnBanded,
    /// Boustrophedon traversal with round-robin group interleaving.
    Serpentine,
    /// Row-major fill that never seats a group beside itself (above or left).
    AdjacencyAvoiding,
    /// Round-robin interleaved list poured in row-major order.
    Interleaved,
    /// Seeded random permutation poured in row-major order.
    Shuffled,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::ColumnBanded,
        Algorithm::Serpentine,
        Algorithm::AdjacencyAvoiding,
        Algorithm::Interleaved,
        Algorithm::Shuffled,
    ];

    /// Canonical selector string.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::ColumnBanded => "column-banded",
            Algorithm::Serpentine => "serpentine",
            Algorithm::AdjacencyAvoiding => "adjacency-avoiding",
            Algorithm::Interleaved => "interleaved",
            Algorithm::Shuffled => "shuffled",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::ColumnBanded => "each column seats one group, top to bottom",
            Algorithm::Serpentine => "snake through rows, rotating groups seat by seat",
            Algorithm::AdjacencyAvoiding => {
                "row-major, never the same group above or to the left; may be infeasible"
            }
            Algorithm::Interleaved => "rotate groups into one list, fill row by row",
            Algorithm::Shuffled => "seeded random order, fill row by row",
        }
    }

    /// Whether the strategy can fail with `Infeasible` on a roster that fits.
    pub fn may_be_infeasible(&self) -> bool {
        matches!(self, Algorithm::AdjacencyAvoiding)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column-banded" | "parallel" => Ok(Algorithm::ColumnBanded),
            "serpentine" | "snake" => Ok(Algorithm::Serpentine),
            "adjacency-avoiding" => Ok(Algorithm::AdjacencyAvoiding),
            "interleaved" | "matrix" => Ok(Algorithm::Interleaved),
            "shuffled" | "random" => Ok(Algorithm::Shuffled),
            _ => Err(SeatingError::InvalidAlgorithm(s.to_string())),
        }
    }
}

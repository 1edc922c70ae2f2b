//! Cell identity and classification.
//!
//! Cells sit on a 7x7 lattice and are keyed `_<row>_<col>`, so the shared
//! start cell in the bottom-right corner is `_6_6`. The goal is a sentinel
//! off the lattice, keyed `goal`.
//!
//! ```
//! use rust_yut::board::CellId;
//!
//! let cell: CellId = "_0_6".parse().unwrap();
//! assert_eq!(cell, CellId::new(0, 6));
//! assert_eq!(cell.key(), "_0_6");
//! assert_eq!(CellId::START.key(), "_6_6");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::RulesError;

/// Identity of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub row: u8,
    pub col: u8,
}

impl CellId {
    /// Shared start cell; also holds every piece not yet on the board.
    pub const START: CellId = CellId { row: 6, col: 6 };

    /// Goal sentinel terminating every route.
    pub const GOAL: CellId = CellId {
        row: u8::MAX,
        col: u8::MAX,
    };

    /// Create a cell ID from lattice coordinates.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// String key as used by the presentation layer.
    #[must_use]
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == CellId::GOAL {
            f.write_str("goal")
        } else {
            write!(f, "_{}_{}", self.row, self.col)
        }
    }
}

impl FromStr for CellId {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "goal" {
            return Ok(CellId::GOAL);
        }

        let malformed = || RulesError::MalformedCellKey(s.to_string());
        let rest = s.strip_prefix('_').ok_or_else(malformed)?;
        let (row, col) = rest.split_once('_').ok_or_else(malformed)?;
        let row = row.parse::<u8>().map_err(|_| malformed())?;
        let col = col.parse::<u8>().map_err(|_| malformed())?;

        Ok(CellId::new(row, col))
    }
}

/// Topological role of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Ordinary,
    /// Junction where routes diverge or reconverge.
    Corner,
    Start,
    Goal,
}

impl CellKind {
    /// Can a piece resting here choose between routes?
    #[must_use]
    pub const fn is_branch_point(self) -> bool {
        matches!(self, CellKind::Corner | CellKind::Start)
    }
}

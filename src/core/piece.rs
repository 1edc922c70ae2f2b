//! Piece identification and per-piece records.
//!
//! ## ID Layout
//!
//! Piece IDs are allocated per match in turn order:
//! - `0..pieces_per_player`: pieces of the first player
//! - `pieces_per_player..2 * pieces_per_player`: the second player
//! - and so on.
//!
//! ## Grouping
//!
//! Carried pieces share a `GroupId`. A piece that is not carrying or being
//! carried is in its own singleton group, whose ID equals its piece ID.
//!
//! ```
//! use rust_yut::core::{GroupId, PieceId};
//!
//! let piece = PieceId(3);
//! assert_eq!(GroupId::solo(piece), GroupId(3));
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::{CellId, RouteId};

/// Unique identifier for a piece within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the match's piece table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Identifier of a carried group.
///
/// Group membership is explicit: pieces move together exactly when their
/// `GroupId`s are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u32);

impl GroupId {
    /// The singleton group of a piece.
    #[must_use]
    pub const fn solo(piece: PieceId) -> Self {
        Self(piece.0)
    }
}

/// A single game piece.
///
/// Position, route and group are mutated only by move resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,

    /// Owning player.
    pub owner: PlayerId,

    /// Current cell. `CellId::START` while off the board,
    /// `CellId::GOAL` once finished.
    pub cell: CellId,

    /// Route the piece is committed to.
    pub route: RouteId,

    /// Carried group the piece belongs to.
    pub group: GroupId,

    /// Set while the piece's group is selected for a move.
    pub selected: bool,
}

impl Piece {
    /// Create a piece waiting at the start cell.
    #[must_use]
    pub fn new(id: PieceId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            cell: CellId::START,
            route: RouteId::OUTER_RING,
            group: GroupId::solo(id),
            selected: false,
        }
    }

    /// Has this piece reached the goal?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cell == CellId::GOAL
    }

    /// Is this piece still waiting at the start cell?
    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.cell == CellId::START
    }

    /// Is this piece riding in a group headed by another piece?
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.group != GroupId::solo(self.id)
    }

    /// Send the piece back to the start cell, clearing route and group.
    pub fn reset_to_start(&mut self) {
        self.cell = CellId::START;
        self.route = RouteId::OUTER_RING;
        self.group = GroupId::solo(self.id);
        self.selected = false;
    }
}

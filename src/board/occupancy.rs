//! Cell occupancy: which pieces rest on which cell, in stacking order.
//!
//! The `Occupancy` map tracks every piece that is on the board or still
//! waiting at the start cell. Finished pieces are removed entirely.
//! It supports:
//! - Ordered stacks per cell (bottom first, top last)
//! - Piece lookup by ID
//! - Moving a piece onto the top of another cell's stack

use rustc_hash::FxHashMap;

use super::cell::CellId;
use crate::core::PieceId;

/// Piece locations across cells.
///
/// ## Usage
///
/// ```
/// use rust_yut::board::{CellId, Occupancy};
/// use rust_yut::core::PieceId;
///
/// let mut occupancy = Occupancy::new();
/// occupancy.place(PieceId(0), CellId::START);
/// occupancy.place(PieceId(1), CellId::START);
///
/// occupancy.move_to(PieceId(0), CellId::new(5, 6));
///
/// assert_eq!(occupancy.occupants(CellId::START), &[PieceId(1)]);
/// assert_eq!(occupancy.cell_of(PieceId(0)), Some(CellId::new(5, 6)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    /// piece -> cell
    locations: FxHashMap<PieceId, CellId>,

    /// cell -> pieces, bottom of the stack first
    stacks: FxHashMap<CellId, Vec<PieceId>>,
}

impl Occupancy {
    /// Create an empty occupancy map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a piece that is not yet tracked on top of a cell's stack.
    ///
    /// Panics if the piece is already tracked.
    pub fn place(&mut self, piece: PieceId, cell: CellId) {
        if self.locations.contains_key(&piece) {
            panic!("{} already placed on the board", piece);
        }

        self.locations.insert(piece, cell);
        self.stacks.entry(cell).or_default().push(piece);
    }

    /// Move a tracked piece onto the top of another cell's stack.
    ///
    /// Returns the previous cell, or `None` if the piece wasn't tracked.
    pub fn move_to(&mut self, piece: PieceId, cell: CellId) -> Option<CellId> {
        let old_cell = self.locations.get(&piece).copied()?;

        if old_cell == cell {
            return Some(old_cell);
        }

        self.detach(piece, old_cell);
        self.locations.insert(piece, cell);
        self.stacks.entry(cell).or_default().push(piece);

        Some(old_cell)
    }

    /// Stop tracking a piece (it has finished).
    ///
    /// Returns the cell it was on, or `None` if not tracked.
    pub fn remove(&mut self, piece: PieceId) -> Option<CellId> {
        let cell = self.locations.remove(&piece)?;
        self.detach(piece, cell);
        Some(cell)
    }

    fn detach(&mut self, piece: PieceId, cell: CellId) {
        if let Some(stack) = self.stacks.get_mut(&cell) {
            stack.retain(|&p| p != piece);
            if stack.is_empty() {
                self.stacks.remove(&cell);
            }
        }
    }

    /// Cell a piece rests on.
    #[must_use]
    pub fn cell_of(&self, piece: PieceId) -> Option<CellId> {
        self.locations.get(&piece).copied()
    }

    /// Pieces on a cell, bottom of the stack first.
    #[must_use]
    pub fn occupants(&self, cell: CellId) -> &[PieceId] {
        self.stacks.get(&cell).map_or(&[], |v| v.as_slice())
    }

    /// Is nothing resting on the cell?
    #[must_use]
    pub fn is_vacant(&self, cell: CellId) -> bool {
        self.occupants(cell).is_empty()
    }

    /// Number of tracked pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over occupied cells and their stacks.
    pub fn stacks(&self) -> impl Iterator<Item = (CellId, &[PieceId])> + '_ {
        self.stacks.iter().map(|(&c, v)| (c, v.as_slice()))
    }
}

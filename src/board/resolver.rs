//! Route resolution: where can a piece go with a given step count?
//!
//! A piece resting on an ordinary cell stays on its committed route. A
//! piece resting on a corner or the start cell may switch to any route
//! that passes through that cell, which is how the diagonal shortcuts are
//! taken. Backward moves (`Backdo`) always retrace the committed route.
//!
//! Candidates are deduplicated by cell, keeping the lowest route ID, so
//! routes that coincide for a stretch produce a single destination.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::cell::CellId;
use super::topology::{Board, RouteId};

/// A legal destination: the cell and the route that reaches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    pub route: RouteId,
    pub cell: CellId,
}

/// Candidate destinations. At most one per route.
pub type Destinations = SmallVec<[Destination; 4]>;

/// Enumerates legal destinations on a board.
#[derive(Clone, Copy, Debug)]
pub struct RouteResolver<'a> {
    board: &'a Board,
    allow_overshoot: bool,
}

impl<'a> RouteResolver<'a> {
    /// Resolver with exact-finish semantics.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            allow_overshoot: false,
        }
    }

    /// Let forward moves past the goal land on the goal.
    #[must_use]
    pub fn with_overshoot(mut self, allow: bool) -> Self {
        self.allow_overshoot = allow;
        self
    }

    /// Destinations reachable from `cell`, committed to `route`, moving
    /// `steps` cells (negative moves backward).
    ///
    /// An empty result means the move is impossible: backing off the start
    /// cell, overshooting the goal, or a piece that has already finished.
    ///
    /// ```
    /// use rust_yut::board::{Board, CellId, RouteId, RouteResolver};
    ///
    /// let resolver = RouteResolver::new(Board::standard());
    ///
    /// let from_start = resolver.destinations(CellId::START, RouteId::OUTER_RING, 2);
    /// assert_eq!(from_start.len(), 1);
    /// assert_eq!(from_start[0].cell, CellId::new(4, 6));
    ///
    /// assert!(resolver.destinations(CellId::START, RouteId::OUTER_RING, -1).is_empty());
    /// ```
    #[must_use]
    pub fn destinations(&self, cell: CellId, route: RouteId, steps: i8) -> Destinations {
        let mut out = Destinations::new();

        if steps == 0 || cell == CellId::GOAL {
            return out;
        }

        let committed = self.board.route(route);
        let Some(current) = committed.index_of(cell) else {
            debug_assert!(false, "{cell} is not on {route}");
            return out;
        };

        if steps < 0 {
            let back = current.checked_sub(steps.unsigned_abs() as usize);
            if let Some(target) = back.and_then(|i| committed.get(i)) {
                out.push(Destination { route, cell: target });
            }
            return out;
        }

        let branching = self
            .board
            .cell_kind(cell)
            .is_some_and(|kind| kind.is_branch_point());

        for candidate in self.board.routes() {
            let index = if candidate.id == route {
                current
            } else if branching {
                match candidate.index_of(cell) {
                    Some(i) => i,
                    None => continue,
                }
            } else {
                continue;
            };

            let target = index + steps as usize;
            let landing = match candidate.get(target) {
                Some(landing) => landing,
                None if self.allow_overshoot => candidate.goal(),
                None => continue,
            };

            if !out.iter().any(|d| d.cell == landing) {
                out.push(Destination {
                    route: candidate.id,
                    cell: landing,
                });
            }
        }

        debug!(%cell, %route, steps, found = out.len(), "resolved destinations");
        out
    }
}

//! Immutable board graph and the four routes.
//!
//! The board is the traditional Yut layout: twenty cells around the edge
//! and two diagonals crossing at the center. Pieces leave the start cell
//! in the bottom-right corner, travel up the right side, and come home
//! along the bottom edge. Resting on a corner opens the diagonal
//! shortcuts.
//!
//! ```text
//!  _0_0 _0_1 _0_2    _0_4 _0_5 _0_6
//!  _1_0 _1_1                _1_5 _1_6
//!  _2_0      _2_2      _2_4      _2_6
//!                 _3_3
//!  _4_0      _4_2      _4_4      _4_6
//!  _5_0 _5_1                _5_5 _5_6
//!  _6_0 _6_1 _6_2    _6_4 _6_5 _6_6 (start)
//! ```
//!
//! Every route begins at the start cell and ends at the goal sentinel,
//! which is reached by stepping past the last cell before the start.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::cell::{CellId, CellKind};

/// Which of the four routes a piece follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub u8);

impl RouteId {
    /// All the way around the edge.
    pub const OUTER_RING: RouteId = RouteId(0);
    /// From the first corner across the center to the opposite corner.
    pub const FIRST_CORNER_DIAGONAL: RouteId = RouteId(1);
    /// Along the edge to the second corner, then diagonally home.
    pub const SECOND_CORNER_DIAGONAL: RouteId = RouteId(2);
    /// From the first corner to the center, then straight home.
    pub const CENTER_SHORTCUT: RouteId = RouteId(3);

    /// All routes in resolution order.
    pub const ALL: [RouteId; 4] = [
        RouteId::OUTER_RING,
        RouteId::FIRST_CORNER_DIAGONAL,
        RouteId::SECOND_CORNER_DIAGONAL,
        RouteId::CENTER_SHORTCUT,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Route({})", self.0)
    }
}

/// An ordered cell sequence from the start cell to the goal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    cells: Vec<CellId>,
}

impl Route {
    fn new(id: RouteId, cells: Vec<CellId>) -> Self {
        debug_assert_eq!(cells.first(), Some(&CellId::START));
        debug_assert_eq!(cells.last(), Some(&CellId::GOAL));
        Self { id, cells }
    }

    /// Cells in travel order.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a route index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CellId> {
        self.cells.get(index).copied()
    }

    /// Position of a cell on this route. Routes never revisit a cell.
    #[must_use]
    pub fn index_of(&self, cell: CellId) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }

    /// Does this route pass through the cell?
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    /// The goal sentinel.
    #[must_use]
    pub fn goal(&self) -> CellId {
        self.cells[self.cells.len() - 1]
    }
}

/// The immutable board: cell kinds plus the four routes.
#[derive(Clone, Debug)]
pub struct Board {
    cells: FxHashMap<CellId, CellKind>,
    routes: [Route; 4],
}

impl Board {
    /// The standard board, built once per process.
    #[must_use]
    pub fn standard() -> &'static Board {
        static BOARD: OnceLock<Board> = OnceLock::new();
        BOARD.get_or_init(Board::build)
    }

    fn build() -> Self {
        let c = CellId::new;

        let right_side = [c(5, 6), c(4, 6), c(2, 6), c(1, 6)];
        let top_side = [c(0, 5), c(0, 4), c(0, 2), c(0, 1)];
        let left_side = [c(1, 0), c(2, 0), c(4, 0), c(5, 0)];
        let bottom_side = [c(6, 1), c(6, 2), c(6, 4), c(6, 5)];
        let first_corner = c(0, 6);
        let second_corner = c(0, 0);
        let third_corner = c(6, 0);
        let center = c(3, 3);
        let toward_center_from_first = [c(1, 5), c(2, 4)];
        let away_from_center_to_third = [c(4, 2), c(5, 1)];
        let toward_center_from_second = [c(1, 1), c(2, 2)];
        let away_from_center_to_start = [c(4, 4), c(5, 5)];

        let mut to_first_corner = vec![CellId::START];
        to_first_corner.extend(right_side);
        to_first_corner.push(first_corner);

        let mut outer = to_first_corner.clone();
        outer.extend(top_side);
        outer.push(second_corner);
        let to_second_corner = outer.clone();
        outer.extend(left_side);
        outer.push(third_corner);
        outer.extend(bottom_side);
        outer.push(CellId::GOAL);

        let mut first_diagonal = to_first_corner.clone();
        first_diagonal.extend(toward_center_from_first);
        first_diagonal.push(center);
        first_diagonal.extend(away_from_center_to_third);
        first_diagonal.push(third_corner);
        first_diagonal.extend(bottom_side);
        first_diagonal.push(CellId::GOAL);

        let mut second_diagonal = to_second_corner;
        second_diagonal.extend(toward_center_from_second);
        second_diagonal.push(center);
        second_diagonal.extend(away_from_center_to_start);
        second_diagonal.push(CellId::GOAL);

        let mut shortcut = to_first_corner;
        shortcut.extend(toward_center_from_first);
        shortcut.push(center);
        shortcut.extend(away_from_center_to_start);
        shortcut.push(CellId::GOAL);

        let routes = [
            Route::new(RouteId::OUTER_RING, outer),
            Route::new(RouteId::FIRST_CORNER_DIAGONAL, first_diagonal),
            Route::new(RouteId::SECOND_CORNER_DIAGONAL, second_diagonal),
            Route::new(RouteId::CENTER_SHORTCUT, shortcut),
        ];

        let mut cells = FxHashMap::default();
        for route in &routes {
            for &cell in route.cells() {
                cells.insert(cell, CellKind::Ordinary);
            }
        }
        for corner in [first_corner, second_corner, third_corner, center] {
            cells.insert(corner, CellKind::Corner);
        }
        cells.insert(CellId::START, CellKind::Start);
        cells.insert(CellId::GOAL, CellKind::Goal);

        Self { cells, routes }
    }

    /// Kind of a known cell, `None` if the cell is not on the board.
    #[must_use]
    pub fn cell_kind(&self, cell: CellId) -> Option<CellKind> {
        self.cells.get(&cell).copied()
    }

    /// Is the cell part of the board (goal sentinel included)?
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains_key(&cell)
    }

    /// All four routes, indexed by `RouteId`.
    #[must_use]
    pub fn routes(&self) -> &[Route; 4] {
        &self.routes
    }

    /// A single route.
    #[must_use]
    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.index()]
    }

    /// Iterate over every cell and its kind.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, CellKind)> + '_ {
        self.cells.iter().map(|(&c, &k)| (c, k))
    }

    /// Number of cells, goal sentinel included.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

//! # rust-yut
//!
//! A rules engine for Yut Nori, the Korean race game played with four
//! throwing sticks on a board of 29 stations.
//!
//! ## Design Principles
//!
//! 1. **Board as Data**: The board is a fixed graph of cells and four
//!    routes built once per process. Movement is route arithmetic, never
//!    special-cased per cell.
//!
//! 2. **N-Player First**: Every match takes 2-4 players in turn order.
//!    Nothing assumes two sides.
//!
//! 3. **Validate, Then Apply**: Commands are checked against the turn
//!    phase, ownership and the route resolver before anything changes.
//!    A rejected command leaves the match untouched.
//!
//! 4. **Presentation Agnostic**: Sticks are observed, not simulated.
//!    Callers submit a settled `StickToss` and render whatever state the
//!    queries report.
//!
//! ## Modules
//!
//! - `core`: Pieces, players, state, history, errors, RNG, configuration
//! - `board`: Cells, routes, occupancy and the route resolver
//! - `throw`: Throw outcomes, stick evaluation and throw sources
//! - `rules`: Move resolution, turn sequencing and the `Match` session

pub mod core;
pub mod board;
pub mod throw;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GroupId, Piece, PieceId,
    Player, PlayerId, PlayerMap, PlayerSpec,
    GameRng,
    MatchConfig,
    TurnEvent, TurnRecord,
    MatchSnapshot, MatchState,
    Command, Result, RulesError,
};

pub use crate::board::{
    Board, CellId, CellKind, Occupancy,
    Route, RouteId,
    Destination, Destinations, RouteResolver,
};

pub use crate::throw::{
    ThrowResult, StickToss, STICK_COUNT,
    RandomThrower, ScriptedThrower, ThrowSource,
};

pub use crate::rules::{
    Match, MoveCommand, MoveOutcome, MoveResolver,
    TurnMachine, TurnPhase,
};

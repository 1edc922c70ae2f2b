//! Rules of play: moving pieces, sequencing turns and the match session.
//!
//! - `MoveResolver` applies a validated move (capture, carry, goal)
//! - `TurnMachine` decides who throws next and which commands are accepted
//! - `Match` owns one game and is the single entry point for callers
//!
//! Nothing here is global: every match is an explicitly owned value.

pub mod movement;
pub mod turn;
pub mod session;

pub use movement::{MoveCommand, MoveOutcome, MoveResolver};
pub use turn::{TurnMachine, TurnPhase};
pub use session::Match;

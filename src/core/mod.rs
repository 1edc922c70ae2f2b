//! Core match types: pieces, players, state, history, errors, RNG and
//! configuration.
//!
//! These are shared by the board, throw and rules modules. A match is
//! configured through `MatchConfig` rather than by changing the rules.

pub mod piece;
pub mod player;
pub mod rng;
pub mod config;
pub mod record;
pub mod state;
pub mod error;

pub use piece::{GroupId, Piece, PieceId};
pub use player::{Player, PlayerId, PlayerMap, PlayerSpec};
pub use rng::GameRng;
pub use config::MatchConfig;
pub use record::{TurnEvent, TurnRecord};
pub use state::{MatchSnapshot, MatchState};
pub use error::{Command, Result, RulesError};

//! Typed failures reported by the rules core.
//!
//! Every rejected command leaves the match untouched, so callers can
//! always retry with corrected input. A `Nak` throw is not an error.

use serde::{Deserialize, Serialize};

use super::piece::PieceId;
use super::player::PlayerId;
use crate::board::CellId;
use crate::rules::TurnPhase;

pub type Result<T, E = RulesError> = std::result::Result<T, E>;

/// Inbound command kinds, used to report state mismatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Throw,
    Select,
    Destinations,
    Move,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::Throw => "throw",
            Command::Select => "select piece",
            Command::Destinations => "legal destinations",
            Command::Move => "resolve move",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("{command} is not accepted while {phase}")]
    InvalidCommandForState { command: Command, phase: TurnPhase },

    #[error("unknown piece {0}")]
    UnknownPiece(PieceId),

    #[error("unknown cell {0}")]
    UnknownCell(CellId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("malformed cell key {0:?}")]
    MalformedCellKey(String),

    #[error("{cell} is not a legal destination for {piece}")]
    IllegalDestination { piece: PieceId, cell: CellId },

    #[error("{piece} belongs to {owner}, but it is {current}'s turn")]
    NotCurrentPlayersPiece {
        piece: PieceId,
        owner: PlayerId,
        current: PlayerId,
    },

    #[error("marked stick index {0} is out of range (0-3)")]
    InvalidMarkedStick(usize),

    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_command_display() {
        let err = RulesError::InvalidCommandForState {
            command: Command::Move,
            phase: TurnPhase::AwaitingThrow,
        };
        assert_eq!(err.to_string(), "resolve move is not accepted while awaiting throw");
    }

    #[test]
    fn test_ownership_display() {
        let err = RulesError::NotCurrentPlayersPiece {
            piece: PieceId(4),
            owner: PlayerId::new(1),
            current: PlayerId::new(0),
        };
        assert_eq!(
            err.to_string(),
            "Piece(4) belongs to Player 1, but it is Player 0's turn"
        );
    }

    #[test]
    fn test_illegal_destination_display() {
        let err = RulesError::IllegalDestination {
            piece: PieceId(0),
            cell: CellId::new(0, 6),
        };
        assert_eq!(err.to_string(), "_0_6 is not a legal destination for Piece(0)");
    }
}

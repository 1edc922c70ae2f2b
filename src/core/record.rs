//! Turn history records.
//!
//! Every accepted throw and move is recorded with the turn it happened in
//! and a sequence number within that turn. A turn spans one player's
//! consecutive throws, bonus throws included.

use serde::{Deserialize, Serialize};

use super::piece::PieceId;
use super::player::PlayerId;
use crate::board::Destination;
use crate::rules::MoveOutcome;
use crate::throw::ThrowResult;

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A throw was evaluated. `Nak` is recorded here too.
    Threw(ThrowResult),

    /// The throw could not be used: no piece had a legal destination.
    Forfeited(ThrowResult),

    /// A piece (with its carried group) was moved.
    Moved {
        piece: PieceId,
        destination: Destination,
        outcome: MoveOutcome,
    },
}

/// A recorded event with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    pub event: TurnEvent,

    /// Turn number when the event happened (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl TurnRecord {
    #[must_use]
    pub fn new(player: PlayerId, event: TurnEvent, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            event,
            turn,
            sequence,
        }
    }

    /// The throw this record refers to, if any.
    #[must_use]
    pub fn throw(&self) -> Option<ThrowResult> {
        match self.event {
            TurnEvent::Threw(result) | TurnEvent::Forfeited(result) => Some(result),
            TurnEvent::Moved { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CellId, RouteId};

    #[test]
    fn test_record_throw() {
        let record = TurnRecord::new(PlayerId::new(1), TurnEvent::Threw(ThrowResult::Yut), 3, 0);
        assert_eq!(record.throw(), Some(ThrowResult::Yut));
        assert_eq!(record.turn, 3);
    }

    #[test]
    fn test_record_serialization() {
        let record = TurnRecord::new(
            PlayerId::new(0),
            TurnEvent::Moved {
                piece: PieceId(2),
                destination: Destination {
                    route: RouteId::OUTER_RING,
                    cell: CellId::new(4, 6),
                },
                outcome: MoveOutcome::default(),
            },
            1,
            1,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TurnRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
        assert_eq!(deserialized.throw(), None);
    }
}

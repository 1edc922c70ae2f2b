//! Turn sequencing.
//!
//! ```text
//! AwaitingThrow ──throw──▶ AwaitingPieceSelection ──select──▶ AwaitingDestination
//!      ▲   │ Nak                     │ move                         │ move
//!      │   └─────────────────────────┴──────────────┬───────────────┘
//!      └──── same player (Yut, Mo) or next player ──┘──▶ GameOver
//! ```
//!
//! Throw resolution and move resolution are instantaneous transitions
//! rather than states a caller can observe: `throw_resolved` and
//! `move_resolved` decide where the machine goes next.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Command, PieceId, PlayerId, Result, RulesError};
use crate::throw::ThrowResult;

/// Observable phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingThrow,
    AwaitingPieceSelection,
    AwaitingDestination,
    GameOver { winner: PlayerId },
}

impl TurnPhase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, TurnPhase::GameOver { .. })
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::AwaitingThrow => f.write_str("awaiting throw"),
            TurnPhase::AwaitingPieceSelection => f.write_str("awaiting piece selection"),
            TurnPhase::AwaitingDestination => f.write_str("awaiting destination"),
            TurnPhase::GameOver { winner } => write!(f, "game over ({winner} won)"),
        }
    }
}

/// Tracks whose turn it is and which throw is waiting to be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnMachine {
    phase: TurnPhase,
    player_count: usize,
    current: PlayerId,
    active: Option<ThrowResult>,
    selected: Option<PieceId>,

    /// Starts at 1, increments on every hand-off.
    turn_number: u32,

    /// Events recorded within the current turn.
    sequence: u32,
}

impl TurnMachine {
    /// First player to throw, nothing pending.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        Self {
            phase: TurnPhase::AwaitingThrow,
            player_count,
            current: PlayerId::new(0),
            active: None,
            selected: None,
            turn_number: 1,
            sequence: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The throw waiting to be used by a move.
    #[must_use]
    pub fn active_throw(&self) -> Option<ThrowResult> {
        self.active
    }

    #[must_use]
    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Next sequence number within the turn.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }

    /// Reject `command` unless the machine is in one of `allowed`.
    pub fn expect(&self, command: Command, allowed: &[TurnPhase]) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            warn!(%command, phase = %self.phase, "command rejected");
            Err(RulesError::InvalidCommandForState {
                command,
                phase: self.phase,
            })
        }
    }

    /// A throw was evaluated. `Nak` keeps the same player waiting to throw.
    pub fn throw_resolved(&mut self, result: ThrowResult) {
        if result.is_foul() {
            debug!(player = %self.current, "foul, throw again");
            self.active = None;
            self.phase = TurnPhase::AwaitingThrow;
        } else {
            self.active = Some(result);
            self.phase = TurnPhase::AwaitingPieceSelection;
        }
    }

    /// A piece was picked; the machine waits for its destination.
    pub fn piece_selected(&mut self, piece: PieceId) {
        self.selected = Some(piece);
        self.phase = TurnPhase::AwaitingDestination;
    }

    /// The active throw cannot be used by any piece.
    ///
    /// Returns the forfeited throw.
    pub fn forfeit(&mut self) -> Option<ThrowResult> {
        let result = self.active.take()?;
        self.selected = None;
        debug!(player = %self.current, %result, "throw forfeited");
        self.hand_off(result.grants_extra_throw());
        Some(result)
    }

    /// A move finished. Decides between game over, another throw for the
    /// same player, and passing the turn.
    pub fn move_resolved(&mut self, player_won: bool, bonus_throw: bool) {
        let result = self.active.take();
        self.selected = None;

        if player_won {
            info!(winner = %self.current, "game over");
            self.phase = TurnPhase::GameOver {
                winner: self.current,
            };
            return;
        }

        let again = bonus_throw || result.is_some_and(ThrowResult::grants_extra_throw);
        self.hand_off(again);
    }

    fn hand_off(&mut self, same_player: bool) {
        self.phase = TurnPhase::AwaitingThrow;
        if same_player {
            return;
        }

        self.current = self.current.next(self.player_count);
        self.turn_number += 1;
        self.sequence = 0;
        info!(player = %self.current, turn = self.turn_number, "turn passes");
    }
}

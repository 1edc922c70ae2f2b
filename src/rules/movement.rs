//! Move resolution: committing a destination and computing its effect.
//!
//! The `MoveResolver` is the only code that changes where pieces are.
//! It takes a validated `MoveCommand` and applies it in full:
//! - goal arrival removes the moving group from the board
//! - landing on an opponent sends every opponent piece there back to start
//! - landing on your own pieces either carries (merges groups) or stacks
//!   them side by side as independent groups
//!
//! Validation (ownership, legality of the destination) happens before a
//! command is built, so resolution itself cannot fail and never leaves a
//! move half applied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::board::{Board, CellId, CellKind, Destination};
use crate::core::{GroupId, MatchState, PieceId};

/// A validated request to move one piece and everything it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    pub piece: PieceId,
    pub destination: Destination,

    /// Merge with same-owner pieces already on the destination.
    pub carry: bool,
}

/// What a resolved move did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Pieces that moved, in stacking order.
    pub moved: SmallVec<[PieceId; 4]>,

    /// Opponent pieces sent back to the start cell.
    pub captured: SmallVec<[PieceId; 4]>,

    /// The moving group merged with pieces already on the cell.
    pub carried: bool,

    /// The moving group finished.
    pub reached_goal: bool,

    /// The mover's last piece finished.
    pub player_won: bool,
}

impl MoveOutcome {
    /// Did the move send anything back to start?
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// Applies move commands to a match state.
pub struct MoveResolver;

impl MoveResolver {
    /// Apply a validated command.
    pub fn resolve(state: &mut MatchState, board: &Board, command: MoveCommand) -> MoveOutcome {
        let Some(piece) = state.piece(command.piece) else {
            debug_assert!(false, "{} is not in this match", command.piece);
            return MoveOutcome::default();
        };
        let owner = piece.owner;
        let target = command.destination.cell;

        let mut outcome = MoveOutcome {
            moved: state.group_of(command.piece).into_iter().collect(),
            ..MoveOutcome::default()
        };

        if target == CellId::GOAL {
            Self::finish(state, &outcome.moved, command.destination);
            outcome.reached_goal = true;
            outcome.player_won = state.has_finished(owner);
            info!(piece = %command.piece, moved = outcome.moved.len(), "reached goal");
            return outcome;
        }

        let resting: Vec<PieceId> = state
            .occupants(target)
            .iter()
            .copied()
            .filter(|id| !outcome.moved.contains(id))
            .collect();

        // The start cell hosts everyone's waiting pieces; nothing interacts there.
        let at_start = board.cell_kind(target) == Some(CellKind::Start);
        let contested = !at_start && !resting.is_empty();

        let mut group = GroupId::solo(command.piece);
        if let Some(&first) = outcome.moved.first() {
            group = state.piece(first).map_or(group, |p| p.group);
        }

        if contested {
            let (own, rival): (Vec<PieceId>, Vec<PieceId>) = resting
                .iter()
                .partition(|&&id| state.piece(id).is_some_and(|p| p.owner == owner));

            for &id in &rival {
                state.piece_mut(id).reset_to_start();
                state.occupancy.move_to(id, CellId::START);
                outcome.captured.push(id);
            }
            if !rival.is_empty() {
                info!(cell = %target, captured = rival.len(), "captured");
            }

            if !own.is_empty() && command.carry {
                group = state.piece(own[0]).map_or(group, |p| p.group);
                for &id in &own {
                    let resting_piece = state.piece_mut(id);
                    resting_piece.group = group;
                    resting_piece.route = command.destination.route;
                }
                outcome.carried = true;
                debug!(cell = %target, size = own.len() + outcome.moved.len(), "carried");
            }
        }

        if at_start && outcome.moved.len() > 1 {
            debug!(size = outcome.moved.len(), "group split at start");
        }

        for &id in &outcome.moved {
            let mover = state.piece_mut(id);
            mover.cell = target;
            mover.route = command.destination.route;
            // Waiting pieces never ride together.
            mover.group = if at_start { GroupId::solo(id) } else { group };
            mover.selected = false;
            state.occupancy.move_to(id, target);
        }

        outcome
    }

    fn finish(state: &mut MatchState, group: &[PieceId], destination: Destination) {
        for &id in group {
            state.occupancy.remove(id);
            let piece = state.piece_mut(id);
            piece.cell = CellId::GOAL;
            piece.route = destination.route;
            piece.group = GroupId::solo(id);
            piece.selected = false;
        }
    }
}

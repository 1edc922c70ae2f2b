//! The match session: one explicitly owned object per game.
//!
//! `Match` is the only entry point the presentation layer talks to. It
//! validates every inbound command against the turn machine, ownership
//! and the route resolver before anything changes, then hands accepted
//! moves to the `MoveResolver`.
//!
//! ## Example
//!
//! ```
//! use rust_yut::core::{MatchConfig, PlayerSpec};
//! use rust_yut::rules::{Match, TurnPhase};
//! use rust_yut::throw::{StickToss, ThrowResult};
//!
//! let roster = vec![PlayerSpec::new("Ari", 0).host(), PlayerSpec::new("Bo", 1)];
//! let mut game = Match::start(MatchConfig::new().pieces_per_player(2), roster).unwrap();
//!
//! let result = game
//!     .submit_throw_observation(&StickToss::for_result(ThrowResult::Gae))
//!     .unwrap();
//! assert_eq!(result, ThrowResult::Gae);
//!
//! let piece = game.pieces_of(game.current_player()).unwrap()[0].id;
//! let options = game.select_piece(piece).unwrap();
//! let outcome = game.resolve_move(piece, options[0].cell, None).unwrap();
//!
//! assert!(!outcome.is_capture());
//! assert_eq!(game.game_phase(), TurnPhase::AwaitingThrow);
//! ```

use im::Vector;
use tracing::{debug, instrument};

use super::movement::{MoveCommand, MoveOutcome, MoveResolver};
use super::turn::{TurnMachine, TurnPhase};
use crate::board::{Board, CellId, Destination, Destinations, RouteResolver};
use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{
    Command, MatchConfig, MatchSnapshot, MatchState, Piece, PieceId, Player, PlayerId, PlayerSpec,
    Result, RulesError, TurnEvent, TurnRecord,
};
use crate::throw::{StickToss, ThrowResult};

const AWAITING_MOVE: [TurnPhase; 2] = [TurnPhase::AwaitingPieceSelection, TurnPhase::AwaitingDestination];

/// A single Yut match.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    board: &'static Board,
    state: MatchState,
    turn: TurnMachine,
    history: Vector<TurnRecord>,
}

impl Match {
    /// Start a match with players ordered by their sequence numbers.
    pub fn start(config: MatchConfig, roster: Vec<PlayerSpec>) -> Result<Self> {
        let roster = order_roster(roster)?;
        let state = MatchState::new(&roster, config.pieces_per_player);
        let turn = TurnMachine::new(roster.len());

        debug!(players = roster.len(), pieces = config.pieces_per_player, "match started");

        Ok(Self {
            config,
            board: Board::standard(),
            state,
            turn,
            history: Vector::new(),
        })
    }

    /// Abandon the current match and start over with a new roster.
    ///
    /// On error the current match is kept.
    #[instrument(skip(self, roster), fields(players = roster.len()))]
    pub fn restart(&mut self, roster: Vec<PlayerSpec>) -> Result<()> {
        *self = Self::start(self.config.clone(), roster)?;
        Ok(())
    }

    // === Inbound commands ===

    /// Evaluate a settled toss for the current player.
    ///
    /// A foul (`Nak`) forfeits the throw but not the turn. A result no
    /// piece can use is forfeited immediately.
    #[instrument(skip(self), fields(player = %self.turn.current_player()))]
    pub fn submit_throw_observation(&mut self, toss: &StickToss) -> Result<ThrowResult> {
        self.turn.expect(Command::Throw, &[TurnPhase::AwaitingThrow])?;
        let result = toss.evaluate()?;

        self.record(TurnEvent::Threw(result));
        self.turn.throw_resolved(result);

        if !result.is_foul() && !self.current_player_can_move() {
            self.record(TurnEvent::Forfeited(result));
            self.turn.forfeit();
        }

        Ok(result)
    }

    /// Select a piece (and its carried group) and list where it can go.
    #[instrument(skip(self), fields(player = %self.turn.current_player()))]
    pub fn select_piece(&mut self, piece: PieceId) -> Result<Vec<Destination>> {
        self.turn.expect(Command::Select, &AWAITING_MOVE)?;
        let destinations = self.destinations_for(piece)?;

        self.state.clear_selection();
        for member in self.state.group_of(piece) {
            self.state.piece_mut(member).selected = true;
        }
        self.turn.piece_selected(piece);

        Ok(destinations.into_vec())
    }

    /// Where a piece of the current player can go with the active throw.
    #[instrument(skip(self), fields(player = %self.turn.current_player()))]
    pub fn legal_destinations(&self, piece: PieceId) -> Result<Vec<Destination>> {
        self.turn.expect(Command::Destinations, &AWAITING_MOVE)?;
        Ok(self.destinations_for(piece)?.into_vec())
    }

    /// Move a piece (with everything it carries) to a legal destination.
    ///
    /// `carry` matters only when the destination holds the mover's own
    /// pieces; `None` falls back to the configured default.
    #[instrument(skip(self), fields(player = %self.turn.current_player()))]
    pub fn resolve_move(
        &mut self,
        piece: PieceId,
        destination: CellId,
        carry: Option<bool>,
    ) -> Result<MoveOutcome> {
        self.turn.expect(Command::Move, &AWAITING_MOVE)?;
        if !self.board.contains(destination) {
            return Err(RulesError::UnknownCell(destination));
        }

        let chosen = self
            .destinations_for(piece)?
            .into_iter()
            .find(|d| d.cell == destination)
            .ok_or(RulesError::IllegalDestination {
                piece,
                cell: destination,
            })?;

        let command = MoveCommand {
            piece,
            destination: chosen,
            carry: carry.unwrap_or(self.config.default_carry),
        };
        let outcome = MoveResolver::resolve(&mut self.state, self.board, command);
        self.state.clear_selection();

        self.record(TurnEvent::Moved {
            piece,
            destination: chosen,
            outcome: outcome.clone(),
        });

        let bonus = self.config.capture_grants_throw && outcome.is_capture();
        self.turn.move_resolved(outcome.player_won, bonus);

        Ok(outcome)
    }

    // === Outbound queries ===

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player()
    }

    #[must_use]
    pub fn game_phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// The throw waiting to be used.
    #[must_use]
    pub fn active_throw(&self) -> Option<ThrowResult> {
        self.turn.active_throw()
    }

    /// The piece selected for the pending move.
    #[must_use]
    pub fn selected_piece(&self) -> Option<PieceId> {
        self.turn.selected()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number()
    }

    /// Roster in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.state.players()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.state.player(id).ok_or(RulesError::UnknownPlayer(id))
    }

    pub fn piece(&self, id: PieceId) -> Result<&Piece> {
        self.state.piece(id).ok_or(RulesError::UnknownPiece(id))
    }

    pub fn pieces_of(&self, player: PlayerId) -> Result<Vec<&Piece>> {
        self.player(player)?;
        Ok(self.state.pieces_of(player).collect())
    }

    /// Pieces resting on a cell, bottom of the stack first.
    pub fn cell_occupants(&self, cell: CellId) -> Result<&[PieceId]> {
        if !self.board.contains(cell) {
            return Err(RulesError::UnknownCell(cell));
        }
        Ok(self.state.occupants(cell))
    }

    /// The carried group a piece belongs to.
    pub fn group_of(&self, piece: PieceId) -> Result<Vec<PieceId>> {
        self.piece(piece)?;
        Ok(self.state.group_of(piece))
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &'static Board {
        self.board
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Every accepted throw, forfeit and move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Owned, serializable view for broadcasting.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.turn.phase(),
            current_player: self.turn.current_player(),
            turn_number: self.turn.turn_number(),
            players: self.state.players().cloned().collect(),
            pieces: self.state.pieces().to_vec(),
        }
    }

    // === Internals ===

    fn destinations_for(&self, piece: PieceId) -> Result<Destinations> {
        let record = self.piece(piece)?;
        let current = self.turn.current_player();
        if record.owner != current {
            return Err(RulesError::NotCurrentPlayersPiece {
                piece,
                owner: record.owner,
                current,
            });
        }

        let Some(steps) = self.turn.active_throw().and_then(ThrowResult::steps) else {
            return Ok(Destinations::new());
        };

        Ok(self.resolver().destinations(record.cell, record.route, steps))
    }

    fn resolver(&self) -> RouteResolver<'static> {
        RouteResolver::new(self.board).with_overshoot(self.config.allow_overshoot)
    }

    fn current_player_can_move(&self) -> bool {
        let Some(steps) = self.turn.active_throw().and_then(ThrowResult::steps) else {
            return false;
        };
        let resolver = self.resolver();

        self.state
            .pieces_of(self.turn.current_player())
            .any(|p| !resolver.destinations(p.cell, p.route, steps).is_empty())
    }

    fn record(&mut self, event: TurnEvent) {
        let sequence = self.turn.next_sequence();
        let record = TurnRecord::new(
            self.turn.current_player(),
            event,
            self.turn.turn_number(),
            sequence,
        );
        self.history.push_back(record);
    }
}

/// Validate the roster and sort it into turn order.
fn order_roster(mut roster: Vec<PlayerSpec>) -> Result<Vec<PlayerSpec>> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
        return Err(RulesError::InvalidRoster(format!(
            "{} players, expected {MIN_PLAYERS}-{MAX_PLAYERS}",
            roster.len()
        )));
    }

    roster.sort_by_key(|spec| spec.sequence);
    if let Some(pair) = roster.windows(2).find(|w| w[0].sequence == w[1].sequence) {
        return Err(RulesError::InvalidRoster(format!(
            "duplicate sequence number {}",
            pair[0].sequence
        )));
    }

    Ok(roster)
}

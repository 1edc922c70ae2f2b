//! Match state: players, pieces and where they rest.
//!
//! ## MatchState
//!
//! - Players in turn order, each owning a fixed set of pieces
//! - Piece records (cell, route, group, selection)
//! - The occupancy map, kept consistent with the piece records
//!
//! ## MatchSnapshot
//!
//! A serializable, owned view for the broadcast layer.

use serde::{Deserialize, Serialize};

use super::piece::{GroupId, Piece, PieceId};
use super::player::{Player, PlayerId, PlayerMap, PlayerSpec};
use crate::board::{CellId, Occupancy};
use crate::rules::TurnPhase;

/// Mutable state of one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    players: PlayerMap<Player>,

    /// Indexed by `PieceId`.
    pieces: Vec<Piece>,

    pub(crate) occupancy: Occupancy,
}

impl MatchState {
    /// Build fresh players and pieces, every piece waiting at the start.
    ///
    /// `roster` must already be in turn order.
    #[must_use]
    pub fn new(roster: &[PlayerSpec], pieces_per_player: usize) -> Self {
        let mut pieces = Vec::with_capacity(roster.len() * pieces_per_player);
        let mut occupancy = Occupancy::new();
        let mut players = Vec::with_capacity(roster.len());

        for (index, spec) in roster.iter().enumerate() {
            let owner = PlayerId::new(index as u8);
            let mut owned = Vec::with_capacity(pieces_per_player);

            for _ in 0..pieces_per_player {
                let id = PieceId::new(pieces.len() as u32);
                pieces.push(Piece::new(id, owner));
                occupancy.place(id, CellId::START);
                owned.push(id);
            }

            players.push(Player::from_spec(owner, spec, owned));
        }

        Self {
            players: PlayerMap::from_vec(players),
            pieces,
            occupancy,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// All pieces, ordered by ID.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pieces owned by a player.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.owner == player)
    }

    /// Pieces resting on a cell, bottom of the stack first.
    #[must_use]
    pub fn occupants(&self, cell: CellId) -> &[PieceId] {
        self.occupancy.occupants(cell)
    }

    /// The carried group a piece belongs to, in stacking order.
    ///
    /// A piece that carries nothing is returned alone. Finished pieces
    /// are never grouped.
    #[must_use]
    pub fn group_of(&self, id: PieceId) -> Vec<PieceId> {
        let Some(piece) = self.piece(id) else {
            return Vec::new();
        };
        if piece.is_finished() {
            return vec![id];
        }

        self.occupancy
            .occupants(piece.cell)
            .iter()
            .copied()
            .filter(|&other| self.pieces[other.index()].group == piece.group)
            .collect()
    }

    /// Distinct groups resting on a cell, in stacking order of their
    /// lowest member.
    #[must_use]
    pub fn groups_at(&self, cell: CellId) -> Vec<GroupId> {
        let mut groups = Vec::new();
        for &id in self.occupancy.occupants(cell) {
            let group = self.pieces[id.index()].group;
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }

    /// Has every piece of the player reached the goal?
    #[must_use]
    pub fn has_finished(&self, player: PlayerId) -> bool {
        self.pieces_of(player).all(Piece::is_finished)
    }

    /// Clear every selection flag.
    pub(crate) fn clear_selection(&mut self) {
        for piece in &mut self.pieces {
            piece.selected = false;
        }
    }
}

/// Serializable view of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub phase: TurnPhase,
    pub current_player: PlayerId,
    pub turn_number: u32,
    pub players: Vec<Player>,
    pub pieces: Vec<Piece>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(count: usize) -> Vec<PlayerSpec> {
        (0..count)
            .map(|i| PlayerSpec::new(format!("P{i}"), i as u32))
            .collect()
    }

    #[test]
    fn test_new_state_all_at_start() {
        let state = MatchState::new(&roster(3), 2);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.pieces().len(), 6);
        assert_eq!(state.occupants(CellId::START).len(), 6);
        assert!(state.pieces().iter().all(Piece::is_at_start));
    }

    #[test]
    fn test_piece_ownership_layout() {
        let state = MatchState::new(&roster(2), 4);

        let second: Vec<_> = state.pieces_of(PlayerId::new(1)).map(|p| p.id).collect();
        assert_eq!(second, vec![PieceId(4), PieceId(5), PieceId(6), PieceId(7)]);
        assert_eq!(state.player(PlayerId::new(1)).map(|p| p.pieces.clone()), Some(second));
        assert!(state.player(PlayerId::new(2)).is_none());
    }

    #[test]
    fn test_group_of_solo_piece() {
        let state = MatchState::new(&roster(2), 2);
        assert_eq!(state.group_of(PieceId(1)), vec![PieceId(1)]);
        assert!(state.group_of(PieceId(99)).is_empty());
    }

    #[test]
    fn test_groups_at_start() {
        let state = MatchState::new(&roster(2), 2);
        assert_eq!(state.groups_at(CellId::START).len(), 4);
    }

    #[test]
    fn test_has_finished() {
        let mut state = MatchState::new(&roster(2), 1);
        assert!(!state.has_finished(PlayerId::new(0)));

        state.occupancy.remove(PieceId(0));
        state.piece_mut(PieceId(0)).cell = CellId::GOAL;

        assert!(state.has_finished(PlayerId::new(0)));
        assert!(!state.has_finished(PlayerId::new(1)));
    }
}

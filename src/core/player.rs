//! Player identification, roster entries and per-player storage.
//!
//! ## PlayerId
//!
//! Position of a player in turn order, 0-based.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};

use super::piece::PieceId;

/// Player identifier: the player's position in turn order.
///
/// The first player to throw is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who throws after this one.
    ///
    /// ```
    /// use rust_yut::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(4), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One roster entry supplied at game setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Display name.
    pub name: String,

    /// Turn-order sequence number. Lower throws first.
    pub sequence: u32,

    /// Whether this player hosts the session.
    pub is_host: bool,
}

impl PlayerSpec {
    /// Create a roster entry for a non-host player.
    pub fn new(name: impl Into<String>, sequence: u32) -> Self {
        Self {
            name: name.into(),
            sequence,
            is_host: false,
        }
    }

    /// Mark this entry as the session host.
    #[must_use]
    pub fn host(mut self) -> Self {
        self.is_host = true;
        self
    }
}

/// A player in a running match.
///
/// Immutable after setup; piece state lives in the pieces themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub sequence: u32,
    pub is_host: bool,

    /// Owned pieces, in allocation order.
    pub pieces: Vec<PieceId>,
}

impl Player {
    /// Build a player from its roster entry.
    #[must_use]
    pub fn from_spec(id: PlayerId, spec: &PlayerSpec, pieces: Vec<PieceId>) -> Self {
        Self {
            id,
            name: spec.name.clone(),
            sequence: spec.sequence,
            is_host: spec.is_host,
            pieces,
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_yut::core::{PlayerId, PlayerMap};
///
/// let names = PlayerMap::from_vec(vec!["Ari", "Bo"]);
/// assert_eq!(names.get(PlayerId::new(1)), Some(&"Bo"));
/// assert_eq!(names.get(PlayerId::new(2)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from values already in turn order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's data, or `None` for an unknown player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

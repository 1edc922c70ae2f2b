//! Match configuration.
//!
//! Sessions configure the rules core once per match:
//! - how many pieces each player fields
//! - whether moves may overshoot the goal
//! - the carry decision used when the caller leaves it open
//! - whether a capture earns a bonus throw
//!
//! The board itself is fixed and never configured.

use serde::{Deserialize, Serialize};

/// Fewest players a match accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match accepts.
pub const MAX_PLAYERS: usize = 4;

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use rust_yut::core::MatchConfig;
///
/// let config = MatchConfig::new()
///     .pieces_per_player(2)
///     .default_carry(false);
///
/// assert_eq!(config.pieces_per_player, 2);
/// assert!(!config.default_carry);
/// assert!(!config.allow_overshoot);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Pieces owned by each player (1-4).
    pub pieces_per_player: usize,

    /// Let a forward move past the goal finish instead of being inadmissible.
    pub allow_overshoot: bool,

    /// Carry decision applied when the caller passes `None` and the target
    /// cell holds the mover's own pieces.
    pub default_carry: bool,

    /// Grant the capturing player another throw.
    pub capture_grants_throw: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            pieces_per_player: 4,
            allow_overshoot: false,
            default_carry: true,
            capture_grants_throw: false,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration: four pieces, exact finish,
    /// carry by default, no capture bonus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pieces per player.
    #[must_use]
    pub fn pieces_per_player(mut self, count: usize) -> Self {
        assert!((1..=4).contains(&count), "Pieces per player must be 1-4");
        self.pieces_per_player = count;
        self
    }

    /// Allow forward moves to overshoot into the goal.
    #[must_use]
    pub fn allow_overshoot(mut self, allow: bool) -> Self {
        self.allow_overshoot = allow;
        self
    }

    /// Set the fallback carry decision.
    #[must_use]
    pub fn default_carry(mut self, carry: bool) -> Self {
        self.default_carry = carry;
        self
    }

    /// Grant a bonus throw on capture.
    #[must_use]
    pub fn capture_grants_throw(mut self, grant: bool) -> Self {
        self.capture_grants_throw = grant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::new();

        assert_eq!(config.pieces_per_player, 4);
        assert!(!config.allow_overshoot);
        assert!(config.default_carry);
        assert!(!config.capture_grants_throw);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .pieces_per_player(2)
            .allow_overshoot(true)
            .default_carry(false)
            .capture_grants_throw(true);

        assert_eq!(config.pieces_per_player, 2);
        assert!(config.allow_overshoot);
        assert!(!config.default_carry);
        assert!(config.capture_grants_throw);
    }

    #[test]
    #[should_panic(expected = "Pieces per player must be 1-4")]
    fn test_zero_pieces() {
        let _ = MatchConfig::new().pieces_per_player(0);
    }

    #[test]
    #[should_panic(expected = "Pieces per player must be 1-4")]
    fn test_too_many_pieces() {
        let _ = MatchConfig::new().pieces_per_player(5);
    }
}

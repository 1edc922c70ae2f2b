//! Discrete throw outcomes.

use serde::{Deserialize, Serialize};

/// Result of one toss of the four sticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowResult {
    /// One step backward.
    Backdo,
    Do,
    Gae,
    Geol,
    /// Four steps and another throw.
    Yut,
    /// Five steps and another throw.
    Mo,
    /// Foul: a stick left the playing surface. Forfeits the throw.
    Nak,
}

impl ThrowResult {
    /// Every result, in step order, foul last.
    pub const ALL: [ThrowResult; 7] = [
        ThrowResult::Backdo,
        ThrowResult::Do,
        ThrowResult::Gae,
        ThrowResult::Geol,
        ThrowResult::Yut,
        ThrowResult::Mo,
        ThrowResult::Nak,
    ];

    /// Signed step count, `None` for `Nak`.
    ///
    /// ```
    /// use rust_yut::throw::ThrowResult;
    ///
    /// assert_eq!(ThrowResult::Backdo.steps(), Some(-1));
    /// assert_eq!(ThrowResult::Mo.steps(), Some(5));
    /// assert_eq!(ThrowResult::Nak.steps(), None);
    /// ```
    #[must_use]
    pub const fn steps(self) -> Option<i8> {
        match self {
            ThrowResult::Backdo => Some(-1),
            ThrowResult::Do => Some(1),
            ThrowResult::Gae => Some(2),
            ThrowResult::Geol => Some(3),
            ThrowResult::Yut => Some(4),
            ThrowResult::Mo => Some(5),
            ThrowResult::Nak => None,
        }
    }

    /// Does this result earn the thrower another throw?
    #[must_use]
    pub const fn grants_extra_throw(self) -> bool {
        matches!(self, ThrowResult::Yut | ThrowResult::Mo)
    }

    #[must_use]
    pub const fn is_foul(self) -> bool {
        matches!(self, ThrowResult::Nak)
    }
}

impl std::fmt::Display for ThrowResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ThrowResult::Backdo => "Backdo",
            ThrowResult::Do => "Do",
            ThrowResult::Gae => "Gae",
            ThrowResult::Geol => "Geol",
            ThrowResult::Yut => "Yut",
            ThrowResult::Mo => "Mo",
            ThrowResult::Nak => "Nak",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counts() {
        let steps: Vec<_> = ThrowResult::ALL.iter().map(|r| r.steps()).collect();
        assert_eq!(
            steps,
            vec![Some(-1), Some(1), Some(2), Some(3), Some(4), Some(5), None]
        );
    }

    #[test]
    fn test_extra_throw_only_for_yut_and_mo() {
        let extra: Vec<_> = ThrowResult::ALL
            .into_iter()
            .filter(|r| r.grants_extra_throw())
            .collect();
        assert_eq!(extra, vec![ThrowResult::Yut, ThrowResult::Mo]);
    }

    #[test]
    fn test_only_nak_is_foul() {
        assert!(ThrowResult::Nak.is_foul());
        assert!(!ThrowResult::Backdo.is_foul());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ThrowResult::Geol).unwrap();
        assert_eq!(json, "\"Geol\"");
        let back: ThrowResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ThrowResult::Geol);
    }
}

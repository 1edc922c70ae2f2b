//! Stick observations and their interpretation.
//!
//! Four sticks are tossed; one of them carries a mark on its back face.
//! Counting the sticks that land face-up gives the result, except that
//! three face-up with the marked stick face-down is `Backdo`. Any stick
//! leaving the playing surface makes the throw a foul (`Nak`).
//!
//! | face-up | result |
//! |---------|--------|
//! | 0       | Yut    |
//! | 1       | Geol   |
//! | 2       | Gae    |
//! | 3       | Do, or Backdo if the marked stick is face-down |
//! | 4       | Mo     |

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::result::ThrowResult;
use crate::core::{Result, RulesError};

/// Number of sticks in a toss.
pub const STICK_COUNT: usize = 4;

/// Settled orientation of the four sticks, as reported by the sensor layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickToss {
    /// Face-up flag per stick.
    pub face_up: [bool; STICK_COUNT],

    /// Index of the marked stick.
    pub marked: usize,

    /// A stick left the playing surface.
    pub foul: bool,
}

impl StickToss {
    /// A clean toss.
    #[must_use]
    pub const fn new(face_up: [bool; STICK_COUNT], marked: usize) -> Self {
        Self {
            face_up,
            marked,
            foul: false,
        }
    }

    /// Mark the toss as a foul.
    #[must_use]
    pub const fn with_foul(mut self, foul: bool) -> Self {
        self.foul = foul;
        self
    }

    /// A canonical toss that evaluates to `result`, with stick 0 marked.
    ///
    /// ```
    /// use rust_yut::throw::{StickToss, ThrowResult};
    ///
    /// for result in ThrowResult::ALL {
    ///     assert_eq!(StickToss::for_result(result).evaluate(), Ok(result));
    /// }
    /// ```
    #[must_use]
    pub const fn for_result(result: ThrowResult) -> Self {
        let face_up = match result {
            ThrowResult::Yut | ThrowResult::Nak => [false; 4],
            ThrowResult::Geol => [false, true, false, false],
            ThrowResult::Gae => [false, true, true, false],
            ThrowResult::Do => [true, true, false, true],
            ThrowResult::Backdo => [false, true, true, true],
            ThrowResult::Mo => [true; 4],
        };
        Self {
            face_up,
            marked: 0,
            foul: matches!(result, ThrowResult::Nak),
        }
    }

    /// Number of face-up sticks.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.face_up.iter().filter(|&&up| up).count()
    }

    /// Interpret the toss.
    ///
    /// Fails only when the marked stick index is out of range.
    pub fn evaluate(&self) -> Result<ThrowResult> {
        if self.foul {
            debug!("foul toss");
            return Ok(ThrowResult::Nak);
        }

        let marked_up = *self
            .face_up
            .get(self.marked)
            .ok_or(RulesError::InvalidMarkedStick(self.marked))?;

        let result = match self.face_up_count() {
            3 if !marked_up => ThrowResult::Backdo,
            0 => ThrowResult::Yut,
            1 => ThrowResult::Geol,
            2 => ThrowResult::Gae,
            3 => ThrowResult::Do,
            _ => ThrowResult::Mo,
        };

        debug!(face_up = ?self.face_up, marked = self.marked, %result, "evaluated toss");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_all_up_is_mo() {
        assert_eq!(StickToss::new([T, T, T, T], 0).evaluate(), Ok(ThrowResult::Mo));
    }

    #[test]
    fn test_all_down_is_yut() {
        assert_eq!(StickToss::new([F, F, F, F], 2).evaluate(), Ok(ThrowResult::Yut));
    }

    #[test]
    fn test_marked_stick_down_is_backdo() {
        assert_eq!(StickToss::new([T, T, T, F], 3).evaluate(), Ok(ThrowResult::Backdo));
    }

    #[test]
    fn test_unmarked_stick_down_is_do() {
        assert_eq!(StickToss::new([T, T, T, F], 0).evaluate(), Ok(ThrowResult::Do));
    }

    #[test]
    fn test_one_and_two_up() {
        assert_eq!(StickToss::new([F, F, T, F], 2).evaluate(), Ok(ThrowResult::Geol));
        assert_eq!(StickToss::new([T, F, T, F], 1).evaluate(), Ok(ThrowResult::Gae));
    }

    #[test]
    fn test_foul_overrides_sticks() {
        for face_up in [[T, T, T, T], [F, F, F, F], [T, T, T, F]] {
            let toss = StickToss::new(face_up, 3).with_foul(true);
            assert_eq!(toss.evaluate(), Ok(ThrowResult::Nak));
        }
    }

    #[test]
    fn test_marked_index_out_of_range() {
        assert_eq!(
            StickToss::new([T, F, F, F], 4).evaluate(),
            Err(RulesError::InvalidMarkedStick(4))
        );
    }

    #[test]
    fn test_canonical_tosses() {
        for result in ThrowResult::ALL {
            assert_eq!(StickToss::for_result(result).evaluate(), Ok(result));
        }
    }
}

//! Throw sources: where `StickToss` observations come from.
//!
//! In a live session the sensor layer produces tosses. Simulations and
//! tests use a `ThrowSource` instead.

use std::collections::VecDeque;

use super::evaluator::{StickToss, STICK_COUNT};
use super::result::ThrowResult;
use crate::core::GameRng;

/// Produces stick observations on demand.
pub trait ThrowSource {
    /// Toss the sticks once.
    fn toss(&mut self) -> StickToss;
}

/// Seeded random tosses.
///
/// Each stick lands face-up with probability one half; the whole toss is a
/// foul with probability `foul_probability`.
#[derive(Clone, Debug)]
pub struct RandomThrower {
    rng: GameRng,
    foul_probability: f64,
}

impl RandomThrower {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            foul_probability: 0.0,
        }
    }

    /// Set the chance that a toss is a foul.
    #[must_use]
    pub fn with_foul_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Foul probability must be within 0-1"
        );
        self.foul_probability = probability;
        self
    }
}

impl ThrowSource for RandomThrower {
    fn toss(&mut self) -> StickToss {
        let mut face_up = [false; STICK_COUNT];
        for stick in &mut face_up {
            *stick = self.rng.gen_bool(0.5);
        }
        let marked = self.rng.gen_range_usize(0..STICK_COUNT);
        let foul = self.rng.gen_bool(self.foul_probability);

        StickToss::new(face_up, marked).with_foul(foul)
    }
}

/// Replays a fixed sequence of results, then keeps throwing `Do`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedThrower {
    script: VecDeque<ThrowResult>,
}

impl ScriptedThrower {
    pub fn new(script: impl IntoIterator<Item = ThrowResult>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Results not yet thrown.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ThrowSource for ScriptedThrower {
    fn toss(&mut self) -> StickToss {
        let result = self.script.pop_front().unwrap_or(ThrowResult::Do);
        StickToss::for_result(result)
    }
}

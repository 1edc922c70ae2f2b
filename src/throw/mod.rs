//! Throwing the sticks.
//!
//! - `ThrowResult`: the seven discrete outcomes
//! - `StickToss`: a settled observation and its evaluation
//! - `ThrowSource`: random and scripted toss producers

pub mod result;
pub mod evaluator;
pub mod source;

pub use result::ThrowResult;
pub use evaluator::{StickToss, STICK_COUNT};
pub use source::{RandomThrower, ScriptedThrower, ThrowSource};

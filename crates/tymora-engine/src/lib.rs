//! Luck-roll engine for tymora.
//!
//! Rolls 1d20 plus a per-character modifier for every entrant, classifies
//! natural 20s and natural 1s, and assembles a report naming the best- and
//! worst-luck entrants. Dice come in through the [`RollSource`] capability,
//! so callers choose between a live RNG, a fixed seed, and scripted
//! sequences without changing roll order or tie-break behavior.

pub mod dice;
pub mod engine;
pub mod entrant;
pub mod error;
pub mod report;

pub use dice::{D20_SIDES, DieRoller, RollSource, ScriptedRolls};
pub use engine::compute_luck_rolls;
pub use entrant::Entrant;
pub use error::{LuckError, LuckResult};
pub use report::{Classification, RollEntry, RollOutcome, RollReport, Standing};

//! The d20 roll-source capability and its implementations.
//!
//! Every die value the engine consumes comes through [`RollSource`], so the
//! same computation runs against a live RNG, a fixed seed for replays, or a
//! scripted sequence in tests.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Number of sides on the luck die.
pub const D20_SIDES: u32 = 20;

/// A capability producing one d20 outcome per call.
///
/// The contract is a value in `1..=20` per invocation, each draw independent
/// of the last. The engine checks the range on every draw and treats a value
/// outside it as a broken source, not as input data.
pub trait RollSource {
    /// Produce the next d20 value.
    fn roll_d20(&mut self) -> u32;
}

/// A [`RollSource`] backed by the standard RNG.
#[derive(Debug)]
pub struct DieRoller {
    rng: StdRng,
}

impl DieRoller {
    /// Create a roller seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic roller, for replays and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DieRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl RollSource for DieRoller {
    fn roll_d20(&mut self) -> u32 {
        self.rng.random_range(1..=D20_SIDES)
    }
}

/// A [`RollSource`] replaying a fixed sequence of values.
///
/// Useful in tests and for reproducing a reported roll. An exhausted script
/// yields 0, which the engine rejects as out of range.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    values: VecDeque<u32>,
}

impl ScriptedRolls {
    /// Create a scripted source from a sequence of die values.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// How many scripted values have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll_d20(&mut self) -> u32 {
        self.values.pop_front().unwrap_or(0)
    }
}

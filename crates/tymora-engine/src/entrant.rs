//! Entrants: the characters taking part in a luck roll.

use serde::{Deserialize, Serialize};

/// One character taking part in a luck-roll invocation.
///
/// Names are not required to be unique; two entrants with the same name
/// are independent participants and roll separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    /// Display name of the character.
    pub name: String,
    /// Fixed bonus or penalty added to every die this entrant rolls.
    pub modifier: i32,
}

impl Entrant {
    /// Create an entrant from a name and a modifier.
    pub fn new(name: impl Into<String>, modifier: i32) -> Self {
        Self {
            name: name.into(),
            modifier,
        }
    }
}

//! Roll outcomes, entries, and the assembled luck-roll report.

use serde::{Deserialize, Serialize};

use crate::entrant::Entrant;

/// How a raw die value is classed, independent of any modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// A natural 20.
    Critical,
    /// A natural 1.
    Fumble,
    /// Any other die value.
    Normal,
}

impl Classification {
    /// Classify a raw die value. Only the die matters, never the total.
    pub fn from_die(die_value: u32) -> Self {
        match die_value {
            20 => Self::Critical,
            1 => Self::Fumble,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Fumble => write!(f, "fumble"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

/// What one entrant rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The raw d20 value, 1 to 20.
    pub die_value: u32,
    /// Die value plus the entrant's modifier, in 64 bits so any `i32`
    /// modifier stays exact. May fall outside 1..=20.
    pub total: i64,
    /// Critical, fumble, or normal, from the raw die alone.
    pub classification: Classification,
}

/// One entrant paired with the outcome it rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEntry {
    /// The entrant that rolled.
    pub entrant: Entrant,
    /// What the entrant rolled.
    pub outcome: RollOutcome,
}

/// An entrant holding the best or worst spot, with the total that earned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Name of the entrant holding the spot.
    pub name: String,
    /// The total that earned the spot.
    pub total: i64,
}

/// The assembled result of one luck-roll invocation.
///
/// Entries keep the order the entrants were supplied in; best and worst are
/// resolved as the rolls happen, with ties kept by the earlier entrant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollReport {
    /// One entry per entrant, in input order. Never sorted.
    pub entries: Vec<RollEntry>,
    /// Holder of the strictly highest total. `None` only for an empty report.
    pub best: Option<Standing>,
    /// Holder of the strictly lowest total. `None` only for an empty report.
    pub worst: Option<Standing>,
}

impl RollReport {
    /// Number of entries in the report.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entrants took part.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

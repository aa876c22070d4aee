//! Error types for scene loading and entrant gathering.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors that can occur while loading a scene or gathering entrants.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The scene file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// Path of the scene file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The scene file is not valid scene JSON.
    #[error("invalid scene: {0}")]
    Parse(#[from] serde_json::Error),

    /// A player character entry has an empty name.
    #[error("character at index {0} has no name")]
    UnnamedCharacter(usize),

    /// A player character lacks the requested ability score.
    #[error("{character} has no \"{ability}\" ability score")]
    UnknownAbility {
        /// Name of the character missing the score.
        character: String,
        /// Ability key that was requested.
        ability: String,
    },
}

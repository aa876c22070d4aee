//! Scene files and entrant gathering for tymora.
//!
//! A scene is a JSON file naming the actors at the table and their ability
//! scores. This crate loads scenes, keeps only the player characters, and
//! turns each one into a [`tymora_engine::Entrant`] carrying the modifier
//! derived from the requested ability score.

pub mod error;
pub mod gather;
pub mod scene;

pub use error::{RosterError, RosterResult};
pub use gather::{DEFAULT_ABILITY, ability_modifier, format_modifier, gather_entrants};
pub use scene::{ActorKind, Character, Scene};

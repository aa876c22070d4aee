//! Scene files: the actors at the table and their ability scores.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// What kind of actor a scene entry is. Only player characters roll luck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// A player character.
    #[default]
    Character,
    /// A GM-run character.
    Npc,
    /// A vehicle or other non-person actor.
    Vehicle,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorKind::Character => write!(f, "character"),
            ActorKind::Npc => write!(f, "npc"),
            ActorKind::Vehicle => write!(f, "vehicle"),
        }
    }
}

/// One actor in a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Actor kind; entries without one are player characters.
    #[serde(default)]
    pub kind: ActorKind,
    /// Ability scores by key, e.g. `"belief": 14`.
    #[serde(default)]
    pub abilities: HashMap<String, i32>,
}

/// A scene: a named group of actors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name, shown in report headers.
    pub name: String,
    /// Actors present in the scene, in table order.
    #[serde(default)]
    pub characters: Vec<Character>,
}

impl Scene {
    /// Parse a scene from a JSON string.
    pub fn from_json(json: &str) -> RosterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file.
    pub fn load(path: &Path) -> RosterResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The player characters, in scene order. NPCs and vehicles do not roll.
    pub fn player_characters(&self) -> impl Iterator<Item = &Character> {
        self.characters
            .iter()
            .filter(|c| c.kind == ActorKind::Character)
    }
}

//! Turning a scene into engine entrants.

use tymora_engine::Entrant;

use crate::error::{RosterError, RosterResult};
use crate::scene::{ActorKind, Scene};

/// Ability key used when the caller does not name one.
pub const DEFAULT_ABILITY: &str = "belief";

/// Ability modifier for a score: +0 at 10-11, one step per two points
/// either way, flooring for odd and sub-10 scores. Exact across the
/// whole `i32` score range.
pub fn ability_modifier(score: i32) -> i32 {
    score.div_euclid(2) - 5
}

/// Format a modifier with an explicit sign, the way sheets print them.
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

/// Collect the scene's player characters as entrants for the given ability.
///
/// Scene order is preserved. A player character with an empty name or
/// without the requested ability score fails the whole gather; NPCs and
/// vehicles are skipped without being inspected.
pub fn gather_entrants(scene: &Scene, ability: &str) -> RosterResult<Vec<Entrant>> {
    let mut entrants = Vec::new();
    for (index, character) in scene.characters.iter().enumerate() {
        if character.kind != ActorKind::Character {
            continue;
        }
        if character.name.trim().is_empty() {
            return Err(RosterError::UnnamedCharacter(index));
        }
        let score = character
            .abilities
            .get(ability)
            .copied()
            .ok_or_else(|| RosterError::UnknownAbility {
                character: character.name.clone(),
                ability: ability.to_string(),
            })?;
        entrants.push(Entrant::new(character.name.clone(), ability_modifier(score)));
    }
    Ok(entrants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Character;
    use std::collections::HashMap;

    fn pc(name: &str, score: i32) -> Character {
        Character {
            name: name.to_string(),
            kind: ActorKind::Character,
            abilities: HashMap::from([(DEFAULT_ABILITY.to_string(), score)]),
        }
    }

    #[test]
    fn modifier_table() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(12), 1);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(20), 5);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(3), -4);
        assert_eq!(ability_modifier(1), -5);
    }

    #[test]
    fn extreme_scores_stay_exact() {
        assert_eq!(ability_modifier(i32::MAX), 1_073_741_818);
        assert_eq!(ability_modifier(i32::MIN), -1_073_741_829);

        let scene = Scene {
            name: "Siege Tower".to_string(),
            characters: vec![pc("Coaxmetal", i32::MIN)],
        };
        let entrants = gather_entrants(&scene, DEFAULT_ABILITY).unwrap();
        assert_eq!(entrants[0].modifier, -1_073_741_829);
    }

    #[test]
    fn modifiers_print_signed() {
        assert_eq!(format_modifier(2), "+2");
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(-1), "-1");
    }

    #[test]
    fn gathers_player_characters_in_scene_order() {
        let scene = Scene {
            name: "Alley of Dangerous Angles".to_string(),
            characters: vec![pc("Annah", 14), pc("Nameless", 9), pc("Dak'kon", 10)],
        };
        let entrants = gather_entrants(&scene, DEFAULT_ABILITY).unwrap();
        assert_eq!(entrants.len(), 3);
        assert_eq!(entrants[0], Entrant::new("Annah", 2));
        assert_eq!(entrants[1], Entrant::new("Nameless", -1));
        assert_eq!(entrants[2], Entrant::new("Dak'kon", 0));
    }

    #[test]
    fn skips_npcs_and_vehicles() {
        let mut npc = pc("Ebb Creakknees", 16);
        npc.kind = ActorKind::Npc;
        let mut cart = pc("Dustman Cart", 10);
        cart.kind = ActorKind::Vehicle;
        cart.abilities.clear();

        let scene = Scene {
            name: "Hive".to_string(),
            characters: vec![npc, pc("Annah", 14), cart],
        };
        let entrants = gather_entrants(&scene, DEFAULT_ABILITY).unwrap();
        assert_eq!(entrants, [Entrant::new("Annah", 2)]);
    }

    #[test]
    fn scene_without_player_characters_gathers_nobody() {
        let mut npc = pc("Ebb Creakknees", 16);
        npc.kind = ActorKind::Npc;
        let scene = Scene {
            name: "Hive".to_string(),
            characters: vec![npc],
        };
        assert!(gather_entrants(&scene, DEFAULT_ABILITY).unwrap().is_empty());
    }

    #[test]
    fn missing_ability_fails_with_character_name() {
        let scene = Scene {
            name: "Ravel's Maze".to_string(),
            characters: vec![pc("Annah", 14), pc("Ignus", 12)],
        };
        let err = gather_entrants(&scene, "charisma").unwrap_err();
        match err {
            RosterError::UnknownAbility { character, ability } => {
                assert_eq!(character, "Annah");
                assert_eq!(ability, "charisma");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_name_fails_with_scene_index() {
        let mut npc = pc("Ebb Creakknees", 16);
        npc.kind = ActorKind::Npc;
        let scene = Scene {
            name: "Hive".to_string(),
            characters: vec![npc, pc("   ", 10)],
        };
        let err = gather_entrants(&scene, DEFAULT_ABILITY).unwrap_err();
        assert!(matches!(err, RosterError::UnnamedCharacter(1)));
    }
}

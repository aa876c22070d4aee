use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tymora_roster::{ability_modifier, format_modifier};

pub fn run(scene_path: &Path, ability: &str) -> Result<(), String> {
    let scene = super::load_scene(scene_path)?;

    if scene.characters.is_empty() {
        println!("  Scene '{}' has no actors.", scene.name);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Kind", ability, "Mod"]);

    for character in &scene.characters {
        let name = if character.name.trim().is_empty() {
            "—".to_string()
        } else {
            character.name.clone()
        };
        let (score, modifier) = match character.abilities.get(ability) {
            Some(score) => (
                score.to_string(),
                format_modifier(ability_modifier(*score)),
            ),
            None => ("—".to_string(), "—".to_string()),
        };
        table.add_row(vec![name, character.kind.to_string(), score, modifier]);
    }

    let rollers = scene.player_characters().count();

    println!("{table}");
    println!();
    println!(
        "  {} actors in '{}', {} roll for luck",
        scene.characters.len(),
        scene.name,
        rollers
    );

    Ok(())
}

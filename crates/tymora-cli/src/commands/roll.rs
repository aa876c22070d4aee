use std::path::Path;

use tymora_engine::{DieRoller, compute_luck_rolls};
use tymora_roster::gather_entrants;

use crate::render;

pub fn run(
    scene_path: &Path,
    ability: &str,
    seed: Option<u64>,
    format: &str,
    output: Option<&Path>,
) -> Result<(), String> {
    let scene = super::load_scene(scene_path)?;
    let entrants = gather_entrants(&scene, ability).map_err(|e| e.to_string())?;

    let mut roller = match seed {
        Some(seed) => DieRoller::from_seed(seed),
        None => DieRoller::new(),
    };
    let report =
        compute_luck_rolls(entrants, &mut roller).map_err(|e| format!("luck roll failed: {e}"))?;

    let content = match format {
        "table" => render::render_table(&report, &scene.name, ability, seed),
        "html" => render::render_html(&report, ability),
        "json" => render::render_json(&report, &scene.name, ability, seed)?,
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: table, html, json"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

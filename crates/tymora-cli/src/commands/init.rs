use std::fs;
use std::path::Path;

pub fn run(name: &str, path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("'{}' already exists", path.display()));
    }

    // Starter scene: two player characters and an NPC who never rolls
    let scene = serde_json::json!({
        "name": name,
        "characters": [
            { "name": "Annah", "abilities": { "belief": 14 } },
            { "name": "Morte", "abilities": { "belief": 12 } },
            { "name": "Ebb Creakknees", "kind": "npc", "abilities": { "belief": 10 } }
        ]
    });
    let mut content = serde_json::to_string_pretty(&scene)
        .map_err(|e| format!("cannot encode scene template: {e}"))?;
    content.push('\n');

    fs::write(path, content).map_err(|e| format!("cannot write {}: {e}", path.display()))?;

    println!("Created scene '{name}' in {}", path.display());
    println!();
    println!("Get started:");
    println!("  # Edit {} to add your characters", path.display());
    println!("  tymora list             # See who is at the table");
    println!("  tymora roll             # Roll luck for every player character");
    println!("  tymora roll --seed 42   # Same rolls every time");

    Ok(())
}

pub mod init;
pub mod list;
pub mod roll;

use std::path::Path;

use tymora_roster::Scene;

/// Load a scene file, surfacing roster errors as CLI messages.
fn load_scene(path: &Path) -> Result<Scene, String> {
    Scene::load(path).map_err(|e| e.to_string())
}

mod lab;
mod triangle;
mod volcano;

pub use lab::create_lab_scene;
pub use triangle::create_triangle_scene;
pub use volcano::create_volcano_scene;

use rand::Rng;

use crate::config::SceneConfig;
use crate::scene::SceneState;

/// Scene names accepted by the CLI, in teaching order.
pub const SCENE_NAMES: &[&str] = &["triangle", "lab", "volcano"];

/// Look up a scene builder by name.
pub fn by_name(name: &str, config: &SceneConfig, rng: &mut impl Rng) -> Option<SceneState> {
    match name {
        "triangle" => Some(create_triangle_scene()),
        "lab" => Some(create_lab_scene()),
        "volcano" => Some(create_volcano_scene(config, rng)),
        _ => None,
    }
}

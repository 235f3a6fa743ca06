pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod fireball;
pub mod light;
pub mod mesh;
pub mod particles;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod transform;
pub mod types;

pub use scenes::{create_lab_scene, create_triangle_scene, create_volcano_scene};

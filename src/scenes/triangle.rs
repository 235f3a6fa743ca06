use glam::Vec3;

use crate::light::{Material, PointLight};
use crate::mesh;
use crate::scene::{SceneObject, SceneState};
use crate::transform::Placement;

/// Minimal hello-triangle scene: one mesh, one light.
pub fn create_triangle_scene() -> SceneState {
    let mut scene = SceneState::new("triangle");

    let triangle = scene.add_mesh(mesh::triangle());
    scene.objects.push(SceneObject {
        mesh: triangle,
        placement: Placement::new(Vec3::new(0.0, 0.0, -2.0)).with_uniform_scale(2.0),
        material: Material::flat(Vec3::new(0.9, 0.4, 0.2)),
    });

    scene
        .lights
        .push(PointLight::new(Vec3::new(0.0, 2.0, 2.0)));

    scene
}

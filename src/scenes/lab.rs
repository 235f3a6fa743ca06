use glam::Vec3;

use crate::light::{Material, PointLight};
use crate::mesh;
use crate::scene::{SceneObject, SceneState};
use crate::transform::Placement;

/// Static lab scene: a background slab and a tilted vehicle, lit by a single
/// point light.
pub fn create_lab_scene() -> SceneState {
    let mut scene = SceneState::new("lab");

    let slab = scene.add_mesh(mesh::plane(30.0, 30.0));
    let vehicle = scene.add_mesh(mesh::unit_cube());

    let material = Material::default();

    scene.objects.push(SceneObject {
        mesh: slab,
        placement: Placement::new(Vec3::new(0.0, -2.0, -85.0))
            .with_uniform_scale(3.0)
            .rotated(270.0, Vec3::Y),
        material,
    });

    // The vehicle is wedged nose-down: Y, then X, then a diagonal axis.
    scene.objects.push(SceneObject {
        mesh: vehicle,
        placement: Placement::new(Vec3::new(-5.0, -2.2, 0.0))
            .with_uniform_scale(1.2)
            .rotated(270.0, Vec3::Y)
            .rotated(35.0, Vec3::X)
            .rotated(-40.0, Vec3::new(1.0, 0.0, 1.0)),
        material,
    });

    scene.lights.push(
        PointLight::new(Vec3::new(1.0, 10.0, 1.0)).with_colors(
            Vec3::splat(0.2),
            Vec3::splat(0.5),
            Vec3::ONE,
        ),
    );

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lab_scene_has_two_objects_and_one_light() {
        let scene = create_lab_scene();
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.lights.len(), 1);
        assert!(scene.fireballs.is_empty());
        assert!(scene.particles.is_none());
    }

    #[test]
    fn vehicle_keeps_three_declared_rotations() {
        let scene = create_lab_scene();
        assert_eq!(scene.objects[1].placement.rotations.len(), 3);
        assert_eq!(scene.objects[1].placement.rotations[0].degrees, 270.0);
        assert_eq!(scene.objects[1].placement.rotations[2].degrees, -40.0);
    }
}

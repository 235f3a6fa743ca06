use glam::Vec3;
use rand::Rng;

use crate::config::SceneConfig;
use crate::fireball::Fireball;
use crate::light::{Material, PointLight};
use crate::mesh;
use crate::particles::ParticlePool;
use crate::scene::{Rubble, SceneObject, SceneState};
use crate::transform::Placement;

const VOLCANO_POSITION: Vec3 = Vec3::new(0.0, -2.0, -20.0);
const VOLCANO_HEIGHT: f32 = 6.0;
const RUBBLE_COUNT: usize = 6;

/// Full animated scene: volcano with erupting particle pool, oscillating
/// fireballs, and a ring of settling rubble.
pub fn create_volcano_scene(config: &SceneConfig, rng: &mut impl Rng) -> SceneState {
    let mut scene = SceneState::new("volcano");

    let ground = scene.add_mesh(mesh::plane(60.0, 60.0));
    let volcano = scene.add_mesh(mesh::cone(32, 0.35));
    let rock = scene.add_mesh(mesh::unit_cube());
    let sphere = scene.add_mesh(mesh::uv_sphere(12, 18));

    scene.objects.push(SceneObject {
        mesh: ground,
        placement: Placement::new(Vec3::new(0.0, -2.0, -20.0)),
        material: Material::flat(Vec3::new(0.25, 0.3, 0.2)),
    });

    scene.objects.push(SceneObject {
        mesh: volcano,
        placement: Placement::new(VOLCANO_POSITION)
            .with_scale(Vec3::new(8.0, VOLCANO_HEIGHT, 8.0)),
        material: Material::flat(Vec3::new(0.35, 0.22, 0.18)),
    });

    // Rubble ring around the base, each piece bobbing out of phase.
    for index in 0..RUBBLE_COUNT {
        let angle = std::f32::consts::TAU * index as f32 / RUBBLE_COUNT as f32;
        let offset = Vec3::new(angle.cos() * 10.5, 0.0, angle.sin() * 10.5);
        let object = SceneObject {
            mesh: rock,
            placement: Placement::new(VOLCANO_POSITION + offset + Vec3::Y * 0.4)
                .with_uniform_scale(0.8)
                .rotated(37.0 * index as f32, Vec3::Y),
            material: Material::flat(Vec3::new(0.3, 0.28, 0.26)),
        };
        scene
            .rubble
            .push(Rubble::at_index(object, index, config.rubble_amplitude));
    }

    // Fireballs fan out from above the crater.
    for index in 0..config.fireball_count {
        let t = index as f32 - (config.fireball_count.saturating_sub(1)) as f32 * 0.5;
        let position = VOLCANO_POSITION + Vec3::new(t * 4.0, VOLCANO_HEIGHT * 0.5, 0.0);
        scene.fireballs.push(
            Fireball::new(
                sphere,
                position,
                config.fireball_lower_bound,
                config.fireball_upper_bound,
            )
            .with_speed(config.fireball_speed)
            .with_size(0.6 + 0.15 * index as f32),
        );
    }

    let crater = VOLCANO_POSITION + Vec3::Y * VOLCANO_HEIGHT;
    scene.particles = Some(ParticlePool::with_capacity(
        config.particle_capacity,
        rock,
        crater,
        crater.y + config.particle_ceiling,
        rng,
    ));

    // Fill the remaining light slots: warm crater glow plus cool rim fill.
    scene.lights.push(
        PointLight::new(crater + Vec3::Y).with_colors(
            Vec3::new(0.3, 0.12, 0.03),
            Vec3::new(1.0, 0.4, 0.1),
            Vec3::new(1.0, 0.7, 0.4),
        ),
    );
    for index in 0..4 {
        let angle = std::f32::consts::TAU * index as f32 / 4.0;
        let position = VOLCANO_POSITION + Vec3::new(angle.cos() * 16.0, 6.0, angle.sin() * 16.0);
        scene.lights.push(
            PointLight::new(position)
                .with_colors(Vec3::splat(0.05), Vec3::new(0.2, 0.25, 0.35), Vec3::splat(0.4))
                .with_attenuation(1.0, 0.045, 0.0075),
        );
    }

    scene
}

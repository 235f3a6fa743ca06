use glam::{Mat4, Vec3};
use rand::Rng;

use crate::fireball::Fireball;
use crate::light::{Material, PointLight};
use crate::mesh::{Mesh, MeshId};
use crate::particles::ParticlePool;
use crate::transform::Placement;

/// A mesh instance with a fixed placement and material.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub mesh: MeshId,
    pub placement: Placement,
    pub material: Material,
}

/// Debris that settles with a small sinusoidal bob.
///
/// `frequency` and `phase` differ per instance so the pieces never move in
/// lockstep.
#[derive(Clone, Debug)]
pub struct Rubble {
    pub object: SceneObject,
    pub base_height: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl Rubble {
    /// Desynchronized bob for the instance at `index`.
    pub fn at_index(object: SceneObject, index: usize, amplitude: f32) -> Self {
        let base_height = object.placement.translation.y;
        Self {
            object,
            base_height,
            amplitude,
            frequency: 1.0 + 0.3 * index as f32,
            phase: 0.7 * index as f32,
        }
    }

    fn update(&mut self, time: f32) {
        let offset = (time * self.frequency + self.phase).sin() * self.amplitude;
        self.object.placement.translation.y = self.base_height + offset;
    }
}

/// One item the renderer draws: a composed world matrix plus material.
#[derive(Copy, Clone, Debug)]
pub struct DrawItem {
    pub mesh: MeshId,
    pub model: Mat4,
    pub material: Material,
}

/// Everything the frame loop mutates, owned by the driver and passed by
/// reference into update and draw. Nothing here is global.
pub struct SceneState {
    pub name: &'static str,
    pub meshes: Vec<Mesh>,
    pub objects: Vec<SceneObject>,
    pub rubble: Vec<Rubble>,
    pub fireballs: Vec<Fireball>,
    pub lights: Vec<PointLight>,
    pub particles: Option<ParticlePool>,
    pub time: f32,
}

impl SceneState {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            meshes: Vec::new(),
            objects: Vec::new(),
            rubble: Vec::new(),
            fireballs: Vec::new(),
            lights: Vec::new(),
            particles: None,
            time: 0.0,
        }
    }

    /// Register a mesh and get its handle back.
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    /// The per-frame update pass.
    ///
    /// Fireballs integrate against `delta`; particles step by their raw
    /// per-update velocity (see `ParticlePool::step`). Transform composition
    /// happens in `draw_list` since placements hold the parameters.
    pub fn update(&mut self, delta: f32, rng: &mut impl Rng) {
        self.time += delta;

        for fireball in &mut self.fireballs {
            fireball.update(delta);
        }
        for rubble in &mut self.rubble {
            rubble.update(self.time);
        }
        if let Some(pool) = &mut self.particles {
            pool.step(rng);
        }
    }

    /// Compose world transforms for everything visible this frame.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(
            self.objects.len()
                + self.rubble.len()
                + self.fireballs.len()
                + self.particles.as_ref().map_or(0, |p| p.capacity()),
        );

        for object in self
            .objects
            .iter()
            .chain(self.rubble.iter().map(|r| &r.object))
        {
            items.push(DrawItem {
                mesh: object.mesh,
                model: object.placement.matrix(),
                material: object.material,
            });
        }

        for fireball in &self.fireballs {
            let placement =
                Placement::new(fireball.position).with_uniform_scale(fireball.size);
            items.push(DrawItem {
                mesh: fireball.mesh,
                model: placement.matrix(),
                material: Material {
                    ambient: Vec3::new(1.0, 0.4, 0.05),
                    diffuse: Vec3::new(1.0, 0.5, 0.1),
                    specular: Vec3::splat(0.9),
                    shininess: 32.0,
                },
            });
        }

        if let Some(pool) = &self.particles {
            for particle in pool.particles() {
                let placement =
                    Placement::new(particle.position).with_uniform_scale(particle.size);
                items.push(DrawItem {
                    mesh: pool.mesh(),
                    model: placement.matrix(),
                    material: Material::flat(Vec3::new(0.9, 0.25, 0.05)),
                });
            }
        }

        items
    }

    /// Light slots in upload order: static lights first, then fireballs.
    pub fn light_slots(&self) -> impl Iterator<Item = &PointLight> {
        self.lights
            .iter()
            .chain(self.fireballs.iter().map(|f| &f.light))
    }
}

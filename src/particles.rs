use glam::Vec3;
use rand::Rng;

use crate::mesh::MeshId;

/// Default slot count for the volcano pool.
pub const POOL_CAPACITY: usize = 1000;

/// Lateral velocity spread applied on respawn.
const SPREAD_XZ: f32 = 0.1;
/// Vertical velocity range on respawn.
const VELOCITY_Y_MIN: f32 = 0.2;
const VELOCITY_Y_MAX: f32 = 1.2;
/// Visual size range on respawn.
const SIZE_MIN: f32 = 0.05;
const SIZE_MAX: f32 = 0.25;

/// One volcano particle. Plain data; the pool owns the lifecycle.
#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub size: f32,
}

/// Fixed-capacity particle pool for the volcano eruption.
///
/// Slots are never added or removed after construction. Particles integrate
/// by a fixed per-update step and the whole pool respawns at once when every
/// slot has climbed past the ceiling.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    mesh: MeshId,
    emission_point: Vec3,
    ceiling: f32,
}

impl ParticlePool {
    pub fn new(mesh: MeshId, emission_point: Vec3, ceiling: f32, rng: &mut impl Rng) -> Self {
        Self::with_capacity(POOL_CAPACITY, mesh, emission_point, ceiling, rng)
    }

    pub fn with_capacity(
        capacity: usize,
        mesh: MeshId,
        emission_point: Vec3,
        ceiling: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut pool = Self {
            particles: vec![
                Particle {
                    position: emission_point,
                    velocity: Vec3::ZERO,
                    size: SIZE_MIN,
                };
                capacity
            ],
            mesh,
            emission_point,
            ceiling,
        };
        pool.reset(rng);
        pool
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    pub fn emission_point(&self) -> Vec3 {
        self.emission_point
    }

    pub fn ceiling(&self) -> f32 {
        self.ceiling
    }

    /// True once every slot has crossed the ceiling.
    pub fn exhausted(&self) -> bool {
        self.particles.iter().all(|p| p.position.y >= self.ceiling)
    }

    /// Advance every particle one update.
    ///
    /// The step is the raw per-update velocity, not scaled by frame delta;
    /// the source demos stepped particles per frame while fireballs used
    /// delta, and that behavior is kept.
    pub fn step(&mut self, rng: &mut impl Rng) {
        for particle in &mut self.particles {
            particle.position += particle.velocity;
        }
        if self.exhausted() {
            self.reset(rng);
        }
    }

    /// Respawn every slot at the emission point with fresh velocity and size.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        for particle in &mut self.particles {
            particle.position = self.emission_point;
            particle.velocity = Vec3::new(
                rng.gen_range(-SPREAD_XZ..=SPREAD_XZ),
                rng.gen_range(VELOCITY_Y_MIN..=VELOCITY_Y_MAX),
                rng.gen_range(-SPREAD_XZ..=SPREAD_XZ),
            );
            particle.size = rng.gen_range(SIZE_MIN..=SIZE_MAX);
        }
    }
}

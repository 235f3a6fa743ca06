use glam::Vec3;

use crate::light::PointLight;
use crate::mesh::MeshId;

/// Which half of the oscillation a fireball is travelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TravelPhase {
    Ascending,
    Descending,
}

/// A glowing projectile: a point light and a mesh instance sharing one
/// position, bouncing between a lower and upper altitude.
#[derive(Clone, Debug)]
pub struct Fireball {
    pub mesh: MeshId,
    pub light: PointLight,
    pub position: Vec3,
    pub lower_bound: f32,
    pub upper_bound: f32,
    pub speed: f32,
    pub size: f32,
    pub phase: TravelPhase,
}

impl Fireball {
    pub fn new(mesh: MeshId, position: Vec3, lower_bound: f32, upper_bound: f32) -> Self {
        let light = PointLight::new(position).with_colors(
            Vec3::new(0.3, 0.1, 0.0),
            Vec3::new(1.0, 0.45, 0.1),
            Vec3::new(1.0, 0.8, 0.5),
        );
        Self {
            mesh,
            light,
            position,
            lower_bound,
            upper_bound,
            speed: 2.0,
            size: 0.5,
            phase: TravelPhase::Ascending,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Advance the oscillation by one frame.
    ///
    /// The phase only flips at the matching bound, so a position already past
    /// the opposite threshold cannot re-flip on the same frame.
    pub fn update(&mut self, delta: f32) {
        match self.phase {
            TravelPhase::Ascending if self.position.y > self.upper_bound => {
                self.phase = TravelPhase::Descending;
            }
            TravelPhase::Descending if self.position.y < self.lower_bound => {
                self.phase = TravelPhase::Ascending;
            }
            _ => {}
        }

        let step = self.speed * delta;
        match self.phase {
            TravelPhase::Ascending => self.position.y += step,
            TravelPhase::Descending => self.position.y -= step,
        }

        // The light travels with the mesh.
        self.light.position = self.position;
    }
}

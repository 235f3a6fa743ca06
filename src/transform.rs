use glam::{Mat4, Vec3};

/// A single axis-angle rotation step, in degrees.
#[derive(Copy, Clone, Debug)]
pub struct Rotation {
    pub degrees: f32,
    pub axis: Vec3,
}

impl Rotation {
    pub const fn new(degrees: f32, axis: Vec3) -> Self {
        Self { degrees, axis }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_axis_angle(self.axis.normalize(), self.degrees.to_radians())
    }
}

/// Fixed placement of a scene object: translation, scale, then an ordered
/// sequence of axis-angle rotations.
///
/// Composition order is translate * scale * r1 * r2 * ... and rotations apply
/// in declared order. The order is non-commutative; changing it moves objects.
#[derive(Clone, Debug)]
pub struct Placement {
    pub translation: Vec3,
    pub scale: Vec3,
    pub rotations: Vec<Rotation>,
}

impl Placement {
    pub fn new(translation: Vec3) -> Self {
        Self {
            translation,
            scale: Vec3::ONE,
            rotations: Vec::new(),
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::splat(scale))
    }

    pub fn rotated(mut self, degrees: f32, axis: Vec3) -> Self {
        self.rotations.push(Rotation::new(degrees, axis));
        self
    }

    /// Compose the world matrix from the stored parameters.
    pub fn matrix(&self) -> Mat4 {
        let mut m = Mat4::from_translation(self.translation) * Mat4::from_scale(self.scale);
        for rotation in &self.rotations {
            m *= rotation.matrix();
        }
        m
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_placement_is_identity_matrix() {
        let placement = Placement::default();
        assert_eq!(placement.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translation_moves_origin() {
        let placement = Placement::new(Vec3::new(1.0, 2.0, 3.0));
        let p = placement.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn scale_applies_after_translation() {
        let placement = Placement::new(Vec3::new(0.0, -2.0, -85.0)).with_uniform_scale(3.0);
        let p = placement.matrix().transform_point3(Vec3::ONE);
        assert_eq!(p, Vec3::new(3.0, 1.0, -82.0));
    }

    #[test]
    fn rotation_order_is_declared_order() {
        let a = Placement::new(Vec3::ZERO)
            .rotated(90.0, Vec3::Y)
            .rotated(90.0, Vec3::X);
        let b = Placement::new(Vec3::ZERO)
            .rotated(90.0, Vec3::X)
            .rotated(90.0, Vec3::Y);
        let pa = a.matrix().transform_point3(Vec3::Z);
        let pb = b.matrix().transform_point3(Vec3::Z);
        assert!(
            (pa - pb).length() > 0.5,
            "swapping rotation order must change the result: {pa} vs {pb}"
        );
    }
}

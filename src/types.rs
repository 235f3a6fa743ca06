use glam::Mat4;

use crate::light::{Material, PointLight};

/// Upper bound on light slots uploaded per frame; extra scene lights are
/// ignored past this many.
pub const MAX_LIGHTS: usize = 8;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub fn new(view_proj: Mat4, position: glam::Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            position: position.to_array(),
            _pad: 0.0,
        }
    }
}

/// One point-light slot, padded to WGSL vec4 alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightSlot {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub diffuse: [f32; 3],
    pub _pad2: f32,
    pub specular: [f32; 3],
    pub _pad3: f32,
    /// (constant, linear, quadratic) attenuation.
    pub attenuation: [f32; 3],
    pub _pad4: f32,
}

impl From<&PointLight> for LightSlot {
    fn from(light: &PointLight) -> Self {
        Self {
            position: light.position.to_array(),
            _pad0: 0.0,
            ambient: light.ambient.to_array(),
            _pad1: 0.0,
            diffuse: light.diffuse.to_array(),
            _pad2: 0.0,
            specular: light.specular.to_array(),
            _pad3: 0.0,
            attenuation: [light.constant, light.linear, light.quadratic],
            _pad4: 0.0,
        }
    }
}

/// Full light array uploaded once per frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [LightSlot; MAX_LIGHTS],
    pub count: u32,
    pub _pad: [u32; 3],
}

impl LightsUniform {
    /// Fill slots in order from an iterator, dropping anything past
    /// `MAX_LIGHTS`. This is the data-driven replacement for per-light
    /// hand-unrolled uniform calls.
    pub fn from_slots<'a>(slots: impl Iterator<Item = &'a PointLight>) -> Self {
        let mut uniform: Self = bytemuck::Zeroable::zeroed();
        for (slot, light) in uniform.lights.iter_mut().zip(slots) {
            *slot = LightSlot::from(light);
            uniform.count += 1;
        }
        uniform
    }
}

/// Per-object transform + material block, one per draw call.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub ambient: [f32; 3],
    pub shininess: f32,
    pub diffuse: [f32; 3],
    pub _pad0: f32,
    pub specular: [f32; 3],
    pub _pad1: f32,
}

impl ObjectUniform {
    pub fn new(model: Mat4, material: &Material) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            ambient: material.ambient.to_array(),
            shininess: material.shininess,
            diffuse: material.diffuse.to_array(),
            _pad0: 0.0,
            specular: material.specular.to_array(),
            _pad1: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn light_uniform_counts_filled_slots() {
        let lights = [
            PointLight::new(Vec3::ZERO),
            PointLight::new(Vec3::new(1.0, 10.0, 1.0)),
        ];
        let uniform = LightsUniform::from_slots(lights.iter());
        assert_eq!(uniform.count, 2);
        assert_eq!(uniform.lights[1].position, [1.0, 10.0, 1.0]);
    }

    #[test]
    fn light_uniform_caps_at_max() {
        let lights = vec![PointLight::new(Vec3::ZERO); MAX_LIGHTS + 4];
        let uniform = LightsUniform::from_slots(lights.iter());
        assert_eq!(uniform.count, MAX_LIGHTS as u32);
    }
}

use glam::Vec3;

/// Point light with distance-based attenuation.
///
/// Attenuation follows the usual 1 / (constant + linear*d + quadratic*d^2)
/// falloff; the triple is stored as-is and evaluated in the shader.
#[derive(Copy, Clone, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl PointLight {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::ONE,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }

    pub fn with_colors(mut self, ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self
    }

    pub fn with_attenuation(mut self, constant: f32, linear: f32, quadratic: f32) -> Self {
        self.constant = constant;
        self.linear = linear;
        self.quadratic = quadratic;
        self
    }
}

/// Phong material pushed alongside each object's transform.
#[derive(Copy, Clone, Debug)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Material {
    pub fn flat(color: Vec3) -> Self {
        Self {
            ambient: color,
            diffuse: color * 0.8,
            specular: Vec3::splat(0.3),
            shininess: 16.0,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::ONE,
            diffuse: Vec3::splat(0.3),
            specular: Vec3::splat(0.5),
            shininess: 10.0,
        }
    }
}

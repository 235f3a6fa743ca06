use glam::Vec3;

/// Index into a scene's mesh table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Vertex layout shared by every mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// CPU-side mesh. The renderer uploads these once at scene load.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(Vertex::new(corner, normal));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Single upright triangle, the hello-world mesh.
pub fn triangle() -> Mesh {
    let mut mesh = Mesh::default();
    let n = Vec3::Z;
    mesh.vertices.push(Vertex::new(Vec3::new(-0.5, -0.5, 0.0), n));
    mesh.vertices.push(Vertex::new(Vec3::new(0.5, -0.5, 0.0), n));
    mesh.vertices.push(Vertex::new(Vec3::new(0.0, 0.5, 0.0), n));
    mesh.indices.extend_from_slice(&[0, 1, 2]);
    mesh
}

/// Flat plane in XZ centered on the origin, normal up.
pub fn plane(half_width: f32, half_depth: f32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.push_quad(
        [
            Vec3::new(-half_width, 0.0, -half_depth),
            Vec3::new(-half_width, 0.0, half_depth),
            Vec3::new(half_width, 0.0, half_depth),
            Vec3::new(half_width, 0.0, -half_depth),
        ],
        Vec3::Y,
    );
    mesh
}

/// Unit cube centered on the origin with flat-shaded faces.
pub fn unit_cube() -> Mesh {
    let mut mesh = Mesh::default();
    let h = 0.5;
    // +X, -X, +Y, -Y, +Z, -Z
    mesh.push_quad(
        [
            Vec3::new(h, -h, -h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(h, h, -h),
        ],
        Vec3::X,
    );
    mesh.push_quad(
        [
            Vec3::new(-h, -h, h),
            Vec3::new(-h, -h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, h, h),
        ],
        -Vec3::X,
    );
    mesh.push_quad(
        [
            Vec3::new(-h, h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ],
        Vec3::Y,
    );
    mesh.push_quad(
        [
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, -h, -h),
            Vec3::new(-h, -h, -h),
        ],
        -Vec3::Y,
    );
    mesh.push_quad(
        [
            Vec3::new(-h, -h, h),
            Vec3::new(-h, h, h),
            Vec3::new(h, h, h),
            Vec3::new(h, -h, h),
        ],
        Vec3::Z,
    );
    mesh.push_quad(
        [
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, -h),
        ],
        -Vec3::Z,
    );
    mesh
}

/// Open-topped cone for the volcano body.
///
/// Base radius 1 at y=0, crater radius `crater_ratio` at y=1, with the slope
/// normal tilted outward.
pub fn cone(segments: usize, crater_ratio: f32) -> Mesh {
    let mut mesh = Mesh::default();
    let slope = Vec3::new(1.0, 1.0 - crater_ratio, 0.0).normalize();

    for i in 0..segments {
        let a0 = std::f32::consts::TAU * i as f32 / segments as f32;
        let a1 = std::f32::consts::TAU * (i + 1) as f32 / segments as f32;
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();

        let base0 = Vec3::new(c0, 0.0, s0);
        let base1 = Vec3::new(c1, 0.0, s1);
        let rim0 = Vec3::new(c0 * crater_ratio, 1.0, s0 * crater_ratio);
        let rim1 = Vec3::new(c1 * crater_ratio, 1.0, s1 * crater_ratio);

        let n0 = Vec3::new(c0 * slope.x, slope.y, s0 * slope.x).normalize();
        let n1 = Vec3::new(c1 * slope.x, slope.y, s1 * slope.x).normalize();

        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::new(base0, n0));
        mesh.vertices.push(Vertex::new(rim0, n0));
        mesh.vertices.push(Vertex::new(rim1, n1));
        mesh.vertices.push(Vertex::new(base1, n1));
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Latitude/longitude sphere for fireballs.
pub fn uv_sphere(stacks: usize, slices: usize) -> Mesh {
    let mut mesh = Mesh::default();

    for stack in 0..=stacks {
        let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
        for slice in 0..=slices {
            let theta = std::f32::consts::TAU * slice as f32 / slices as f32;
            let p = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.vertices.push(Vertex::new(p * 0.5, p));
        }
    }

    let stride = (slices + 1) as u32;
    for stack in 0..stacks as u32 {
        for slice in 0..slices as u32 {
            let a = stack * stride + slice;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_six_faces() {
        let mesh = unit_cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn cone_indices_stay_in_bounds() {
        let mesh = cone(16, 0.4);
        let max = *mesh.indices.iter().max().unwrap() as usize;
        assert!(max < mesh.vertices.len());
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = uv_sphere(8, 12);
        for v in &mesh.vertices {
            let r = Vec3::from_array(v.position).length();
            assert!((r - 0.5).abs() < 1e-4, "radius was {r}");
        }
    }
}

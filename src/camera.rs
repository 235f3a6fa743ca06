use glam::{Mat4, Vec3};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

pub const CAMERA_SPEED: f32 = 6.0;
pub const MOUSE_SENSITIVITY: f32 = 0.0025;
pub const MIN_FOV_DEGREES: f32 = 1.0;
pub const MAX_FOV_DEGREES: f32 = 45.0;

/// Pitch clamp just short of straight up/down to keep the view basis sane.
const PITCH_LIMIT: f32 = 1.55;

#[derive(Default, Clone, Copy)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementState {
    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32, f32) {
        (
            self.to_direction(self.forward, self.backward),
            self.to_direction(self.right, self.left),
            self.to_direction(self.up, self.down),
        )
    }
}

/// Euler fly camera with scroll-driven zoom.
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in degrees; scroll zoom narrows it.
    pub fov_degrees: f32,
    pub movement: MovementState,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            fov_degrees: MAX_FOV_DEGREES,
            movement: MovementState::default(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn update(&mut self, delta: f32) {
        let (fwd, right_dir, up_dir) = self.movement.velocity();
        let step = CAMERA_SPEED * delta;

        self.position += self.forward() * fwd * step
            + self.right() * right_dir * step
            + Vec3::Y * up_dir * step;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, 0.1, 200.0)
    }

    /// Mouse-look from cursor deltas; yoffset is already flipped by the caller.
    pub fn process_mouse(&mut self, xoffset: f32, yoffset: f32) {
        self.yaw -= xoffset * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch + yoffset * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scroll wheel adjusts FOV, clamped like the source camera.
    pub fn process_scroll(&mut self, yoffset: f32) {
        self.fov_degrees = (self.fov_degrees - yoffset).clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES);
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.movement.forward = is_pressed,
                KeyCode::KeyS => self.movement.backward = is_pressed,
                KeyCode::KeyA => self.movement.left = is_pressed,
                KeyCode::KeyD => self.movement.right = is_pressed,
                KeyCode::Space => self.movement.up = is_pressed,
                KeyCode::ShiftLeft => self.movement.down = is_pressed,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_fov() {
        let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
        camera.process_scroll(100.0);
        assert_eq!(camera.fov_degrees, MIN_FOV_DEGREES);
        camera.process_scroll(-100.0);
        assert_eq!(camera.fov_degrees, MAX_FOV_DEGREES);
    }

    #[test]
    fn forward_movement_follows_view_direction() {
        let mut camera = Camera::new(Vec3::ZERO, std::f32::consts::PI, 0.0);
        camera.movement.forward = true;
        camera.update(1.0);
        assert!(camera.position.z < 0.0, "PI yaw looks down -Z");
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
        camera.process_mouse(0.0, 1e6);
        assert!(camera.pitch <= PITCH_LIMIT);
    }
}

use std::sync::Arc;

use clap::Parser;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_lab::camera::Camera;
use scene_lab::cli::Cli;
use scene_lab::clock::Clock;
use scene_lab::config::SceneConfig;
use scene_lab::renderer::ForwardRenderer;
use scene_lab::scene::SceneState;
use scene_lab::scenes;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1600;
const INITIAL_WINDOW_HEIGHT: u32 = 1200;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Frame-loop driver. Owns the scene state, camera, and clock; winit owns us.
struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<ForwardRenderer>,
    scene: SceneState,
    camera: Camera,
    clock: Clock,
    rng: StdRng,
    last_cursor: Option<(f32, f32)>,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli, scene: SceneState) -> Self {
        // Start back from the action, looking down -Z like the source demos.
        let camera = Camera::new(Vec3::new(0.0, 2.0, 10.0), std::f32::consts::PI, -0.1);
        Self {
            cli,
            window: None,
            renderer: None,
            scene,
            camera,
            clock: Clock::new(),
            rng: StdRng::from_entropy(),
            last_cursor: None,
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!("fps: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Scene Lab")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(ForwardRenderer::new(
                window.clone(),
                &self.scene.meshes,
                !self.cli.no_ui,
            )) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.camera.process_keyboard(&event),
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                if let Some((last_x, last_y)) = self.last_cursor {
                    // y flipped: screen coordinates grow downward.
                    self.camera.process_mouse(x - last_x, last_y - y);
                }
                self.last_cursor = Some((x, y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 40.0,
                };
                self.camera.process_scroll(y);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();

                self.update_fps(delta);
                self.camera.update(delta);
                self.scene.update(delta, &mut self.rng);

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    if let Err(e) = renderer.render(&self.scene, &self.camera, window, self.fps) {
                        log::error!("render error: {e}");
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    let mut rng = StdRng::from_entropy();
    let scene = scenes::by_name(&cli.scene, &config, &mut rng).ok_or_else(|| {
        format!(
            "unknown scene '{}' (expected one of: {})",
            cli.scene,
            scenes::SCENE_NAMES.join(", ")
        )
    })?;

    log::info!(
        "scene '{}': {} objects, {} fireballs, {} lights",
        scene.name,
        scene.objects.len() + scene.rubble.len(),
        scene.fireballs.len(),
        scene.light_slots().count()
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, scene);
    event_loop.run_app(&mut app)?;

    Ok(())
}

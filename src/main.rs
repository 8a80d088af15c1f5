//! pong3d - a minimal real-time 3D demo
//!
//! Two paddles and a ball move in the XY plane, drawn as cuboids by wgpu.
//! A/D reverse the paddles, Escape quits.

use std::process::ExitCode;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use pong3d::config::AppConfig;
use pong3d::input::{InputAction, InputMapper};
use pong3d::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    // Field order is drop order: GPU resources go before the window
    render: Option<RenderSystem>,
    window: Option<WindowSystem>,
    simulation: SimulationSystem,
    frame: u64,
    setup_failed: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let simulation = SimulationSystem::new(
            config.simulation.to_world(),
            config.simulation.to_timestep(),
        );

        Self {
            config,
            render: None,
            window: None,
            simulation,
            frame: 0,
            setup_failed: false,
        }
    }

    /// Create the window and everything that renders into it
    fn setup(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let render = RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            &self.config.camera,
            self.config.window.vsync,
        )?;

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let steps = self.simulation.update();

        let Some(render) = &mut self.render else {
            return;
        };
        let result = render.render_frame(self.simulation.world());
        if !self.finish_frame(result) {
            event_loop.exit();
            return;
        }

        log::trace!(
            "Frame {} ({} simulation steps, alpha {:.2})",
            self.frame,
            steps,
            self.simulation.alpha()
        );

        if let Some(window) = &self.window {
            window.update_title(self.frame);
            window.request_redraw();
        }
    }

    /// Apply the outcome of one render attempt
    ///
    /// Only presented frames are counted. Returns false when the loop must stop.
    fn finish_frame(&mut self, result: Result<(), RenderError>) -> bool {
        match result {
            Ok(()) => {
                self.frame += 1;
                true
            }
            Err(RenderError::SurfaceLost) => {
                if let Some(render) = &mut self.render {
                    render.handle_surface_lost();
                }
                true
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                false
            }
            Err(e) => {
                log::warn!("{}, skipping frame", e);
                true
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.setup_failed {
            return;
        }

        if let Err(e) = self.setup(event_loop) {
            log::error!("{}", e);
            self.setup_failed = true;
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                match InputMapper::map_keyboard(key, event.state, event.repeat) {
                    Some(InputAction::Exit) => {
                        log::info!("Escape pressed, exiting");
                        event_loop.exit();
                    }
                    Some(InputAction::FlipPaddle(side)) => self.simulation.flip_paddle(side),
                    None => {}
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

/// Initialize env_logger, letting `RUST_LOG` override the configured level
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env).init();
}

fn main() -> ExitCode {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.debug.log_level);
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting pong3d");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    let result = event_loop.run_app(&mut app);

    log::info!("Cleaning up after {} frames", app.frame);
    let failed = app.setup_failed;
    drop(app);

    match result {
        Err(e) => {
            log::error!("Event loop error: {}", e);
            ExitCode::FAILURE
        }
        Ok(()) if failed => ExitCode::FAILURE,
        Ok(()) => ExitCode::SUCCESS,
    }
}

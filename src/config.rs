//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PONG_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use pong3d_math::Vec2;
use pong3d_render::Camera;
use pong3d_sim::{Axis, Body, Boundary, FixedTimestep, PongWorld};

/// Fallback window title when the executable name is unavailable
pub const FALLBACK_TITLE: &str = "pong3d";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PONG_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PONG_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("PONG_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title (empty = executable name)
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 600,
            height: 600,
            resizable: true,
            vsync: true,
        }
    }
}

impl WindowConfig {
    /// Title to show, falling back to the running executable's file name
    pub fn resolved_title(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        std::env::args()
            .next()
            .and_then(|arg0| exe_title(&arg0))
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }
}

/// File name of an executable path, without directories or extension
///
/// Accepts both `/` and `\` separators.
pub fn exe_title(path: &str) -> Option<String> {
    let name = path.rsplit(|c: char| c == '/' || c == '\\').next()?;
    let stem = match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => name,
    };
    (!stem.is_empty()).then(|| stem.to_string())
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub eye: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
    /// Up direction
    pub up: [f32; 3],
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            eye: camera.eye,
            target: camera.target,
            up: camera.up,
            fov: camera.fov,
            near: camera.near,
            far: camera.far,
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> Camera {
        Camera {
            eye: self.eye,
            target: self.target,
            up: self.up,
            fov: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

/// Starting state of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Position [x, y]
    pub position: Vec2,
    /// Velocity [x, y] in units per second
    pub velocity: Vec2,
}

impl BodyConfig {
    pub fn to_body(self) -> Body {
        Body::new(self.position).with_velocity(self.velocity)
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed step in seconds
    pub timestep: f32,
    /// Frame time clamp in seconds
    pub max_frame_time: f32,
    /// Maximum fixed steps per rendered frame
    pub max_steps: u32,
    /// Axis the left paddle bounces on
    pub bounce_axis: Axis,
    /// Coordinate at which the left paddle turns around
    pub bounce_limit: f32,
    pub left_paddle: BodyConfig,
    pub right_paddle: BodyConfig,
    pub ball: BodyConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let world = PongWorld::default();
        let body = |b: &Body| BodyConfig {
            position: b.position,
            velocity: b.velocity,
        };
        Self {
            timestep: pong3d_sim::DEFAULT_TIMESTEP,
            max_frame_time: pong3d_sim::DEFAULT_MAX_FRAME_TIME,
            max_steps: pong3d_sim::DEFAULT_MAX_STEPS,
            bounce_axis: world.boundary.axis,
            bounce_limit: world.boundary.limit,
            left_paddle: body(&world.left_paddle),
            right_paddle: body(&world.right_paddle),
            ball: body(&world.ball),
        }
    }
}

impl SimulationConfig {
    /// Build the initial world
    pub fn to_world(&self) -> PongWorld {
        PongWorld::new(
            self.left_paddle.to_body(),
            self.right_paddle.to_body(),
            self.ball.to_body(),
            Boundary::new(self.bounce_axis, self.bounce_limit),
        )
    }

    /// Build the fixed timestep accumulator
    pub fn to_timestep(&self) -> FixedTimestep {
        FixedTimestep::new(self.timestep)
            .with_max_frame_time(self.max_frame_time)
            .with_max_steps(self.max_steps)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Path of the WGSL vertex stage
    pub vertex_shader: PathBuf,
    /// Path of the WGSL fragment stage
    pub fragment_shader: PathBuf,
    /// Paddle half size [x, y, z]
    pub paddle_half_extents: [f32; 3],
    /// Ball half size on every axis
    pub ball_half_extent: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [1.0, 0.0, 0.0, 1.0],
            vertex_shader: PathBuf::from("shaders/vertex.wgsl"),
            fragment_shader: PathBuf::from("shaders/fragment.wgsl"),
            paddle_half_extents: [0.1, 1.0, 0.1],
            ball_half_extent: 0.1,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins if set
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 600);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.simulation.timestep, 0.02);
        assert_eq!(config.simulation.bounce_limit, 0.7);
        assert_eq!(config.rendering.background_color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("vertex_shader"));
        assert!(toml.contains("bounce_limit"));
        assert!(toml.contains("bounce_axis = \"y\""));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [simulation]
            bounce_limit = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.bounce_limit, 0.5);
        assert_eq!(config.simulation.timestep, 0.02);
        assert_eq!(config.window.width, 600);
    }

    #[test]
    fn test_to_world_matches_default_world() {
        let world = SimulationConfig::default().to_world();
        let expected = PongWorld::default();
        assert_eq!(world.left_paddle, expected.left_paddle);
        assert_eq!(world.right_paddle, expected.right_paddle);
        assert_eq!(world.ball, expected.ball);
        assert_eq!(world.boundary, expected.boundary);
    }

    #[test]
    fn test_to_timestep() {
        let ts = SimulationConfig::default().to_timestep();
        assert_eq!(ts.step(), 0.02);
    }

    #[test]
    fn test_out_of_range_timing_falls_back() {
        let config: AppConfig = toml::from_str(
            r#"
            [simulation]
            timestep = 0.0
            max_frame_time = -0.1
            "#,
        )
        .unwrap();
        let mut ts = config.simulation.to_timestep();
        assert_eq!(ts.step(), pong3d_sim::DEFAULT_TIMESTEP);

        ts.accumulate(0.016);
        assert!(!ts.next_step());
    }

    #[test]
    fn test_body_positions_read_as_arrays() {
        let config: AppConfig = toml::from_str(
            r#"
            [simulation.ball]
            position = [0.5, -0.25]
            velocity = [0.1, 0.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.ball.position, Vec2::new(0.5, -0.25));
        assert_eq!(config.simulation.ball.to_body().velocity, Vec2::new(0.1, 0.0));
    }

    #[test]
    fn test_camera_round_trip() {
        assert_eq!(CameraConfig::default().to_camera(), Camera::default());
    }

    #[test]
    fn test_exe_title() {
        assert_eq!(exe_title("/usr/local/bin/pong3d"), Some("pong3d".to_string()));
        assert_eq!(exe_title("C:\\games\\pong3d.exe"), Some("pong3d".to_string()));
        assert_eq!(exe_title("pong3d"), Some("pong3d".to_string()));
        assert_eq!(exe_title("/path/to/"), None);
        assert_eq!(exe_title(""), None);
    }

    #[test]
    fn test_configured_title_wins() {
        let window = WindowConfig {
            title: "Paddles".to_string(),
            ..WindowConfig::default()
        };
        assert_eq!(window.resolved_title(), "Paddles");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError {
            message: "bad value".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}

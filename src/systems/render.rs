//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Shader loading and pipeline linking
//! - Paddle and ball meshes
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;

use pong3d_render::{
    context::{ContextError, RenderContext},
    geometry::{cuboid, FaceColors, BLUE, GREEN, WHITE},
    pipeline::{DrawItem, ModelBinding, ModelUniforms, ScenePipeline},
    shader::{self, ShaderError, ShaderStage},
    Camera, Mesh,
};
use pong3d_sim::{Body, PongWorld};

use crate::config::{CameraConfig, RenderingConfig};

/// Failure while bringing up the renderer
#[derive(Debug)]
pub enum SetupError {
    /// Adapter, device or surface could not be created
    Context(ContextError),
    /// A shader stage failed to load, compile or link
    Shader(ShaderError),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Context(e) => write!(f, "Graphics context setup failed: {}", e),
            SetupError::Shader(e) => write!(f, "Shader setup failed: {}", e),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Context(e) => Some(e),
            SetupError::Shader(e) => Some(e),
        }
    }
}

impl From<ContextError> for SetupError {
    fn from(e: ContextError) -> Self {
        SetupError::Context(e)
    }
}

impl From<ShaderError> for SetupError {
    fn from(e: ShaderError) -> Self {
        SetupError::Shader(e)
    }
}

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Model uniforms placing a body in the z = 0 plane
fn body_transform(body: &Body) -> ModelUniforms {
    ModelUniforms::from_translation(body.position.extend(0.0))
}

fn to_wgpu_color(c: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: c[0] as f64,
        g: c[1] as f64,
        b: c[2] as f64,
        a: c[3] as f64,
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ScenePipeline,
    camera: Camera,
    paddle_mesh: Mesh,
    ball_mesh: Mesh,
    left_paddle: ModelBinding,
    right_paddle: ModelBinding,
    ball: ModelBinding,
    background: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        camera_config: &CameraConfig,
        vsync: bool,
    ) -> Result<Self, SetupError> {
        pollster::block_on(Self::setup(window, render_config, camera_config, vsync))
    }

    async fn setup(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        camera_config: &CameraConfig,
        vsync: bool,
    ) -> Result<Self, SetupError> {
        let context = RenderContext::with_vsync(window, vsync).await?;

        let vertex =
            shader::load_and_compile(&context.device, ShaderStage::Vertex, &render_config.vertex_shader)
                .await?;
        let fragment = shader::load_and_compile(
            &context.device,
            ShaderStage::Fragment,
            &render_config.fragment_shader,
        )
        .await?;

        let mut pipeline =
            ScenePipeline::new(&context.device, context.config.format, &vertex, &fragment).await?;
        pipeline.ensure_depth_texture(&context.device, context.size.width, context.size.height);

        let paddle_colors = FaceColors::uniform(GREEN).with_front(BLUE);
        let ball_colors = FaceColors::uniform(GREEN).with_front(WHITE);
        let ball_extent = render_config.ball_half_extent;

        let paddle_mesh = Mesh::upload(
            &context.device,
            "Paddle Mesh",
            &cuboid(render_config.paddle_half_extents, paddle_colors),
        );
        let ball_mesh = Mesh::upload(
            &context.device,
            "Ball Mesh",
            &cuboid([ball_extent; 3], ball_colors),
        );

        let left_paddle = pipeline.create_model_binding(&context.device, "Left Paddle Uniforms");
        let right_paddle = pipeline.create_model_binding(&context.device, "Right Paddle Uniforms");
        let ball = pipeline.create_model_binding(&context.device, "Ball Uniforms");

        Ok(Self {
            context,
            pipeline,
            camera: camera_config.to_camera(),
            paddle_mesh,
            ball_mesh,
            left_paddle,
            right_paddle,
            ball,
            background: to_wgpu_color(render_config.background_color),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.size.width,
            self.context.size.height,
        );
    }

    /// Reapply the surface configuration after [`RenderError::SurfaceLost`]
    pub fn handle_surface_lost(&mut self) {
        log::warn!("Surface lost, reconfiguring");
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(&mut self, world: &PongWorld) -> Result<(), RenderError> {
        let queue = &self.context.queue;

        self.pipeline
            .update_camera(queue, &self.camera.uniforms(self.context.aspect_ratio()));
        self.left_paddle.update(queue, &body_transform(&world.left_paddle));
        self.right_paddle.update(queue, &body_transform(&world.right_paddle));
        self.ball.update(queue, &body_transform(&world.ball));

        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let items = [
            DrawItem { mesh: &self.paddle_mesh, binding: &self.left_paddle },
            DrawItem { mesh: &self.paddle_mesh, binding: &self.right_paddle },
            DrawItem { mesh: &self.ball_mesh, binding: &self.ball },
        ];
        self.pipeline
            .render(&mut encoder, &view, &items, self.background);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

//! Window management system
//!
//! Handles window creation and title updates.

use std::sync::Arc;
use winit::{event_loop::ActiveEventLoop, window::Window};

use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, WindowError> {
        let base_title = config.resolved_title();
        let attrs = Window::default_attributes()
            .with_title(&base_title)
            .with_resizable(config.resizable)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );
        log::info!("Created window '{}' ({}x{})", base_title, config.width, config.height);

        Ok(Self { window, base_title })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Show the running frame count in the title
    pub fn update_title(&self, frame: u64) {
        self.window.set_title(&frame_title(&self.base_title, frame));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn frame_title(base: &str, frame: u64) -> String {
    format!("{} - Frame: {}", base, frame)
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_title() {
        assert_eq!(frame_title("pong3d", 0), "pong3d - Frame: 0");
        assert_eq!(frame_title("pong3d", 1234), "pong3d - Frame: 1234");
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}

//! Shader loading and compilation
//!
//! The vertex and fragment stages live in two separate WGSL files on disk.
//! Each is compiled into its own module inside a validation error scope so
//! a bad shader surfaces as a [`ShaderError`] instead of a device panic.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Entry point every vertex stage must export
pub const VERTEX_ENTRY: &str = "vs_main";
/// Entry point every fragment stage must export
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Error type for shader setup
#[derive(Debug)]
pub enum ShaderError {
    /// The shader file could not be read
    Io { path: PathBuf, source: io::Error },
    /// WGSL failed to parse or validate
    Compile { stage: ShaderStage, message: String },
    /// The stages could not be linked into a pipeline
    Link(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Io { path, source } => {
                write!(f, "Shader could not be loaded from {}: {}", path.display(), source)
            }
            ShaderError::Compile { stage, message } => {
                write!(f, "Compile failure in {} shader:\n{}", stage, message)
            }
            ShaderError::Link(msg) => write!(f, "Linker failure: {}", msg),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Io { source, .. } => Some(source),
            ShaderError::Compile { .. } => None,
            ShaderError::Link(_) => None,
        }
    }
}

/// Read a shader file into a string
pub fn load_shader_source<P: AsRef<Path>>(path: P) -> Result<String, ShaderError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Shader loaded from {}", path.display());
    Ok(source)
}

/// Compile WGSL source for one stage
pub async fn compile(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let label = format!("{} shader", stage);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    match device.pop_error_scope().await {
        Some(err) => Err(ShaderError::Compile {
            stage,
            message: err.to_string(),
        }),
        None => Ok(module),
    }
}

/// Load a stage from disk and compile it
pub async fn load_and_compile<P: AsRef<Path>>(
    device: &wgpu::Device,
    stage: ShaderStage,
    path: P,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let source = load_shader_source(path)?;
    compile(device, stage, &source).await
}

//! Scene pipeline and the data types it feeds to the GPU

pub mod scene_pipeline;
pub mod types;

pub use scene_pipeline::{DrawItem, ModelBinding, ScenePipeline, DEPTH_FORMAT};
pub use types::{CameraUniforms, ColorVertex, ModelUniforms};

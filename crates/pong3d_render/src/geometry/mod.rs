//! Hand-built mesh geometry

mod cuboid;

pub use cuboid::{cuboid, FaceColors, CUBOID_VERTEX_COUNT, GREEN, BLUE, WHITE};

//! # Graphics Module
//!
//! All graphics functionality: camera, geometry processing, rendering,
//! scene management, and GPU resources.
//!
//! The pipeline is deliberately small: every drawable is normalized into a
//! tagged triangle list at load time and rendered with the single shared
//! wireframe program.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;

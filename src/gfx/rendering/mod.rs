//! # Rendering Pipeline Module
//!
//! The wgpu render engine and the wireframe shading program.

pub mod render_engine;

pub use render_engine::RenderEngine;

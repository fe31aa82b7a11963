//! # Scene Management Module
//!
//! Object hierarchy, vertex data, and the scene container. Objects hold
//! normalized, barycentric-tagged meshes; the scene owns the single shared
//! wireframe material and the camera.

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Mesh, Object};
pub use scene::Scene;
pub use vertex::Vertex3D;

//! # GPU Resource Management
//!
//! Wireframe material, global camera bindings, and texture resources.

pub mod global_bindings;
pub mod material;
pub mod texture_resource;

pub use global_bindings::{GlobalBindings, GlobalUBO};
pub use material::WireframeMaterial;
pub use texture_resource::TextureResource;

//! Convenience re-exports for typical viewer usage.

pub use crate::app::FiligreeApp;
pub use crate::gfx::geometry::{GeometryData, GeometryError};
pub use crate::gfx::scene::Scene;
pub use crate::gfx::OrbitCamera;
pub use crate::ui::wireframe_settings_panel;
pub use cgmath::Vector3;

//! # filigree
//!
//! A small 3D viewer that renders every model as a solid surface with an
//! anti-aliased wireframe overlay, drawn in a single pass.
//!
//! Loaded geometry is normalized at load time: indexed surfaces are
//! flattened, non-triangle-list draw modes are converted, and each vertex
//! is tagged with a barycentric coordinate so the fragment shader can
//! measure its distance to the nearest triangle edge.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cgmath::Vector3;
//!
//! let mut app = filigree::default();
//! app.add_cube(Vector3::new(0.7, 0.0, 0.0));
//! app.add_model("assets/gem.obj");
//! app.set_ui(filigree::ui::wireframe_settings_panel);
//! app.run().unwrap();
//! ```

pub mod app;
pub mod gfx;
pub mod ui;
pub mod wgpu_utils;

pub mod prelude;

pub use app::FiligreeApp;

/// Creates a viewer application with default settings.
pub fn default() -> FiligreeApp {
    pollster::block_on(FiligreeApp::new())
}

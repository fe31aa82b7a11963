//! # User Interface Module
//!
//! Dear ImGui overlay for the viewer. The UI system handles input capture
//! (so camera controls don't fight the panels) and provides the wireframe
//! settings panel for tuning the material at runtime.

pub mod manager;
pub mod panel;

pub use manager::UiManager;
pub use panel::wireframe_settings_panel;

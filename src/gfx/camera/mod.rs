//! # Camera System
//!
//! Orbit camera with drag-rotate, scroll-zoom, and shift-drag pan.

pub mod camera_controller;
pub mod camera_utils;
pub mod orbit_camera;

pub use camera_controller::CameraController;
pub use camera_utils::CameraManager;
pub use orbit_camera::OrbitCamera;

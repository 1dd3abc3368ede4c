// src/lib.rs
//! Orbit Cube
//!
//! An interactive spinning cube built on wgpu and winit. Pressing on the
//! cube highlights it, releasing restores its color, and dragging orbits the
//! camera around the origin.

pub mod animation;
pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod gfx;
pub mod input;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::CubeApp;
pub use config::{AppConfig, InteractionMode};

/// Creates an application with the default configuration
pub fn default() -> Result<CubeApp, error::AppError> {
    CubeApp::new(AppConfig::default())
}

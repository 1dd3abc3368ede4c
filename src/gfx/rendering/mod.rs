// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Owns the wgpu device, surface and pipeline, and draws the scene each frame.

pub mod render_engine;

// Re-export main types
pub use render_engine::RenderEngine;

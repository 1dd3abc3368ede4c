// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Textures owned by the render engine outside of any scene object.

pub mod texture_resource;

// Re-export main types
pub use texture_resource::TextureResource;

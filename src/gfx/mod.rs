//! # Graphics Module
//!
//! Everything between the scene and the GPU.
//!
//! - **Camera** ([`camera`]) - Perspective camera and its uniform
//! - **Scene** ([`scene`]) - Objects, materials and the colorable capability
//! - **Geometry** ([`geometry`]) - Mesh data and the box primitive
//! - **Picking** ([`picking`]) - Ray casting from screen space into the scene
//! - **Surface** ([`surface`]) - Logical viewport size and pixel ratio
//! - **Rendering** ([`rendering`]) - The wgpu render engine
//! - **Resources** ([`resources`]) - Depth textures
//!
//! Only [`rendering`] and [`resources`] touch the GPU; the rest is plain data
//! and can be used headless.

pub mod camera;
pub mod color;
pub mod geometry;
pub mod picking;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use camera::PerspectiveCamera;
pub use color::Color;
pub use rendering::render_engine::RenderEngine;

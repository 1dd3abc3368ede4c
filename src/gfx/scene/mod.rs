//! # Scene Management Module
//!
//! Objects, materials and vertex data for the scene graph.
//!
//! ## Key Components
//!
//! - [`Scene`] - Ordered object container that also owns the materials
//! - [`Object`] - Geometry, material handle and transform
//! - [`Material`] - Flat-colored or normal-shaded surface description
//! - [`HasColorableMaterial`] - Capability used by hit testing and highlighting
//! - [`Vertex3D`] - GPU vertex layout
//!
//! ## Usage
//!
//! ```rust
//! use orbit_cube::gfx::geometry::generate_cube;
//! use orbit_cube::gfx::scene::{Material, Object, Scene};
//!
//! let mut scene = Scene::new();
//! let material = scene.add_material(Material::basic(0x00ff00));
//! scene.add(Object::new("cube", generate_cube(), material));
//! assert_eq!(scene.len(), 1);
//! ```

pub mod material;
pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use material::{BasicMaterial, HasColorableMaterial, Material, MaterialId};
pub use object::{Object, ObjectId, Rotation};
pub use scene::Scene;
pub use vertex::Vertex3D;

//! # Orbit Cube Prelude
//!
//! Commonly used types in one import.
//!
//! ```no_run
//! use orbit_cube::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = AppConfig::default().with_mode(InteractionMode::StaticCamera);
//!     CubeApp::new(config)?.run()
//! }
//! ```

// Re-export core application types
pub use crate::app::CubeApp;
pub use crate::config::{AppConfig, InteractionMode};
pub use crate::context::AppContext;
pub use crate::error::{AppError, RenderError};

// Re-export graphics and scene types
pub use crate::gfx::camera::PerspectiveCamera;
pub use crate::gfx::color::Color;
pub use crate::gfx::geometry::{generate_box, generate_cube, GeometryData};
pub use crate::gfx::picking::Raycaster;
pub use crate::gfx::scene::{HasColorableMaterial, Material, MaterialId, Object, ObjectId, Scene};

// Re-export interaction types
pub use crate::animation::{AnimationDriver, FrameRenderer};
pub use crate::input::{InputReactor, InteractionEvent, InteractionKind, PointerEvent};

// Re-export common external dependencies
pub use cgmath::{Vector2, Vector3};

//! # Input Handling
//!
//! Turns raw window pointer events into scene changes.
//!
//! - [`pointer`] - Host-neutral pointer events and the tracker that derives
//!   them from winit window events
//! - [`reactor`] - The press/drag/release state machine
//! - [`highlight`] - Interaction events and the subscriber that recolors
//!   the materials they carry

pub mod highlight;
pub mod pointer;
pub mod reactor;

pub use highlight::{Highlighter, InteractionEvent, InteractionKind};
pub use pointer::{EventTarget, PointerEvent, PointerKind, PointerTracker};
pub use reactor::{InputReactor, InteractionState};

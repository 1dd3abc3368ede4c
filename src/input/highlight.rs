//! Interaction events and material highlighting

use crate::gfx::{color::Color, scene::MaterialId, scene::Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Press,
    Release,
}

/// A synthesized press or release together with the materials it affects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    pub targets: Vec<MaterialId>,
}

impl InteractionEvent {
    pub fn press(targets: Vec<MaterialId>) -> Self {
        Self {
            kind: InteractionKind::Press,
            targets,
        }
    }

    /// A release reusing the targets captured by `press`
    pub fn release_of(press: &InteractionEvent) -> Self {
        Self {
            kind: InteractionKind::Release,
            targets: press.targets.clone(),
        }
    }
}

/// Recolors the targets of interaction events: highlighted on press,
/// normal on release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlighter {
    pub highlight: Color,
    pub normal: Color,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            highlight: Color::RED,
            normal: Color::GREEN,
        }
    }
}

impl Highlighter {
    pub fn new(highlight: Color, normal: Color) -> Self {
        Self { highlight, normal }
    }

    pub fn color_for(&self, kind: InteractionKind) -> Color {
        match kind {
            InteractionKind::Press => self.highlight,
            InteractionKind::Release => self.normal,
        }
    }

    /// Returns the number of materials recolored
    pub fn apply(&self, event: &InteractionEvent, scene: &mut Scene) -> usize {
        scene.recolor(&event.targets, self.color_for(event.kind))
    }
}

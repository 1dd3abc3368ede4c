//! Press / drag / release state machine
//!
//! ```text
//!            press on surface                 release (anywhere)
//!   Idle ───────────────────────▶ Pressed ───────────────────────▶ Idle
//!                                   │  ▲
//!                                   └──┘ move on surface: orbit camera
//!                                        (DragOrbit mode only)
//! ```
//!
//! A press hit-tests the scene and emits a press event carrying the colorable
//! materials under the pointer. A release never hit-tests: it emits a release
//! event for the materials captured by the latest press. Moves are only acted
//! on while pressed, so a release cuts off any further orbiting until the
//! next press.

use cgmath::{Vector2, Vector3};

use super::{
    highlight::{Highlighter, InteractionEvent},
    pointer::{EventTarget, PointerEvent, PointerKind},
};
use crate::{
    config::{AppConfig, InteractionMode},
    context::AppContext,
    gfx::{camera::PerspectiveCamera, picking::Raycaster, scene::MaterialId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Pressed,
}

pub struct InputReactor {
    mode: InteractionMode,
    state: InteractionState,
    /// Latest press, reused by every following release
    latest_press: Option<InteractionEvent>,
    highlighter: Highlighter,
    orbit_radius: f32,
    drag_sensitivity: f32,
}

impl InputReactor {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            mode: config.mode,
            state: InteractionState::Idle,
            latest_press: None,
            highlighter: Highlighter::new(config.highlight_color, config.normal_color),
            orbit_radius: config.orbit_radius,
            drag_sensitivity: config.drag_sensitivity,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// Press and release produce an [`InteractionEvent`], which has already
    /// been applied to the scene when this returns. Moves return `None`.
    pub fn handle_pointer(
        &mut self,
        context: &mut AppContext,
        event: &PointerEvent,
    ) -> Option<InteractionEvent> {
        if context.is_disposed() {
            return None;
        }

        match event.kind {
            PointerKind::Down => self.on_press(context, event),
            PointerKind::Move => {
                self.on_move(context, event);
                None
            }
            PointerKind::Up => self.on_release(context),
        }
    }

    fn on_press(
        &mut self,
        context: &mut AppContext,
        event: &PointerEvent,
    ) -> Option<InteractionEvent> {
        if event.target != EventTarget::Surface || self.state == InteractionState::Pressed {
            return None;
        }

        let press = InteractionEvent::press(hit_test(context, event.client));
        self.highlighter.apply(&press, &mut context.scene);
        self.state = InteractionState::Pressed;
        self.latest_press = Some(press.clone());

        log::debug!(
            "press at ({}, {}) hit {} material(s)",
            event.client.x,
            event.client.y,
            press.targets.len()
        );
        Some(press)
    }

    fn on_move(&mut self, context: &mut AppContext, event: &PointerEvent) {
        if self.state != InteractionState::Pressed
            || !self.mode.drag_orbits()
            || event.target != EventTarget::Surface
        {
            return;
        }

        orbit_camera(
            &mut context.camera,
            event.client.x,
            self.drag_sensitivity,
            self.orbit_radius,
        );
        log::trace!("camera orbited to {:?}", context.camera.position);
    }

    fn on_release(&mut self, context: &mut AppContext) -> Option<InteractionEvent> {
        self.state = InteractionState::Idle;

        let release = InteractionEvent::release_of(self.latest_press.as_ref()?);
        self.highlighter.apply(&release, &mut context.scene);

        log::debug!("release restored {} material(s)", release.targets.len());
        Some(release)
    }

    /// Forgets any press in progress
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.latest_press = None;
    }
}

/// Colorable materials under the client position, nearest first
pub fn hit_test(context: &AppContext, client: Vector2<f32>) -> Vec<MaterialId> {
    let ndc = context.surface.to_ndc(client);
    match Raycaster::from_camera(ndc, &context.camera) {
        Some(raycaster) => raycaster.intersect_colorable(&context.scene),
        None => Vec::new(),
    }
}

/// Moves the camera around the Y axis from the pointer's client x.
///
/// The z update reads the x that was just computed, then the camera turns
/// back to the origin. Angles are evaluated in `f64` since `client_x * 0.5`
/// runs into the hundreds of radians.
pub fn orbit_camera(
    camera: &mut PerspectiveCamera,
    client_x: f32,
    sensitivity: f32,
    radius: f32,
) {
    let offset = f64::from(client_x) * f64::from(sensitivity);
    let radius = f64::from(radius);
    let x = (f64::from(camera.position.x) + offset).sin() * radius;
    let z = (x - offset).cos() * radius;
    camera.position.x = x as f32;
    camera.position.z = z as f32;
    camera.look_at(Vector3::new(0.0, 0.0, 0.0));
}

use cgmath::Vector2;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Touch, TouchPhase},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// What the pointer was over when the event fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The render surface
    Surface,
    /// Anywhere else
    Outside,
}

/// A pointer event in client coordinates (logical pixels, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub client: Vector2<f32>,
    pub target: EventTarget,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32, target: EventTarget) -> Self {
        Self {
            kind,
            client: Vector2::new(x, y),
            target,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, x, y, EventTarget::Surface)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, x, y, EventTarget::Surface)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, x, y, EventTarget::Surface)
    }

    pub fn outside(mut self) -> Self {
        self.target = EventTarget::Outside;
        self
    }
}

/// Tracks the cursor between window events.
///
/// winit reports button changes without a position and cursor moves in
/// physical pixels; this keeps the last logical position and whether the
/// cursor is over the window so every derived event is complete.
///
/// Buttons and the primary touch share one pointer: `Down` fires when the
/// first of them goes down and `Up` when the last one is released.
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    position: Vector2<f32>,
    inside: bool,
    held: u32,
    touch: Option<u64>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            position: Vector2::new(0.0, 0.0),
            inside: true,
            held: 0,
            touch: None,
        }
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn target(&self) -> EventTarget {
        if self.inside {
            EventTarget::Surface
        } else {
            EventTarget::Outside
        }
    }

    pub fn cursor_entered(&mut self) {
        self.inside = true;
    }

    pub fn cursor_left(&mut self) {
        self.inside = false;
    }

    pub fn cursor_moved(
        &mut self,
        position: PhysicalPosition<f64>,
        scale_factor: f64,
    ) -> PointerEvent {
        let logical = position.to_logical::<f64>(scale_factor);
        self.position = Vector2::new(logical.x as f32, logical.y as f32);
        self.event(PointerKind::Move)
    }

    /// `None` for buttons added to or released from a chord
    pub fn button(&mut self, state: ElementState) -> Option<PointerEvent> {
        match state {
            ElementState::Pressed => self.press(),
            ElementState::Released => self.release(),
        }
    }

    /// Maps the first active touch onto the pointer; other fingers are ignored
    pub fn touch(&mut self, touch: &Touch, scale_factor: f64) -> Option<PointerEvent> {
        match touch.phase {
            TouchPhase::Started => {
                if self.touch.is_some() {
                    return None;
                }
                self.touch = Some(touch.id);
                self.inside = true;
                self.cursor_moved(touch.location, scale_factor);
                self.press()
            }
            TouchPhase::Moved if self.touch == Some(touch.id) => {
                Some(self.cursor_moved(touch.location, scale_factor))
            }
            TouchPhase::Ended | TouchPhase::Cancelled if self.touch == Some(touch.id) => {
                self.touch = None;
                self.cursor_moved(touch.location, scale_factor);
                self.release()
            }
            _ => None,
        }
    }

    fn press(&mut self) -> Option<PointerEvent> {
        self.held += 1;
        (self.held == 1).then(|| self.event(PointerKind::Down))
    }

    /// A release with nothing held still reports `Up`
    fn release(&mut self) -> Option<PointerEvent> {
        if self.held > 1 {
            self.held -= 1;
            return None;
        }
        self.held = 0;
        Some(self.event(PointerKind::Up))
    }

    pub fn position(&self) -> Vector2<f32> {
        self.position
    }

    fn event(&self, kind: PointerKind) -> PointerEvent {
        PointerEvent {
            kind,
            client: self.position,
            target: self.target(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_are_converted_to_logical_pixels() {
        let mut tracker = PointerTracker::new();
        let event = tracker.cursor_moved(PhysicalPosition::new(300.0, 200.0), 2.0);

        assert_eq!(event, PointerEvent::moved(150.0, 100.0));
        assert_eq!(tracker.position(), Vector2::new(150.0, 100.0));
    }

    #[test]
    fn test_buttons_reuse_last_position() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(PhysicalPosition::new(40.0, 60.0), 1.0);

        assert_eq!(
            tracker.button(ElementState::Pressed),
            Some(PointerEvent::down(40.0, 60.0))
        );
        assert_eq!(
            tracker.button(ElementState::Released),
            Some(PointerEvent::up(40.0, 60.0))
        );
    }

    #[test]
    fn test_events_after_leaving_target_outside() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(PhysicalPosition::new(10.0, 10.0), 1.0);
        tracker.cursor_left();

        let event = tracker.button(ElementState::Released).unwrap();
        assert_eq!(event.target, EventTarget::Outside);

        tracker.cursor_entered();
        let event = tracker.button(ElementState::Pressed).unwrap();
        assert_eq!(event.target, EventTarget::Surface);
    }

    #[test]
    fn test_chorded_buttons_form_one_press() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(PhysicalPosition::new(5.0, 5.0), 1.0);

        assert!(tracker.button(ElementState::Pressed).is_some());
        assert_eq!(tracker.button(ElementState::Pressed), None);
        assert_eq!(tracker.button(ElementState::Released), None);
        assert_eq!(
            tracker.button(ElementState::Released),
            Some(PointerEvent::up(5.0, 5.0))
        );
    }

    fn touch(id: u64, phase: TouchPhase, x: f64, y: f64) -> Touch {
        Touch {
            // SAFETY: the id is only compared, never passed back to winit
            device_id: unsafe { winit::event::DeviceId::dummy() },
            phase,
            location: PhysicalPosition::new(x, y),
            force: None,
            id,
        }
    }

    #[test]
    fn test_primary_touch_drives_pointer() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_left();

        let down = tracker.touch(&touch(1, TouchPhase::Started, 200.0, 100.0), 2.0);
        assert_eq!(down, Some(PointerEvent::down(100.0, 50.0)));

        // A second finger neither presses nor moves the pointer
        assert_eq!(tracker.touch(&touch(2, TouchPhase::Started, 0.0, 0.0), 2.0), None);
        assert_eq!(tracker.touch(&touch(2, TouchPhase::Moved, 10.0, 10.0), 2.0), None);

        let moved = tracker.touch(&touch(1, TouchPhase::Moved, 240.0, 100.0), 2.0);
        assert_eq!(moved, Some(PointerEvent::moved(120.0, 50.0)));

        assert_eq!(tracker.touch(&touch(2, TouchPhase::Ended, 0.0, 0.0), 2.0), None);
        let up = tracker.touch(&touch(1, TouchPhase::Ended, 240.0, 100.0), 2.0);
        assert_eq!(up, Some(PointerEvent::up(120.0, 50.0)));
    }
}

//! Normalized pointer events

use crate::geometry::Point;

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// A single pointer notification, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to `(x, y)`; `(dx, dy)` is the movement since the last event
    Move { x: f32, y: f32, dx: f32, dy: f32 },
    Press(Button),
    Release(Button),
}

/// Cursor position and primary button state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    cursor: Option<Point>,
    primary_down: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known finite cursor position
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn primary_down(&self) -> bool {
        self.primary_down
    }

    /// Track an event; non-finite positions are dropped
    pub fn update(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::Move { x, y, .. } => {
                let point = Point::new(x, y);
                if point.is_finite() {
                    self.cursor = Some(point);
                }
            }
            PointerEvent::Press(Button::Primary) => self.primary_down = true,
            PointerEvent::Release(Button::Primary) => self.primary_down = false,
            PointerEvent::Press(_) | PointerEvent::Release(_) => {}
        }
    }

    /// Pointer left the surface
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }
}

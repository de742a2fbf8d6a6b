//! egui pointer events -> session input

use egui::{Event, PointerButton, Pos2, Rect};

use crate::input::{Button, Gesture, PointerEvent};
use crate::Point;

/// What the session should do for one egui event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceInput {
    Pointer(PointerEvent),
    /// Button let go off the surface before a drag started; no click
    CancelGesture(Button),
    PointerLeft,
}

pub fn map_button(button: PointerButton) -> Button {
    match button {
        PointerButton::Primary => Button::Primary,
        PointerButton::Secondary => Button::Secondary,
        PointerButton::Middle => Button::Middle,
        PointerButton::Extra1 | PointerButton::Extra2 => Button::Other,
    }
}

/// Surface-local move from an absolute egui position
fn local_move(pos: Pos2, rect: Rect, cursor: Option<Point>) -> PointerEvent {
    let local = pos - rect.min;
    let (dx, dy) = cursor.map_or((0.0, 0.0), |c| (local.x - c.x, local.y - c.y));
    PointerEvent::Move {
        x: local.x,
        y: local.y,
        dx,
        dy,
    }
}

/// Translate one egui event for a drawing surface at `rect`.
///
/// `cursor` is the last surface-local cursor and `gesture` the tracker state
/// before this event. Button events only count on the surface, except that
/// a release always ends a gesture that started there: a drag finishes
/// wherever the pointer is, a pending press is cancelled.
pub fn translate(event: &Event, rect: Rect, cursor: Option<Point>, gesture: Gesture) -> Vec<SurfaceInput> {
    match *event {
        Event::PointerMoved(pos) => vec![SurfaceInput::Pointer(local_move(pos, rect, cursor))],
        Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = map_button(button);
            let moved = SurfaceInput::Pointer(local_move(pos, rect, cursor));

            if rect.contains(pos) {
                let action = if pressed {
                    PointerEvent::Press(button)
                } else {
                    PointerEvent::Release(button)
                };
                return vec![moved, SurfaceInput::Pointer(action)];
            }

            match (pressed, gesture) {
                (true, _) | (false, Gesture::Idle) => Vec::new(),
                (false, Gesture::Dragging) => {
                    vec![moved, SurfaceInput::Pointer(PointerEvent::Release(button))]
                }
                (false, Gesture::Pressed { .. }) => vec![SurfaceInput::CancelGesture(button)],
            }
        }
        Event::PointerGone => vec![SurfaceInput::PointerLeft],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Modifiers};
    use std::time::Duration;

    fn surface() -> Rect {
        Rect::from_min_size(pos2(0.0, 30.0), vec2(800.0, 570.0))
    }

    fn button(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: pos2(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn pressed() -> Gesture {
        Gesture::Pressed {
            deadline: Duration::from_millis(200),
        }
    }

    #[test]
    fn test_move_is_surface_local_with_delta() {
        let out = translate(
            &Event::PointerMoved(pos2(110.0, 80.0)),
            surface(),
            Some(Point::new(100.0, 40.0)),
            Gesture::Idle,
        );
        assert_eq!(
            out,
            vec![SurfaceInput::Pointer(PointerEvent::Move {
                x: 110.0,
                y: 50.0,
                dx: 10.0,
                dy: 10.0
            })]
        );
    }

    #[test]
    fn test_first_move_has_no_delta() {
        let out = translate(&Event::PointerMoved(pos2(5.0, 35.0)), surface(), None, Gesture::Idle);
        assert_eq!(
            out,
            vec![SurfaceInput::Pointer(PointerEvent::Move {
                x: 5.0,
                y: 5.0,
                dx: 0.0,
                dy: 0.0
            })]
        );
    }

    #[test]
    fn test_press_and_release_on_surface() {
        let press = translate(&button(400.0, 300.0, true), surface(), None, Gesture::Idle);
        assert_eq!(press.len(), 2);
        assert_eq!(press[1], SurfaceInput::Pointer(PointerEvent::Press(Button::Primary)));

        let release = translate(&button(400.0, 300.0, false), surface(), None, pressed());
        assert_eq!(release[1], SurfaceInput::Pointer(PointerEvent::Release(Button::Primary)));
    }

    #[test]
    fn test_press_outside_surface_dropped() {
        // Status bar sits above the surface
        assert!(translate(&button(400.0, 12.0, true), surface(), None, Gesture::Idle).is_empty());
    }

    #[test]
    fn test_release_after_outside_press_dropped() {
        let cursor = Some(Point::new(400.0, -18.0));
        assert!(translate(&button(400.0, 12.0, false), surface(), cursor, Gesture::Idle).is_empty());
    }

    #[test]
    fn test_drag_ending_outside_surface_still_releases() {
        let out = translate(
            &button(400.0, 10.0, false),
            surface(),
            Some(Point::new(400.0, 0.0)),
            Gesture::Dragging,
        );
        assert_eq!(
            out,
            vec![
                SurfaceInput::Pointer(PointerEvent::Move {
                    x: 400.0,
                    y: -20.0,
                    dx: 0.0,
                    dy: -20.0
                }),
                SurfaceInput::Pointer(PointerEvent::Release(Button::Primary)),
            ]
        );
    }

    #[test]
    fn test_quick_release_outside_surface_cancels() {
        let out = translate(&button(400.0, 10.0, false), surface(), None, pressed());
        assert_eq!(out, vec![SurfaceInput::CancelGesture(Button::Primary)]);
    }

    #[test]
    fn test_pointer_gone() {
        assert_eq!(
            translate(&Event::PointerGone, surface(), None, Gesture::Dragging),
            vec![SurfaceInput::PointerLeft]
        );
    }

    #[test]
    fn test_other_events_ignored() {
        assert!(translate(&Event::Copy, surface(), None, Gesture::Idle).is_empty());
    }

    #[test]
    fn test_map_button() {
        assert_eq!(map_button(PointerButton::Primary), Button::Primary);
        assert_eq!(map_button(PointerButton::Secondary), Button::Secondary);
        assert_eq!(map_button(PointerButton::Middle), Button::Middle);
        assert_eq!(map_button(PointerButton::Extra2), Button::Other);
    }
}

//! Drag-vs-click disambiguation
//!
//! A press arms a single timer. If the timer fires before the release, the
//! gesture becomes a drag: motion pans the camera and the release does not
//! place a stone. A release always disarms the timer.

use std::time::Duration;

/// Gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Button held; becomes a drag at `deadline`
    Pressed { deadline: Duration },
    Dragging,
}

/// How a gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Click,
    DragEnd,
}

/// Tracks one pointer gesture at a time
#[derive(Debug, Clone)]
pub struct GestureTracker {
    state: Gesture,
    delay: Duration,
}

impl GestureTracker {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: Gesture::Idle,
            delay,
        }
    }

    pub fn state(&self) -> Gesture {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == Gesture::Dragging
    }

    /// Button pressed: arm (or re-arm) the drag timer
    pub fn press(&mut self, now: Duration) {
        match self.state {
            Gesture::Idle | Gesture::Pressed { .. } => {
                self.state = Gesture::Pressed {
                    deadline: now + self.delay,
                };
            }
            Gesture::Dragging => {}
        }
    }

    /// Fire the drag timer if it is due. Returns true when a drag starts.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.state {
            Gesture::Pressed { deadline } if now >= deadline => {
                self.state = Gesture::Dragging;
                tracing::debug!("drag start");
                true
            }
            _ => false,
        }
    }

    /// Pointer motion: the pan delta to apply, if dragging
    pub fn motion(&mut self, now: Duration, dx: f32, dy: f32) -> Option<(f32, f32)> {
        self.poll(now);
        self.is_dragging().then_some((dx, dy))
    }

    /// Button released: classify the gesture and disarm the timer
    pub fn release(&mut self, now: Duration) -> Release {
        self.poll(now);
        let release = match self.state {
            Gesture::Dragging => Release::DragEnd,
            Gesture::Idle | Gesture::Pressed { .. } => Release::Click,
        };
        self.state = Gesture::Idle;
        release
    }

    /// Drop the gesture without classifying it; the pending timer is disarmed
    pub fn cancel(&mut self) {
        self.state = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_quick_release_is_click() {
        let mut gesture = GestureTracker::new(ms(200));
        gesture.press(ms(0));
        assert_eq!(gesture.state(), Gesture::Pressed { deadline: ms(200) });
        assert_eq!(gesture.release(ms(199)), Release::Click);
        assert_eq!(gesture.state(), Gesture::Idle);
    }

    #[test]
    fn test_held_release_is_drag_end() {
        let mut gesture = GestureTracker::new(ms(200));
        gesture.press(ms(10));
        assert_eq!(gesture.release(ms(210)), Release::DragEnd);
        assert_eq!(gesture.state(), Gesture::Idle);
    }

    #[test]
    fn test_poll_fires_once() {
        let mut gesture = GestureTracker::new(ms(200));
        gesture.press(ms(0));
        assert!(!gesture.poll(ms(100)));
        assert!(gesture.poll(ms(250)));
        assert!(!gesture.poll(ms(300)));
        assert!(gesture.is_dragging());
    }

    #[test]
    fn test_motion_pans_only_while_dragging() {
        let mut gesture = GestureTracker::new(ms(200));
        assert_eq!(gesture.motion(ms(0), 5.0, 5.0), None);

        gesture.press(ms(0));
        assert_eq!(gesture.motion(ms(100), 3.0, -1.0), None);
        assert_eq!(gesture.motion(ms(200), 3.0, -1.0), Some((3.0, -1.0)));
    }

    #[test]
    fn test_release_cancels_pending_timer() {
        let mut gesture = GestureTracker::new(ms(200));
        gesture.press(ms(0));
        gesture.release(ms(50));

        // The stale deadline must not start a drag later
        assert!(!gesture.poll(ms(1000)));
        assert_eq!(gesture.motion(ms(1000), 1.0, 1.0), None);
    }

    #[test]
    fn test_repress_rearms_timer() {
        let mut gesture = GestureTracker::new(ms(200));
        gesture.press(ms(0));
        gesture.press(ms(150));
        assert!(!gesture.poll(ms(250)));
        assert_eq!(gesture.release(ms(340)), Release::Click);
    }

    #[test]
    fn test_cancel_disarms_timer() {
        let mut gesture = GestureTracker::new(ms(200));
        gesture.press(ms(0));
        gesture.cancel();
        assert_eq!(gesture.state(), Gesture::Idle);
        assert!(!gesture.poll(ms(500)));
    }

    #[test]
    fn test_release_without_press_is_click() {
        let mut gesture = GestureTracker::new(ms(200));
        assert_eq!(gesture.release(ms(500)), Release::Click);
    }
}

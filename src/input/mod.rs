//! Pointer input and drag-vs-click disambiguation

mod clock;
mod gesture;
mod pointer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use gesture::{Gesture, GestureTracker, Release};
pub use pointer::{Button, PointerEvent, PointerState};

//! Input wiring and read-only snapshots
//!
//! [`Session`] is the single owner of all mutable state: the game, the
//! pointer, the gesture tracker and the clock that drives it. The front end
//! feeds it events in arrival order, calls [`Session::tick`] once per frame
//! and draws from [`Session::snapshot`].

use crate::board::{Board, Pos, Stone};
use crate::config::AppConfig;
use crate::game::{GameState, MoveOutcome, Phase};
use crate::geometry::{Camera, CoordinateMapper, Point};
use crate::input::{Button, Clock, GestureTracker, PointerEvent, PointerState, Release};

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub board: &'a Board,
    pub current_player: Stone,
    pub winner: Option<Stone>,
    pub winning_line: Option<&'a [Pos]>,
    pub camera: Camera,
    pub mapper: &'a CoordinateMapper,
    pub cursor: Option<Point>,
    pub primary_down: bool,
    pub dragging: bool,
    pub turn: u32,
}

/// Game plus the input state that drives it
pub struct Session<C: Clock> {
    game: GameState,
    pointer: PointerState,
    gesture: GestureTracker,
    clock: C,
}

impl<C: Clock> Session<C> {
    pub fn new(config: &AppConfig, viewport_width: f32, viewport_height: f32, clock: C) -> Self {
        Self {
            game: GameState::new(&config.board, viewport_width, viewport_height),
            pointer: PointerState::new(),
            gesture: GestureTracker::new(config.input.drag_delay()),
            clock,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Process one pointer event. Returns the outcome when a click reached
    /// the game.
    pub fn handle(&mut self, event: PointerEvent) -> Option<MoveOutcome> {
        let now = self.clock.now();
        self.pointer.update(&event);

        match event {
            PointerEvent::Move { dx, dy, .. } => {
                if let Some((dx, dy)) = self.gesture.motion(now, dx, dy) {
                    self.game.pan(dx, dy);
                }
                None
            }
            PointerEvent::Press(_) => {
                self.gesture.press(now);
                None
            }
            PointerEvent::Release(_) => match self.gesture.release(now) {
                Release::DragEnd => None,
                Release::Click => {
                    let Some(cursor) = self.pointer.cursor() else {
                        tracing::debug!("click with no known cursor position");
                        return Some(MoveOutcome::Ignored);
                    };
                    Some(self.game.click(cursor))
                }
            },
        }
    }

    /// Fire the drag timer if it is due; call once per frame
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.gesture.poll(now);
    }

    /// Start a new game regardless of phase
    pub fn restart(&mut self) {
        self.game.restart();
        tracing::info!("new game started");
    }

    /// Abandon the current gesture: no click, no drag
    pub fn cancel_gesture(&mut self, button: Button) {
        self.pointer.update(&PointerEvent::Release(button));
        self.gesture.cancel();
    }

    /// Pointer left the drawing surface
    pub fn pointer_left(&mut self) {
        self.pointer.clear_cursor();
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.game.set_viewport(width, height);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.game.phase(),
            board: self.game.board(),
            current_player: self.game.current_player(),
            winner: self.game.winner(),
            winning_line: self.game.winning_line(),
            camera: self.game.camera(),
            mapper: self.game.mapper(),
            cursor: self.pointer.cursor(),
            primary_down: self.pointer.primary_down(),
            dragging: self.gesture.is_dragging(),
            turn: self.game.turn(),
        }
    }
}

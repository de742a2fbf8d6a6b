//! Unbounded Gomoku
//!
//! A two-player five-in-a-row game on a board with no edges:
//! - The board starts empty and grows in every direction as stones land
//! - Five or more stones in a row win (overlines allowed)
//! - Clicks place stones, press-and-hold drags pan the camera
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Sparse, growable grid of stones
//! - [`geometry`]: Camera and screen <-> cell coordinate mapping
//! - [`rules`]: Win detection
//! - [`game`]: Turn engine and game state machine
//! - [`input`]: Pointer events and drag-vs-click gesture tracking
//! - [`session`]: Wires input to the game state
//! - [`config`]: TOML configuration
//! - [`ui`]: eframe/egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{BoardConfig, GameState, Phase, Stone};
//!
//! let mut game = GameState::new(&BoardConfig::default(), 800.0, 600.0);
//!
//! // Click the middle of the drawing surface
//! let outcome = game.click(gomoku::Point::new(400.0, 300.0));
//! assert!(outcome.is_accepted());
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.current_player(), Stone::Player2);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone};
pub use config::{AppConfig, BoardConfig, InputConfig, WindowConfig};
pub use error::{AppError, ConfigError};
pub use game::{GameState, MoveOutcome, Phase};
pub use geometry::{Camera, CellGeometry, CoordinateMapper, Point};
pub use input::{Button, Clock, GestureTracker, ManualClock, PointerEvent, SystemClock};
pub use session::{Session, Snapshot};

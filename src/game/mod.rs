//! Turn engine and game state machine

mod state;
mod turn;

pub use state::{GameState, Phase};
pub use turn::MoveOutcome;

//! Game rules for unbounded Gomoku
//!
//! Five or more stones in a row along any axis win. There are no captures
//! and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, winning_line, DIRECTIONS, SCAN_LIMIT, WIN_LENGTH};

//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod pointer;
mod theme;

pub use app::GomokuApp;

//! Theme constants for the Gomoku GUI

use egui::Color32;

use crate::Stone;

// Board
pub const BACKGROUND: Color32 = Color32::from_rgb(40, 42, 46);
pub const EMPTY_CELL: Color32 = Color32::from_rgb(250, 250, 252);

// Stones
pub const PLAYER1_STONE: Color32 = Color32::from_rgb(220, 50, 47);
pub const PLAYER2_STONE: Color32 = Color32::from_rgb(60, 170, 70);

// Markers
pub const CURSOR_PRESSED: Color32 = Color32::from_rgb(15, 15, 18);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 200, 40);
pub const BANNER_TEXT: Color32 = Color32::from_rgb(15, 15, 18);

// Status bar
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const CURSOR_SIZE: f32 = 20.0;
pub const INDICATOR_SIZE: f32 = 40.0;
pub const BANNER_SIZE: [f32; 2] = [200.0, 100.0];
pub const BANNER_FONT_SIZE: f32 = 40.0;
pub const WIN_STROKE_WIDTH: f32 = 3.0;

/// Fill color for a cell value
pub fn stone_color(stone: Stone) -> Color32 {
    match stone {
        Stone::Empty => EMPTY_CELL,
        Stone::Player1 => PLAYER1_STONE,
        Stone::Player2 => PLAYER2_STONE,
    }
}

pub fn player_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Player1 => "RED",
        Stone::Player2 => "GREEN",
        Stone::Empty => "-",
    }
}

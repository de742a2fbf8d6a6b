//! Board representation for unbounded Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Player1 => Stone::Player2,
            Stone::Player2 => Stone::Player1,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

/// Logical cell on the board.
///
/// Coordinates are signed: a mapped click may land above or left of the
/// materialized area, which is how growth is requested. The board itself
/// only ever stores non-negative positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by a direction vector scaled by `steps`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Self {
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }

    /// Row/column as vector indices, if both are non-negative
    #[inline]
    pub fn to_indices(self) -> Option<(usize, usize)> {
        if self.row < 0 || self.col < 0 {
            None
        } else {
            Some((self.row as usize, self.col as usize))
        }
    }
}

//! Win condition checking
//!
//! Only the four lines through the last placed stone are scanned. Each side
//! of the line is scanned at most [`SCAN_LIMIT`] cells, which is enough to
//! decide whether a run reaches [`WIN_LENGTH`].

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Cells scanned on each side of the origin cell
pub const SCAN_LIMIT: i32 = WIN_LENGTH as i32 - 1;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal
    (1, 0),  // Vertical
    (1, -1), // Anti-diagonal
];

/// Count matching stones from `pos` (exclusive) along `(dr, dc)`
#[inline]
fn count_dir(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    (1..=SCAN_LIMIT)
        .take_while(|&i| board.get(pos.offset(dr, dc, i)) == stone)
        .count()
}

/// Check whether the stone at `pos` completes five (or more) in a row.
///
/// Directions are tried in order and scanning stops at the first one that
/// reaches five. An empty cell never wins.
pub fn check_win(board: &Board, pos: Pos) -> bool {
    let stone = board.get(pos);
    if stone.is_empty() {
        return false;
    }

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let run = 1 + count_dir(board, pos, dr, dc, stone) + count_dir(board, pos, -dr, -dc, stone);
        run >= WIN_LENGTH
    })
}

/// Cells of the first winning run through `pos`, ordered along the line.
///
/// The run is bounded by the same scan limit as [`check_win`], so it holds
/// between five and nine cells.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let stone = board.get(pos);
    if stone.is_empty() {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = count_dir(board, pos, -dr, -dc, stone) as i32;
        let forward = count_dir(board, pos, dr, dc, stone) as i32;

        if (1 + back + forward) as usize >= WIN_LENGTH {
            return Some((-back..=forward).map(|i| pos.offset(dr, dc, i)).collect());
        }
    }
    None
}

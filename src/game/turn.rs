//! Applying a move at a screen position

use crate::board::{Pos, Stone};
use crate::geometry::Point;
use crate::rules;

use super::state::{GameState, Phase};

/// Result of a click dispatched to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stone placed, turn passed to the other player
    Placed { pos: Pos, stone: Stone },
    /// Stone placed and completed five in a row
    Won { pos: Pos, stone: Stone },
    /// Target cell already holds a stone; nothing changed
    Occupied { pos: Pos },
    /// Position could not be mapped to a cell; nothing changed
    Ignored,
    /// Click on a finished game started a new one
    Restarted,
}

impl MoveOutcome {
    /// Whether a stone was written to the board
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. } | MoveOutcome::Won { .. })
    }
}

impl GameState {
    /// Place the current player's stone under a screen position.
    ///
    /// Targets above or left of the board grow it, shifting every logical
    /// coordinate so the new target lands on row or column 0; the camera is
    /// nudged so the clicked cell stays under the pointer. Growth downward
    /// only needs the vertical compensation. Growth to the right needs none
    /// because horizontal centering uses a fixed nominal width.
    pub(crate) fn apply_move_at(&mut self, point: Point) -> MoveOutcome {
        let Some(pos) = self.mapper.screen_to_cell(point, &self.camera, self.board.row_count()) else {
            tracing::debug!("ignoring move at unmappable position {:?}", point);
            return MoveOutcome::Ignored;
        };

        if !self.board.is_empty(pos) {
            tracing::debug!("cell ({}, {}) is occupied", pos.row, pos.col);
            return MoveOutcome::Occupied { pos };
        }

        let geometry = self.mapper.geometry;
        let mut target = pos;

        if pos.row < 0 {
            self.board.grow_negative_rows(pos.row.unsigned_abs() as usize);
            target.row = 0;
            self.camera.center_y += pos.row as f32 * geometry.half_row_stride();
            tracing::debug!(rows = -pos.row, "board grew upward");
        }

        if pos.col < 0 {
            self.board.grow_negative_cols(pos.col.unsigned_abs() as usize);
            target.col = 0;
            self.camera.center_x += pos.col as f32 * geometry.col_stride();
            tracing::debug!(cols = -pos.col, "board grew leftward");
        }

        let row_count = self.board.row_count();
        if target.row as usize >= row_count {
            let added = target.row as usize - row_count + 1;
            self.camera.center_y += added as f32 * geometry.half_row_stride();
            self.board.ensure_row(target.row);
            tracing::debug!(rows = added, "board grew downward");
        }

        let stone = self.current_player();
        self.board.set(target, stone);
        self.pristine = false;

        if rules::check_win(&self.board, target) {
            self.phase = Phase::Ended;
            self.winning_line = rules::winning_line(&self.board, target);
            tracing::info!(
                "{:?} wins at ({}, {}) after {} moves",
                stone,
                target.row,
                target.col,
                self.turn + 1
            );
            return MoveOutcome::Won { pos: target, stone };
        }

        self.turn += 1;
        tracing::debug!("{:?} played ({}, {}), turn {}", stone, target.row, target.col, self.turn);
        MoveOutcome::Placed { pos: target, stone }
    }
}

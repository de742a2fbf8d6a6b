//! Board rendering for the Gomoku GUI

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};

use crate::session::Snapshot;
use crate::{Phase, Point, Pos};

use super::theme::*;

/// Draws a session snapshot into a painter.
///
/// Purely a reader: nothing here touches game state.
pub struct BoardView {
    /// Screen position of the drawing surface's top-left corner
    offset: Vec2,
    /// Visible drawing area, for culling
    clip: Rect,
}

impl BoardView {
    pub fn new(rect: Rect) -> Self {
        Self {
            offset: rect.min.to_vec2(),
            clip: rect,
        }
    }

    /// Render a full frame
    pub fn paint(&self, painter: &Painter, snapshot: &Snapshot<'_>) {
        painter.rect_filled(self.clip, CornerRadius::ZERO, BACKGROUND);

        self.draw_cells(painter, snapshot);

        if let Some(line) = snapshot.winning_line {
            self.draw_winning_line(painter, snapshot, line);
        }

        if snapshot.phase == Phase::Ended {
            self.draw_winner_banner(painter, snapshot);
        }

        self.draw_current_player(painter, snapshot);
        self.draw_cursor(painter, snapshot);
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(point.x, point.y) + self.offset
    }

    fn cell_rect(&self, snapshot: &Snapshot<'_>, pos: Pos) -> Rect {
        let geometry = snapshot.mapper.geometry;
        let top_left = snapshot
            .mapper
            .cell_to_screen(pos, &snapshot.camera, snapshot.board.row_count());
        Rect::from_min_size(self.to_screen(top_left), Vec2::new(geometry.width, geometry.height))
    }

    /// Draw every materialized cell that is on screen
    fn draw_cells(&self, painter: &Painter, snapshot: &Snapshot<'_>) {
        for (pos, stone) in snapshot.board.cells() {
            let rect = self.cell_rect(snapshot, pos);
            if self.clip.intersects(rect) {
                painter.rect_filled(rect, CornerRadius::ZERO, stone_color(stone));
            }
        }
    }

    fn draw_winning_line(&self, painter: &Painter, snapshot: &Snapshot<'_>, line: &[Pos]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);
        for &pos in line {
            let rect = self.cell_rect(snapshot, pos);
            painter.rect_stroke(rect, CornerRadius::ZERO, stroke, StrokeKind::Outside);
        }
    }

    fn draw_winner_banner(&self, painter: &Painter, snapshot: &Snapshot<'_>) {
        let winner = snapshot.winner.unwrap_or(snapshot.current_player);
        let rect = Rect::from_center_size(self.clip.center(), Vec2::from(BANNER_SIZE));

        painter.rect_filled(rect, CornerRadius::same(6), stone_color(winner));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Winner!",
            FontId::proportional(BANNER_FONT_SIZE),
            BANNER_TEXT,
        );
    }

    /// Square in the top-left corner in the color of the player to move
    fn draw_current_player(&self, painter: &Painter, snapshot: &Snapshot<'_>) {
        let rect = Rect::from_min_size(self.clip.min, Vec2::splat(INDICATOR_SIZE));
        painter.rect_filled(rect, CornerRadius::ZERO, stone_color(snapshot.current_player));
    }

    fn draw_cursor(&self, painter: &Painter, snapshot: &Snapshot<'_>) {
        let Some(cursor) = snapshot.cursor else {
            return;
        };
        let color = if snapshot.primary_down {
            CURSOR_PRESSED
        } else {
            stone_color(snapshot.current_player)
        };
        let rect = Rect::from_min_size(self.to_screen(cursor), Vec2::splat(CURSOR_SIZE));
        painter.rect_filled(rect, CornerRadius::ZERO, color);
    }
}

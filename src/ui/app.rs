//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, Rect, RichText, Sense, TopBottomPanel};

use super::board_view::BoardView;
use super::pointer::{translate, SurfaceInput};
use super::theme::*;
use crate::config::AppConfig;
use crate::input::SystemClock;
use crate::session::Session;
use crate::Phase;

/// Main Gomoku application
pub struct GomokuApp {
    session: Session<SystemClock>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            session: Session::new(
                config,
                config.window.width,
                config.window.height,
                SystemClock::new(),
            ),
        }
    }

    /// Render the top status bar
    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let snapshot = self.session.snapshot();
                let status = match snapshot.phase {
                    Phase::Playing => format!("{} to move", player_name(snapshot.current_player)),
                    Phase::Ended => format!(
                        "{} wins! Click the board for a new game",
                        player_name(snapshot.winner.unwrap_or(snapshot.current_player))
                    ),
                };
                ui.label(RichText::new(status).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new(format!("Move #{}", snapshot.turn + 1)).color(TEXT_MUTED));
                ui.label(
                    RichText::new(format!("{} stones", snapshot.board.stone_count())).color(TEXT_MUTED),
                );
            });
        });
    }

    /// Render the board and feed it pointer input
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let rect = response.rect;

                self.session.set_viewport(rect.width(), rect.height());
                self.session.tick();
                self.forward_pointer_events(ctx, rect);

                if response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::None);
                }

                BoardView::new(rect).paint(&painter, &self.session.snapshot());
            });
    }

    /// Translate this frame's egui pointer events into session input
    fn forward_pointer_events(&mut self, ctx: &Context, rect: Rect) {
        let events = ctx.input(|i| i.events.clone());

        for event in &events {
            let cursor = self.session.snapshot().cursor;
            let gesture = self.session.gesture().state();

            for input in translate(event, rect, cursor, gesture) {
                match input {
                    SurfaceInput::Pointer(event) => {
                        if let Some(outcome) = self.session.handle(event) {
                            tracing::trace!(?outcome, "click handled");
                        }
                    }
                    SurfaceInput::CancelGesture(button) => self.session.cancel_gesture(button),
                    SurfaceInput::PointerLeft => self.session.pointer_left(),
                }
            }
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.session.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_status_bar(ctx);
        self.render_board(ctx);

        // Continuous redraw; the drag timer is polled every frame
        ctx.request_repaint();
    }
}

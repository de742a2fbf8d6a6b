//! Game state machine

use crate::board::{Board, Pos, Stone};
use crate::config::BoardConfig;
use crate::geometry::{Camera, CellGeometry, CoordinateMapper, Point};

use super::turn::MoveOutcome;

/// Overall game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    Ended,
}

/// Main game state.
///
/// Sole owner of the board, camera, turn counter and phase. Everything else
/// reads it through accessors.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) camera: Camera,
    pub(super) mapper: CoordinateMapper,
    pub(super) turn: u32,
    pub(super) phase: Phase,
    pub(super) winning_line: Option<Vec<Pos>>,
    /// No move or pan since the last restart
    pub(super) pristine: bool,

    first_player: Stone,
    opening_stone: bool,
    viewport: (f32, f32),
}

impl GameState {
    pub fn new(config: &BoardConfig, viewport_width: f32, viewport_height: f32) -> Self {
        let mut state = Self {
            board: Board::new(),
            camera: Camera::centered(viewport_width, viewport_height),
            mapper: config.mapper(),
            turn: 0,
            phase: Phase::Playing,
            winning_line: None,
            pristine: true,
            first_player: config.first_player,
            opening_stone: config.opening_stone,
            viewport: (viewport_width, viewport_height),
        };
        state.restart();
        state
    }

    /// Start over: empty board, turn 0, camera centered on the viewport
    pub fn restart(&mut self) {
        self.board = Board::new();
        if self.opening_stone {
            self.board.set(Pos::new(0, 0), self.first_player.opponent());
        }
        self.camera = Camera::centered(self.viewport.0, self.viewport.1);
        self.turn = 0;
        self.phase = Phase::Playing;
        self.winning_line = None;
        self.pristine = true;
    }

    /// Dispatch a click: restarts a finished game, otherwise plays a move
    pub fn click(&mut self, point: Point) -> MoveOutcome {
        match self.phase {
            Phase::Ended => {
                self.restart();
                tracing::info!("new game started");
                MoveOutcome::Restarted
            }
            Phase::Playing => self.apply_move_at(point),
        }
    }

    /// Move the camera; allowed in any phase
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.camera.pan(dx, dy);
        self.pristine = false;
    }

    /// Record the drawing surface size.
    ///
    /// Recenters the camera only while nothing has been played or panned
    /// since the last restart.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if self.viewport == (width, height) {
            return;
        }
        self.viewport = (width, height);
        if self.pristine {
            self.camera = Camera::centered(width, height);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn geometry(&self) -> CellGeometry {
        self.mapper.geometry
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Accepted non-winning moves since the last restart
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Player to move; after a win this is the winner
    pub fn current_player(&self) -> Stone {
        if self.turn % 2 == 0 {
            self.first_player
        } else {
            self.first_player.opponent()
        }
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.phase {
            Phase::Ended => Some(self.current_player()),
            Phase::Playing => None,
        }
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Cell under a screen position with the current camera
    pub fn cell_at(&self, point: Point) -> Option<Pos> {
        self.mapper.screen_to_cell(point, &self.camera, self.board.row_count())
    }

    /// Top-left screen position of a cell with the current camera
    pub fn cell_origin(&self, pos: Pos) -> Point {
        self.mapper.cell_to_screen(pos, &self.camera, self.board.row_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn new_game() -> GameState {
        GameState::new(&BoardConfig::default(), W, H)
    }

    /// Click the center of a logical cell as currently laid out
    fn click_cell(game: &mut GameState, row: i32, col: i32) -> MoveOutcome {
        let pos = Pos::new(row, col);
        let center = game.mapper.cell_center(pos, &game.camera, game.board.row_count());
        game.click(center)
    }

    #[test]
    fn test_new_game() {
        let game = new_game();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.current_player(), Stone::Player1);
        assert!(game.board().is_board_empty());
        assert_eq!(game.camera(), Camera::centered(W, H));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_accepted_move_advances_turn() {
        let mut game = new_game();
        let outcome = click_cell(&mut game, 0, 0);

        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                pos: Pos::new(0, 0),
                stone: Stone::Player1
            }
        );
        assert_eq!(game.turn(), 1);
        assert_eq!(game.current_player(), Stone::Player2);
        assert_eq!(game.board().get(Pos::new(0, 0)), Stone::Player1);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut game = new_game();
        click_cell(&mut game, 0, 1);
        let board_before = game.board().clone();
        let camera_before = game.camera();

        let outcome = click_cell(&mut game, 0, 1);

        assert_eq!(outcome, MoveOutcome::Occupied { pos: Pos::new(0, 1) });
        assert!(!outcome.is_accepted());
        assert_eq!(game.turn(), 1);
        assert_eq!(game.current_player(), Stone::Player2);
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.camera(), camera_before);
    }

    #[test]
    fn test_players_alternate_regardless_of_rejections() {
        let mut game = new_game();
        let expected = [Stone::Player1, Stone::Player2, Stone::Player1, Stone::Player2];

        for (i, stone) in expected.into_iter().enumerate() {
            assert_eq!(game.current_player(), stone);
            click_cell(&mut game, 0, i as i32 * 2);
            click_cell(&mut game, 0, i as i32 * 2);
            assert_eq!(game.turn(), i as u32 + 1);
        }
    }

    #[test]
    fn test_non_finite_click_is_noop() {
        let mut game = new_game();
        assert_eq!(game.click(Point::new(f32::NAN, 10.0)), MoveOutcome::Ignored);
        assert_eq!(game.turn(), 0);
        assert!(game.board().is_board_empty());
        assert_eq!(game.camera(), Camera::centered(W, H));
    }

    #[test]
    fn test_first_move_grows_downward_from_empty_board() {
        let mut game = new_game();
        click_cell(&mut game, 0, 0);

        assert_eq!(game.board().row_count(), 1);
        assert_eq!(game.camera().center_y, H / 2.0 + 11.0);
        assert_eq!(game.camera().center_x, W / 2.0);
    }

    #[test]
    fn test_growth_upward_shifts_rows_and_camera() {
        let mut game = new_game();
        click_cell(&mut game, 0, 0);
        let camera = game.camera();
        let center_of_target = game.mapper.cell_center(Pos::new(-3, 0), &camera, 1);

        let outcome = game.click(center_of_target);

        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                pos: Pos::new(0, 0),
                stone: Stone::Player2
            }
        );
        assert_eq!(game.board().row_count(), 4);
        assert_eq!(game.board().get(Pos::new(3, 0)), Stone::Player1);
        assert_eq!(game.camera().center_y, camera.center_y - 3.0 * 11.0);
        assert_eq!(game.camera().center_x, camera.center_x);
        // The clicked point still maps onto the new stone
        assert_eq!(game.cell_at(center_of_target), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_growth_leftward_shifts_cols_and_camera() {
        let mut game = new_game();
        click_cell(&mut game, 0, 0);
        click_cell(&mut game, 2, 1);
        let camera = game.camera();
        let point = game.mapper.cell_center(Pos::new(1, -2), &camera, 3);

        click_cell(&mut game, 1, -2);

        assert_eq!(game.board().get(Pos::new(0, 2)), Stone::Player1);
        assert_eq!(game.board().get(Pos::new(2, 3)), Stone::Player2);
        assert_eq!(game.board().get(Pos::new(1, 0)), Stone::Player1);
        assert_eq!(game.camera().center_x, camera.center_x - 2.0 * 22.0);
        assert_eq!(game.camera().center_y, camera.center_y);
        assert_eq!(game.cell_at(point), Some(Pos::new(1, 0)));
    }

    #[test]
    fn test_growth_in_both_negative_directions() {
        let mut game = new_game();
        click_cell(&mut game, 0, 0);
        let camera = game.camera();
        let point = game.mapper.cell_center(Pos::new(-2, -1), &camera, 1);

        let outcome = game.click(point);

        assert!(outcome.is_accepted());
        assert_eq!(game.board().row_count(), 3);
        assert_eq!(game.board().get(Pos::new(0, 0)), Stone::Player2);
        assert_eq!(game.board().get(Pos::new(2, 1)), Stone::Player1);
        assert_eq!(game.cell_at(point), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_positive_growth_keeps_top_rows_in_place() {
        let mut game = new_game();
        click_cell(&mut game, 0, 0);
        let top = game.cell_origin(Pos::new(0, 0));

        click_cell(&mut game, 4, 0);

        assert_eq!(game.board().row_count(), 5);
        assert_eq!(game.camera().center_y, H / 2.0 + 11.0 + 4.0 * 11.0);
        assert_eq!(game.cell_origin(Pos::new(0, 0)), top);
    }

    #[test]
    fn test_positive_column_growth_has_no_compensation() {
        let mut game = new_game();
        click_cell(&mut game, 0, 0);
        let camera = game.camera();

        click_cell(&mut game, 0, 12);

        assert_eq!(game.camera(), camera);
        assert_eq!(game.board().col_count(), 13);
    }

    #[test]
    fn test_win_ends_game_without_advancing_turn() {
        let mut game = new_game();
        for i in 0..4 {
            click_cell(&mut game, 0, i);
            click_cell(&mut game, 2, i);
        }
        let outcome = click_cell(&mut game, 0, 4);

        assert_eq!(
            outcome,
            MoveOutcome::Won {
                pos: Pos::new(0, 4),
                stone: Stone::Player1
            }
        );
        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.turn(), 8);
        assert_eq!(game.winner(), Some(Stone::Player1));
        assert_eq!(game.winning_line().map(|l| l.len()), Some(5));
    }

    #[test]
    fn test_click_after_win_restarts() {
        let mut game = new_game();
        for i in 0..4 {
            click_cell(&mut game, 0, i);
            click_cell(&mut game, 2, i);
        }
        click_cell(&mut game, 0, 4);
        game.pan(30.0, -12.0);

        let outcome = game.click(Point::new(1.0, 1.0));

        assert_eq!(outcome, MoveOutcome::Restarted);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.turn(), 0);
        assert!(game.board().is_board_empty());
        assert_eq!(game.camera(), Camera::centered(W, H));
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_pan_moves_camera_only() {
        let mut game = new_game();
        click_cell(&mut game, 0, 0);
        let board = game.board().clone();

        game.pan(15.0, -5.0);
        game.pan(f32::NAN, 1.0);

        assert_eq!(game.camera().center_x, W / 2.0 + 15.0);
        assert_eq!(game.camera().center_y, H / 2.0 + 11.0 - 5.0);
        assert_eq!(game.board(), &board);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_set_viewport_recenters_only_while_pristine() {
        let mut game = new_game();
        game.set_viewport(1000.0, 700.0);
        assert_eq!(game.camera(), Camera::centered(1000.0, 700.0));

        game.pan(1.0, 1.0);
        game.set_viewport(400.0, 300.0);
        assert_eq!(game.camera(), Camera { center_x: 501.0, center_y: 351.0 });

        game.restart();
        assert_eq!(game.camera(), Camera::centered(400.0, 300.0));
    }

    #[test]
    fn test_opening_stone_and_first_player() {
        let config = BoardConfig {
            opening_stone: true,
            first_player: Stone::Player2,
            ..BoardConfig::default()
        };
        let game = GameState::new(&config, W, H);

        assert_eq!(game.board().get(Pos::new(0, 0)), Stone::Player1);
        assert_eq!(game.board().row_count(), 1);
        assert_eq!(game.current_player(), Stone::Player2);
    }
}

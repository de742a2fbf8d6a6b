//! Camera and screen <-> cell coordinate mapping
//!
//! The mapper is stateless: every call receives the camera and the live row
//! count explicitly. Horizontal centering uses a fixed nominal column count
//! while vertical centering follows the materialized rows, so early growth to
//! the right does not shift the board sideways.

use crate::board::Pos;

/// A point in screen-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Continuous offset locating the board's visual center on screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub center_x: f32,
    pub center_y: f32,
}

impl Camera {
    /// Camera centered on a viewport of the given size
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
        }
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.center_x += dx;
        self.center_y += dy;
    }
}

/// Fixed cell size and spacing, in pixels
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellGeometry {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 20.0,
            gap: 2.0,
        }
    }
}

impl CellGeometry {
    /// Horizontal distance between neighbouring cell origins
    #[inline]
    pub fn col_stride(&self) -> f32 {
        self.width + self.gap
    }

    /// Vertical distance between neighbouring cell origins
    #[inline]
    pub fn row_stride(&self) -> f32 {
        self.height + self.gap
    }

    /// Camera shift per row of growth: vertical centering moves by half a
    /// stride for every row added
    #[inline]
    pub fn half_row_stride(&self) -> f32 {
        self.row_stride() / 2.0
    }
}

/// Converts between screen positions and logical cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    pub geometry: CellGeometry,
    /// Column count used for horizontal centering, independent of the board
    pub nominal_columns: u32,
}

impl CoordinateMapper {
    pub fn new(geometry: CellGeometry, nominal_columns: u32) -> Self {
        Self {
            geometry,
            nominal_columns,
        }
    }

    /// Top-left screen position of logical cell (0, 0)
    pub fn origin(&self, camera: &Camera, row_count: usize) -> Point {
        let width = self.nominal_columns as f32 * self.geometry.col_stride();
        let height = row_count as f32 * self.geometry.row_stride();
        Point::new(camera.center_x - width / 2.0, camera.center_y - height / 2.0)
    }

    /// Cell under a screen position.
    ///
    /// The result may lie outside the board, negative coordinates included.
    /// Returns `None` for non-finite input or coordinates beyond `i32`.
    pub fn screen_to_cell(&self, point: Point, camera: &Camera, row_count: usize) -> Option<Pos> {
        if !point.is_finite() {
            return None;
        }
        let origin = self.origin(camera, row_count);
        let row = ((point.y - origin.y) / self.geometry.row_stride()).floor();
        let col = ((point.x - origin.x) / self.geometry.col_stride()).floor();

        let in_range = |v: f32| v.is_finite() && v >= i32::MIN as f32 && v <= i32::MAX as f32;
        if !in_range(row) || !in_range(col) {
            return None;
        }
        Some(Pos::new(row as i32, col as i32))
    }

    /// Top-left screen position of a cell
    pub fn cell_to_screen(&self, pos: Pos, camera: &Camera, row_count: usize) -> Point {
        let origin = self.origin(camera, row_count);
        Point::new(
            origin.x + pos.col as f32 * self.geometry.col_stride(),
            origin.y + pos.row as f32 * self.geometry.row_stride(),
        )
    }

    /// Screen position of a cell's center
    pub fn cell_center(&self, pos: Pos, camera: &Camera, row_count: usize) -> Point {
        let top_left = self.cell_to_screen(pos, camera, row_count);
        Point::new(
            top_left.x + self.geometry.width / 2.0,
            top_left.y + self.geometry.height / 2.0,
        )
    }
}

use crate::types::Cell;

/// Stone radius as a fraction of the line pitch.
pub const STONE_RADIUS_RATIO: f64 = 0.4;

/// Pixel layout of the grid for one canvas size and board dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub board_size: usize,
    /// Distance between adjacent grid lines.
    pub cell_size: f64,
    pub stone_radius: f64,
    /// Pixel position of intersection (0, 0).
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Geometry {
    /// Lays out a `board_size` x `board_size` grid inside the padded canvas.
    ///
    /// The grid stays square: the shorter available side sets the pitch and
    /// the grid is centered along the longer one. Returns `None` when the
    /// board has fewer than two lines or the padding leaves no drawing area.
    pub fn compute(
        canvas_width: f64,
        canvas_height: f64,
        padding: f64,
        board_size: usize,
    ) -> Option<Self> {
        if board_size <= 1 {
            return None;
        }

        let available_width = canvas_width - 2.0 * padding;
        let available_height = canvas_height - 2.0 * padding;
        let drawing_area = available_width.min(available_height);
        if drawing_area <= 0.0 {
            return None;
        }

        let cell_size = drawing_area / (board_size - 1) as f64;
        Some(Self {
            board_size,
            cell_size,
            stone_radius: cell_size * STONE_RADIUS_RATIO,
            origin_x: padding + (available_width - drawing_area) / 2.0,
            origin_y: padding + (available_height - drawing_area) / 2.0,
        })
    }

    /// Side length of the grid bounding box.
    pub fn grid_extent(&self) -> f64 {
        (self.board_size - 1) as f64 * self.cell_size
    }

    /// Pixel center of the intersection at `(row, col)`.
    pub fn cell_to_pixel(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.origin_x + col as f64 * self.cell_size,
            self.origin_y + row as f64 * self.cell_size,
        )
    }

    /// Nearest intersection to a pixel. Not bounds-checked.
    pub fn pixel_to_cell(&self, x: f64, y: f64) -> Cell {
        Cell {
            row: ((y - self.origin_y) / self.cell_size).round() as i64,
            col: ((x - self.origin_x) / self.cell_size).round() as i64,
        }
    }
}

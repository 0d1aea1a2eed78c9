use crate::geometry::Geometry;
use crate::surface::DrawSurface;
use crate::types::{Cell, GameState, Marker, Position};

pub const DEFAULT_CANVAS_SIZE: f64 = 450.0;
pub const DEFAULT_PADDING: f64 = 20.0;
const GRID_LINE_WIDTH: f64 = 1.0;

/// Colors used to paint the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub grid: &'static str,
    pub black_stone: &'static str,
    pub white_stone: &'static str,
    pub stone_outline: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "rgb(222, 184, 135)",
            grid: "#000",
            black_stone: "#000",
            white_stone: "#FFF",
            stone_outline: "#555",
        }
    }
}

impl Palette {
    fn stone_fill(&self, marker: Marker) -> Option<&'static str> {
        match marker {
            Marker::Empty => None,
            Marker::Black => Some(self.black_stone),
            Marker::White => Some(self.white_stone),
        }
    }
}

/// Paints game states and maps pointer positions back onto the grid.
///
/// The layout of the last drawn board is cached so clicks are interpreted
/// against what the player actually sees.
#[derive(Debug, Clone)]
pub struct BoardRenderer {
    canvas_width: f64,
    canvas_height: f64,
    padding: f64,
    palette: Palette,
    layout: Option<Geometry>,
}

impl BoardRenderer {
    pub fn new(canvas_width: f64, canvas_height: f64, padding: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            padding,
            palette: Palette::default(),
            layout: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    /// Layout of the most recently drawn board, if any.
    pub fn layout(&self) -> Option<&Geometry> {
        self.layout.as_ref()
    }

    /// Changes the canvas dimensions. The cached layout is dropped until the
    /// next draw.
    pub fn resize(&mut self, canvas_width: f64, canvas_height: f64) {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
        self.layout = None;
    }

    pub fn draw<S: DrawSurface + ?Sized>(&mut self, surface: &S, state: &GameState) {
        surface.clear(0.0, 0.0, self.canvas_width, self.canvas_height);

        self.layout = Geometry::compute(
            self.canvas_width,
            self.canvas_height,
            self.padding,
            state.board_size,
        );
        let Some(geometry) = self.layout else {
            log::debug!(
                "nothing to draw for board size {} on {}x{} canvas",
                state.board_size,
                self.canvas_width,
                self.canvas_height
            );
            return;
        };

        let extent = geometry.grid_extent();
        surface.fill_rect(
            geometry.origin_x,
            geometry.origin_y,
            extent,
            extent,
            self.palette.background,
        );

        for i in 0..geometry.board_size {
            let offset = i as f64 * geometry.cell_size;
            surface.line(
                (geometry.origin_x, geometry.origin_y + offset),
                (geometry.origin_x + extent, geometry.origin_y + offset),
                self.palette.grid,
                GRID_LINE_WIDTH,
            );
            surface.line(
                (geometry.origin_x + offset, geometry.origin_y),
                (geometry.origin_x + offset, geometry.origin_y + extent),
                self.palette.grid,
                GRID_LINE_WIDTH,
            );
        }

        for row in 0..geometry.board_size {
            for col in 0..geometry.board_size {
                let marker = state.marker_at(Position { row, col });
                if let Some(fill) = self.palette.stone_fill(marker) {
                    surface.stone(
                        geometry.cell_to_pixel(row, col),
                        geometry.stone_radius,
                        fill,
                        self.palette.stone_outline,
                    );
                }
            }
        }
    }

    /// Raw grid index under a pixel, or `None` before the first draw.
    pub fn pixel_to_cell(&self, x: f64, y: f64) -> Option<Cell> {
        self.layout.map(|geometry| geometry.pixel_to_cell(x, y))
    }

    /// On-board position under a pixel. Off-board pixels yield `None`.
    pub fn locate(&self, x: f64, y: f64) -> Option<Position> {
        let geometry = self.layout?;
        geometry
            .pixel_to_cell(x, y)
            .to_position(geometry.board_size)
    }
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE, DEFAULT_PADDING)
    }
}

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Occupancy of one board intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    #[serde(rename = " ", alias = "")]
    Empty,
    #[serde(rename = "X")]
    Black,
    #[serde(rename = "O")]
    White,
}

/// Side to move. The backend sends either the marker or the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "X", alias = "Black")]
    Black,
    #[serde(rename = "O", alias = "White")]
    White,
}

impl Player {
    pub fn display_name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

/// Authoritative snapshot returned by every game endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Vec<Vec<Marker>>,
    pub board_size: usize,
    pub current_player: Player,
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Contract:
    /// - Only present on `/api/make_move` replies.
    /// - `Some(false)` means the backend refused the move but still answered 2xx.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_success: Option<bool>,
}

impl GameState {
    /// Checks that `board` is a `board_size` x `board_size` grid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.board.len() != self.board_size {
            return Err(ClientError::Malformed(format!(
                "expected {} rows, got {}",
                self.board_size,
                self.board.len()
            )));
        }
        if let Some((row, cells)) = self
            .board
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != self.board_size)
        {
            return Err(ClientError::Malformed(format!(
                "row {row} has {} cells, expected {}",
                cells.len(),
                self.board_size
            )));
        }
        Ok(())
    }

    /// Backend message, treating an empty string as absent.
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }

    pub fn marker_at(&self, pos: Position) -> Marker {
        self.board
            .get(pos.row)
            .and_then(|cells| cells.get(pos.col))
            .copied()
            .unwrap_or(Marker::Empty)
    }
}

/// Raw grid index produced by the inverse pixel mapping. May lie off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    /// Returns the on-board position, or `None` when outside `[0, board_size)`.
    pub fn to_position(self, board_size: usize) -> Option<Position> {
        let in_range = |v: i64| v >= 0 && (v as u64) < board_size as u64;
        if in_range(self.row) && in_range(self.col) {
            Some(Position {
                row: self.row as usize,
                col: self.col as usize,
            })
        } else {
            None
        }
    }
}

/// A validated board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Body of `POST /api/make_move`.
pub type MoveRequest = Position;

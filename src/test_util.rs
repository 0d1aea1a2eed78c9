//! Recording doubles for the drawing surface, status line and backend.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::GameApi;
use crate::error::ClientError;
use crate::status::StatusDisplay;
use crate::surface::DrawSurface;
use crate::types::{GameState, Marker, Player};

/// Builds a running game from rows of `' '`, `'X'` and `'O'`.
pub fn state_from_rows(rows: &[&str]) -> GameState {
    let board = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    'X' => Marker::Black,
                    'O' => Marker::White,
                    _ => Marker::Empty,
                })
                .collect()
        })
        .collect();
    GameState {
        board,
        board_size: rows.len(),
        current_player: Player::Black,
        game_over: false,
        message: None,
        move_success: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(f64, f64, f64, f64),
    FillRect {
        rect: (f64, f64, f64, f64),
        color: String,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: String,
        width: f64,
    },
    Stone {
        center: (f64, f64),
        radius: f64,
        fill: String,
        outline: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: RefCell<Vec<DrawOp>>,
}

impl RecordingSurface {
    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    pub fn take_ops(&self) -> Vec<DrawOp> {
        self.ops.take()
    }

    pub fn stones(&self) -> Vec<DrawOp> {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, DrawOp::Stone { .. }))
            .cloned()
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.borrow_mut().push(DrawOp::Clear(x, y, width, height));
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ops.borrow_mut().push(DrawOp::FillRect {
            rect: (x, y, width, height),
            color: color.to_string(),
        });
    }

    fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.ops.borrow_mut().push(DrawOp::Line {
            from,
            to,
            color: color.to_string(),
            width,
        });
    }

    fn stone(&self, center: (f64, f64), radius: f64, fill: &str, outline: &str) {
        self.ops.borrow_mut().push(DrawOp::Stone {
            center,
            radius,
            fill: fill.to_string(),
            outline: outline.to_string(),
        });
    }
}

#[derive(Debug, Default)]
pub struct RecordingStatus {
    text: RefCell<String>,
}

impl RecordingStatus {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl StatusDisplay for RecordingStatus {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchState,
    MakeMove { row: usize, col: usize },
    NewGame,
}

type Reply = Result<GameState, ClientError>;

/// Backend that answers from per-endpoint queues and logs every call.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    fetches: RefCell<VecDeque<Reply>>,
    moves: RefCell<VecDeque<Reply>>,
    new_games: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<ApiCall>>,
}

impl ScriptedApi {
    pub fn push_fetch(&self, reply: Reply) {
        self.fetches.borrow_mut().push_back(reply);
    }

    pub fn push_move(&self, reply: Reply) {
        self.moves.borrow_mut().push_back(reply);
    }

    pub fn push_new_game(&self, reply: Reply) {
        self.new_games.borrow_mut().push_back(reply);
    }

    pub fn take_calls(&self) -> Vec<ApiCall> {
        self.calls.take()
    }

    fn answer(&self, call: ApiCall, queue: &RefCell<VecDeque<Reply>>) -> Reply {
        self.calls.borrow_mut().push(call.clone());
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {call:?}"))
    }
}

impl GameApi for ScriptedApi {
    async fn fetch_state(&self) -> Result<GameState, ClientError> {
        self.answer(ApiCall::FetchState, &self.fetches)
    }

    async fn make_move(&self, row: usize, col: usize) -> Result<GameState, ClientError> {
        self.answer(ApiCall::MakeMove { row, col }, &self.moves)
    }

    async fn new_game(&self) -> Result<GameState, ClientError> {
        self.answer(ApiCall::NewGame, &self.new_games)
    }
}

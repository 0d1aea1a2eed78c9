use std::cell::RefCell;

use crate::api::GameApi;
use crate::error::ClientError;
use crate::renderer::BoardRenderer;
use crate::status::{self, StatusDisplay};
use crate::surface::DrawSurface;
use crate::types::GameState;

/// Mirrors the backend game on a drawing surface and status line.
///
/// Handlers may interleave at network awaits, so view state is only borrowed
/// between awaits, never across them.
pub struct GameClient<A, S, D> {
    api: A,
    surface: S,
    status: D,
    renderer: RefCell<BoardRenderer>,
    snapshot: RefCell<Option<GameState>>,
}

impl<A: GameApi, S: DrawSurface, D: StatusDisplay> GameClient<A, S, D> {
    pub fn new(api: A, renderer: BoardRenderer, surface: S, status: D) -> Self {
        Self {
            api,
            surface,
            status,
            renderer: RefCell::new(renderer),
            snapshot: RefCell::new(None),
        }
    }

    /// Last state drawn on the surface.
    pub fn snapshot(&self) -> Option<GameState> {
        self.snapshot.borrow().clone()
    }

    pub fn renderer(&self) -> BoardRenderer {
        self.renderer.borrow().clone()
    }

    /// Fetches the current game and draws it.
    pub async fn load(&self) {
        match self.api.fetch_state().await {
            Ok(state) => self.show(state),
            Err(err) => self.report("failed to fetch game state", &err, status::LOAD_FAILED),
        }
    }

    /// Handles a pointer press at canvas pixel `(x, y)`.
    pub async fn click(&self, x: f64, y: f64) {
        let (cell, pos) = {
            let renderer = self.renderer.borrow();
            let Some(cell) = renderer.pixel_to_cell(x, y) else {
                log::error!("board layout not ready, ignoring click at ({x}, {y})");
                return;
            };
            (cell, renderer.locate(x, y))
        };
        let Some(pos) = pos else {
            log::debug!("click at ({x}, {y}) maps to off-board cell {cell:?}");
            return;
        };

        match self.api.fetch_state().await {
            Ok(current) if current.game_over => {
                log::info!("game is over, ignoring click on {pos:?}");
                return;
            }
            Ok(_) => {}
            Err(err) => {
                self.report("failed to fetch game state", &err, status::LOAD_FAILED);
                return;
            }
        }

        match self.api.make_move(pos.row, pos.col).await {
            Ok(state) if state.move_success == Some(false) => {
                log::warn!("move {pos:?} rejected: {:?}", state.message);
                let text = state.message_text().unwrap_or(status::MOVE_FAILED);
                self.status.set_text(text);
            }
            Ok(state) => self.show(state),
            Err(err) => {
                let text = err.backend_message().unwrap_or(status::MOVE_FAILED).to_string();
                self.report("failed to make move", &err, &text);
            }
        }
    }

    /// Asks the backend for a fresh game and draws it.
    pub async fn new_game(&self) {
        match self.api.new_game().await {
            Ok(state) => self.show(state),
            Err(err) => self.report("failed to start new game", &err, status::NEW_GAME_FAILED),
        }
    }

    /// Adapts to a new canvas size and redraws the last snapshot.
    pub fn resize(&self, width: f64, height: f64) {
        let mut renderer = self.renderer.borrow_mut();
        renderer.resize(width, height);
        if let Some(state) = self.snapshot.borrow().as_ref() {
            renderer.draw(&self.surface, state);
        }
    }

    /// Draws `state` and mirrors it in the status line.
    pub fn show(&self, state: GameState) {
        self.renderer.borrow_mut().draw(&self.surface, &state);
        self.status.set_text(&status::status_text(&state));
        *self.snapshot.borrow_mut() = Some(state);
    }

    fn report(&self, context: &str, err: &ClientError, text: &str) {
        log::error!("{context}: {err}");
        self.status.set_text(text);
    }
}

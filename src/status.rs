use web_sys::Element;

use crate::types::GameState;

pub const LOAD_FAILED: &str = "Error loading game state.";
pub const MOVE_FAILED: &str = "Failed to make move.";
pub const NEW_GAME_FAILED: &str = "Failed to start new game.";
pub const GAME_OVER: &str = "Game Over.";

/// Where the one-line game status is shown.
pub trait StatusDisplay {
    fn set_text(&self, text: &str);
}

impl StatusDisplay for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Status line for a backend snapshot.
pub fn status_text(state: &GameState) -> String {
    if state.game_over {
        state.message_text().unwrap_or(GAME_OVER).to_string()
    } else {
        format!("Player {}'s turn", state.current_player.display_name())
    }
}

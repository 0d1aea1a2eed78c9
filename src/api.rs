use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};
use web_time::Instant;

use crate::error::ClientError;
use crate::types::{GameState, MoveRequest};

pub const GAME_STATE_PATH: &str = "/api/game_state";
pub const MAKE_MOVE_PATH: &str = "/api/make_move";
pub const NEW_GAME_PATH: &str = "/api/new_game";

/// The backend game service. Each call is a single attempt.
#[allow(async_fn_in_trait)]
pub trait GameApi {
    async fn fetch_state(&self) -> Result<GameState, ClientError>;
    async fn make_move(&self, row: usize, col: usize) -> Result<GameState, ClientError>;
    async fn new_game(&self) -> Result<GameState, ClientError>;
}

/// Body the backend may attach to a non-2xx reply.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Turns an HTTP status and body into a validated snapshot or an error.
pub fn decode_response(status: u16, body: &str) -> Result<GameState, ClientError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .message;
        return Err(ClientError::Status { status, message });
    }

    let state: GameState = serde_json::from_str(body)?;
    state.validate()?;
    Ok(state)
}

/// `GameApi` over the browser `fetch` API.
#[derive(Debug, Clone, Default)]
pub struct HttpGameApi {
    base_url: String,
}

impl HttpGameApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<GameState, ClientError> {
        let window = web_sys::window().ok_or_else(|| ClientError::Dom("no window".to_string()))?;
        let url = self.url(path);

        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = &body {
            init.set_body(&JsValue::from_str(body));
        }
        let request = Request::new_with_str_and_init(&url, &init)?;
        if method == "POST" {
            request.headers().set("Content-Type", "application/json")?;
        }

        let started = Instant::now();
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        let text = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();
        log::debug!(
            "{method} {url} -> {} in {:?}",
            response.status(),
            started.elapsed()
        );

        decode_response(response.status(), &text)
    }
}

impl GameApi for HttpGameApi {
    async fn fetch_state(&self) -> Result<GameState, ClientError> {
        self.send("GET", GAME_STATE_PATH, None).await
    }

    async fn make_move(&self, row: usize, col: usize) -> Result<GameState, ClientError> {
        let body = serde_json::to_string(&MoveRequest { row, col })?;
        self.send("POST", MAKE_MOVE_PATH, Some(body)).await
    }

    async fn new_game(&self) -> Result<GameState, ClientError> {
        self.send("POST", NEW_GAME_PATH, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Marker, Player};

    const OK_BODY: &str = r#"{
        "board": [["X", " "], [" ", " "]],
        "boardSize": 2,
        "currentPlayer": "White",
        "gameOver": false,
        "message": "Move successful.",
        "moveSuccess": true
    }"#;

    #[test]
    fn success_body_decodes_to_state() {
        let state = decode_response(200, OK_BODY).expect("2xx must decode");

        assert_eq!(state.board[0][0], Marker::Black);
        assert_eq!(state.current_player, Player::White);
        assert_eq!(state.message.as_deref(), Some("Move successful."));
        assert_eq!(state.move_success, Some(true));
    }

    #[test]
    fn rejected_move_keeps_backend_message() {
        let err = decode_response(400, r#"{"message":"Cell already taken"}"#).unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 400, .. }));
        assert_eq!(err.backend_message(), Some("Cell already taken"));
    }

    #[test]
    fn empty_error_message_is_not_a_backend_message() {
        let err = decode_response(400, r#"{"message":""}"#).unwrap_err();

        assert_eq!(err.backend_message(), None);
    }

    #[test]
    fn error_without_json_body_has_no_message() {
        let err = decode_response(500, "Internal Server Error").unwrap_err();

        assert!(matches!(
            err,
            ClientError::Status {
                status: 500,
                message: None
            }
        ));
    }

    #[test]
    fn validation_error_detail_is_not_a_message() {
        let err = decode_response(422, r#"{"detail":[{"msg":"field required"}]}"#).unwrap_err();

        assert_eq!(err.backend_message(), None);
    }

    #[test]
    fn garbage_success_body_is_decode_error() {
        let err = decode_response(200, "<html>").unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn board_size_mismatch_is_malformed() {
        let body = OK_BODY.replace(r#""boardSize": 2"#, r#""boardSize": 15"#);

        let err = decode_response(200, &body).unwrap_err();

        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        assert_eq!(
            HttpGameApi::new("http://localhost:8000/").url(GAME_STATE_PATH),
            "http://localhost:8000/api/game_state"
        );
        assert_eq!(HttpGameApi::default().url(NEW_GAME_PATH), "/api/new_game");
    }
}

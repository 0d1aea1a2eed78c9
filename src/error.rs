use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("{}", status_line(.status, .message))]
    Status { status: u16, message: Option<String> },
    #[error("invalid game state JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed game state: {0}")]
    Malformed(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("invalid client config: {0}")]
    Config(String),
    #[error("client already started")]
    AlreadyStarted,
}

impl ClientError {
    /// Human-readable text supplied by the backend, if the failure carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

fn status_line(status: &u16, message: &Option<String>) -> String {
    match message.as_deref() {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("HTTP error! status: {status}"),
    }
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Transport(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

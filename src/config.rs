use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ClientError;
use crate::renderer::{BoardRenderer, DEFAULT_CANVAS_SIZE, DEFAULT_PADDING};

/// Page wiring and layout options. Every field is optional on the JS side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub padding: f64,
    /// Prefix for the `/api/...` paths; empty means same origin.
    pub api_base: String,
    pub canvas_id: String,
    pub status_id: String,
    pub new_game_button_id: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            padding: DEFAULT_PADDING,
            api_base: String::new(),
            canvas_id: "gomoku-board".to_string(),
            status_id: "game-status".to_string(),
            new_game_button_id: "new-game-button".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads a config object handed over by the page. `undefined` and `null`
    /// yield the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, ClientError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|err| ClientError::Config(err.to_string()))?;
        config.validated()
    }

    /// Rejects unusable sizes and rounds the canvas to whole pixels, so the
    /// canvas element and the renderer agree on its dimensions.
    pub fn validated(mut self) -> Result<Self, ClientError> {
        for (name, value) in [
            ("canvasWidth", self.canvas_width),
            ("canvasHeight", self.canvas_height),
        ] {
            if !value.is_finite() || value.round() < 1.0 || value.round() > f64::from(u32::MAX) {
                return Err(ClientError::Config(format!(
                    "{name} must be a positive pixel size, got {value}"
                )));
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ClientError::Config(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            )));
        }
        self.canvas_width = self.canvas_width.round();
        self.canvas_height = self.canvas_height.round();
        Ok(self)
    }

    /// Canvas dimensions in whole pixels.
    pub fn canvas_pixels(&self) -> (u32, u32) {
        (self.canvas_width as u32, self.canvas_height as u32)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn renderer(&self) -> BoardRenderer {
        BoardRenderer::new(self.canvas_width, self.canvas_height, self.padding)
    }
}

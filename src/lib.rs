use wasm_bindgen::prelude::*;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod status;
pub mod surface;
pub mod types;
pub mod web;

#[cfg(test)]
mod test_util;

pub use client::GameClient;
pub use error::ClientError;
pub use renderer::BoardRenderer;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

use std::rc::Rc;

use once_cell::unsync::OnceCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent};

use crate::api::HttpGameApi;
use crate::client::GameClient;
use crate::config::ClientConfig;
use crate::error::ClientError;

type BrowserClient = GameClient<HttpGameApi, CanvasRenderingContext2d, Element>;

struct App {
    client: Rc<BrowserClient>,
    canvas: HtmlCanvasElement,
}

thread_local! {
    static APP: OnceCell<App> = const { OnceCell::new() };
}

/// Starts the client with the default page wiring.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with_config(JsValue::UNDEFINED)
}

/// Starts the client. `config` is an optional object of `ClientConfig` fields.
#[wasm_bindgen]
pub fn start_with_config(config: JsValue) -> Result<(), JsValue> {
    if APP.with(|app| app.get().is_some()) {
        return Err(ClientError::AlreadyStarted.into());
    }

    console_error_panic_hook::set_once();
    let config = ClientConfig::from_js(config)?;
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));

    let app = mount(&config)?;
    let client = app.client.clone();
    APP.with(|cell| cell.set(app))
        .map_err(|_| ClientError::AlreadyStarted)?;

    log::info!("gomoku client started, api base {:?}", config.api_base);
    wasm_bindgen_futures::spawn_local(async move { client.load().await });
    Ok(())
}

/// Resizes the board canvas and redraws the current game.
#[wasm_bindgen]
pub fn resize_board(width: u32, height: u32) -> Result<(), JsValue> {
    APP.with(|cell| -> Result<(), ClientError> {
        let app = cell
            .get()
            .ok_or_else(|| ClientError::Dom("client not started".to_string()))?;
        app.canvas.set_width(width);
        app.canvas.set_height(height);
        app.client.resize(f64::from(width), f64::from(height));
        Ok(())
    })?;
    Ok(())
}

fn mount(config: &ClientConfig) -> Result<App, ClientError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ClientError::Dom("no document".to_string()))?;

    let canvas: HtmlCanvasElement = element(&document, &config.canvas_id)?
        .dyn_into()
        .map_err(|_| ClientError::Dom(format!("#{} is not a canvas", config.canvas_id)))?;
    let (width, height) = config.canvas_pixels();
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| ClientError::Dom("2d context unavailable".to_string()))?
        .dyn_into()
        .map_err(|_| ClientError::Dom("unexpected 2d context type".to_string()))?;
    let status = element(&document, &config.status_id)?;
    let button = element(&document, &config.new_game_button_id)?;

    let client = Rc::new(GameClient::new(
        HttpGameApi::new(config.api_base.clone()),
        config.renderer(),
        context,
        status,
    ));

    {
        let client = client.clone();
        let target = canvas.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move { client.click(x, y).await });
        });
        canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    {
        let client = client.clone();
        let on_new_game = Closure::<dyn FnMut()>::new(move || {
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move { client.new_game().await });
        });
        button.add_event_listener_with_callback("click", on_new_game.as_ref().unchecked_ref())?;
        on_new_game.forget();
    }

    Ok(App { client, canvas })
}

fn element(document: &Document, id: &str) -> Result<Element, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::Dom(format!("missing #{id}")))
}

//! Browser side of the medical chat page.
//!
//! The transcript state, reply handling and HTML rendering are target
//! independent; only `dom`, `chat_ui` and the entry points below need a
//! browser.

pub mod api;
pub mod markdown;
pub mod session;
pub mod utils;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod chat_ui;
#[cfg(target_arch = "wasm32")]
mod dom;

pub use api::{interpret_reply, CHAT_ENDPOINT};
pub use session::{ChatSession, ReplyOutcome, CLIENT_ERROR_MESSAGE};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Set panic hook and logging
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("MedChat WASM initialized");
}

/// Mount the chat UI on the current page
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init_chat() -> Result<(), JsValue> {
    log::info!("Initializing chat page");
    chat_ui::ChatApp::new()?.start()
}

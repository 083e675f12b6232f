use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::api;
use crate::dom;
use crate::session::ChatSession;
use crate::view;

const MESSAGES_CONTAINER: &str = "messagesContainer";
const CHAT_FORM: &str = "chatForm";
const MESSAGE_INPUT: &str = "messageInput";
const SEND_BUTTON: &str = "sendButton";

#[derive(Clone)]
pub struct ChatApp {
    document: Document,
    session: Rc<RefCell<ChatSession>>,
}

impl ChatApp {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

        Ok(Self {
            document,
            session: Rc::new(RefCell::new(ChatSession::new())),
        })
    }

    pub fn start(self) -> Result<(), JsValue> {
        self.render()?;
        self.setup_chat_form()?;
        log::info!("Chat UI ready");
        Ok(())
    }

    fn setup_chat_form(&self) -> Result<(), JsValue> {
        let form = dom::get_element_by_id(&self.document, CHAT_FORM)?;
        let app = self.clone();

        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = app.handle_submit().await {
                    log::error!("Failed to handle submit: {:?}", e);
                }
            });
        }) as Box<dyn FnMut(_)>);

        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    async fn handle_submit(&self) -> Result<(), JsValue> {
        let input = dom::get_input_by_id(&self.document, MESSAGE_INPUT)?;

        let prompt = {
            let mut session = self.session.borrow_mut();
            session.set_input(input.value());
            session.submit()
        };
        let Some(prompt) = prompt else {
            return Ok(());
        };

        input.set_value("");
        self.render()?;

        let outcome = api::send_prompt(&prompt).await;
        self.session.borrow_mut().complete(outcome);

        self.render()?;
        let _ = input.focus();
        Ok(())
    }

    /// Redraw the transcript and sync the form's disabled state
    fn render(&self) -> Result<(), JsValue> {
        let container = dom::get_element_by_id(&self.document, MESSAGES_CONTAINER)?;
        let (html, loading) = {
            let session = self.session.borrow();
            (view::transcript_html(&session), session.is_loading())
        };

        container.set_inner_html(&html);
        dom::get_input_by_id(&self.document, MESSAGE_INPUT)?.set_disabled(loading);
        dom::get_button_by_id(&self.document, SEND_BUTTON)?.set_disabled(loading);
        dom::scroll_to_bottom(&container);

        Ok(())
    }
}

//! HTML for the transcript area.
//!
//! Everything here is plain string building so it can be exercised off the
//! browser; `chat_ui` writes the result into `#messagesContainer`.

use medchat_models::{Message, Role};

use crate::markdown;
use crate::session::ChatSession;
use crate::utils;

pub const EMPTY_STATE_TEXT: &str = "No messages yet. Start a conversation!";

const BOT_ICON: &str = "&#129302;";
const USER_ICON: &str = "&#128100;";

pub fn empty_state_html() -> String {
    format!(
        r#"<div class="empty-state"><span class="bot-icon large" aria-hidden="true">{}</span><p>{}</p></div>"#,
        BOT_ICON, EMPTY_STATE_TEXT
    )
}

fn avatar_html(role: Role) -> String {
    let icon = match role {
        Role::Assistant => BOT_ICON,
        Role::User => USER_ICON,
    };
    format!(
        r#"<div class="avatar {}" aria-hidden="true">{}</div>"#,
        role.as_str(),
        icon
    )
}

/// One transcript row. User rows put the avatar on the right.
pub fn message_html(message: &Message) -> String {
    let markdown_class = match message.role {
        Role::Assistant => " markdown",
        Role::User => "",
    };
    let body = format!(
        r#"<div class="message-body"><div class="bubble{}">{}</div><span class="timestamp">{}</span></div>"#,
        markdown_class,
        markdown::render_message_content(message),
        utils::format_time(&message.timestamp)
    );
    let avatar = avatar_html(message.role);

    let inner = match message.role {
        Role::Assistant => format!("{}{}", avatar, body),
        Role::User => format!("{}{}", body, avatar),
    };
    format!(
        r#"<div class="message-row {}">{}</div>"#,
        message.role.as_str(),
        inner
    )
}

pub fn typing_indicator_html() -> String {
    format!(
        r#"<div class="message-row assistant">{}<div class="message-body"><div class="bubble"><div class="typing" aria-label="Assistant is typing"><span></span><span></span><span></span></div></div></div></div>"#,
        avatar_html(Role::Assistant)
    )
}

/// Full contents of the transcript container for the current state
pub fn transcript_html(session: &ChatSession) -> String {
    if session.messages().is_empty() && !session.is_loading() {
        return empty_state_html();
    }

    let mut html: String = session.messages().iter().map(message_html).collect();
    if session.is_loading() {
        html.push_str(&typing_indicator_html());
    }
    html
}

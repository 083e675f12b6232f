use medchat_models::{Message, Role};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Link and image targets the page is willing to emit
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render markdown to HTML.
///
/// Raw HTML in the source is emitted as escaped text, and link or image
/// targets with any other scheme than http, https or mailto become `#`.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Relative targets and the allowed schemes pass; browsers ignore
/// whitespace and control characters inside a scheme, so those are dropped
/// before looking for one.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    match cleaned.find([':', '/', '?', '#']) {
        Some(end) if cleaned[end..].starts_with(':') => {
            let scheme = cleaned[..end].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// Render a message body: markdown for the assistant, plain text for the user
pub fn render_message_content(message: &Message) -> String {
    match message.role {
        Role::Assistant => render_markdown(&message.content),
        Role::User => crate::utils::escape_html(&message.content).replace('\n', "<br>"),
    }
}

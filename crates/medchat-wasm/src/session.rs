use medchat_models::Message;

/// Shown as the assistant reply when the proxy call fails in any way
pub const CLIENT_ERROR_MESSAGE: &str = "Sorry, there was an error processing your request.";

/// Result of one round trip to `/api/chat`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Reply(String),
    Failed,
}

/// In-memory state of one chat page.
///
/// The transcript is append-only. At most one request is in flight: while
/// `loading` is set, `submit` refuses new prompts.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    loading: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Move the input into the transcript as a user message.
    ///
    /// Returns the prompt to send, or `None` when the input is blank or a
    /// request is already outstanding. A refused submit leaves the input as is.
    pub fn submit(&mut self) -> Option<String> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }

        let prompt = std::mem::take(&mut self.input);
        self.messages.push(Message::user(prompt.clone()));
        self.loading = true;
        Some(prompt)
    }

    /// Record the reply for the outstanding request.
    ///
    /// Returns false (and changes nothing) when no request is in flight.
    pub fn complete(&mut self, outcome: ReplyOutcome) -> bool {
        if !self.loading {
            return false;
        }

        let content = match outcome {
            ReplyOutcome::Reply(text) if !text.trim().is_empty() => text,
            _ => CLIENT_ERROR_MESSAGE.to_string(),
        };
        self.messages.push(Message::assistant(content));
        self.loading = false;
        true
    }
}

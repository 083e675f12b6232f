use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/chat`.
///
/// Untagged, so the wire form is either `{ "message": .. }` or
/// `{ "error": .., "details": .. }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Success {
        message: String,
    },
    Failure {
        error: String,
        #[serde(default)]
        details: serde_json::Value,
    },
}

impl ChatResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn failure(error: impl Into<String>, details: impl Into<serde_json::Value>) -> Self {
        Self::Failure {
            error: error.into(),
            details: details.into(),
        }
    }

    /// The reply text, if this is a success body
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message } => Some(message),
            Self::Failure { .. } => None,
        }
    }
}

/// Token usage information from API response
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

/// Upstream chat-completion response
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Choice structure within completion response
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub index: Option<i32>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    /// `None` when the upstream sent `null` or left the field out
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if there is a choice and it carries content
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

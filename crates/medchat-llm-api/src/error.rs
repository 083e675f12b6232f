use thiserror::Error;

/// Ways a completion call can fail
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// True when the failure happened at or beyond the upstream API,
    /// as opposed to local misconfiguration.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Self::MissingApiKey)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }

    /// Short human-readable label for response bodies and logs
    pub fn summary(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "Completion service is not configured",
            Self::Transport(_) => "Failed to reach completion service",
            Self::UpstreamStatus { .. } => "Completion service returned an error",
            Self::MalformedResponse(_) => "Completion service returned an unexpected response",
        }
    }
}

use std::fmt;
use std::time::Duration;

use crate::prompt::PERSONA_INSTRUCTION;

/// Default OpenRouter chat-completions URL
pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Free-tier model used when none is configured
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.2-3b-instruct:free";

/// Environment variable holding the OpenRouter API key
pub const API_KEY_ENV: &str = "OPEN_ROUTER_API_KEY";

/// Settings for the outbound completion call.
///
/// Built once at startup and handed to the client; nothing reads the process
/// environment after that.
#[derive(Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub persona: String,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_url: OPENROUTER_API_URL.to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            persona: PERSONA_INSTRUCTION.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = normalize_api_url(url);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("model", &self.model)
            .field("persona_len", &self.persona.len())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Show only the first few characters of a key
pub fn mask_api_key(key: &str) -> String {
    format!("{}***", key.chars().take(6).collect::<String>())
}

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    if url.contains("/completions") {
        return url.to_string();
    }

    let base = url.trim_end_matches('/');
    if base.ends_with("/v1") || base.ends_with("/api/v1") {
        format!("{}/chat/completions", base)
    } else {
        format!("{}/v1/chat/completions", base)
    }
}

/// Value for the Authorization header.
///
/// Keys that already carry a `Bearer ` prefix are sent unchanged.
pub fn authorization_value(key: &str) -> String {
    let key = key.trim();
    let has_scheme = key
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("bearer "));
    if has_scheme {
        key.to_string()
    } else {
        format!("Bearer {}", key)
    }
}

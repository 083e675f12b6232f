//! # medchat-llm-api
//!
//! Outbound side of the medical chat proxy: one call to a hosted
//! OpenAI-compatible chat-completion API (OpenRouter by default).
//!
//! The persona instruction is joined to the user's prompt and sent as a
//! single user-role message. The first choice's text comes back, or a
//! typed [`CompletionError`] saying where the call failed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use medchat_llm_api::{ApiConfig, CompletionClient, OpenRouterClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ApiConfig::new(Some("sk-or-v1-example".to_string()));
//!     let client = OpenRouterClient::new(config)?;
//!     let reply = client.complete("What helps a headache?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;


// Re-export commonly used types
pub use client::{openrouter::OpenRouterClient, CompletionClient};
pub use config::{
    authorization_value, mask_api_key, normalize_api_url, ApiConfig, API_KEY_ENV, DEFAULT_MODEL,
    OPENROUTER_API_URL,
};
pub use error::CompletionError;
pub use prompt::{compose_prompt, APOLOGY_MESSAGE, PERSONA_INSTRUCTION};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

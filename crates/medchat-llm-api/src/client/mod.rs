use async_trait::async_trait;

use crate::error::CompletionError;

pub mod openrouter;

/// Completion client trait - the seam between the proxy route and the
/// hosted model API
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one user prompt (persona is added by the client) and return the
    /// first choice's text
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Model identifier requests are sent with
    fn model(&self) -> &str;
}

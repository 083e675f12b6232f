use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};

use medchat_models::{CompletionMessage, CompletionRequest, CompletionResponse};

use crate::client::CompletionClient;
use crate::config::{authorization_value, mask_api_key, ApiConfig};
use crate::error::CompletionError;
use crate::prompt::compose_prompt;
use crate::safe_truncate;

/// Longest upstream error body kept in an error value
const MAX_ERROR_BODY_CHARS: usize = 500;

/// OpenRouter (OpenAI-compatible) completion client
pub struct OpenRouterClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new(config: ApiConfig) -> Result<Self, CompletionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build the upstream request body for a user prompt
    pub fn build_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![CompletionMessage::user(compose_prompt(
                &self.config.persona,
                prompt,
            ))],
        }
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let request = self.build_request(prompt);
        debug!(
            url = %self.config.api_url,
            model = %request.model,
            key = %mask_api_key(api_key),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header(AUTHORIZATION, authorization_value(api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "completion request rejected upstream");
            return Err(CompletionError::UpstreamStatus {
                status: status.as_u16(),
                body: safe_truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::malformed(format!("invalid JSON body: {}", e)))?;

        if let Some(usage) = &parsed.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "completion usage"
            );
        }

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::malformed("response contained no choices"))?;

        choice
            .message
            .content
            .ok_or_else(|| CompletionError::malformed("choice has no content"))
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

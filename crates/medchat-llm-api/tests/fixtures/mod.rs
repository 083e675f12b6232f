use std::time::Duration;

use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "meta-llama/llama-3.2-3b-instruct:free";
pub const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Mock OpenRouter server for testing the completion client
pub struct OpenRouterMockServer {
    server: MockServer,
}

impl OpenRouterMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Full chat-completions URL on the mock server
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), COMPLETIONS_PATH)
    }

    /// Requests the mock has received so far
    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    /// Mock a successful completion that only matches a correctly formed request
    pub async fn mock_success(&self, response_content: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({ "model": TEST_MODEL })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "gen-test123",
                "object": "chat.completion",
                "created": 1700000000,
                "model": TEST_MODEL,
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": response_content
                    },
                    "finish_reason": "stop"
                }],
                "usage": {
                    "prompt_tokens": 10,
                    "completion_tokens": 20,
                    "total_tokens": 30
                }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an upstream error status
    pub async fn mock_status(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": { "message": message, "code": status }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response with an arbitrary raw body
    pub async fn mock_raw_body(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response with an arbitrary JSON body
    pub async fn mock_json_body(&self, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a success that arrives only after `delay`
    pub async fn mock_slow(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "choices": [{ "message": { "role": "assistant", "content": "late" } }]
                    }))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }
}

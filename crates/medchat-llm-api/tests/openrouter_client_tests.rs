mod fixtures;

use std::time::Duration;

use medchat_llm_api::{
    ApiConfig, CompletionClient, CompletionError, OpenRouterClient, PERSONA_INSTRUCTION,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use fixtures::{OpenRouterMockServer, TEST_API_KEY, TEST_MODEL};

fn client_for(server: &OpenRouterMockServer) -> OpenRouterClient {
    let config = ApiConfig::new(Some(TEST_API_KEY.to_string())).with_api_url(&server.endpoint());
    OpenRouterClient::new(config).unwrap()
}

#[tokio::test]
async fn returns_first_choice_verbatim() {
    let server = OpenRouterMockServer::new().await;
    server
        .mock_success("Rest, hydrate, and see a doctor if it persists.")
        .await;

    let reply = client_for(&server)
        .complete("What helps a headache?")
        .await
        .unwrap();

    assert_eq!(reply, "Rest, hydrate, and see a doctor if it persists.");
}

#[tokio::test]
async fn sends_single_user_message_with_persona() {
    let server = OpenRouterMockServer::new().await;
    server.mock_success("ok").await;

    client_for(&server)
        .complete("What helps a headache?")
        .await
        .unwrap();

    let bodies = server.received_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "model": TEST_MODEL,
            "messages": [{
                "role": "user",
                "content": format!("{} What helps a headache?", PERSONA_INSTRUCTION)
            }]
        })
    );
}

#[tokio::test]
async fn configured_model_is_sent() {
    let server = OpenRouterMockServer::new().await;
    server
        .mock_json_body(json!({
            "choices": [{ "message": { "role": "assistant", "content": "fine" } }]
        }))
        .await;

    let config = ApiConfig::new(Some(TEST_API_KEY.to_string()))
        .with_api_url(&server.endpoint())
        .with_model("mistralai/mistral-7b-instruct:free");
    let client = OpenRouterClient::new(config).unwrap();

    assert_eq!(client.model(), "mistralai/mistral-7b-instruct:free");
    client.complete("hi").await.unwrap();

    let bodies = server.received_bodies().await;
    assert_eq!(bodies[0]["model"], "mistralai/mistral-7b-instruct:free");
}

#[tokio::test]
async fn missing_key_fails_before_sending() {
    let server = OpenRouterMockServer::new().await;
    let config = ApiConfig::new(None).with_api_url(&server.endpoint());
    let client = OpenRouterClient::new(config).unwrap();

    let err = client.complete("hello").await.unwrap_err();

    assert!(matches!(err, CompletionError::MissingApiKey));
    assert!(!err.is_upstream());
    assert!(server.received_bodies().await.is_empty());
}

#[tokio::test]
async fn upstream_status_is_reported() {
    let server = OpenRouterMockServer::new().await;
    server.mock_status(429, "Rate limit exceeded").await;

    let err = client_for(&server).complete("hello").await.unwrap_err();

    match err {
        CompletionError::UpstreamStatus { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("Rate limit exceeded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = OpenRouterMockServer::new().await;
    server.mock_raw_body("<html>gateway</html>").await;

    let err = client_for(&server).complete("hello").await.unwrap_err();

    assert!(matches!(err, CompletionError::MalformedResponse(_)));
}

#[tokio::test]
async fn empty_choices_is_malformed() {
    let server = OpenRouterMockServer::new().await;
    server.mock_json_body(json!({ "id": "gen-1", "choices": [] })).await;

    let err = client_for(&server).complete("hello").await.unwrap_err();

    match err {
        CompletionError::MalformedResponse(msg) => assert!(msg.contains("no choices")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_choices_field_is_malformed() {
    let server = OpenRouterMockServer::new().await;
    server
        .mock_json_body(json!({ "error": { "message": "No auth credentials found" } }))
        .await;

    let err = client_for(&server).complete("hello").await.unwrap_err();

    assert!(matches!(err, CompletionError::MalformedResponse(_)));
}

#[tokio::test]
async fn null_content_is_malformed() {
    let server = OpenRouterMockServer::new().await;
    server
        .mock_json_body(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        }))
        .await;

    let err = client_for(&server).complete("hello").await.unwrap_err();

    match err {
        CompletionError::MalformedResponse(msg) => assert!(msg.contains("no content")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_content_is_malformed() {
    let server = OpenRouterMockServer::new().await;
    server
        .mock_json_body(json!({ "choices": [{ "message": { "role": "assistant" } }] }))
        .await;

    let err = client_for(&server).complete("hello").await.unwrap_err();

    assert!(matches!(err, CompletionError::MalformedResponse(_)));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn empty_content_passes_through() {
    let server = OpenRouterMockServer::new().await;
    server.mock_success("").await;

    let reply = client_for(&server).complete("hello").await.unwrap();

    assert_eq!(reply, "");
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Port 1 is reserved and nothing listens on it
    let config = ApiConfig::new(Some(TEST_API_KEY.to_string()))
        .with_api_url("http://127.0.0.1:1/api/v1/chat/completions");
    let client = OpenRouterClient::new(config).unwrap();

    let err = client.complete("hello").await.unwrap_err();

    assert!(matches!(err, CompletionError::Transport(_)));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn slow_upstream_hits_timeout() {
    let server = OpenRouterMockServer::new().await;
    server.mock_slow(Duration::from_secs(2)).await;

    let config = ApiConfig::new(Some(TEST_API_KEY.to_string()))
        .with_api_url(&server.endpoint())
        .with_timeout(Some(Duration::from_millis(100)));
    let client = OpenRouterClient::new(config).unwrap();

    let err = client.complete("hello").await.unwrap_err();

    assert!(err.is_timeout());
}

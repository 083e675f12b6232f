use medchat_models::ChatResponse;

use crate::session::ReplyOutcome;

/// Local proxy endpoint
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Turn a proxy response into a reply outcome.
///
/// Only a 2xx status with a `{ "message": .. }` body carrying non-blank text
/// counts as a reply; every other shape is a failure.
pub fn interpret_reply(status: u16, body: &str) -> ReplyOutcome {
    if !(200..300).contains(&status) {
        return ReplyOutcome::Failed;
    }

    match serde_json::from_str::<ChatResponse>(body) {
        Ok(ChatResponse::Success { message }) if !message.trim().is_empty() => {
            ReplyOutcome::Reply(message)
        }
        _ => ReplyOutcome::Failed,
    }
}

/// POST the prompt to the proxy and interpret whatever comes back
#[cfg(target_arch = "wasm32")]
pub async fn send_prompt(prompt: &str) -> ReplyOutcome {
    use gloo_net::http::Request;
    use medchat_models::ChatRequest;

    let body = ChatRequest {
        prompt: prompt.to_string(),
    };
    let request = match Request::post(CHAT_ENDPOINT).json(&body) {
        Ok(request) => request,
        Err(e) => {
            log::error!("Failed to serialize chat request: {:?}", e);
            return ReplyOutcome::Failed;
        }
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Chat request failed: {:?}", e);
            return ReplyOutcome::Failed;
        }
    };

    let status = response.status();
    match response.text().await {
        Ok(text) => {
            let outcome = interpret_reply(status, &text);
            if outcome == ReplyOutcome::Failed {
                log::warn!("Unusable chat response (status {}): {}", status, text);
            }
            outcome
        }
        Err(e) => {
            log::error!("Failed to read chat response: {:?}", e);
            ReplyOutcome::Failed
        }
    }
}

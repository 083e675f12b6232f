use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use medchat_llm_api::{CompletionClient, APOLOGY_MESSAGE};
use medchat_models::{ChatRequest, ChatResponse};

use crate::web::error::AppError;

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub mask_upstream_errors: bool,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // API routes
        .route("/api/chat", post(chat))
        .route("/api/health", get(health))
        // Page shell
        .route("/", get(serve_index))
        .route("/style.css", get(serve_stylesheet))
        .with_state(state)
}

/// POST /api/chat - Forward one prompt to the completion service
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected chat request");
        AppError::from(rejection)
    })?;

    let span = info_span!("chat", request_id = %Uuid::new_v4());
    async move {
        info!(prompt_chars = request.prompt.chars().count(), "forwarding prompt");
        let started = Instant::now();

        match state.client.complete(&request.prompt).await {
            Ok(reply) => {
                info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    reply_chars = reply.chars().count(),
                    "completion received"
                );
                Ok(Json(ChatResponse::success(reply)))
            }
            Err(err) if state.mask_upstream_errors => {
                warn!(error = %err, "completion failed, replying with apology");
                Ok(Json(ChatResponse::success(APOLOGY_MESSAGE)))
            }
            Err(err) => {
                error!(error = %err, "completion failed");
                Err(AppError::Completion(err))
            }
        }
    }
    .instrument(span)
    .await
}

/// GET /api/health - Liveness probe
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "model": state.client.model(),
    }))
}

/// GET / - Serve index page
async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../web/index.html"))
}

/// GET /style.css - Serve the page stylesheet
async fn serve_stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../web/style.css"),
    )
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use medchat_llm_api::CompletionError;
use medchat_models::ChatResponse;

/// Error handling
#[derive(Debug)]
pub enum AppError {
    BadRequest(JsonRejection),
    Completion(CompletionError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection)
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::Completion(err)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Completion(err) if err.is_upstream() => StatusCode::BAD_GATEWAY,
            AppError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::BadRequest(rejection) => {
                ChatResponse::failure("Invalid chat request", rejection.body_text())
            }
            AppError::Completion(err) => ChatResponse::failure(err.summary(), err.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

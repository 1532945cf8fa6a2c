//! API error type and its JSON rendering.
//! Every failure leaves the handler as `{"detail": ...}` with a status code.
//! `detail` is a string, except for body validation where it is a list of
//! `{loc, msg, type}` items.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sentimyx_llm::LlmError;
use thiserror::Error;

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationItem>),
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ValidationItem {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// No provider key at startup. Needs operator action.
    #[error("LLM backend not configured (missing OPENAI_API_KEY).")]
    BackendNotConfigured,

    /// Anything the provider call raised. The caller may retry.
    #[error("LLM error: {0}")]
    Upstream(#[from] LlmError),

    #[error("{message}")]
    InvalidBody {
        status: StatusCode,
        kind: &'static str,
        message: String,
    },
}

impl ApiError {
    /// 422 for a body that is not a valid sentiment request.
    pub fn unprocessable(kind: &'static str, message: impl Into<String>) -> Self {
        ApiError::InvalidBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            kind,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BackendNotConfigured       => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_)                => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody { status, .. } => *status,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            serde_json::error::Category::Data => "value_error",
            _                                 => "json_invalid",
        };
        ApiError::unprocessable(kind, err.to_string())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            kind: "body_unreadable",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BackendNotConfigured => {
                tracing::warn!("Sentiment request rejected: LLM backend not configured");
            }
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, "LLM call failed");
            }
            ApiError::InvalidBody { status, kind, message } => {
                tracing::warn!(status = %status, kind = %kind, message = %message, "Invalid request body");
            }
        }

        let status = self.status();
        let detail = match self {
            ApiError::InvalidBody { kind, message, .. } => ErrorDetail::Validation(vec![ValidationItem {
                loc: vec!["body".to_string()],
                msg: message,
                kind: kind.to_string(),
            }]),
            other => ErrorDetail::Message(other.to_string()),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

//! POST /sentiment — one LLM call, one normalized label.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use sentimyx_llm::SentimentLabel;

use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SentimentResponse {
    pub sentiment: SentimentLabel,
}

/// A body is read as JSON when Content-Type is absent, `application/json`,
/// or any `application/*+json` type.
fn is_json_body(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    match essence.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

fn parse_request(headers: &HeaderMap, body: &[u8]) -> ApiResult<SentimentRequest> {
    if !is_json_body(headers) {
        return Err(ApiError::unprocessable(
            "model_attributes_type",
            "Input should be a valid JSON object",
        ));
    }
    Ok(serde_json::from_slice(body)?)
}

pub async fn sentiment(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<SentimentResponse>> {
    let req = parse_request(&headers, &body?)?;
    let classifier = state.classifier.as_ref().ok_or(ApiError::BackendNotConfigured)?;

    let out = classifier.classify(&req.text).await?;

    tracing::debug!(
        audit_id = %out.audit.id,
        model = %out.audit.model,
        raw = %out.raw,
        output_hash = %out.audit.output_hash,
        prompt_tokens = out.audit.prompt_tokens,
        completion_tokens = out.audit.completion_tokens,
        "LLM reply received"
    );
    tracing::info!(
        sentiment = %out.label,
        latency_ms = out.audit.latency_ms,
        "Sentiment classified"
    );

    Ok(Json(SentimentResponse { sentiment: out.label }))
}

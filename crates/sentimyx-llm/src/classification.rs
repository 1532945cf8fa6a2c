//! Sentiment classification over an LLM backend.
//!
//! One prompt, one call, one word back. Whatever the model says is folded
//! into the closed `SentimentLabel` set; anything off-label becomes `Neutral`.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::audit::LlmAuditEntry;
use crate::backend::{LlmBackend, LlmError, LlmRequest, Message};

pub const SYSTEM_PROMPT: &str =
    "You are a sentiment classifier. Respond with only one word: positive, negative, or neutral.";

/// Enough for a single word.
pub const MAX_TOKENS: u32 = 5;

/// Greedy decoding.
pub const TEMPERATURE: f32 = 0.0;

/// Sentiment labels returned to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral  => "neutral",
        }
    }

    /// Maps a raw provider reply onto the label set. Total: never fails.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _          => SentimentLabel::Neutral,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the fixed two-message prompt. `text` is forwarded verbatim.
pub fn build_request(text: &str) -> LlmRequest {
    LlmRequest {
        messages: vec![Message::system(SYSTEM_PROMPT), Message::user(text)],
        model: None,
        max_tokens: Some(MAX_TOKENS),
        temperature: Some(TEMPERATURE),
    }
}

/// Outcome of a single classification call.
#[derive(Debug, Clone)]
pub struct Classification {
    pub label: SentimentLabel,
    /// Raw reply as the provider sent it, before normalization.
    pub raw: String,
    pub audit: LlmAuditEntry,
}

#[derive(Clone)]
pub struct SentimentClassifier {
    backend: Arc<dyn LlmBackend>,
}

impl SentimentClassifier {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    /// Performs exactly one backend call. Errors are returned as-is, no retry.
    pub async fn classify(&self, text: &str) -> Result<Classification, LlmError> {
        let started = Instant::now();
        let resp = self.backend.complete(build_request(text)).await?;
        let latency_ms = started.elapsed().as_millis() as u64;

        let label = SentimentLabel::normalize(&resp.content);
        let audit = LlmAuditEntry::from_response(&resp, latency_ms);

        Ok(Classification { label, raw: resp.content, audit })
    }
}

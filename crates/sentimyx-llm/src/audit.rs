//! Audit records for classification calls.
//! The raw reply is never returned to API callers; its hash is kept here
//! so individual calls can still be correlated in the logs.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::backend::LlmResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmAuditEntry {
    pub id: Uuid,
    pub model: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub output_hash: String,
    pub latency_ms: u64,
    pub called_at: chrono::DateTime<Utc>,
}

impl LlmAuditEntry {
    pub fn new(
        model: String,
        prompt_tokens: u32,
        completion_tokens: u32,
        output: &str,
        latency_ms: u64,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(output.as_bytes());
        let output_hash = format!("{:x}", hasher.finalize());

        Self {
            id: Uuid::new_v4(),
            model,
            prompt_tokens,
            completion_tokens,
            output_hash,
            latency_ms,
            called_at: Utc::now(),
        }
    }

    pub fn from_response(resp: &LlmResponse, latency_ms: u64) -> Self {
        Self::new(
            resp.model.clone(),
            resp.prompt_tokens,
            resp.completion_tokens,
            &resp.content,
            latency_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_hash_is_sha256_hex() {
        let entry = LlmAuditEntry::new("gpt-4o-mini".to_string(), 12, 1, "", 40);
        assert_eq!(
            entry.output_hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(entry.latency_ms, 40);
    }

    #[test]
    fn test_from_response_copies_usage() {
        let resp = LlmResponse {
            content: "Negative".to_string(),
            model: "gpt-4o-mini".to_string(),
            prompt_tokens: 30,
            completion_tokens: 1,
        };
        let a = LlmAuditEntry::from_response(&resp, 5);
        let b = LlmAuditEntry::from_response(&resp, 7);
        assert_eq!(a.model, "gpt-4o-mini");
        assert_eq!(a.prompt_tokens, 30);
        assert_eq!(a.output_hash, b.output_hash);
        assert_ne!(a.id, b.id);
    }
}

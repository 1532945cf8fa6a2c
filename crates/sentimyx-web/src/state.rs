//! Shared application state for the web server.

use std::sync::Arc;

use secrecy::ExposeSecret;
use sentimyx_llm::{LlmBackend, OpenAiBackend, SentimentClassifier};

use crate::config::AppConfig;

/// Shared state injected into every Axum handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider key was configured (degraded mode).
    pub classifier: Option<SentimentClassifier>,
}

impl AppState {
    pub fn new(backend: Option<Arc<dyn LlmBackend>>) -> Self {
        Self { classifier: backend.map(SentimentClassifier::new) }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let backend = config.openai_api_key.as_ref().map(|key| {
            let backend = OpenAiBackend::new(key.expose_secret(), config.llm.model.as_str())
                .with_base_url(config.llm.base_url.as_str());
            Arc::new(backend) as Arc<dyn LlmBackend>
        });
        Self::new(backend)
    }

    pub fn is_configured(&self) -> bool {
        self.classifier.is_some()
    }
}

pub type SharedState = Arc<AppState>;

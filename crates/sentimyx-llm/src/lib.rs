//! sentimyx-llm — completion backend and sentiment classification.
//! Wraps a chat-completions provider behind the LlmBackend trait and
//! normalizes its one-word answer into a closed label set.

pub mod backend;
pub mod classification;
pub mod audit;

pub use backend::{LlmBackend, LlmError, LlmRequest, LlmResponse, Message, OpenAiBackend};
pub use classification::{Classification, SentimentClassifier, SentimentLabel};

//! sentimyx-web — HTTP front for the sentiment classifier.
//! Provides:
//!   - POST /sentiment  text → positive | negative | neutral
//!   - GET  /health     liveness
//!   - GET  /           route listing
//!   - GET  /docs       OpenAPI description

pub mod config;
pub mod router;
pub mod handlers;
pub mod state;
pub mod error;

//! Static service description, liveness, and API docs.

use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Sentiment Analysis API",
        "endpoints": {
            "sentiment": "POST /sentiment",
            "docs": "GET /docs",
            "health": "GET /health"
        }
    }))
}

/// Liveness only; does not look at LLM configuration.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn docs() -> Json<Value> {
    let detail = json!({
        "type": "object",
        "properties": { "detail": { "type": "string" } },
        "required": ["detail"]
    });
    let validation = json!({
        "type": "object",
        "properties": { "detail": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "loc": { "type": "array", "items": { "type": "string" } },
                    "msg": { "type": "string" },
                    "type": { "type": "string" }
                }
            }
        } },
        "required": ["detail"]
    });

    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Sentiment Analysis API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Service description",
                    "responses": { "200": { "description": "Route listing" } }
                }
            },
            "/health": {
                "get": {
                    "summary": "Liveness probe",
                    "responses": { "200": { "description": "{\"status\": \"healthy\"}" } }
                }
            },
            "/sentiment": {
                "post": {
                    "summary": "Classify text as positive, negative, or neutral",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": {
                            "type": "object",
                            "properties": { "text": { "type": "string" } },
                            "required": ["text"]
                        } } }
                    },
                    "responses": {
                        "200": {
                            "description": "Normalized label",
                            "content": { "application/json": { "schema": {
                                "type": "object",
                                "properties": { "sentiment": {
                                    "type": "string",
                                    "enum": ["positive", "negative", "neutral"]
                                } },
                                "required": ["sentiment"]
                            } } }
                        },
                        "422": { "description": "Invalid body", "content": { "application/json": { "schema": validation } } },
                        "500": { "description": "LLM error", "content": { "application/json": { "schema": detail.clone() } } },
                        "503": { "description": "LLM backend not configured", "content": { "application/json": { "schema": detail } } }
                    }
                }
            }
        }
    }))
}

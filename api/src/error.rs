//! Unified error types for the portfolio RSS API
//!
//! This module defines error types for each layer:
//! - `FetchError`: outbound site-fetch errors
//! - `RenderError`: feed renderer errors
//! - `AppError`: application layer errors (wraps the others for HTTP responses)
//!
//! Most failures never become HTTP errors at all: the feed service downgrades
//! them to fallback items so the endpoint keeps returning parseable RSS. Only
//! a renderer fault reaches `AppError`, and even that response body is a
//! valid RSS document.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::handlers::RSS_CONTENT_TYPE;

/// Outbound site-fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Feed renderer errors
///
/// The renderer requires at least one item; everything else about it is
/// infallible. The feed service upholds the non-empty contract, so seeing
/// this error means the pipeline itself is broken.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("cannot render a feed with no items")]
    NoItems,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Render(#[from] RenderError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed => {
                let body = Json(ErrorResponse {
                    error: "Method not allowed".to_string(),
                });
                (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
            }
            // The endpoint's contract is "always parseable RSS", so even a
            // renderer fault answers with a synthetic error feed.
            AppError::Render(e) => {
                tracing::error!("feed rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, RSS_CONTENT_TYPE)],
                    crate::feed::render_error_feed(),
                )
                    .into_response()
            }
        }
    }
}

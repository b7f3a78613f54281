//! Feed handlers
//!
//! The single RSS endpoint. GET and HEAD share a route and headers; OPTIONS
//! answers preflight; everything else is 405 with a small JSON body.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::AppState;

pub const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

/// Mirrors the cache gate's TTL so intermediaries expire in step.
pub const RSS_CACHE_CONTROL: &str = "public, max-age=900";

/// GET/HEAD /api/rss
///
/// Serves the rendered feed, from cache when fresh. HEAD gets the same
/// status and headers (including the content length of the would-be body)
/// with an empty body.
pub async fn get_rss(State(state): State<AppState>, method: Method) -> Result<Response, AppError> {
    let xml = state.feed_service.rss_feed().await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(RSS_CONTENT_TYPE));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(RSS_CACHE_CONTROL),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(xml.len()));

    if method == Method::HEAD {
        Ok((StatusCode::OK, headers).into_response())
    } else {
        Ok((StatusCode::OK, headers, xml).into_response())
    }
}

/// OPTIONS /api/rss
///
/// Plain 200; the CORS layer decorates it (and intercepts real preflights).
pub async fn rss_preflight() -> StatusCode {
    StatusCode::OK
}

/// Any unrouted method on /api/rss.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

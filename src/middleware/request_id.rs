// ABOUTME: Request ID middleware for correlating logs and error responses
// ABOUTME: Reuses an incoming x-request-id or generates one, and echoes it on the response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::headers;
use crate::logging::AppLogger;
use axum::{extract::Request, middleware::Next, response::Response};
use http::{header::HeaderName, HeaderValue};
use std::time::Instant;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Longest client-supplied request ID that is reused as-is
const MAX_REQUEST_ID_LEN: usize = 128;

/// Request ID stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a fresh ID
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("req_{}", Uuid::new_v4().simple()))
    }

    /// Borrow the ID as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn incoming_request_id(req: &Request) -> Option<RequestId> {
    req.headers()
        .get(headers::REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty() && value.len() <= MAX_REQUEST_ID_LEN)
        .map(|value| RequestId(value.to_owned()))
}

/// Attach a request ID to the request, its tracing span, and the response,
/// then log the completed request
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = incoming_request_id(&req).unwrap_or_else(RequestId::generate);
    req.extensions_mut().insert(request_id.clone());

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let span = info_span!(
        "http_request",
        request_id = %request_id.as_str(),
        method = %method,
        path = %path
    );
    let started = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    span.in_scope(|| {
        AppLogger::log_api_request(
            method.as_str(),
            &path,
            response.status().as_u16(),
            duration_ms,
        );
    });

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(headers::REQUEST_ID), value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generated_ids_are_unique() {
        let first = RequestId::generate();
        let second = RequestId::generate();
        assert_ne!(first, second);
        assert!(first.as_str().starts_with("req_"));
    }

    #[test]
    fn test_incoming_id_is_reused_when_reasonable() {
        let req = Request::builder()
            .header("x-request-id", "client-42")
            .body(Body::empty())
            .unwrap();
        assert_eq!(
            incoming_request_id(&req),
            Some(RequestId("client-42".to_owned()))
        );

        let oversized = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        let req = Request::builder()
            .header("x-request-id", oversized)
            .body(Body::empty())
            .unwrap();
        assert_eq!(incoming_request_id(&req), None);
    }
}

// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs and wraps every HTTP request in a span with method, path, and status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

use axum::{http::Request, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap a router with request ID generation, propagation, and a tracing span per request
///
/// An incoming `x-request-id` is kept; otherwise a UUID is generated. The ID
/// is echoed on the response and recorded on the `http_request` span.
pub fn with_request_tracing(router: Router) -> Router {
    let header_name = axum::http::HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(PropagateRequestIdLayer::new(header_name.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(create_request_span::<axum::body::Body>)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(header_name, MakeRequestUuid))
}

/// Create a tracing span for HTTP requests
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

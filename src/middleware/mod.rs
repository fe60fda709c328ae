// ABOUTME: HTTP middleware shared by the portfolio services
// ABOUTME: Cross-origin headers for the data service and request tracing for both routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

/// Cross-origin policy for the data service
pub mod cors;
/// Request ID propagation and per-request spans
pub mod tracing;

pub use cors::cors_middleware;
pub use tracing::with_request_tracing;

// ABOUTME: Web frontend: server-rendered pages backed by the data service
// ABOUTME: Backend client, page catalog, template engine, and router assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! # Web Frontend
//!
//! Renders four HTML pages. Pages that show live data fetch it from the data
//! service on every request and fall back to a degraded render, with a banner
//! and whatever data did arrive, when a fetch fails. The browser always gets a
//! 200 unless templating itself fails.

/// HTTP client for the data service
pub mod client;
/// Frontend view of the wire contract and the page model
pub mod models;
/// Page catalog: copy, banners, and data requirements
pub mod pages;
/// Route definitions and handlers
pub mod routes;
/// Template loading, parsing, and rendering
pub mod templates;

pub use client::BackendClient;
pub use pages::Page;
pub use routes::{WebRoutes, WebState};
pub use templates::TemplateSet;

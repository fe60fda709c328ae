// ABOUTME: Web frontend route definitions and page handlers
// ABOUTME: Fetch live data, build the page model, render a template, and serve static assets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! Web frontend routes
//!
//! Every page handler runs the same pipeline: fetch what the page needs from
//! the data service, build its [`PageData`](super::models::PageData), render.
//! Backend failures never fail the request; template failures do.

use super::{client::BackendClient, pages::Page, templates::TemplateSet};
use crate::middleware::with_request_tracing;
use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::Uri,
    response::Html,
    routing::get,
    Router,
};
use portfolio_core::errors::AppError;
use std::{path::Path, sync::Arc};
use tower_http::services::ServeDir;
use tracing::debug;

/// Shared state for page handlers
#[derive(Debug, Clone)]
pub struct WebState {
    /// Templates parsed at startup
    pub templates: Arc<TemplateSet>,
    /// Client for the data service
    pub backend: BackendClient,
}

impl WebState {
    /// Bundle the template set and backend client
    #[must_use]
    pub fn new(templates: TemplateSet, backend: BackendClient) -> Self {
        Self {
            templates: Arc::new(templates),
            backend,
        }
    }
}

/// Web frontend routes
pub struct WebRoutes;

impl WebRoutes {
    /// Build the complete frontend router
    ///
    /// Files under `static_dir` are served at `/static/`; anything else that
    /// is not a page gets the plaintext 404.
    pub fn routes(state: WebState, static_dir: &Path) -> Router {
        let assets = ServeDir::new(static_dir).not_found_service(not_found.into_service());

        let router = Router::new()
            .route("/", get(Self::handle_home))
            .route("/services", get(Self::handle_services))
            .route("/about", get(Self::handle_about))
            .route("/contact", get(Self::handle_contact))
            .nest_service("/static", assets)
            .fallback(not_found)
            .with_state(state);

        with_request_tracing(router)
    }

    async fn handle_home(State(state): State<WebState>) -> Result<Html<String>, AppError> {
        render_page(&state, Page::Home).await
    }

    async fn handle_services(State(state): State<WebState>) -> Result<Html<String>, AppError> {
        render_page(&state, Page::Services).await
    }

    async fn handle_about(State(state): State<WebState>) -> Result<Html<String>, AppError> {
        render_page(&state, Page::About).await
    }

    async fn handle_contact(State(state): State<WebState>) -> Result<Html<String>, AppError> {
        render_page(&state, Page::Contact).await
    }
}

/// Fetch, assemble, and render one page
async fn render_page(state: &WebState, page: Page) -> Result<Html<String>, AppError> {
    let data = state.backend.load(page.resources()).await;
    if data.degraded {
        debug!(template = page.template_name(), "Rendering degraded page");
    }

    let html = state
        .templates
        .render(page.template_name(), &page.page_data(data))?;
    Ok(Html(html))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}

// ABOUTME: Web frontend binary rendering the portfolio pages on :8080
// ABOUTME: Parses templates before binding so a broken template set never starts serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! # Portfolio Web Frontend Binary
//!
//! Renders the site's pages from `templates/`, serves `static/`, and pulls live
//! data from the data service on every page view.

use anyhow::{Context, Result};
use portfolio_core::constants::service_names;
use portfolio_site::{
    config::WebServerConfig,
    lifecycle, logging,
    web::{BackendClient, Page, TemplateSet, WebRoutes, WebState},
};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env(service_names::PORTFOLIO_WEB)?;

    let config = WebServerConfig::from_env().inspect_err(|e| {
        error!("Invalid configuration: {e:#}");
    })?;
    info!("{}", config.summary());

    let templates = TemplateSet::load_dir(&config.templates_dir)
        .inspect_err(|e| error!("Error parsing templates: {e}"))
        .context("Failed to load templates")?;
    info!(
        templates = ?templates.names().collect::<Vec<_>>(),
        "Templates loaded"
    );
    for name in templates.missing(Page::ALL.iter().map(|page| page.template_name())) {
        warn!(template = name, "Required template is missing; its page will return 500");
    }

    let backend = BackendClient::new(config.api_base_url.clone())
        .context("Failed to create data service client")?;
    info!(backend = backend.base_url(), "Data service client ready");
    let router = WebRoutes::routes(WebState::new(templates, backend), &config.static_dir);

    let listener = lifecycle::bind(config.bind_addr()).await.inspect_err(|e| {
        error!("Startup failed: {e:#}");
    })?;

    lifecycle::serve(listener, router, service_names::PORTFOLIO_WEB).await
}

// ABOUTME: Data service binary serving the profile, services catalog, and contact intake on :8081
// ABOUTME: Loads environment config, initializes logging, and serves until Ctrl+C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! # Portfolio Data Service Binary
//!
//! Serves the JSON API the web frontend and the contact form talk to.

use anyhow::Result;
use portfolio_core::constants::service_names;
use portfolio_site::{api::ApiRoutes, config::ApiServerConfig, lifecycle, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env(service_names::PORTFOLIO_API)?;

    let config = ApiServerConfig::from_env().inspect_err(|e| {
        error!("Invalid configuration: {e:#}");
    })?;
    info!("{}", config.summary());

    let listener = lifecycle::bind(config.bind_addr()).await.inspect_err(|e| {
        error!("Startup failed: {e:#}");
    })?;

    lifecycle::serve(listener, ApiRoutes::routes(), service_names::PORTFOLIO_API).await
}

// ABOUTME: Main library entry point for the portfolio site
// ABOUTME: Data service and web frontend routers plus the shared config, logging, and lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

#![deny(unsafe_code)]

//! # Portfolio Site
//!
//! A two-process portfolio website for a cloud and DevOps consultant.
//!
//! - **Data service** (`portfolio-api`, port 8081): serves the owner profile and
//!   the services catalog as JSON and accepts contact requests, with permissive
//!   cross-origin headers on every response.
//! - **Web frontend** (`portfolio-web`, port 8080): renders the home, services,
//!   about, and contact pages from templates, pulling live data from the data
//!   service on each request and degrading to a banner when it cannot.
//!
//! The two processes share no runtime state; the JSON wire contract is the only
//! coupling between them.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use portfolio_site::{api::ApiRoutes, config::ApiServerConfig, lifecycle, logging};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     logging::init_from_env("portfolio-api")?;
//!     let config = ApiServerConfig::from_env()?;
//!     let listener = lifecycle::bind(config.bind_addr()).await?;
//!     lifecycle::serve(listener, ApiRoutes::routes(), "portfolio-api").await
//! }
//! ```

/// Data service: profile, services catalog, and contact intake
pub mod api;

/// Environment configuration for both processes
pub mod config;

/// Bind, serve, and graceful shutdown
pub mod lifecycle;

/// Structured logging setup
pub mod logging;

/// HTTP middleware shared by both routers
pub mod middleware;

/// Web frontend: backend client, templates, and page routes
pub mod web;

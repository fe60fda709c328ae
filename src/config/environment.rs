// ABOUTME: Environment-based configuration for the portfolio data service and web frontend
// ABOUTME: Parses bind address, backend base URL, and asset directories with fixed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! Environment configuration
//!
//! | Variable        | Binary | Default            |
//! |-----------------|--------|--------------------|
//! | `HOST`          | both   | `0.0.0.0`          |
//! | `HTTP_PORT`     | both   | `8081` / `8080`    |
//! | `API_BASE_URL`  | web    | `http://api:8081`  |
//! | `TEMPLATES_DIR` | web    | `templates`        |
//! | `STATIC_DIR`    | web    | `static`           |
//!
//! Logging variables (`RUST_LOG`, `LOG_FORMAT`) are read by
//! [`crate::logging::LoggingConfig`].

use anyhow::{Context, Result};
use portfolio_core::constants::{backend, ports, web_assets};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;
use url::Url;

/// Data service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiServerConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// Port to bind
    pub http_port: u16,
}

impl ApiServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `HTTP_PORT` is set to an unparsable value
    pub fn from_env() -> Result<Self> {
        info!("Loading data service configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `HTTP_PORT` is set to an unparsable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: parse_host(&lookup)?,
            http_port: parse_port(&lookup, ports::DEFAULT_API_PORT)?,
        })
    }

    /// Socket address the listener binds to
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Human-readable configuration summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Portfolio API Configuration:\n\
             - Bind Address: {}",
            self.bind_addr()
        )
    }
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            http_port: ports::DEFAULT_API_PORT,
        }
    }
}

/// Web frontend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebServerConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// Port to bind
    pub http_port: u16,
    /// Base URL of the data service, without a trailing slash
    pub api_base_url: String,
    /// Directory holding the `*.html` templates
    pub templates_dir: PathBuf,
    /// Directory served under `/static/`
    pub static_dir: PathBuf,
}

impl WebServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value
    pub fn from_env() -> Result<Self> {
        info!("Loading web frontend configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = parse_base_url(
            &lookup("API_BASE_URL").unwrap_or_else(|| backend::DEFAULT_API_BASE_URL.to_owned()),
        )?;

        Ok(Self {
            host: parse_host(&lookup)?,
            http_port: parse_port(&lookup, ports::DEFAULT_WEB_PORT)?,
            api_base_url,
            templates_dir: PathBuf::from(
                lookup("TEMPLATES_DIR")
                    .unwrap_or_else(|| web_assets::DEFAULT_TEMPLATES_DIR.to_owned()),
            ),
            static_dir: PathBuf::from(
                lookup("STATIC_DIR").unwrap_or_else(|| web_assets::DEFAULT_STATIC_DIR.to_owned()),
            ),
        })
    }

    /// Socket address the listener binds to
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Human-readable configuration summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Portfolio Web Configuration:\n\
             - Bind Address: {}\n\
             - Data Service: {}\n\
             - Templates: {}\n\
             - Static Assets: {}",
            self.bind_addr(),
            self.api_base_url,
            self.templates_dir.display(),
            self.static_dir.display(),
        )
    }
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            http_port: ports::DEFAULT_WEB_PORT,
            api_base_url: backend::DEFAULT_API_BASE_URL.to_owned(),
            templates_dir: PathBuf::from(web_assets::DEFAULT_TEMPLATES_DIR),
            static_dir: PathBuf::from(web_assets::DEFAULT_STATIC_DIR),
        }
    }
}

fn parse_host(lookup: &impl Fn(&str) -> Option<String>) -> Result<IpAddr> {
    let raw = lookup("HOST").unwrap_or_else(|| ports::DEFAULT_HOST.to_owned());
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid HOST value: {raw}"))
}

fn parse_port(lookup: &impl Fn(&str) -> Option<String>, default: u16) -> Result<u16> {
    lookup("HTTP_PORT").map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .with_context(|| format!("Invalid HTTP_PORT value: {raw}"))
    })
}

/// Validate an http(s) base URL and strip any trailing slash
fn parse_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid API_BASE_URL value: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("API_BASE_URL must use http or https, got {}", url.scheme());
    }
    Ok(url.as_str().trim_end_matches('/').to_owned())
}

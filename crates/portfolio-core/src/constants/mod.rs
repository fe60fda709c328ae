// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Ports, CORS header values, backend paths, and timeouts shared by both services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. Environment overrides live in the
//! service configuration, not here.

/// Default listening ports
pub mod ports {
    /// Data service port
    pub const DEFAULT_API_PORT: u16 = 8081;
    /// Web frontend port
    pub const DEFAULT_WEB_PORT: u16 = 8080;
    /// Interface both services bind to unless `HOST` is set
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}

/// Service names used in structured logs
pub mod service_names {
    /// Data service
    pub const PORTFOLIO_API: &str = "portfolio-api";
    /// Web frontend
    pub const PORTFOLIO_WEB: &str = "portfolio-web";
}

/// Cross-origin header values emitted by the data service on every response
pub mod cors {
    /// `Access-Control-Allow-Origin`
    pub const ALLOW_ORIGIN: &str = "*";
    /// `Access-Control-Allow-Methods`
    pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
    /// `Access-Control-Allow-Headers`
    pub const ALLOW_HEADERS: &str = "Content-Type";
}

/// Data service routes and the frontend's coupling to them
pub mod backend {
    /// Base URL the frontend uses to reach the data service on the container network
    pub const DEFAULT_API_BASE_URL: &str = "http://api:8081";
    /// Profile resource
    pub const PROFILE_PATH: &str = "/api/profile";
    /// Services catalog resource
    pub const SERVICES_PATH: &str = "/api/services";
    /// Contact submission endpoint
    pub const CONTACT_PATH: &str = "/api/contact";
}

/// Timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Total deadline for one backend fetch: connect, write, and body read
    pub const BACKEND_FETCH_TIMEOUT_SECS: u64 = 5;

    /// [`BACKEND_FETCH_TIMEOUT_SECS`] as a [`Duration`]
    #[must_use]
    pub const fn backend_fetch_timeout() -> Duration {
        Duration::from_secs(BACKEND_FETCH_TIMEOUT_SECS)
    }
}

/// Web frontend filesystem layout
pub mod web_assets {
    /// Directory scanned for `*.html` templates at startup
    pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
    /// Directory served under `/static/`
    pub const DEFAULT_STATIC_DIR: &str = "static";
    /// Extension of template files
    pub const TEMPLATE_EXTENSION: &str = "html";
}

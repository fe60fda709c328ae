// ABOUTME: Configuration management module for the data service and the web frontend
// ABOUTME: Environment-only settings whose defaults reproduce the fixed deployment contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! Configuration module
//!
//! Both binaries are configured from environment variables only. Every
//! variable is optional; with nothing set the services bind their fixed ports
//! and the frontend talks to `http://api:8081`.

/// Environment-backed server configuration
pub mod environment;

pub use environment::{ApiServerConfig, WebServerConfig};

// ABOUTME: Core types and constants for the portfolio site services
// ABOUTME: Foundation crate with the unified error type and shared wire constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

#![deny(unsafe_code)]

//! # Portfolio Core
//!
//! Foundation crate shared by the data service (`portfolio-api`) and the
//! web frontend (`portfolio-web`). It deliberately carries no domain models:
//! each process owns its view of the wire contract.
//!
//! ## Modules
//!
//! - **errors**: `AppError` and `ErrorCode`, rendered as flat plaintext HTTP responses
//! - **constants**: ports, CORS header values, backend paths, and timeouts

/// Unified error handling with flat plaintext HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

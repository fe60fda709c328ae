// ABOUTME: Data service: fixed profile, fixed service catalog, and contact intake over JSON
// ABOUTME: Router assembly with the cross-origin policy applied ahead of dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! # Data Service
//!
//! Serves three endpoints under `/api`:
//!
//! - `GET /api/profile` returns the site owner's [`models::Profile`]
//! - `GET /api/services` returns the catalog as `{"items": [...]}`
//! - `POST /api/contact` accepts a [`models::ContactRequest`], logs it, and answers 202
//!
//! Content is compiled in ([`catalog`]); nothing is persisted.

/// Compiled-in profile and service catalog
pub mod catalog;
/// Wire representations owned by the data service
pub mod models;
/// Route definitions and handlers
pub mod routes;

pub use routes::ApiRoutes;

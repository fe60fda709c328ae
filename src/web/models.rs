// ABOUTME: Frontend view of the data service wire contract plus the per-request page model
// ABOUTME: Profile and Service are decoded from the backend; PageData is the template context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! The frontend defines its own copies of the backend resources. They match the
//! data service field-for-field because they mirror the same JSON, not because
//! the two processes share code.

use serde::{Deserialize, Serialize};

/// Site owner profile as served by `/api/profile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Professional title
    pub title: String,
    /// One-line pitch
    pub tagline: String,
    /// Short biography
    pub summary: String,
    /// Technologies in display order
    pub technologies: Vec<String>,
    /// Where the owner works from
    pub location: String,
}

/// Catalog entry as served by `/api/services`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// URL-safe identifier
    pub slug: String,
    /// Display name
    pub name: String,
    /// One-paragraph description
    pub description: String,
    /// Grouping label
    pub category: String,
}

/// `/api/services` envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServicesResponse {
    /// Catalog entries in display order
    pub items: Vec<Service>,
}

/// Everything a page template can see
///
/// Serialized into the template context, so field names are the names
/// templates use (`title`, `profile.name`, `services`, `error`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    /// Page heading
    pub title: String,
    /// Sub-heading
    pub tagline: String,
    /// Intro paragraph
    pub description: String,
    /// Present when the profile fetch succeeded
    pub profile: Option<Profile>,
    /// Empty when the services fetch failed or was not needed
    pub services: Vec<Service>,
    /// Banner shown when any backend fetch failed
    pub error: Option<String>,
}

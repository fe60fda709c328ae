// ABOUTME: Wire types served and accepted by the data service
// ABOUTME: Profile, Service, the services envelope, and the contact request and acknowledgement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

use serde::{Deserialize, Serialize};

/// The site owner's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Professional title
    pub title: String,
    /// One-line pitch
    pub tagline: String,
    /// Short biography
    pub summary: String,
    /// Display order is declaration order
    pub technologies: Vec<String>,
    /// Where the owner works from
    pub location: String,
}

/// One consulting offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// URL-safe identifier, unique within the catalog
    pub slug: String,
    /// Display name
    pub name: String,
    /// One-paragraph description
    pub description: String,
    /// Free-text grouping label
    pub category: String,
}

/// Envelope for the catalog endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesResponse {
    /// Catalog entries in display order
    pub items: Vec<Service>,
}

/// Inbound contact form submission
///
/// No validation beyond well-formed JSON: absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Sender organization
    pub company: String,
    /// Free-form message
    pub message: String,
}

/// Body returned once a contact request has been accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAcknowledgement {
    /// Always `accepted`
    pub status: String,
    /// Message shown to the sender
    pub message: String,
}

impl ContactAcknowledgement {
    /// The fixed acceptance message
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            status: "accepted".into(),
            message: "Thanks, your request has been received.".into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledgement_is_byte_exact() {
        let body = serde_json::to_string(&ContactAcknowledgement::accepted()).unwrap();
        assert_eq!(
            body,
            r#"{"status":"accepted","message":"Thanks, your request has been received."}"#
        );
    }

    #[test]
    fn test_contact_request_fields_default_to_empty() {
        let request: ContactRequest = serde_json::from_str(r#"{"email":"a@b"}"#).unwrap();
        assert_eq!(request.email, "a@b");
        assert!(request.name.is_empty());
        assert!(request.company.is_empty());
        assert!(request.message.is_empty());
    }
}

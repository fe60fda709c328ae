// ABOUTME: Unified error type for both portfolio services
// ABOUTME: Maps error codes to HTTP statuses and the flat plaintext bodies clients see
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! # Unified Error Handling
//!
//! Every failure in either service is an [`AppError`] carrying an [`ErrorCode`].
//! The code decides the HTTP status and the public body; the message and the
//! optional source are for the logs only. The wire surface is intentionally
//! flat: clients receive short plaintext bodies such as `invalid JSON`, never
//! structured error documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used by both services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Request errors (4xx)
    #[serde(rename = "INVALID_JSON")]
    InvalidJson,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    #[serde(rename = "METHOD_NOT_ALLOWED")]
    MethodNotAllowed,

    // Rendering
    #[serde(rename = "TEMPLATE_NOT_FOUND")]
    TemplateNotFound,
    #[serde(rename = "TEMPLATE_PARSE")]
    TemplateParse,
    #[serde(rename = "TEMPLATE_RENDER")]
    TemplateRender,

    // External services
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable,

    // Configuration
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,

    // Internal
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidJson => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::TemplateNotFound
            | Self::TemplateParse
            | Self::TemplateRender
            | Self::ConfigInvalid
            | Self::SerializationError
            | Self::InternalError => 500,
        }
    }

    /// Plaintext body sent to clients for this error
    #[must_use]
    pub const fn public_body(self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid JSON",
            Self::NotFound => "404 page not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::TemplateNotFound => "Template not found",
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => "Bad Gateway",
            Self::TemplateParse
            | Self::TemplateRender
            | Self::ConfigInvalid
            | Self::SerializationError
            | Self::InternalError => "Internal Server Error",
        }
    }

    /// Get a description of this error for log output
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidJson => "The request body is not valid JSON",
            Self::NotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed on this route",
            Self::TemplateNotFound => "No template is registered under this name",
            Self::TemplateParse => "A template could not be parsed",
            Self::TemplateRender => "A template failed while rendering",
            Self::ExternalServiceError => "An external service returned an unusable response",
            Self::ExternalServiceUnavailable => "An external service could not be reached",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message for the logs
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Request body did not decode as JSON
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidJson, message)
    }

    /// Route exists but does not accept the method
    #[must_use]
    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::new(
            ErrorCode::MethodNotAllowed,
            format!("{method} is not allowed on {path}"),
        )
    }

    /// No route matched
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, format!("{} not found", path.into()))
    }

    /// Template lookup miss
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TemplateNotFound,
            format!("template {} is not loaded", name.into()),
        )
    }

    /// Template source could not be parsed
    pub fn template_parse(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TemplateParse,
            format!("{}: {}", name.into(), message.into()),
        )
    }

    /// Template failed while executing
    pub fn template_render(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TemplateRender,
            format!("{}: {}", name.into(), message.into()),
        )
    }

    /// External service answered with something unusable
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service could not be reached in time
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::AppError;
    use axum::response::{IntoResponse, Response};
    use http::StatusCode;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                tracing::error!(code = ?self.code, error = %self, "request failed");
            } else {
                tracing::debug!(code = ?self.code, error = %self, "request rejected");
            }

            (status, self.code.public_body()).into_response()
        }
    }
}

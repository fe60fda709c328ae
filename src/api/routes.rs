// ABOUTME: Data service route definitions and thin handlers
// ABOUTME: Profile and catalog reads, contact intake, 405 for wrong methods, CORS on everything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

use super::{
    catalog,
    models::{ContactAcknowledgement, ContactRequest, Profile, ServicesResponse},
};
use crate::middleware::{cors_middleware, with_request_tracing};
use axum::{
    body::Bytes,
    http::{Method, StatusCode, Uri},
    middleware,
    response::IntoResponse,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use portfolio_core::{constants::backend, errors::AppError};
use tracing::info;

/// Data service routes
pub struct ApiRoutes;

impl ApiRoutes {
    /// Build the complete data service router
    ///
    /// The cross-origin middleware wraps every route and the fallback, so
    /// `OPTIONS` is answered before dispatch on any path.
    pub fn routes() -> Router {
        let router = Router::new()
            .route(backend::PROFILE_PATH, read_only(get(handle_profile)))
            .route(backend::SERVICES_PATH, read_only(get(handle_services)))
            .route(
                backend::CONTACT_PATH,
                post(handle_contact).fallback(method_not_allowed),
            )
            .fallback(not_found)
            .layer(middleware::from_fn(cors_middleware));

        with_request_tracing(router)
    }
}

/// A GET route that refuses every other method, HEAD included
fn read_only(route: MethodRouter) -> MethodRouter {
    route.head(method_not_allowed).fallback(method_not_allowed)
}

async fn handle_profile() -> Json<Profile> {
    Json(catalog::profile())
}

async fn handle_services() -> Json<ServicesResponse> {
    Json(catalog::services())
}

/// Accept a contact request: decode, log, acknowledge
///
/// The body is decoded as JSON whatever `Content-Type` the client sent.
async fn handle_contact(body: Bytes) -> Result<impl IntoResponse, AppError> {
    let payload = decode_contact(&body)?;

    info!(
        name = %payload.name,
        email = %payload.email,
        company = %payload.company,
        message = %payload.message,
        "New contact request"
    );

    Ok((StatusCode::ACCEPTED, Json(ContactAcknowledgement::accepted())))
}

/// Decode the first JSON value in the body
///
/// Anything after that value is ignored and `null` decodes as an empty request.
fn decode_contact(body: &[u8]) -> Result<ContactRequest, AppError> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<ContactRequest>>()
        .next()
    {
        Some(Ok(payload)) => Ok(payload.unwrap_or_default()),
        Some(Err(e)) => Err(AppError::invalid_json(e.to_string()).with_source(e)),
        None => Err(AppError::invalid_json("empty request body")),
    }
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(method.as_str(), uri.path())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}

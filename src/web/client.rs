// ABOUTME: HTTP client the web frontend uses to fetch live data from the data service
// ABOUTME: One shared reqwest client with a 5-second total deadline per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

use super::models::{Profile, Service, ServicesResponse};
use portfolio_core::{
    constants::{backend, service_names, timeouts},
    errors::{AppError, AppResult},
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

const SERVICE_NAME: &str = service_names::PORTFOLIO_API;

/// Which backend resources a page needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resources {
    /// Fetch `/api/profile`
    pub profile: bool,
    /// Fetch `/api/services`
    pub services: bool,
}

impl Resources {
    /// Nothing to fetch
    pub const NONE: Self = Self {
        profile: false,
        services: false,
    };
    /// Profile only
    pub const PROFILE: Self = Self {
        profile: true,
        services: false,
    };
    /// Profile and services
    pub const ALL: Self = Self {
        profile: true,
        services: true,
    };

    /// Whether any fetch is needed
    #[must_use]
    pub const fn any(self) -> bool {
        self.profile || self.services
    }
}

/// Result of one page's backend fetches
///
/// Failed fetches leave their entity empty and mark the load as degraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreData {
    /// Profile, when requested and fetched
    pub profile: Option<Profile>,
    /// Services, empty when not requested or the fetch failed
    pub services: Vec<Service>,
    /// At least one requested fetch failed
    pub degraded: bool,
}

/// Client for the data service
///
/// Cheap to clone: clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the data service at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeouts::backend_fetch_timeout())
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to build backend HTTP client: {e}"))
                    .with_source(e)
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the owner profile
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, timeout, non-2xx status, or malformed JSON
    pub async fn fetch_profile(&self) -> AppResult<Profile> {
        self.fetch_json(backend::PROFILE_PATH).await
    }

    /// Fetch the services catalog
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, timeout, non-2xx status, or malformed JSON
    pub async fn fetch_services(&self) -> AppResult<Vec<Service>> {
        let response: ServicesResponse = self.fetch_json(backend::SERVICES_PATH).await?;
        Ok(response.items)
    }

    /// Run the requested fetches concurrently and collect whatever succeeded
    ///
    /// Every requested fetch is attempted regardless of the others' outcome.
    /// Failures are logged here and never propagated.
    pub async fn load(&self, resources: Resources) -> CoreData {
        if !resources.any() {
            return CoreData::default();
        }

        let profile_fetch = async {
            if resources.profile {
                Some(self.fetch_profile().await)
            } else {
                None
            }
        };
        let services_fetch = async {
            if resources.services {
                Some(self.fetch_services().await)
            } else {
                None
            }
        };

        let (profile, services) = tokio::join!(profile_fetch, services_fetch);

        let mut data = CoreData::default();
        match profile {
            Some(Ok(profile)) => data.profile = Some(profile),
            Some(Err(e)) => {
                warn!(error = %e, "Error fetching profile");
                data.degraded = true;
            }
            None => {}
        }
        match services {
            Some(Ok(services)) => data.services = services,
            Some(Err(e)) => {
                warn!(error = %e, "Error fetching services");
                data.degraded = true;
            }
            None => {}
        }
        data
    }

    #[instrument(skip(self), fields(service = SERVICE_NAME))]
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "Fetching from data service");

        let response = self.client.get(&url).send().await.map_err(|e| {
            let error = if e.is_timeout() || e.is_connect() {
                AppError::external_unavailable(SERVICE_NAME, format!("GET {url} failed: {e}"))
            } else {
                AppError::external_service(SERVICE_NAME, format!("GET {url} failed: {e}"))
            };
            error.with_source(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("GET {url} returned status: {status}"),
            ));
        }

        response.json().await.map_err(|e| {
            let error = if e.is_timeout() {
                AppError::external_unavailable(
                    SERVICE_NAME,
                    format!("GET {url} timed out reading the body: {e}"),
                )
            } else {
                AppError::external_service(
                    SERVICE_NAME,
                    format!("Failed to parse response from {url}: {e}"),
                )
            };
            error.with_source(e)
        })
    }
}

//! HTTP client for the external geocoding API.
//!
//! Wraps `reqwest` with credential checks, address cleaning, and a mapping
//! from the response's `"status"` field onto [`GeocodeError`] variants.

use std::future::Future;
use std::time::Duration;

use addrcheck_core::{clean_address, usable_api_key, AppConfig, DEFAULT_GEOCODE_URL};
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{GeocodeResponse, GeocodeResult};

const DEFAULT_USER_AGENT: &str = "addrcheck/0.1 (crm-address-check)";

/// Anything that can turn an address into a [`GeocodeResult`].
///
/// [`GeocodeClient`] is the production implementation; the comparison
/// pipeline only depends on this trait so callers can substitute a fake.
pub trait Geocoder {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<GeocodeResult, GeocodeError>> + Send;
}

/// Client for the geocoding REST endpoint.
///
/// Use [`GeocodeClient::new`] for production or
/// [`GeocodeClient::with_endpoint`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl GeocodeClient {
    /// Creates a client for the production geocoding endpoint.
    ///
    /// A missing or placeholder `api_key` is accepted here; lookups then
    /// fail with [`GeocodeError::MissingCredential`] without touching the
    /// network.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Internal`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: Option<&str>, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_endpoint(api_key, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_GEOCODE_URL)
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Internal`] if the HTTP client cannot be built
    /// or the configured endpoint is not a valid URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        Self::with_endpoint(
            config.google_api_key.as_deref(),
            config.geocode_timeout_secs,
            &config.user_agent,
            &config.geocode_url,
        )
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Internal`] if the HTTP client cannot be built
    /// or `endpoint` is not a valid URL.
    pub fn with_endpoint(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
        endpoint: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()
            .map_err(|e| GeocodeError::Internal {
                context: "building HTTP client".to_owned(),
                reason: e.to_string(),
            })?;

        let endpoint = Url::parse(endpoint).map_err(|e| GeocodeError::Internal {
            context: "parsing geocode endpoint".to_owned(),
            reason: format!("invalid URL '{endpoint}': {e}"),
        })?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            endpoint,
        })
    }

    /// Whether lookups will be attempted at all.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.usable_key().is_some()
    }

    /// Resolves `address` to the provider's formatted address and coordinates.
    ///
    /// Line breaks in `address` are collapsed to spaces before the request.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::MissingCredential`] if no usable key is configured.
    /// - [`GeocodeError::Denied`], [`GeocodeError::QuotaExceeded`],
    ///   [`GeocodeError::NoMatch`] or [`GeocodeError::Unknown`] depending on
    ///   the response status.
    /// - [`GeocodeError::Network`] on transport failure or non-2xx status.
    /// - [`GeocodeError::Internal`] if the body does not have the expected
    ///   shape.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let Some(api_key) = self.usable_key() else {
            tracing::warn!("geocode skipped: no usable API key configured");
            return Err(GeocodeError::MissingCredential);
        };

        let address = clean_address(address);
        let url = self.build_url(&address, api_key);
        tracing::debug!(%address, endpoint = %self.endpoint, "geocoding address");

        let result = self.request_json(&url).await.and_then(Self::interpret);
        if let Err(e) = &result {
            tracing::warn!(%address, kind = e.kind(), error = %e, "geocode failed");
        }
        result
    }

    fn usable_key(&self) -> Option<&str> {
        usable_api_key(self.api_key.as_deref())
    }

    /// Appends `address` and `key` to the endpoint via
    /// [`Url::query_pairs_mut`] so both are safely percent-encoded.
    fn build_url(&self, address: &str, api_key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", api_key);
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and decodes the
    /// response envelope.
    async fn request_json(&self, url: &Url) -> Result<GeocodeResponse, GeocodeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Internal {
            context: "decoding geocode response".to_owned(),
            reason: e.to_string(),
        })
    }

    /// Maps the envelope's `"status"` onto a result. Only the first
    /// candidate of an `OK` response is used.
    fn interpret(response: GeocodeResponse) -> Result<GeocodeResult, GeocodeError> {
        match response.status.as_str() {
            "OK" => response
                .results
                .into_iter()
                .next()
                .map(GeocodeResult::from)
                .ok_or_else(|| GeocodeError::Internal {
                    context: "decoding geocode response".to_owned(),
                    reason: "status OK but no results".to_owned(),
                }),
            "REQUEST_DENIED" => Err(GeocodeError::Denied {
                message: response.error_message,
            }),
            "OVER_QUERY_LIMIT" => Err(GeocodeError::QuotaExceeded),
            "ZERO_RESULTS" => Err(GeocodeError::NoMatch),
            other => Err(GeocodeError::Unknown(other.to_owned())),
        }
    }
}

impl Geocoder for GeocodeClient {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<GeocodeResult, GeocodeError>> + Send {
        GeocodeClient::geocode(self, address)
    }
}

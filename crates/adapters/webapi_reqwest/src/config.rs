//! Web API connection configuration.

use serde::Deserialize;

use crate::client::WebApiClient;
use crate::error::WebApiError;

/// Connection settings for the record store's Web API endpoint.
///
/// Authentication and session acquisition are the host's concern; this
/// adapter only carries an already-issued bearer token opaquely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebApiConfig {
    /// Base URL of the Web API, e.g. `https://org.example.com/api/data/v9.2`.
    pub base_url: String,
    /// Bearer token attached to every request, if any.
    pub access_token: Option<String>,
}

impl WebApiConfig {
    /// Build a client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WebApiError::Client`] when the HTTP client cannot be
    /// constructed.
    pub fn build(&self) -> Result<WebApiClient, WebApiError> {
        WebApiClient::new(self)
    }
}

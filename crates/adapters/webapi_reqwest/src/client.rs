//! Thin OData client — one `retrieveMultiple`-style query per call.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::WebApiConfig;
use crate::error::WebApiError;

/// Asks the record store to inline display labels for option-set columns;
/// the workflow source reads its `kind` from that annotation.
const INCLUDE_FORMATTED_VALUES: &str =
    "odata.include-annotations=\"OData.Community.Display.V1.FormattedValue\"";

/// Shared HTTP client for both source readers.
///
/// Cloning is cheap: the underlying `reqwest::Client` is a handle.
#[derive(Debug, Clone)]
pub struct WebApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl WebApiClient {
    /// Create a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WebApiError::Client`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: &WebApiConfig) -> Result<Self, WebApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(WebApiError::Client)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    /// Run one query against an entity set and return the raw rows.
    ///
    /// `options` is the pre-assembled query string (`$select=…&$filter=…`).
    pub(crate) async fn retrieve_multiple<T: DeserializeOwned>(
        &self,
        entity_set: &'static str,
        options: &str,
    ) -> Result<Vec<T>, WebApiError> {
        let url = format!("{}/{entity_set}?{options}", self.base_url);
        tracing::debug!(entity_set, "issuing record store query");

        let mut request = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("OData-MaxVersion", "4.0")
            .header("OData-Version", "4.0")
            .header("Prefer", INCLUDE_FORMATTED_VALUES);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| WebApiError::Http { entity_set, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebApiError::Status { entity_set, status });
        }

        let collection: ODataCollection<T> = response
            .json()
            .await
            .map_err(|source| WebApiError::Decode { entity_set, source })?;
        tracing::debug!(entity_set, count = collection.value.len(), "retrieved rows");
        Ok(collection.value)
    }
}

/// The envelope every OData collection response arrives in.
///
/// The explicit default path keeps serde from requiring `T: Default`; row
/// types carry no `Default` impl.
#[derive(Debug, Deserialize)]
struct ODataCollection<T> {
    #[serde(default = "Vec::new")]
    value: Vec<T>,
}

/// Percent-encode a `$filter` expression for use in a query string.
pub(crate) fn encode_filter(filter: &str) -> String {
    utf8_percent_encode(filter, NON_ALPHANUMERIC).to_string()
}

//! Web API adapter error types.

use fieldscope_domain::error::ReadFailure;

/// Errors specific to the Web API adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response.
    #[error("request to {entity_set} failed")]
    Http {
        /// Entity set the request targeted.
        entity_set: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The record store answered with a non-success status.
    #[error("record store returned {status} for {entity_set}")]
    Status {
        /// Entity set the request targeted.
        entity_set: &'static str,
        /// The HTTP status received.
        status: reqwest::StatusCode,
    },

    /// The response body was not a valid OData collection.
    #[error("failed to decode {entity_set} response")]
    Decode {
        /// Entity set the request targeted.
        entity_set: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl From<WebApiError> for ReadFailure {
    fn from(err: WebApiError) -> Self {
        ReadFailure::new(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = WebApiError::Status {
            entity_set: "workflows",
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert_eq!(
            err.to_string(),
            "record store returned 401 Unauthorized for workflows"
        );
    }

    #[test]
    fn should_convert_into_read_failure() {
        let err = WebApiError::Status {
            entity_set: "workflows",
            status: reqwest::StatusCode::BAD_REQUEST,
        };
        let failure: ReadFailure = err.into();
        assert!(failure.to_string().contains("400 Bad Request"));
    }
}

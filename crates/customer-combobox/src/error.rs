//! Error types for the combobox crate.

use thiserror::Error;

/// Why a search did not produce a result set.
///
/// The combobox renders every variant as "no results"; the distinction is
/// kept for logging and for callers that want to react to
/// [`FetchError::Unauthenticated`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered 401.
    #[error("customer search requires a signed-in session")]
    Unauthenticated,
    /// The endpoint answered 400.
    #[error("customer search rejected the query: {message}")]
    InvalidInput {
        /// Message from the error payload, when one was readable.
        message: String,
    },
    /// The endpoint answered 5xx.
    #[error("customer search unavailable (status {status})")]
    Unavailable {
        /// HTTP status code.
        status: u16,
    },
    /// Any other non-success status.
    #[error("unexpected customer search status {status}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
    },
    /// The request never produced a response.
    #[error("customer search request failed: {message}")]
    Transport {
        /// Transport error description.
        message: String,
    },
    /// The response body was not a `{ customers: [...] }` document.
    #[error("invalid customer search response: {message}")]
    Decode {
        /// Decoder error description.
        message: String,
    },
}

/// Errors raised while building an HTTP search client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientConfigError {
    /// The base URL could not be parsed or cannot carry a path.
    #[error("invalid search base URL '{url}': {message}")]
    InvalidBaseUrl {
        /// Offending value.
        url: String,
        /// Parser message.
        message: String,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    Build {
        /// Builder error description.
        message: String,
    },
}

//! Search client used by the widget.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use crate::combobox::{SEARCH_PATH, SearchRequest};
use crate::customer::SearchResult;
use crate::error::{ClientConfigError, FetchError};

/// Performs one customer search.
#[async_trait]
pub trait CustomerSearchClient: Send + Sync {
    /// Run `request` against the search endpoint.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, FetchError>;
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// `reqwest` client for `GET /resources/customers`.
///
/// The path is resolved against the origin of the base URL, so the widget
/// hits the same resource wherever the hosting page lives.
///
/// # Examples
/// ```
/// use customer_combobox::HttpCustomerSearchClient;
///
/// let client = HttpCustomerSearchClient::new("https://crm.example/invoices/new")?;
/// assert_eq!(
///     client.endpoint().as_str(),
///     "https://crm.example/resources/customers"
/// );
/// # Ok::<(), customer_combobox::ClientConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpCustomerSearchClient {
    http: reqwest::Client,
    endpoint: Url,
    session_cookie: Option<String>,
}

impl HttpCustomerSearchClient {
    /// Client for the server at `base_url`, with a 10 second request
    /// timeout.
    ///
    /// # Errors
    /// [`ClientConfigError::InvalidBaseUrl`] when `base_url` is not an
    /// absolute hierarchical URL; [`ClientConfigError::Build`] when the
    /// HTTP client cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self, ClientConfigError> {
        let invalid = |message: String| ClientConfigError::InvalidBaseUrl {
            url: base_url.to_owned(),
            message,
        };
        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_owned()));
        }
        let endpoint = base.join(SEARCH_PATH).map_err(|e| invalid(e.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientConfigError::Build {
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            endpoint,
            session_cookie: None,
        })
    }

    /// Send `cookie` (a `name=value` pair) with every search.
    #[must_use]
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Absolute URL searches are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn failure(response: reqwest::Response) -> FetchError {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => FetchError::Unauthenticated,
            StatusCode::BAD_REQUEST => {
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .map_or_else(|_| status.to_string(), |body| body.message);
                FetchError::InvalidInput { message }
            }
            _ if status.is_server_error() => FetchError::Unavailable {
                status: status.as_u16(),
            },
            _ => FetchError::UnexpectedStatus {
                status: status.as_u16(),
            },
        }
    }
}

#[async_trait]
impl CustomerSearchClient for HttpCustomerSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, FetchError> {
        let mut builder = self
            .http
            .get(self.endpoint.clone())
            .query(&[("query", request.query())])
            .header(ACCEPT, "application/json");
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(COOKIE, cookie.as_str());
        }

        let response = builder.send().await.map_err(|e| FetchError::Transport {
            message: e.to_string(),
        })?;
        if !response.status().is_success() {
            let error = Self::failure(response).await;
            debug!(ticket = %request.ticket(), %error, "customer search rejected");
            return Err(error);
        }
        response
            .json::<SearchResult>()
            .await
            .map_err(|e| FetchError::Decode {
                message: e.to_string(),
            })
    }
}

//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use customer_search::domain::DEFAULT_RESULT_LIMIT;
use customer_search::domain::ports::{CustomerSearch, FixtureCustomerSearch};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) customers: Arc<dyn CustomerSearch>,
    pub(crate) result_limit: usize,
}

impl ServerConfig {
    /// Construct a server configuration with an empty customer directory.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            customers: Arc::new(FixtureCustomerSearch),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Serve searches from the given adapter.
    #[must_use]
    pub fn with_customer_search(mut self, customers: Arc<dyn CustomerSearch>) -> Self {
        self.customers = customers;
        self
    }

    /// Cap the number of customers returned per search.
    #[must_use]
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }
}

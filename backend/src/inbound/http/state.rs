//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports and
//! services, so tests can swap in doubles without any I/O.

use std::sync::Arc;

use crate::domain::CustomerSearchService;
use crate::domain::ports::LoginService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Authentication collaborator behind `/api/v1/login`.
    pub login: Arc<dyn LoginService>,
    /// Customer search use case.
    pub customers: CustomerSearchService,
}

impl HttpState {
    /// Bundle the login port and the customer search service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use customer_search::domain::ports::{FixtureCustomerSearch, FixtureLoginService};
    /// use customer_search::domain::{CustomerSearchService, DEFAULT_RESULT_LIMIT};
    /// use customer_search::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureLoginService),
    ///     CustomerSearchService::new(Arc::new(FixtureCustomerSearch), DEFAULT_RESULT_LIMIT),
    /// );
    /// assert_eq!(state.customers.limit(), DEFAULT_RESULT_LIMIT);
    /// ```
    pub fn new(login: Arc<dyn LoginService>, customers: CustomerSearchService) -> Self {
        Self { login, customers }
    }
}

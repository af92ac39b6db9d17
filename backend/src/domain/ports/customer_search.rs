//! Driven port for the customer search collaborator.
//!
//! The collaborator owns matching and ranking. Adapters return matches in
//! rank order and never more than `limit` of them.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerQuery};

use super::define_port_error;

define_port_error! {
    /// Errors raised by the search collaborator.
    pub enum CustomerSearchError {
        /// The backing store could not be reached.
        Unavailable { message: String } =>
            "customer search unavailable: {message}",
        /// The store was reached but the lookup failed.
        Query { message: String } =>
            "customer search query failed: {message}",
    }
}

/// Port for text search over stored customers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerSearch: Send + Sync {
    /// Return at most `limit` customers matching `query`, best match first.
    ///
    /// # Examples
    /// ```
    /// # use customer_search::domain::CustomerQuery;
    /// # use customer_search::domain::ports::{CustomerSearch, FixtureCustomerSearch};
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let query = CustomerQuery::from_param(Some("jo")).unwrap();
    /// let found = FixtureCustomerSearch.search(&query, 10).await.unwrap();
    /// assert!(found.is_empty());
    /// # });
    /// ```
    async fn search(
        &self,
        query: &CustomerQuery,
        limit: usize,
    ) -> Result<Vec<Customer>, CustomerSearchError>;
}

/// Fixture search that never matches anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCustomerSearch;

#[async_trait]
impl CustomerSearch for FixtureCustomerSearch {
    async fn search(
        &self,
        _query: &CustomerQuery,
        _limit: usize,
    ) -> Result<Vec<Customer>, CustomerSearchError> {
        Ok(Vec::new())
    }
}

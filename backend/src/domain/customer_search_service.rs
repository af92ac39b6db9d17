//! Use case behind `GET /resources/customers`.
//!
//! The service is handed an already-authenticated caller. It asks the
//! search collaborator for a bounded result set and translates collaborator
//! failures into [`ErrorCode::SearchUnavailable`](super::ErrorCode). The
//! collaborator's ordering is passed through untouched.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{CustomerSearch, CustomerSearchError};
use super::{CustomerQuery, CustomerSearchResult, Error, UserId};

/// Result limit used when none is configured.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Searches customers on behalf of an authenticated user.
#[derive(Clone)]
pub struct CustomerSearchService {
    search: Arc<dyn CustomerSearch>,
    limit: usize,
}

impl CustomerSearchService {
    /// Build a service over `search`, returning at most `limit` matches.
    ///
    /// A zero limit is raised to one so a successful search can always
    /// return the best match.
    pub fn new(search: Arc<dyn CustomerSearch>, limit: usize) -> Self {
        Self {
            search,
            limit: limit.max(1),
        }
    }

    /// Maximum number of customers returned per search.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Run the search for `user`.
    pub async fn search(
        &self,
        user: &UserId,
        query: &CustomerQuery,
    ) -> Result<CustomerSearchResult, Error> {
        match self.search.search(query, self.limit).await {
            Ok(mut customers) => {
                customers.truncate(self.limit);
                debug!(
                    user_id = %user,
                    query_chars = query.char_count(),
                    hits = customers.len(),
                    "customer search completed"
                );
                Ok(CustomerSearchResult { customers })
            }
            Err(error) => {
                warn!(user_id = %user, %error, "customer search failed");
                Err(map_search_error(&error))
            }
        }
    }
}

fn map_search_error(error: &CustomerSearchError) -> Error {
    match error {
        CustomerSearchError::Unavailable { .. } => {
            Error::search_unavailable("customer search is temporarily unavailable")
        }
        CustomerSearchError::Query { .. } => Error::search_unavailable("customer search failed"),
    }
}

//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod customer_search;
mod login_service;

#[cfg(test)]
pub use customer_search::MockCustomerSearch;
pub use customer_search::{CustomerSearch, CustomerSearchError, FixtureCustomerSearch};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};

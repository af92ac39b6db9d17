//! HTTP inbound adapter.
//!
//! [`configure`] registers every route on an Actix `App`; the caller
//! supplies session middleware and [`state::HttpState`] as app data.

pub mod customers;
pub mod error;
pub mod health;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the customer search resource and the session endpoints.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use customer_search::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(customers::search_customers)
        .service(users::login)
        .service(users::logout);
}

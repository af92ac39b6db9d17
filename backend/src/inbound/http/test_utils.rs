//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test};

use crate::domain::ports::{CustomerSearch, FixtureLoginService};
use crate::domain::{Customer, CustomerId, CustomerSearchService, DEFAULT_RESULT_LIMIT};
use crate::inbound::http::state::HttpState;
use crate::outbound::directory::InMemoryCustomerDirectory;
pub use crate::test_support::{test_app_with, test_session_middleware};

/// Directory used by handler tests.
pub fn sample_directory() -> InMemoryCustomerDirectory {
    let customer = |id: &str, name: &str, email: &str| {
        Customer::new(CustomerId::new(id).expect("fixture id"), name, email)
    };
    InMemoryCustomerDirectory::new(vec![
        customer("1", "John Doe", "john@x.com"),
        customer("2", "Jane Roe", "jane@x.com"),
        customer("3", "Joanna Lee", "joanna@x.com"),
    ])
    .expect("unique fixture ids")
}

/// Handler state over `search` with the fixture login service.
pub fn test_state(search: Arc<dyn CustomerSearch>) -> HttpState {
    HttpState::new(
        Arc::new(FixtureLoginService),
        CustomerSearchService::new(search, DEFAULT_RESULT_LIMIT),
    )
}

/// Full application over [`sample_directory`].
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with(test_state(Arc::new(sample_directory())))
}

/// Login request with the fixture credentials.
pub fn login_request() -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(serde_json::json!({ "username": "admin", "password": "password" }))
        .to_request()
}

/// Extract the session cookie set on `response`.
pub fn session_cookie(response: &ServiceResponse) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

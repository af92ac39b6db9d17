//! OpenAPI document for the HTTP surface.
//!
//! Printed by the `openapi-dump` binary for client generation.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Customer, CustomerSearchResult, Error, ErrorCode};
use crate::inbound::http::users::LoginRequest;

/// Registers the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the customer search service.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Customer search API",
        description = "Session-authenticated customer lookup backing the customer combobox."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::customers::search_customers,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Customer, CustomerSearchResult, Error, ErrorCode, LoginRequest)),
    tags(
        (name = "customers", description = "Customer search"),
        (name = "session", description = "Session lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/resources/customers")]
    #[case("/api/v1/login")]
    #[case("/api/v1/logout")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn document_serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("serialise OpenAPI");
        assert!(json.contains("searchCustomers"));
    }
}

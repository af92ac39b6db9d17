//! Customer search resource.
//!
//! ```text
//! GET /resources/customers?query=jo
//! ```
//!
//! The path is fixed so every embedding of the combobox hits the same
//! resource regardless of the page it sits on. The session is checked
//! before the query is even parsed: an anonymous caller learns nothing,
//! not even whether its query was well formed.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{CustomerQuery, CustomerQueryError, CustomerSearchResult, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Raw query-string parameters.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerSearchParams {
    /// Free-text search; required and non-blank.
    pub query: Option<String>,
}

fn parse_query(query_string: &str) -> Result<CustomerQuery, Error> {
    let params = web::Query::<CustomerSearchParams>::from_query(query_string)
        .map_err(|err| {
            Error::invalid_input("query string is malformed")
                .with_details(json!({ "reason": err.to_string() }))
        })?
        .into_inner();
    CustomerQuery::from_param(params.query.as_deref()).map_err(|err| {
        let code = match err {
            CustomerQueryError::Missing => "missing_field",
            CustomerQueryError::Empty => "empty_field",
        };
        Error::invalid_input(err.to_string()).with_details(json!({ "field": "query", "code": code }))
    })
}

/// Search customers visible to the logged-in user.
#[utoipa::path(
    get,
    path = "/resources/customers",
    params(CustomerSearchParams),
    responses(
        (status = 200, description = "Matching customers, best first", body = CustomerSearchResult),
        (status = 400, description = "Missing or blank query", body = Error),
        (status = 401, description = "No authenticated session", body = Error),
        (status = 503, description = "Search collaborator unavailable", body = Error)
    ),
    tags = ["customers"],
    operation_id = "searchCustomers"
)]
#[get("/resources/customers")]
pub async fn search_customers(
    state: web::Data<HttpState>,
    session: SessionContext,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let query = parse_query(request.query_string())?;
    let result = state.customers.search(&user_id, &query).await?;
    Ok(HttpResponse::Ok()
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(result))
}

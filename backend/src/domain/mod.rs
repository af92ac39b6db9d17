//! Domain primitives, ports and the customer search use case.
//!
//! Purpose: keep the search endpoint's rules free of HTTP concerns. Inbound
//! adapters translate requests into [`CustomerQuery`] values and call
//! [`CustomerSearchService`]; outbound adapters implement
//! [`ports::CustomerSearch`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Customer / CustomerId / CustomerQuery / CustomerSearchResult.
//! - UserId / LoginCredentials: what the session and login port exchange.
//! - TraceId: request correlation identifier.

pub mod auth;
pub mod customer;
pub mod customer_search_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::customer::{
    Customer, CustomerId, CustomerIdError, CustomerQuery, CustomerQueryError,
    CustomerSearchResult,
};
pub use self::customer_search_service::{CustomerSearchService, DEFAULT_RESULT_LIMIT};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserIdError};

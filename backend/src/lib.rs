//! Customer search service.
//!
//! Serves `GET /resources/customers`, a session-authenticated text search
//! over customer records, laid out as ports and adapters:
//!
//! - [`domain`]: customer types, the search use case and its ports.
//! - [`inbound::http`]: Actix handlers, session extractor, error mapping.
//! - [`outbound`]: the in-memory customer directory.
//! - [`middleware`]: request tracing.
//! - [`settings`]: OrthoConfig-backed server settings.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use doc::ApiDoc;
pub use middleware::Trace;

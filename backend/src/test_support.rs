//! Shared helpers for unit and integration tests.
//!
//! Compiled for unit tests and behind the `test-support` feature so the
//! integration suites under `tests/` can use them.

use std::io;
use std::path::PathBuf;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use cap_std::{ambient_authority, fs::Dir};
use serde_json::json;
use tempfile::TempDir;

use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Session middleware with a fresh key and the `Secure` flag off for plain
/// HTTP test requests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Full application over `state`, wired like production.
pub fn test_app_with(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .configure(configure)
}

/// Write a customer directory JSON file into a fresh temporary directory.
///
/// Each record is `(id, name, email)`. The returned [`TempDir`] must be kept
/// alive for as long as the file is needed.
///
/// # Examples
///
/// ```rust
/// use customer_search::test_support::write_directory_file;
///
/// let (_guard, path) = write_directory_file(&[("1", "John Doe", "john@x.com")])?;
/// assert!(path.ends_with("customers.json"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_directory_file(records: &[(&str, &str, &str)]) -> io::Result<(TempDir, PathBuf)> {
    let temp = tempfile::tempdir()?;
    let payload: Vec<_> = records
        .iter()
        .map(|(id, name, email)| json!({ "id": id, "name": name, "email": email }))
        .collect();
    let body = serde_json::to_vec(&payload).map_err(io::Error::other)?;
    let dir = Dir::open_ambient_dir(temp.path(), ambient_authority())?;
    dir.write("customers.json", body)?;
    let path = temp.path().join("customers.json");
    Ok((temp, path))
}

//! Driving port for the authentication collaborator.
//!
//! Inbound adapters call this to turn credentials into a [`UserId`] that the
//! session stores. Production deployments substitute a real identity
//! provider; the fixture keeps local runs and tests self-contained.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

const FIXTURE_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// Development authenticator: `admin` / `password` logs in as a fixed user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.username() == "admin" && credentials.password() == "password" {
            UserId::new(FIXTURE_USER_ID)
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
        } else {
            Err(Error::unauthenticated("invalid credentials"))
        }
    }
}

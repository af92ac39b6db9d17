//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CUSTOMER_SEARCH_*` environment variables or
//! a configuration file, in OrthoConfig's usual precedence. Unset options
//! fall back to the defaults exposed by the accessor methods.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_RESULT_LIMIT;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid bind host '{host}'")]
    InvalidHost {
        /// Offending value.
        host: String,
    },
}

/// Configuration for the customer search server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CUSTOMER_SEARCH")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all IPv4 interfaces.
    pub host: Option<String>,
    /// TCP port to bind; defaults to 8080.
    pub port: Option<u16>,
    /// File holding the session signing key material.
    pub session_key_file: Option<PathBuf>,
    /// Allow a throwaway session key when the key file is unreadable;
    /// defaults to off.
    pub session_allow_ephemeral: Option<bool>,
    /// Mark the session cookie `Secure`; defaults to on.
    pub cookie_secure: Option<bool>,
    /// JSON file of customers served by the in-memory directory.
    pub customers_file: Option<PathBuf>,
    /// Maximum customers returned per search.
    pub result_limit: Option<usize>,
}

impl ServerSettings {
    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref() {
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            Some(host) => host.parse().map_err(|_| SettingsError::InvalidHost {
                host: host.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Session key file path, falling back to the mounted-secret default.
    pub fn session_key_file(&self) -> &Path {
        self.session_key_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_SESSION_KEY_FILE))
    }

    /// Whether an ephemeral session key may replace an unreadable key file.
    pub fn session_allow_ephemeral(&self) -> bool {
        self.session_allow_ephemeral.unwrap_or(false)
    }

    /// Whether the session cookie carries the `Secure` attribute.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Result limit, falling back to [`DEFAULT_RESULT_LIMIT`].
    pub fn result_limit(&self) -> usize {
        self.result_limit.unwrap_or(DEFAULT_RESULT_LIMIT)
    }
}

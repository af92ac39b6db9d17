//! Customer search entry-point: loads settings, session key and directory,
//! then serves the HTTP API.

mod server;

use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use customer_search::inbound::http::health::HealthState;
use customer_search::outbound::directory::InMemoryCustomerDirectory;
use customer_search::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let key = load_session_key(&settings)?;

    let mut config = ServerConfig::new(key, settings.cookie_secure(), SameSite::Lax, bind_addr)
        .with_result_limit(settings.result_limit());
    if let Some(path) = settings.customers_file.as_deref() {
        let directory = InMemoryCustomerDirectory::load(path).map_err(std::io::Error::other)?;
        config = config.with_customer_search(Arc::new(directory));
    } else {
        warn!("no customers file configured; searches will return no results");
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting customer search server");
    let server = create_server(health_state, config)?;
    server.await
}

/// `Key::derive_from` panics on shorter master keys.
const MIN_KEY_BYTES: usize = 32;

fn load_session_key(settings: &ServerSettings) -> std::io::Result<Key> {
    let key_path = settings.session_key_file();
    match std::fs::read(key_path) {
        Ok(bytes) if bytes.len() >= MIN_KEY_BYTES => Ok(Key::derive_from(&bytes)),
        Ok(bytes) => Err(std::io::Error::other(format!(
            "session key at {} is {} bytes; at least {MIN_KEY_BYTES} required",
            key_path.display(),
            bytes.len()
        ))),
        Err(e) => {
            if cfg!(debug_assertions) || settings.session_allow_ephemeral() {
                warn!(path = %key_path.display(), error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {}: {e}",
                    key_path.display()
                )))
            }
        }
    }
}

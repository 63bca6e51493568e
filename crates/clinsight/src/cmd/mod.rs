//! Console commands

pub mod audit;
pub mod check;
pub mod login;
pub mod logout;
pub mod register;
pub mod status;

use std::sync::Arc;

use anyhow::Result;
use clinsight_config::Config;
use clinsight_gateway::{Gateway, TokenCache};
use clinsight_session::SessionStore;

/// Build the gateway and session store from configuration
pub fn build_store(config: &Config) -> Result<SessionStore> {
    let mut gateway =
        Gateway::new(&config.api.base_url).with_request_timeout(config.api.timeout())?;

    let cache = match &config.session.token_cache {
        Some(path) => Some(TokenCache::at(path.clone())),
        None => TokenCache::default_location(),
    };
    if let Some(cache) = cache {
        gateway = gateway.with_cache(cache);
    }

    Ok(SessionStore::with_ttl(
        Arc::new(gateway),
        config.session.ttl_minutes,
    ))
}

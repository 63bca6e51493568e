//! `clinsight status` - report whether a credential is cached

use anyhow::Result;
use clinsight_config::Config;

pub fn run(config: &Config) -> Result<()> {
    let store = super::build_store(config)?;
    if store.gateway().has_credential() {
        // Presence only: a stale token fails on its first real request,
        // and the backend is the only authority on validity.
        println!("Credential cached.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

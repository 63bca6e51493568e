//! `clinsight logout` - clear the session and stored credential

use anyhow::Result;
use clinsight_config::Config;

pub fn run(config: &Config) -> Result<()> {
    let store = super::build_store(config)?;
    store.logout();
    println!("Logged out.");
    Ok(())
}

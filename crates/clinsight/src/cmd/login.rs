//! `clinsight login` - authenticate and show the session

use anyhow::Result;
use clap::Args;
use clinsight_config::Config;
use clinsight_routes::menu_for;

/// Arguments for the login command
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username
    #[arg(short, long)]
    pub username: String,

    /// Password
    #[arg(short, long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, config: &Config) -> Result<()> {
    let store = super::build_store(config)?;
    let user = store.login(&args.username, &args.password).await?;

    println!("Logged in as {} ({})", user.display_name(), user.role);
    if let Some(minutes) = store.expires_in_minutes() {
        println!("Session expires in {minutes} min");
    }

    println!();
    println!("Navigation:");
    for item in menu_for(&user) {
        println!("  {:<24} {}", item.label, item.route);
    }
    Ok(())
}

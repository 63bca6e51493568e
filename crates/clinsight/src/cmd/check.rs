//! `clinsight check` - evaluate the route guard for a path

use anyhow::Result;
use clap::Args;
use clinsight_config::Config;
use clinsight_routes::{evaluate, Access, Route};

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to evaluate (e.g. /patient/4/support)
    pub path: String,

    /// Username to evaluate as; without credentials the check runs
    /// unauthenticated
    #[arg(short, long, requires = "password")]
    pub username: Option<String>,

    /// Password for the username
    #[arg(short, long, requires = "username")]
    pub password: Option<String>,
}

pub async fn run(args: CheckArgs, config: &Config) -> Result<()> {
    let Some(route) = Route::parse(&args.path) else {
        println!("{} -> unmatched, redirects to /", args.path);
        return Ok(());
    };

    let store = super::build_store(config)?;
    if let (Some(username), Some(password)) = (&args.username, &args.password) {
        store.login(username, password).await?;
    }

    let outcome = match evaluate(store.identity().as_ref(), &route) {
        Access::Granted => "granted",
        Access::Denied => "access denied",
        Access::RedirectToLogin => "redirect to /login",
    };
    println!("{route} -> {outcome}");
    Ok(())
}

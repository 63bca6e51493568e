//! `clinsight audit` - fetch the audit log

use anyhow::{bail, Result};
use clap::Args;
use clinsight_config::Config;
use clinsight_gateway::AuditQuery;
use clinsight_routes::{evaluate, Access, Route};

/// Arguments for the audit command
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Username (must hold the admin or compliance role)
    #[arg(short, long)]
    pub username: String,

    /// Password
    #[arg(short, long)]
    pub password: String,

    /// Restrict to one acting user
    #[arg(long)]
    pub actor: Option<String>,

    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,
}

pub async fn run(args: AuditArgs, config: &Config) -> Result<()> {
    let store = super::build_store(config)?;
    let user = store.login(&args.username, &args.password).await?;

    // Same check the dashboard's guard applies before rendering /audit;
    // the backend enforces it again server-side.
    if evaluate(Some(&user), &Route::Audit) != Access::Granted {
        bail!("Access denied: the {} role may not view the audit log", user.role);
    }

    let entries = store
        .gateway()
        .audit_logs(&AuditQuery {
            start_date: args.start_date,
            end_date: args.end_date,
            user: args.actor,
        })
        .await?;

    if entries.is_empty() {
        println!("No audit entries match.");
        return Ok(());
    }
    for entry in entries {
        let actor = entry.user.as_deref().unwrap_or("-");
        let patient = entry.patient_id.as_deref().unwrap_or("-");
        println!(
            "{:<24} {:<28} actor={:<14} patient={}",
            entry.timestamp, entry.action, actor, patient
        );
    }
    Ok(())
}

//! ClinSight - operator console
//!
//! # Usage
//!
//! ```bash
//! # Log in and show the navigation menu for the role
//! clinsight login -u physician -p demo
//!
//! # Evaluate the route guard for a path
//! clinsight check /patient/4/support -u physician -p demo
//!
//! # Register a patient account
//! clinsight register --full-name "Jane Doe" --email jane@x.com -u jane -p abcd
//!
//! # Fetch the audit log (admin/compliance roles)
//! clinsight audit -u compliance -p demo
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clinsight_config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;

/// ClinSight - clinical dashboard console
#[derive(Parser, Debug)]
#[command(name = "clinsight")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and show the session and navigation menu
    Login(cmd::login::LoginArgs),

    /// Clear the session and the stored credential
    Logout,

    /// Register a patient account and start a session
    Register(cmd::register::RegisterArgs),

    /// Show whether a credential is cached
    Status,

    /// Evaluate the route guard for a path
    Check(cmd::check::CheckArgs),

    /// Fetch the audit log (admin and compliance roles)
    Audit(cmd::audit::AuditArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_logging(&config, cli.log_level.as_deref());

    match cli.command {
        Command::Login(args) => cmd::login::run(args, &config).await,
        Command::Logout => cmd::logout::run(&config),
        Command::Register(args) => cmd::register::run(args, &config).await,
        Command::Status => cmd::status::run(&config),
        Command::Check(args) => cmd::check::run(args, &config).await,
        Command::Audit(args) => cmd::audit::run(args, &config).await,
    }
}

fn init_logging(config: &Config, override_level: Option<&str>) {
    let level = override_level.unwrap_or_else(|| config.log.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Console => builder.init(),
    }
}

//! `clinsight register` - patient self-registration

use anyhow::Result;
use clap::Args;
use clinsight_auth::RegistrationInput;
use clinsight_config::Config;

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Full name
    #[arg(long)]
    pub full_name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Desired username
    #[arg(short, long)]
    pub username: String,

    /// Desired password (minimum 4 characters)
    #[arg(short, long)]
    pub password: String,
}

pub async fn run(args: RegisterArgs, config: &Config) -> Result<()> {
    let store = super::build_store(config)?;
    let user = store
        .register_patient(RegistrationInput {
            full_name: args.full_name,
            email: args.email,
            username: args.username,
            password: args.password,
        })
        .await?;

    println!("Welcome, {}.", user.display_name());
    println!("My record: /patient/{}", user.id);
    Ok(())
}

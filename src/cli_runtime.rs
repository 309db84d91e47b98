use anyhow::{Context, Result};
use clap::Parser;

use petshell::model::RemoteConfig;
use petshell::remote::ApiClient;
use petshell::store::ClientStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "petshell")]
#[command(about = "Terminal client for a virtual-pet backend", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => petshell::tui::run()?,
        Some(command) => crate::cli_exec::handle_command(command)?,
    }

    Ok(())
}

pub(crate) fn require_remote(store: &ClientStore) -> Result<RemoteConfig> {
    let cfg = store.read_config()?;
    cfg.remote.context(
        "no remote configured (run `petshell login --url ... --username ... --password ...`)",
    )
}

pub(crate) fn authed_client(store: &ClientStore) -> Result<ApiClient> {
    let remote = require_remote(store)?;
    let token = store
        .get_session_token(&remote)?
        .context("not logged in (run `petshell login --url ... --username ... --password ...`)")?;
    ApiClient::new(remote, Some(token))
}

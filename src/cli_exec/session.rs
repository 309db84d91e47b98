use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use petshell::forms;
use petshell::model::RemoteConfig;
use petshell::remote::ApiClient;
use petshell::session::{SessionController, SessionStatus, decode_claims};
use petshell::store::ClientStore;

use crate::cli_runtime::require_remote;

fn resolve_remote(store: &ClientStore, url: Option<String>) -> Result<RemoteConfig> {
    match url {
        Some(base_url) => Ok(RemoteConfig { base_url }),
        None => require_remote(store),
    }
}

pub(super) fn handle_login_command(
    url: Option<String>,
    username: &str,
    password: &str,
) -> Result<()> {
    forms::validate_login(username, password)?;

    let store = ClientStore::open_default()?;
    let remote = resolve_remote(&store, url)?;

    let mut cfg = store.read_config()?;
    cfg.remote = Some(remote.clone());
    store.write_config(&cfg)?;

    let api = ApiClient::new(remote.clone(), None)?;
    let mut session = SessionController::new(store, remote, cfg.logout_on_denied);
    session.login(&api, username, password)?;

    match session.status().identity() {
        Some(identity) => println!("Logged in as {}", identity.subject_name),
        None => println!("Logged in"),
    }
    Ok(())
}

pub(super) fn handle_register_command(
    url: Option<String>,
    username: &str,
    password: &str,
    roles: Vec<String>,
) -> Result<()> {
    forms::validate_registration(username, password, password)?;

    let store = ClientStore::open_default()?;
    let remote = resolve_remote(&store, url)?;

    let mut cfg = store.read_config()?;
    cfg.remote = Some(remote.clone());
    store.write_config(&cfg)?;

    let api = ApiClient::new(remote.clone(), None)?;
    let mut session = SessionController::new(store, remote, cfg.logout_on_denied);
    session.register(&api, username, password, &roles)?;

    match session.status().identity() {
        Some(identity) => println!("Registered and logged in as {}", identity.subject_name),
        None => println!("Registered"),
    }
    Ok(())
}

pub(super) fn handle_logout_command() -> Result<()> {
    let store = ClientStore::open_default()?;
    let remote = require_remote(&store)?;
    let cfg = store.read_config()?;
    let mut session = SessionController::new(store, remote, cfg.logout_on_denied);
    session.logout()?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(json: bool) -> Result<()> {
    let store = ClientStore::open_default()?;
    let remote = require_remote(&store)?;
    let cfg = store.read_config()?;

    let mut session = SessionController::new(store, remote, cfg.logout_on_denied);
    session.restore()?;

    let SessionStatus::Authenticated(identity) = session.status() else {
        anyhow::bail!("not logged in (the session may have expired)");
    };

    let token = session
        .token()?
        .context("session token missing after restore")?;
    let claims = decode_claims(&token).context("decode session token")?;
    let expires_at = OffsetDateTime::from_unix_timestamp(claims.exp)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| claims.exp.to_string());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "subjectName": identity.subject_name,
                "roles": identity.roles,
                "permissions": identity.permissions,
                "expiresAt": expires_at,
            }))
            .context("serialize whoami json")?
        );
    } else {
        println!("user: {}", identity.subject_name);
        println!(
            "roles: {}",
            identity.roles.iter().cloned().collect::<Vec<_>>().join(", ")
        );
        println!(
            "permissions: {}",
            identity
                .permissions
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("expires: {}", expires_at);
    }
    Ok(())
}

pub(super) fn handle_remote_show_command(json: bool) -> Result<()> {
    let store = ClientStore::open_default()?;
    let cfg = store.read_config()?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cfg.remote).context("serialize remote json")?
        );
    } else if let Some(remote) = cfg.remote {
        println!("url: {}", remote.base_url);
        println!("logout_on_denied: {}", cfg.logout_on_denied);
    } else {
        println!("No remote configured");
    }
    Ok(())
}

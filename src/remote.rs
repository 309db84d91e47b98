use std::time::Duration;

use anyhow::{Context, Result};

use crate::model::RemoteConfig;

mod error;
pub use self::error::ApiError;
mod http_client;
mod types;
pub use self::types::*;
mod auth;
mod pets;

/// Paths that never carry the bearer credential.
pub const AUTH_EXEMPT_PREFIXES: &[&str] = &["/auth/"];

/// A request that has not resolved by then force-completes with an error
/// instead of pinning its control forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway for every outbound call. Attaches the bearer credential to all
/// non-exempt paths and centralizes 401/403 observation.
pub struct ApiClient {
    remote: RemoteConfig,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(remote: RemoteConfig, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("petshell")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            remote,
            token,
            client,
        })
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.remote
    }
}

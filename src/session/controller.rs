use anyhow::{Context, Result};
use time::OffsetDateTime;

use crate::model::RemoteConfig;
use crate::remote::ApiClient;
use crate::store::ClientStore;

use super::{SessionStatus, decode_claims, derive_identity};

/// Owns the session lifecycle. This is the only writer of the persisted
/// token; every write re-derives identity synchronously before returning, so
/// status and token can never disagree.
///
/// Callers must not overlap `login`/`register` calls; the UI disables the
/// triggering control while one is pending.
pub struct SessionController {
    store: ClientStore,
    remote: RemoteConfig,
    logout_on_denied: bool,
    status: SessionStatus,
}

impl SessionController {
    pub fn new(store: ClientStore, remote: RemoteConfig, logout_on_denied: bool) -> Self {
        Self {
            store,
            remote,
            logout_on_denied,
            status: SessionStatus::Unknown,
        }
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.remote
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.store.get_session_token(&self.remote)
    }

    /// Initial transition: adopt a persisted token if one exists. An expired
    /// or malformed token is cleared and the session lands unauthenticated.
    pub fn restore(&mut self) -> Result<()> {
        let Some(token) = self.store.get_session_token(&self.remote)? else {
            self.status = SessionStatus::Unauthenticated;
            return Ok(());
        };
        self.status = SessionStatus::Authenticating;
        self.derive_status(&token)
    }

    pub fn login(&mut self, api: &ApiClient, username: &str, password: &str) -> Result<()> {
        self.status = SessionStatus::Authenticating;
        let resp = match api.log_in(username, password) {
            Ok(resp) => resp,
            Err(err) => {
                self.status = SessionStatus::Unauthenticated;
                return Err(anyhow::Error::new(err).context("log in"));
            }
        };
        self.adopt_token(&resp.jwt)
    }

    /// Same contract as login; the backend signs the new user in and returns
    /// a usable token.
    pub fn register(
        &mut self,
        api: &ApiClient,
        username: &str,
        password: &str,
        roles: &[String],
    ) -> Result<()> {
        self.status = SessionStatus::Authenticating;
        let resp = match api.sign_up(username, password, roles) {
            Ok(resp) => resp,
            Err(err) => {
                self.status = SessionStatus::Unauthenticated;
                return Err(anyhow::Error::new(err).context("sign up"));
            }
        };
        self.adopt_token(&resp.jwt)
    }

    /// Clears the persisted token and identity. Never touches the network,
    /// cannot fail on an absent token, and is idempotent.
    pub fn logout(&mut self) -> Result<()> {
        self.store
            .clear_session_token(&self.remote)
            .context("clear session token")?;
        self.status = SessionStatus::Unauthenticated;
        Ok(())
    }

    /// Policy point for an observed 401/403 on a protected call: forces a
    /// logout only when configured to. Returns whether it logged out.
    pub fn observe_denied(&mut self) -> Result<bool> {
        if !self.logout_on_denied {
            return Ok(false);
        }
        self.logout()?;
        Ok(true)
    }

    fn adopt_token(&mut self, token: &str) -> Result<()> {
        self.store
            .set_session_token(&self.remote, token)
            .context("persist session token")?;
        self.derive_status(token)?;
        if !self.status.is_authenticated() {
            anyhow::bail!("the returned credential is expired or malformed");
        }
        Ok(())
    }

    /// Decode the token and move to the matching status. Decode failure is
    /// treated exactly like expiry: clear storage, land unauthenticated.
    fn derive_status(&mut self, token: &str) -> Result<()> {
        match decode_claims(token) {
            Ok(claims) if claims.exp > OffsetDateTime::now_utc().unix_timestamp() => {
                self.status = SessionStatus::Authenticated(derive_identity(&claims));
            }
            _ => {
                self.store
                    .clear_session_token(&self.remote)
                    .context("clear stale session token")?;
                self.status = SessionStatus::Unauthenticated;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/session/controller_tests.rs"]
mod tests;

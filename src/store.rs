use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, ClientState, RemoteConfig};

const HOME_DIR: &str = ".petshell";
const HOME_ENV: &str = "PETSHELL_HOME";

/// On-disk client state: `config.json` (remote + policy) and `state.json`
/// (session tokens) under the client home directory.
#[derive(Clone)]
pub struct ClientStore {
    root: PathBuf,
}

impl ClientStore {
    /// The client home: `$PETSHELL_HOME` when set, else `$HOME/.petshell`.
    pub fn resolve_home() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Ok(PathBuf::from(home));
        }
        let home = std::env::var_os("HOME")
            .ok_or_else(|| anyhow!("HOME is not set (set {} explicitly)", HOME_ENV))?;
        Ok(PathBuf::from(home).join(HOME_DIR))
    }

    pub fn open_default() -> Result<Self> {
        Self::open(&Self::resolve_home()?)
    }

    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("create client home {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<ClientState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(ClientState::default());
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: ClientState = serde_json::from_slice(&bytes).context("parse state.json")?;
        Ok(st)
    }

    pub fn write_state(&self, st: &ClientState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }

    /// Storage key for a remote's session token.
    pub fn session_token_key(&self, remote: &RemoteConfig) -> String {
        remote.base_url.clone()
    }

    pub fn get_session_token(&self, remote: &RemoteConfig) -> Result<Option<String>> {
        let st = self.read_state()?;
        if st.version != 1 {
            anyhow::bail!("unsupported client state version {}", st.version);
        }
        Ok(st
            .session_tokens
            .get(&self.session_token_key(remote))
            .cloned())
    }

    pub fn set_session_token(&self, remote: &RemoteConfig, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        if st.version != 1 {
            anyhow::bail!("unsupported client state version {}", st.version);
        }
        st.session_tokens
            .insert(self.session_token_key(remote), token.to_string());
        self.write_state(&st)
    }

    pub fn clear_session_token(&self, remote: &RemoteConfig) -> Result<()> {
        let mut st = self.read_state()?;
        if st.version != 1 {
            anyhow::bail!("unsupported client state version {}", st.version);
        }
        st.session_tokens.remove(&self.session_token_key(remote));
        self.write_state(&st)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{PetRecord, User};

pub(super) fn load_or_create_signing_key(data_dir: &Path) -> Result<[u8; 32]> {
    let path = data_dir.join("signing.key");
    if path.exists() {
        let hex = fs::read_to_string(&path).context("read signing.key")?;
        let bytes = (0..32)
            .map(|i| u8::from_str_radix(hex.get(i * 2..i * 2 + 2).unwrap_or(""), 16))
            .collect::<Result<Vec<_>, _>>()
            .context("parse signing.key")?;
        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        return Ok(key);
    }

    let mut key = [0u8; 32];
    getrandom::getrandom(&mut key).context("generate signing key")?;
    let hex: String = key.iter().map(|b| format!("{:02x}", b)).collect();
    write_atomic(&path, hex.as_bytes()).context("write signing.key")?;
    Ok(key)
}

pub(super) fn load_users(data_dir: &Path) -> Result<HashMap<String, User>> {
    let path = data_dir.join("users.json");
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let bytes = fs::read(&path).context("read users.json")?;
    let users: Vec<User> = serde_json::from_slice(&bytes).context("parse users.json")?;
    Ok(users.into_iter().map(|u| (u.username.clone(), u)).collect())
}

pub(super) fn persist_users(data_dir: &Path, users: &HashMap<String, User>) -> Result<()> {
    let mut list: Vec<&User> = users.values().collect();
    list.sort_by(|a, b| a.username.cmp(&b.username));
    let bytes = serde_json::to_vec_pretty(&list).context("serialize users")?;
    write_atomic(&data_dir.join("users.json"), &bytes).context("write users.json")?;
    Ok(())
}

pub(super) fn load_pets(data_dir: &Path) -> Result<HashMap<u64, PetRecord>> {
    let path = data_dir.join("pets.json");
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let bytes = fs::read(&path).context("read pets.json")?;
    let pets: Vec<PetRecord> = serde_json::from_slice(&bytes).context("parse pets.json")?;
    Ok(pets.into_iter().map(|p| (p.pet.id, p)).collect())
}

pub(super) fn persist_pets(data_dir: &Path, pets: &HashMap<u64, PetRecord>) -> Result<()> {
    let mut list: Vec<&PetRecord> = pets.values().collect();
    list.sort_by_key(|p| p.pet.id);
    let bytes = serde_json::to_vec_pretty(&list).context("serialize pets")?;
    write_atomic(&data_dir.join("pets.json"), &bytes).context("write pets.json")?;
    Ok(())
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

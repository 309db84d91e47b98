mod common;

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

struct CliOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

fn run_petshell(home: &Path, args: &[&str]) -> Result<CliOutput> {
    let out = Command::new(env!("CARGO_BIN_EXE_petshell"))
        .env("PETSHELL_HOME", home)
        .args(args)
        .output()
        .with_context(|| format!("run petshell {:?}", args))?;

    Ok(CliOutput {
        success: out.status.success(),
        stdout: String::from_utf8_lossy(&out.stdout).to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).to_string(),
    })
}

fn expect_ok(out: CliOutput, what: &str) -> Result<String> {
    if !out.success {
        anyhow::bail!("{} failed\nstdout:\n{}\nstderr:\n{}", what, out.stdout, out.stderr);
    }
    Ok(out.stdout)
}

#[test]
fn the_full_cli_flow_works_end_to_end() -> Result<()> {
    let server = common::spawn_server()?;
    let home = tempfile::tempdir()?;

    let out = expect_ok(
        run_petshell(
            home.path(),
            &[
                "register",
                "--url",
                &server.base_url,
                "--username",
                "ash",
                "--password",
                "pikachu1",
            ],
        )?,
        "register",
    )?;
    assert!(out.contains("Registered and logged in as ash"));

    let out = expect_ok(run_petshell(home.path(), &["whoami"])?, "whoami")?;
    assert!(out.contains("user: ash"));
    assert!(out.contains("USER"));

    let out = expect_ok(
        run_petshell(
            home.path(),
            &["pet", "create", "--name", "Rex", "--type", "GOKU", "--json"],
        )?,
        "pet create",
    )?;
    let created: serde_json::Value = serde_json::from_str(&out).context("parse created pet")?;
    let pet_id = created
        .get("id")
        .and_then(|v| v.as_u64())
        .context("created pet id missing")?;
    assert_eq!(
        created.get("name"),
        Some(&serde_json::Value::String("Rex".to_string()))
    );

    let out = expect_ok(run_petshell(home.path(), &["pets", "--json"])?, "pets")?;
    let pets: serde_json::Value = serde_json::from_str(&out).context("parse pets")?;
    assert_eq!(pets.as_array().map(|a| a.len()), Some(1));

    let out = expect_ok(
        run_petshell(home.path(), &["pet", "feed", &pet_id.to_string()])?,
        "pet feed",
    )?;
    assert!(out.contains("Fed Rex"));
    assert!(out.contains("energy 50% -> 60%"));
    assert!(out.contains("hunger 50% -> 35%"));

    let out = expect_ok(
        run_petshell(home.path(), &["pet", "train", &pet_id.to_string()])?,
        "pet train",
    )?;
    assert!(out.contains("Trained Rex"));

    let out = expect_ok(
        run_petshell(home.path(), &["pet", "delete", &pet_id.to_string()])?,
        "pet delete",
    )?;
    assert!(out.contains("Deleted pet"));

    let out = expect_ok(run_petshell(home.path(), &["logout"])?, "logout")?;
    assert!(out.contains("Logged out"));

    let out = run_petshell(home.path(), &["whoami"])?;
    assert!(!out.success);
    assert!(out.stderr.contains("not logged in"));

    Ok(())
}

#[test]
fn validation_failures_never_reach_the_wire() -> Result<()> {
    let home = tempfile::tempdir()?;

    // No server is running; a validation failure must come back before any
    // connection is attempted.
    let out = run_petshell(
        home.path(),
        &[
            "register",
            "--url",
            "http://127.0.0.1:1",
            "--username",
            "ab",
            "--password",
            "pikachu1",
        ],
    )?;
    assert!(!out.success);
    assert!(out.stderr.contains("username"));

    let out = run_petshell(
        home.path(),
        &[
            "login",
            "--url",
            "http://127.0.0.1:1",
            "--username",
            "ash",
            "--password",
            "",
        ],
    )?;
    assert!(!out.success);
    assert!(out.stderr.contains("password"));

    Ok(())
}

//! Development backend for the petshell client. Implements the auth and pet
//! surface the client consumes; not a production service.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::RwLock;

use petshell::model::{Mood, Pet, PetType};

#[path = "petshell_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "petshell_server/tokens.rs"]
mod tokens;
use self::tokens::*;
#[path = "petshell_server/persistence.rs"]
mod persistence;
use self::persistence::*;
#[path = "petshell_server/handlers_auth.rs"]
mod handlers_auth;
use self::handlers_auth::*;
#[path = "petshell_server/handlers_pets.rs"]
mod handlers_pets;
use self::handlers_pets::*;

/// Authenticated caller, injected by the bearer middleware.
#[derive(Clone, Debug)]
struct Subject {
    username: String,
    admin: bool,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct User {
    username: String,

    // Stored hash of the password.
    password_hash: String,

    /// Comma-delimited roles and permissions, as they travel in the token.
    authorities: String,

    created_at: String,
}

impl User {
    fn is_admin(&self) -> bool {
        self.authorities.split(',').any(|a| a == "ROLE_ADMIN")
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct PetRecord {
    owner: String,

    #[serde(flatten)]
    pet: Pet,
}

#[derive(Clone)]
struct AppState {
    data_dir: PathBuf,
    signing_key: [u8; 32],
    users: Arc<RwLock<HashMap<String, User>>>,
    pets: Arc<RwLock<HashMap<u64, PetRecord>>>,
    next_pet_id: Arc<AtomicU64>,
}

#[derive(Parser)]
#[command(name = "petshell-server")]
#[command(about = "Development virtual-pet backend", long_about = None)]
struct Args {
    /// Listen address; use port 0 for an ephemeral port
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write the bound address to this file once listening
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Data directory
    #[arg(long, default_value = "./petshell-data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("create data dir {}", args.data_dir.display()))?;

    let signing_key = load_or_create_signing_key(&args.data_dir).context("load signing key")?;
    let users = load_users(&args.data_dir).context("load users")?;
    let pets = load_pets(&args.data_dir).context("load pets")?;
    let next_pet_id = pets.keys().max().copied().unwrap_or(0) + 1;

    let state = Arc::new(AppState {
        data_dir: args.data_dir.clone(),
        signing_key,
        users: Arc::new(RwLock::new(users)),
        pets: Arc::new(RwLock::new(pets)),
        next_pet_id: Arc::new(AtomicU64::new(next_pet_id)),
    });

    let protected = Router::new()
        .route("/api/pets/my-pets", get(list_my_pets))
        .route("/api/pets/all", get(list_all_pets))
        .route("/api/pets", post(create_pet))
        .route(
            "/api/pets/:pet_id",
            get(get_pet).put(update_pet).delete(delete_pet),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    let app = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/log-in", post(log_in))
        .merge(protected)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("petshell-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("serve")?;

    Ok(())
}

async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };

    let Ok(value) = value.to_str() else {
        return unauthorized();
    };

    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };

    let Some(claims) = verify_token(&state.signing_key, token) else {
        return unauthorized();
    };

    let subject = {
        let users = state.users.read().await;
        let Some(user) = users.get(&claims.sub) else {
            return unauthorized();
        };
        Subject {
            username: user.username.clone(),
            admin: user.is_admin(),
        }
    };

    req.extensions_mut().insert(subject);
    next.run(req).await
}

fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}

use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct SignUpRequest {
    username: String,
    password: String,

    #[serde(rename = "roleRequestDTO", default)]
    role_request: Option<RoleRequest>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct RoleRequest {
    #[serde(rename = "roleListName", default)]
    role_list_name: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct LogInRequest {
    username: String,
    password: String,
}

fn authorities_for(roles: &[String]) -> String {
    if roles.iter().any(|r| r == "ADMIN") {
        return "ROLE_ADMIN,ROLE_USER,READ,WRITE,DELETE".to_string();
    }
    "ROLE_USER,READ,WRITE".to_string()
}

pub(super) async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignUpRequest>,
) -> Response {
    let username = req.username.trim().to_string();
    if username.len() < 3 {
        return validation_failed("username must be at least 3 characters");
    }
    if req.password.len() < 6 {
        return validation_failed("password must be at least 6 characters");
    }

    let mut users = state.users.write().await;
    if users.contains_key(&username) {
        return conflict("username already taken");
    }

    let roles = req
        .role_request
        .map(|r| r.role_list_name)
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| vec!["USER".to_string()]);
    let authorities = authorities_for(&roles);

    let user = User {
        username: username.clone(),
        password_hash: hash_password(&req.password),
        authorities: authorities.clone(),
        created_at: now_rfc3339(),
    };
    users.insert(username.clone(), user);

    if let Err(err) = persist_users(&state.data_dir, &users) {
        return internal_error(err);
    }

    let jwt = mint_token(&state.signing_key, &username, &authorities);
    Json(serde_json::json!({"jwt": jwt})).into_response()
}

pub(super) async fn log_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LogInRequest>,
) -> Response {
    let users = state.users.read().await;
    let Some(user) = users.get(req.username.trim()) else {
        return auth_rejected("Invalid username or password");
    };
    if user.password_hash != hash_password(&req.password) {
        return auth_rejected("Invalid username or password");
    }

    let jwt = mint_token(&state.signing_key, &user.username, &user.authorities);
    Json(serde_json::json!({"jwt": jwt})).into_response()
}

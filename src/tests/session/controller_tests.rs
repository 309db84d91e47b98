use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn forge(sub: &str, authorities: Option<&str>, exp: i64) -> String {
    let mut payload = serde_json::json!({"sub": sub, "exp": exp});
    if let Some(auth) = authorities {
        payload["authorities"] = auth.into();
    }
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
    format!("{}.{}.sig", header, body)
}

fn remote() -> RemoteConfig {
    RemoteConfig {
        base_url: "http://localhost:8080".to_string(),
    }
}

fn controller_in(dir: &std::path::Path) -> SessionController {
    let store = ClientStore::open(dir).unwrap();
    SessionController::new(store, remote(), false)
}

#[test]
fn restore_without_token_lands_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = controller_in(dir.path());
    assert_eq!(*session.status(), SessionStatus::Unknown);

    session.restore().unwrap();
    assert_eq!(*session.status(), SessionStatus::Unauthenticated);
}

#[test]
fn valid_token_restores_identity() {
    let dir = tempfile::tempdir().unwrap();
    let store = ClientStore::open(dir.path()).unwrap();
    let exp = OffsetDateTime::now_utc().unix_timestamp() + 3600;
    store
        .set_session_token(&remote(), &forge("ash", Some("ROLE_USER,READ"), exp))
        .unwrap();

    let mut session = controller_in(dir.path());
    session.restore().unwrap();

    let identity = session.status().identity().cloned().unwrap();
    assert_eq!(identity.subject_name, "ash");
    assert!(identity.roles.contains("USER"));
    assert!(identity.permissions.contains("READ"));
}

#[test]
fn expired_token_lands_unauthenticated_and_clears_storage() {
    let dir = tempfile::tempdir().unwrap();
    let store = ClientStore::open(dir.path()).unwrap();
    let exp = OffsetDateTime::now_utc().unix_timestamp() - 60;
    store
        .set_session_token(&remote(), &forge("ash", Some("ROLE_USER"), exp))
        .unwrap();

    let mut session = controller_in(dir.path());
    session.restore().unwrap();

    assert_eq!(*session.status(), SessionStatus::Unauthenticated);
    assert_eq!(store.get_session_token(&remote()).unwrap(), None);
}

#[test]
fn malformed_token_is_treated_like_expiry() {
    let dir = tempfile::tempdir().unwrap();
    let store = ClientStore::open(dir.path()).unwrap();
    store
        .set_session_token(&remote(), "garbage-not-a-token")
        .unwrap();

    let mut session = controller_in(dir.path());
    session.restore().unwrap();

    assert_eq!(*session.status(), SessionStatus::Unauthenticated);
    assert_eq!(store.get_session_token(&remote()).unwrap(), None);
}

#[test]
fn logout_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = ClientStore::open(dir.path()).unwrap();
    let exp = OffsetDateTime::now_utc().unix_timestamp() + 3600;
    store
        .set_session_token(&remote(), &forge("ash", None, exp))
        .unwrap();

    let mut session = controller_in(dir.path());
    session.restore().unwrap();
    assert!(session.status().is_authenticated());

    session.logout().unwrap();
    assert_eq!(*session.status(), SessionStatus::Unauthenticated);

    session.logout().unwrap();
    assert_eq!(*session.status(), SessionStatus::Unauthenticated);
    assert_eq!(store.get_session_token(&remote()).unwrap(), None);
}

#[test]
fn observe_denied_is_a_no_op_unless_configured() {
    let dir = tempfile::tempdir().unwrap();
    let store = ClientStore::open(dir.path()).unwrap();
    let exp = OffsetDateTime::now_utc().unix_timestamp() + 3600;
    store
        .set_session_token(&remote(), &forge("ash", None, exp))
        .unwrap();

    let mut session = controller_in(dir.path());
    session.restore().unwrap();
    assert!(!session.observe_denied().unwrap());
    assert!(session.status().is_authenticated());

    let mut forced = SessionController::new(ClientStore::open(dir.path()).unwrap(), remote(), true);
    forced.restore().unwrap();
    assert!(forced.observe_denied().unwrap());
    assert_eq!(*forced.status(), SessionStatus::Unauthenticated);
}

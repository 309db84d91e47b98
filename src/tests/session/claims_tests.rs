use super::*;

use base64::Engine as _;

use crate::session::derive_identity;

fn forge(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
    format!("{}.{}.sig", header, body)
}

#[test]
fn many_authorities_split_into_roles_and_permissions() {
    let token = forge(&serde_json::json!({
        "sub": "ash",
        "authorities": "ROLE_ADMIN,ROLE_USER,READ,WRITE,DELETE",
        "exp": 4_102_444_800i64,
    }));

    let claims = decode_claims(&token).unwrap();
    let identity = derive_identity(&claims);

    assert_eq!(identity.subject_name, "ash");
    assert_eq!(
        identity.roles.iter().cloned().collect::<Vec<_>>(),
        vec!["ADMIN".to_string(), "USER".to_string()]
    );
    assert_eq!(
        identity.permissions.iter().cloned().collect::<Vec<_>>(),
        vec!["DELETE".to_string(), "READ".to_string(), "WRITE".to_string()]
    );
}

#[test]
fn single_role_keeps_marker_stripped() {
    let token = forge(&serde_json::json!({
        "sub": "misty",
        "authorities": "ROLE_USER",
        "exp": 4_102_444_800i64,
    }));

    let identity = derive_identity(&decode_claims(&token).unwrap());
    assert_eq!(identity.roles.len(), 1);
    assert!(identity.roles.contains("USER"));
    assert!(identity.permissions.is_empty());
}

#[test]
fn absent_authorities_yield_empty_sets() {
    let token = forge(&serde_json::json!({
        "sub": "brock",
        "exp": 4_102_444_800i64,
    }));

    let identity = derive_identity(&decode_claims(&token).unwrap());
    assert!(identity.roles.is_empty());
    assert!(identity.permissions.is_empty());
}

#[test]
fn empty_authorities_string_yields_empty_sets() {
    let token = forge(&serde_json::json!({
        "sub": "brock",
        "authorities": "",
        "exp": 4_102_444_800i64,
    }));

    let identity = derive_identity(&decode_claims(&token).unwrap());
    assert!(identity.roles.is_empty());
    assert!(identity.permissions.is_empty());
}

#[test]
fn token_without_payload_segment_is_malformed() {
    let err = decode_claims("not-a-jwt").unwrap_err();
    assert!(matches!(err, MalformedToken::MissingPayload));
}

#[test]
fn payload_that_is_not_base64url_is_malformed() {
    let err = decode_claims("aGVhZGVy.!!!.sig").unwrap_err();
    assert!(matches!(err, MalformedToken::Payload(_)));
}

#[test]
fn payload_that_is_not_json_is_malformed() {
    let body = URL_SAFE_NO_PAD.encode(b"not json at all");
    let err = decode_claims(&format!("aGVhZGVy.{}.sig", body)).unwrap_err();
    assert!(matches!(err, MalformedToken::Claims(_)));
}

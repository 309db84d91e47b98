//! Compact JWTs signed with a keyed blake3 hash. The client never verifies
//! the signature; the server does on every protected call.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub(super) const TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub(super) struct Claims {
    pub(super) sub: String,
    pub(super) authorities: String,
    pub(super) iat: i64,
    pub(super) exp: i64,
}

pub(super) fn hash_password(password: &str) -> String {
    blake3::hash(password.as_bytes()).to_hex().to_string()
}

pub(super) fn mint_token(key: &[u8; 32], sub: &str, authorities: &str) -> String {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        authorities: authorities.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECONDS,
    };

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"B3K","typ":"JWT"}"#);
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).expect("serialize claims"));
    let signing_input = format!("{}.{}", header, payload);
    let sig = blake3::keyed_hash(key, signing_input.as_bytes());
    format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(sig.as_bytes()))
}

/// Signature and expiry check; returns the claims only when both hold.
pub(super) fn verify_token(key: &[u8; 32], token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let header = segments.next()?;
    let payload = segments.next()?;
    let sig = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let signing_input = format!("{}.{}", header, payload);
    let expected = blake3::keyed_hash(key, signing_input.as_bytes());
    let given = URL_SAFE_NO_PAD.decode(sig).ok()?;
    if given.as_slice() != expected.as_bytes() {
        return None;
    }

    let claims: Claims = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).ok()?).ok()?;
    if claims.exp <= time::OffsetDateTime::now_utc().unix_timestamp() {
        return None;
    }
    Some(claims)
}

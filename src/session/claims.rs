//! Credential codec: decode (not verify) the payload of a compact JWT.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Authorities entries carrying this prefix are roles; the prefix is stripped
/// for display. Everything else is a permission.
pub const ROLE_MARKER: &str = "ROLE_";

#[derive(Debug, thiserror::Error)]
pub enum MalformedToken {
    #[error("token is not a compact JWT")]
    MissingPayload,

    #[error("token payload is not valid base64url: {0}")]
    Payload(#[from] base64::DecodeError),

    #[error("token claims are not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct TokenClaims {
    /// Subject: the username the token was issued to.
    pub sub: String,

    /// Comma-delimited roles and permissions.
    #[serde(default)]
    pub authorities: Option<String>,

    /// Expiry as unix seconds.
    pub exp: i64,
}

/// Pure transform from token string to claims. No signature check, no clock
/// access, no network.
pub fn decode_claims(token: &str) -> Result<TokenClaims, MalformedToken> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(MalformedToken::MissingPayload),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    let claims: TokenClaims = serde_json::from_slice(&bytes)?;
    Ok(claims)
}

#[cfg(test)]
#[path = "../tests/session/claims_tests.rs"]
mod tests;

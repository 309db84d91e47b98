//! Client-side session model: credential decoding, identity derivation, the
//! session lifecycle state machine, and the route guard.

use std::collections::BTreeSet;

mod claims;
pub use self::claims::{MalformedToken, ROLE_MARKER, TokenClaims, decode_claims};
mod controller;
pub use self::controller::SessionController;
mod guard;
pub use self::guard::{RouteDecision, route};

/// Who the current session belongs to, derived from the token claims.
/// Recomputed whenever the token changes; never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub subject_name: String,
    pub roles: BTreeSet<String>,
    pub permissions: BTreeSet<String>,
}

/// Split the delimited authorities claim into roles (marker-prefixed, marker
/// stripped) and permissions (everything else).
pub fn derive_identity(claims: &TokenClaims) -> Identity {
    let mut roles = BTreeSet::new();
    let mut permissions = BTreeSet::new();

    if let Some(authorities) = &claims.authorities {
        for entry in authorities.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match entry.strip_prefix(ROLE_MARKER) {
                Some(role) => {
                    roles.insert(role.to_string());
                }
                None => {
                    permissions.insert(entry.to_string());
                }
            }
        }
    }

    Identity {
        subject_name: claims.sub.clone(),
        roles,
        permissions,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Before the first credential check has completed.
    Unknown,
    Authenticating,
    Authenticated(Identity),
    Unauthenticated,
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionStatus::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

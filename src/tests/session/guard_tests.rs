use super::*;

use std::collections::BTreeSet;

use crate::session::Identity;

fn identity() -> Identity {
    Identity {
        subject_name: "ash".to_string(),
        roles: BTreeSet::new(),
        permissions: BTreeSet::new(),
    }
}

#[test]
fn unknown_and_authenticating_render_the_spinner() {
    assert_eq!(route(&SessionStatus::Unknown), RouteDecision::Spinner);
    assert_eq!(route(&SessionStatus::Authenticating), RouteDecision::Spinner);
}

#[test]
fn authenticated_renders_protected_content() {
    assert_eq!(
        route(&SessionStatus::Authenticated(identity())),
        RouteDecision::RenderProtected
    );
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(
        route(&SessionStatus::Unauthenticated),
        RouteDecision::RedirectToLogin
    );
}

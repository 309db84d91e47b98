use super::SessionStatus;

/// What a protected view should do for a given session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    RenderProtected,
    Spinner,
    RedirectToLogin,
}

/// Pure route guard: no state of its own.
pub fn route(status: &SessionStatus) -> RouteDecision {
    match status {
        SessionStatus::Unknown | SessionStatus::Authenticating => RouteDecision::Spinner,
        SessionStatus::Authenticated(_) => RouteDecision::RenderProtected,
        SessionStatus::Unauthenticated => RouteDecision::RedirectToLogin,
    }
}

#[cfg(test)]
#[path = "../tests/session/guard_tests.rs"]
mod tests;

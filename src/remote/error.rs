use reqwest::StatusCode;

/// Failure classes the callers branch on: a denied protected call may force a
/// logout (policy), everything else is surfaced and retried by the user.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401/403 on a non-exempt path. Observed here, acted on by the session
    /// layer according to configuration.
    #[error("access denied ({status}) for {path}")]
    Denied { status: StatusCode, path: String },

    /// Any other non-success response, with the server's message when the
    /// body carried one.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// Transport failure, including the request timeout.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_denied(&self) -> bool {
        matches!(self, ApiError::Denied { .. })
    }
}

use reqwest::{Method, StatusCode};

use super::*;

impl ApiClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.remote.base_url, path)
    }

    pub(super) fn is_exempt(path: &str) -> bool {
        AUTH_EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
    }

    /// Start a request, attaching the bearer credential unless the path is
    /// auth-exempt.
    pub(super) fn request(&self, method: Method, path: &str) -> reqwest::blocking::RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if !Self::is_exempt(path) {
            if let Some(token) = &self.token {
                req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
            }
        }
        req
    }

    /// Classify a response. 401/403 on protected paths become `Denied`; other
    /// failures become `Server` carrying the body's message when present.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        path: &str,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if !Self::is_exempt(path)
            && (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN)
        {
            return Err(ApiError::Denied {
                status,
                path: path.to_string(),
            });
        }

        let message = resp
            .text()
            .ok()
            .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or_else(|| format!("{} for {}", status, path));

        Err(ApiError::Server { status, message })
    }
}

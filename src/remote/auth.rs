//! Authentication endpoints. These are auth-exempt: no bearer header, and a
//! 401 here is a rejected credential rather than a denied protected call.

use reqwest::Method;

use super::*;

impl ApiClient {
    pub fn log_in(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let path = "/auth/log-in";
        let resp = self
            .request(Method::POST, path)
            .json(&LogInRequest { username, password })
            .send()?;
        let out: AuthResponse = self.ensure_ok(resp, path)?.json()?;
        Ok(out)
    }

    pub fn sign_up(
        &self,
        username: &str,
        password: &str,
        roles: &[String],
    ) -> Result<AuthResponse, ApiError> {
        let path = "/auth/sign-up";
        let resp = self
            .request(Method::POST, path)
            .json(&SignUpRequest {
                username,
                password,
                role_request: RoleRequest {
                    role_list_name: roles,
                },
            })
            .send()?;
        let out: AuthResponse = self.ensure_ok(resp, path)?.json()?;
        Ok(out)
    }
}

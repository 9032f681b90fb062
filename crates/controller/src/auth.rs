//! Session login flow

use serde::Deserialize;
use serde_json::json;
use sitedesk_client::{ApiRequest, Transport};
use sitedesk_core::{DeskError, DeskResult};
use sitedesk_schema::paths;

/// Shown when the backend rejects a login without saying why
pub const GENERIC_LOGIN_ERROR: &str = "Login failed";

/// Shown when the backend could not be reached
pub const NETWORK_ERROR: &str = "Network error. Please try again later.";

/// Outcome of a session check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    LoggedIn,
    LoggedOut,
    /// Neither a 403 nor a positive answer
    Unknown,
}

#[derive(Debug, Default, Deserialize)]
struct CheckLoginBody {
    #[serde(default)]
    logged_in: bool,
}

#[derive(Debug, Default, Deserialize)]
struct LoginBody {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Login, logout and session checks
#[derive(Debug, Clone)]
pub struct AuthController<T> {
    transport: T,
}

impl<T: Transport> AuthController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask the backend whether the session is authenticated
    pub async fn check_login(&self) -> DeskResult<LoginStatus> {
        let response = self.transport.send(ApiRequest::get(paths::CHECK_LOGIN)).await?;

        if response.status == 403 {
            return Ok(LoginStatus::LoggedOut);
        }
        if response.is_success() {
            let body: CheckLoginBody = response.json(paths::CHECK_LOGIN)?;
            if body.logged_in {
                return Ok(LoginStatus::LoggedIn);
            }
        }

        tracing::error!("Unexpected session check answer: {}", response.status);
        Ok(LoginStatus::Unknown)
    }

    /// Sign in; credentials are trimmed before sending
    ///
    /// The backend answers `{"status": "Success"}` on success. Anything else
    /// is a `LoginRejected` carrying the server's `error` text if it sent one.
    pub async fn login(&self, login: &str, password: &str) -> DeskResult<()> {
        let body = json!({"login": login.trim(), "password": password.trim()});
        let response = self
            .transport
            .send(ApiRequest::post(paths::LOGIN, body))
            .await?;

        let body: LoginBody = response.json(paths::LOGIN)?;
        if body.status.as_deref() == Some("Success") {
            tracing::info!("Logged in as {}", login.trim());
            return Ok(());
        }

        let reason = body
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| GENERIC_LOGIN_ERROR.to_string());
        tracing::warn!("Login rejected: {}", reason);
        Err(DeskError::LoginRejected(reason))
    }

    /// End the session
    pub async fn logout(&self) -> DeskResult<()> {
        let response = self
            .transport
            .send(ApiRequest::post(paths::LOGOUT, json!({})))
            .await?;
        if !response.is_success() {
            tracing::error!("Logout failed: {}", response.status);
            return Err(response.into_error(paths::LOGOUT));
        }
        tracing::info!("Logged out");
        Ok(())
    }
}

/// Text for the login error modal
pub fn login_error_message(err: &DeskError) -> String {
    match err {
        DeskError::LoginRejected(reason) => reason.clone(),
        DeskError::Network(_) | DeskError::Decode { .. } => NETWORK_ERROR.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedesk_client::{HttpMethod, ScriptedTransport};

    fn auth() -> AuthController<ScriptedTransport> {
        AuthController::new(ScriptedTransport::new())
    }

    #[tokio::test]
    async fn test_check_login_forbidden_is_logged_out() {
        let auth = auth();
        auth.transport().respond(403, json!({"detail": "no"}));
        assert_eq!(auth.check_login().await.unwrap(), LoginStatus::LoggedOut);
    }

    #[tokio::test]
    async fn test_check_login_logged_in() {
        let auth = auth();
        auth.transport().respond(200, json!({"logged_in": true}));
        assert_eq!(auth.check_login().await.unwrap(), LoginStatus::LoggedIn);
    }

    #[tokio::test]
    async fn test_check_login_unexpected() {
        let auth = auth();
        auth.transport()
            .respond(200, json!({"logged_in": false}))
            .respond(502, json!({}));
        assert_eq!(auth.check_login().await.unwrap(), LoginStatus::Unknown);
        assert_eq!(auth.check_login().await.unwrap(), LoginStatus::Unknown);
    }

    #[tokio::test]
    async fn test_login_success() {
        let auth = auth();
        auth.transport().respond(200, json!({"status": "Success"}));
        auth.login(" admin ", "secret ").await.unwrap();

        let request = auth.transport().last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/api/login/");
        assert_eq!(
            request.body,
            Some(json!({"login": "admin", "password": "secret"}))
        );
        assert!(request.csrf);
    }

    #[tokio::test]
    async fn test_login_rejected_with_reason() {
        let auth = auth();
        auth.transport()
            .respond(400, json!({"error": "Wrong password"}));
        let err = auth.login("admin", "nope").await.unwrap_err();
        assert_eq!(login_error_message(&err), "Wrong password");
    }

    #[tokio::test]
    async fn test_login_rejected_without_reason() {
        let auth = auth();
        auth.transport().respond(401, json!({}));
        let err = auth.login("admin", "nope").await.unwrap_err();
        assert_eq!(login_error_message(&err), GENERIC_LOGIN_ERROR);
    }

    #[tokio::test]
    async fn test_login_network_failure() {
        let auth = auth();
        auth.transport().fail("connection refused");
        let err = auth.login("admin", "secret").await.unwrap_err();
        assert_eq!(login_error_message(&err), NETWORK_ERROR);
    }

    #[tokio::test]
    async fn test_logout() {
        let auth = auth();
        auth.transport().respond_text(200, "").respond(500, json!({}));
        auth.logout().await.unwrap();
        assert_eq!(auth.logout().await.unwrap_err().status(), Some(500));
    }
}

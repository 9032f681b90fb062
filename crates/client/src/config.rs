//! Client configuration
//!
//! Loaded from an optional TOML file; anything missing falls back to the
//! defaults of a local development backend.
//!
//! ```toml
//! base_url = "https://desk.example.com"
//! csrf_cookie = "csrftoken"
//! csrf_header = "X-CSRFToken"
//! ```

use serde::{Deserialize, Serialize};
use sitedesk_core::{DeskError, DeskResult, Validatable};
use std::path::Path;

/// Default backend origin
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Connection settings for the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, without a trailing `/api`
    pub base_url: String,

    /// Cookie holding the CSRF token
    pub csrf_cookie: String,

    /// Header the token is echoed in
    pub csrf_header: String,

    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            user_agent: format!("sitedesk/{}", sitedesk_core::VERSION),
        }
    }
}

impl ClientConfig {
    /// Read a config file
    pub fn load(path: &Path) -> DeskResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DeskError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| DeskError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!("Loaded client config from {}", path.display());
        Ok(config)
    }

    /// Read a config file if one was given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> DeskResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Override the backend origin
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Absolute URL for a backend path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Validatable for ClientConfig {
    fn validate(&self) -> DeskResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DeskError::InvalidConfig(format!(
                "base_url '{}' must start with http:// or https://",
                self.base_url
            )));
        }
        if self.csrf_cookie.trim().is_empty() {
            return Err(DeskError::InvalidConfig(
                "csrf_cookie cannot be empty".to_string(),
            ));
        }
        if self.csrf_header.trim().is_empty() {
            return Err(DeskError::InvalidConfig(
                "csrf_header cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

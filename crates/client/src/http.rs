//! reqwest-backed transport
//!
//! Keeps one cookie jar for the session: the login response sets the
//! session and CSRF cookies, later requests send them back and mutating
//! ones echo the CSRF token in a header.

use crate::config::ClientConfig;
use crate::csrf::read_cookie;
use crate::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use sitedesk_core::{DeskError, DeskResult};
use std::sync::Arc;

/// HTTP transport with a shared session cookie jar
#[derive(Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::Client,
    jar: Arc<Jar>,
}

impl HttpTransport {
    /// Build a client for the configured backend
    pub fn new(config: ClientConfig) -> DeskResult<Self> {
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DeskError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            jar,
        })
    }

    /// Settings this transport was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current CSRF token from the cookie jar
    pub fn csrf_token(&self) -> Option<String> {
        let url = Url::parse(&self.config.base_url).ok()?;
        let header = self.jar.cookies(&url)?;
        let header = header.to_str().ok()?;
        read_cookie(header, &self.config.csrf_cookie).filter(|token| !token.is_empty())
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> DeskResult<ApiResponse> {
        let url = self.config.url(&request.path);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        if request.csrf {
            match self.csrf_token() {
                Some(token) => builder = builder.header(self.config.csrf_header.as_str(), token),
                None => tracing::debug!("No {} cookie for {}", self.config.csrf_cookie, request),
            }
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} failed: {}", request, e);
            DeskError::network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response of {}: {}", request, e);
            DeskError::network(e.to_string())
        })?;

        tracing::debug!("{} -> {}", request, status);
        Ok(ApiResponse::new(status, body))
    }
}

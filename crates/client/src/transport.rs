//! Transport seam
//!
//! Controllers talk to the backend through `Transport` only. A request that
//! never got an answer is an `Err(DeskError::Network)`; any HTTP status,
//! success or not, comes back as an `ApiResponse` for the caller to judge.

use serde::de::DeserializeOwned;
use serde_json::Value;
use sitedesk_core::{DeskError, DeskResult};
use std::fmt;
use std::future::Future;

// ============================================================================
// HttpMethod
// ============================================================================

/// Request methods used by the backend contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method need the CSRF header
    pub fn is_mutating(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ApiRequest
// ============================================================================

/// One backend request, relative to the configured origin
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    /// Attach the CSRF header read from the cookie jar
    pub csrf: bool,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            csrf: method.is_mutating(),
        }
    }

    /// GET, credentials included, no CSRF header
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path, None)
    }

    /// POST with a JSON body
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path, Some(body))
    }

    /// PUT with a JSON body
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Put, path, Some(body))
    }

    /// DELETE without a body
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path, None)
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

// ============================================================================
// ApiResponse
// ============================================================================

/// Status and raw body of a backend answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response with a JSON body
    pub fn json_body(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    /// Any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Exactly 201 Created
    pub fn is_created(&self) -> bool {
        self.status == 201
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self, path: &str) -> DeskResult<T> {
        serde_json::from_str(&self.body).map_err(|e| DeskError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Turn a non-success answer into an error for `path`
    pub fn into_error(self, path: &str) -> DeskError {
        DeskError::http(self.status, path, self.body)
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// Sends requests to the backend
///
/// Implementations never retry and never time out a request.
pub trait Transport {
    /// Send one request and wait for its answer
    fn send(&self, request: ApiRequest) -> impl Future<Output = DeskResult<ApiResponse>> + Send;
}

/// Several controllers can share one session by borrowing its transport
impl<T: Transport> Transport for &T {
    fn send(&self, request: ApiRequest) -> impl Future<Output = DeskResult<ApiResponse>> + Send {
        (**self).send(request)
    }
}

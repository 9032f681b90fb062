//! # SiteDesk Client
//!
//! Everything between the controllers and the REST backend:
//!
//! - **Transport**: the `Transport` seam plus request/response types
//! - **HttpTransport**: reqwest client with a session cookie jar
//! - **ScriptedTransport**: in-memory transport replaying canned responses
//!   (`testing` feature)
//! - **CSRF**: reading the anti-forgery token out of a cookie header
//! - **Config**: base URL and CSRF names, loaded from TOML
//!

pub mod config;
pub mod csrf;
pub mod http;
#[cfg(any(test, feature = "testing"))]
pub mod scripted;
pub mod transport;

pub use config::ClientConfig;
pub use csrf::read_cookie;
pub use http::HttpTransport;
#[cfg(any(test, feature = "testing"))]
pub use scripted::ScriptedTransport;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, Transport};

pub use sitedesk_core::{DeskError, DeskResult};

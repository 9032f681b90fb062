//! # SiteDesk CLI
//!
//! Command-line interface for SiteDesk.
//!
//! Runs the same page flows as the desktop app against a backend, one
//! command per invocation.
//!
//! ## Commands
//!
//! - `collections` - List the collections and what they allow
//! - `list` - Print the rows of a collection
//! - `add` / `edit` / `delete` - Change records
//! - `wtt start|stop` - Record the start or end of a working day
//! - `check-login` - Report the session state
//! - `apply` - Send an application through the public form
//!

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Cli, Command, WttAction, parse_assignment};
pub use commands::run;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

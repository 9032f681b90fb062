//! # SiteDesk UI
//!
//! Dioxus Desktop UI for SiteDesk.
//!
//! Staff sign in, browse and edit the business collections (applications,
//! employees, materials, objects, users...) and record working days. The
//! intake form is available without signing in.
//!
//! ## Features
//!
//! - One generic table page per catalog collection
//! - Add, edit and delete dialogs driven by the collection's form fields
//! - Work-time start/end of day by personnel number
//! - Public application intake form
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use sitedesk_client::ClientConfig;

// Re-export main components
pub use app::App;
pub use pages::{EntityTablePage, IntakePage, LoginPage, TimeTrackerPage};
pub use state::{APP_STATE, AppState, Page, StatusMessage, UiState, init_app_state};

// Re-export components
pub use components::{DataTable, FormDialog, Select, SelectOption, TextArea, TextInput};

use sitedesk_core::DeskResult;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "SiteDesk";

/// Application display title
pub const TITLE: &str = "SiteDesk - Staff, Materials and Time";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the SiteDesk desktop application
///
/// Creates the backend client from `config`, then starts the UI. Returns
/// an error only when the client cannot be built.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     sitedesk_ui::launch(ClientConfig::default())?;
///     Ok(())
/// }
/// ```
pub fn launch(config: ClientConfig) -> DeskResult<()> {
    launch_with_config(config, TITLE, 1400.0, 900.0)
}

/// Launch with custom window title and size
pub fn launch_with_config(
    config: ClientConfig,
    title: &str,
    width: f64,
    height: f64,
) -> DeskResult<()> {
    tracing::info!("Starting {} v{} against {}", NAME, VERSION, config.base_url);

    // Initialize application state
    init_app_state(config)?;

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(900.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "SiteDesk");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("SiteDesk"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!get_styles().is_empty());
        for class in [".data-table", ".modal-overlay", ".sidebar", ".status-bar"] {
            assert!(STYLES.contains(class), "missing {}", class);
        }
    }
}

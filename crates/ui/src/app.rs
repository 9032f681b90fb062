//! Main Application Component for SiteDesk
//!
//! This module contains the root Dioxus component that renders the entire application.
//! It provides the main layout structure: toolbar, navigation sidebar, content area
//! and status bar.

use dioxus::prelude::*;
use sitedesk_core::StatusLevel;

use crate::pages::{EntityTablePage, IntakePage, LoginPage, TimeTrackerPage};
use crate::state::{self, APP_STATE, Page};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("SiteDesk UI initialized");
    });

    rsx! {
        div {
            class: "app-container",

            // Top Toolbar
            Toolbar {}

            // Main content area with sidebar
            div {
                class: "app-body",

                // Left Sidebar (navigation)
                Sidebar {}

                // Main Content Area
                MainContent {}
            }

            // Status Bar
            StatusBar {}
        }
    }
}

// ============================================================================
// Toolbar Component
// ============================================================================

/// Top toolbar with the title and session actions
#[component]
fn Toolbar() -> Element {
    let state = APP_STATE.read();
    let logged_in = state.is_logged_in();
    let title = state.ui.active_page.display_name();
    drop(state);

    let on_logout = move |_: MouseEvent| {
        spawn(async move {
            let result = match state::auth_controller() {
                Ok(auth) => auth.logout().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => APP_STATE.write().signed_out(),
                Err(e) => {
                    tracing::error!("Logout failed: {}", e);
                    APP_STATE
                        .write()
                        .ui
                        .set_status("Could not sign out. Please try again.", StatusLevel::Error);
                }
            }
        });
    };

    rsx! {
        header {
            class: "toolbar",

            div {
                class: "toolbar-brand",
                span { class: "toolbar-logo", "🏗️" }
                span { "SiteDesk" }
            }

            span { class: "toolbar-title", "{title}" }

            div { class: "toolbar-spacer" }

            if logged_in {
                ToolbarButton {
                    icon: "🚪",
                    label: "Sign out",
                    onclick: on_logout,
                }
            }
        }
    }
}

/// Toolbar button component
#[component]
fn ToolbarButton(
    icon: &'static str,
    label: &'static str,
    #[props(default = false)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "toolbar-button",
            disabled: disabled,
            title: "{label}",
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            span { "{icon}" }
            span { "{label}" }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Left sidebar with navigation
#[component]
fn Sidebar() -> Element {
    let state = APP_STATE.read();
    let collapsed = state.ui.sidebar_collapsed;
    let current_page = state.ui.active_page;
    let logged_in = state.is_logged_in();
    drop(state);

    rsx! {
        aside {
            class: if collapsed { "sidebar collapsed" } else { "sidebar" },

            // Header with toggle button
            div {
                class: "sidebar-header",

                if !collapsed {
                    span { "Navigation" }
                }

                button {
                    class: "sidebar-toggle",
                    title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| {
                        APP_STATE.write().ui.toggle_sidebar();
                    },
                    if collapsed { "☰" } else { "✕" }
                }
            }

            nav {
                class: "sidebar-nav",

                if logged_in {
                    for page in Page::STAFF_PAGES {
                        SidebarItem {
                            key: "{page:?}",
                            page: page,
                            current: current_page,
                            collapsed: collapsed,
                        }
                    }

                    div { class: "sidebar-divider" }
                } else {
                    SidebarItem {
                        page: Page::Login,
                        current: current_page,
                        collapsed: collapsed,
                    }
                }

                SidebarItem {
                    page: Page::Intake,
                    current: current_page,
                    collapsed: collapsed,
                }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(page: Page, current: Page, collapsed: bool) -> Element {
    let is_active = page == current;
    let icon = page.icon();
    let name = page.display_name();

    rsx! {
        button {
            class: if is_active { "sidebar-item active" } else { "sidebar-item" },
            title: "{name}",
            onclick: move |_| {
                let mut state = APP_STATE.write();
                state.ui.clear_status();
                state.ui.navigate(page);
            },
            span { class: "sidebar-icon", "{icon}" }
            if !collapsed {
                span { class: "sidebar-label", "{name}" }
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the active page
#[component]
fn MainContent() -> Element {
    let state = APP_STATE.read();
    let current_page = state.ui.active_page;
    let logged_in = state.is_logged_in();
    drop(state);

    // Staff pages fall back to the login screen until a session exists
    let page = if current_page.requires_login() && !logged_in {
        Page::Login
    } else {
        current_page
    };

    rsx! {
        main {
            class: "main-content",

            match page {
                Page::Login => rsx! { LoginPage {} },
                Page::Intake => rsx! { IntakePage {} },
                Page::WorkTime => rsx! { TimeTrackerPage {} },
                other => match other.collection() {
                    Some(collection) => rsx! {
                        EntityTablePage { key: "{collection}", collection: collection.to_string() }
                    },
                    None => rsx! {},
                },
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let session = if state.is_logged_in() {
        "Signed in"
    } else {
        "Not signed in"
    };
    drop(state);

    rsx! {
        footer {
            class: "status-bar",

            // Status message
            if let Some(msg) = status {
                span {
                    class: match msg.level {
                        StatusLevel::Info => "status-info",
                        StatusLevel::Success => "status-success",
                        StatusLevel::Warning => "status-warning",
                        StatusLevel::Error => "status-error",
                    },
                    "{msg.text}"
                }
            } else {
                span { "Ready" }
            }

            div { class: "toolbar-spacer" }

            span { "{session}" }
        }
    }
}

//! Error and success message dialog

use dioxus::prelude::*;
use sitedesk_controller::{ModalKind, Notice};
use sitedesk_core::StatusLevel;

use super::ModalFrame;

#[derive(Props, Clone, PartialEq)]
pub struct NoticeDialogProps {
    pub notice: Notice,

    pub on_close: EventHandler<()>,
}

/// Message modal; closes on OK or backdrop click
#[component]
pub fn NoticeDialog(props: NoticeDialogProps) -> Element {
    let on_close = props.on_close;
    let (icon, class, title) = notice_style(props.notice.level);

    rsx! {
        ModalFrame {
            title: title.to_string(),
            class: Some(class.to_string()),
            on_close: move |_| on_close.call(()),

            div {
                class: "modal-body",

                div {
                    class: "notice-message",
                    span { class: "notice-icon", "{icon}" }
                    p { "{props.notice.message}" }
                }

                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        onclick: move |_| on_close.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}

/// Icon, panel class and title for a notice level
fn notice_style(level: StatusLevel) -> (&'static str, &'static str, &'static str) {
    match level {
        StatusLevel::Info => ("ℹ️", "modal-info", "Notice"),
        StatusLevel::Success => ("✅", "modal-success", ModalKind::Success.title()),
        StatusLevel::Warning => ("⚠️", "modal-warning", "Warning"),
        StatusLevel::Error => ("❌", "modal-error", ModalKind::Error.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_style() {
        assert_eq!(notice_style(StatusLevel::Error), ("❌", "modal-error", "Error"));
        assert_eq!(notice_style(StatusLevel::Success).2, "Done");
    }
}

//! Modal backdrop and panel

use dioxus::prelude::*;

/// Properties for ModalFrame component
#[derive(Props, Clone, PartialEq)]
pub struct ModalFrameProps {
    /// Panel title
    pub title: String,

    /// Extra class for the panel (`modal-error`, `modal-success`, ...)
    #[props(default)]
    pub class: Option<String>,

    /// Called when the backdrop or the close button is clicked
    pub on_close: EventHandler<()>,

    pub children: Element,
}

/// Centered panel over a dimmed backdrop
#[component]
pub fn ModalFrame(props: ModalFrameProps) -> Element {
    let panel_class = match &props.class {
        Some(extra) => format!("modal-panel {}", extra),
        None => "modal-panel".to_string(),
    };

    rsx! {
        div {
            class: "modal-overlay",

            // Backdrop
            div {
                class: "modal-backdrop",
                onclick: move |_| props.on_close.call(()),
            }

            div {
                class: "{panel_class}",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { "{props.title}" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| props.on_close.call(()),
                        "✕"
                    }
                }

                {props.children}
            }
        }
    }
}

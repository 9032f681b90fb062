//! # Work Time Page
//!
//! The work-time table plus a personnel number input with start and end of
//! day buttons. Marks share the table's page state, so their error and
//! success modals and the reload show up in the same view.

use dioxus::prelude::*;
use sitedesk_controller::{DayMark, TableState};
use sitedesk_schema::catalog::WORK_TIME;

use crate::components::TextInput;
use crate::pages::table_page::TableView;
use crate::state;

/// Work-time page
#[component]
pub fn TimeTrackerPage() -> Element {
    let page: Signal<Option<TableState>> = use_signal(|| None);
    let mut personnel_number = use_signal(String::new);
    let mut is_sending = use_signal(|| false);

    let mut mark = move |day: DayMark| {
        if *is_sending.peek() {
            return;
        }
        let number = personnel_number.peek().clone();
        is_sending.set(true);
        spawn(async move {
            send_mark(page, day, number).await;
            is_sending.set(false);
        });
    };

    let sending = *is_sending.read();

    rsx! {
        div {
            class: "time-tracker-page",

            div {
                class: "time-tracker-bar",

                TextInput {
                    value: personnel_number.read().clone(),
                    placeholder: Some("Personnel number".to_string()),
                    on_change: move |v| personnel_number.set(v),
                }

                button {
                    class: "btn btn-primary",
                    disabled: sending,
                    onclick: move |_| mark(DayMark::Start),
                    "▶ Start day"
                }

                button {
                    class: "btn btn-secondary",
                    disabled: sending,
                    onclick: move |_| mark(DayMark::End),
                    "■ End day"
                }
            }

            TableView { collection: WORK_TIME.to_string(), page: page }
        }
    }
}

/// Send a day mark against the current page state and store the result
async fn send_mark(mut page: Signal<Option<TableState>>, day: DayMark, number: String) {
    let tracker = match state::time_tracker_controller() {
        Ok(tracker) => tracker,
        Err(e) => {
            tracing::error!("Work-time controller unavailable: {}", e);
            return;
        }
    };
    let Some(mut current) = page.peek().clone() else {
        return;
    };

    let result = match day {
        DayMark::Start => tracker.start_day(&mut current, &number).await,
        DayMark::End => tracker.end_day(&mut current, &number).await,
    };
    if let Err(e) = result {
        tracing::warn!("Day mark for {} failed: {}", number, e);
    }
    page.set(Some(current));
}

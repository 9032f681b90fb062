//! Work-time tracker page
//!
//! The work-time table is an ordinary collection page (list and edit go
//! through `TableController`) plus two buttons that open and close a
//! person's working day.

use crate::state::TableState;
use crate::table::{ERROR_MESSAGE, SUCCESS_MESSAGE, TableController};
use serde_json::json;
use sitedesk_client::{ApiRequest, Transport};
use sitedesk_core::DeskResult;
use sitedesk_schema::{Catalog, catalog::WORK_TIME, paths};

/// Start or end of a working day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    Start,
    End,
}

impl DayMark {
    fn path(&self) -> &'static str {
        match self {
            DayMark::Start => paths::WTT_START,
            DayMark::End => paths::WTT_STOP,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DayMark::Start => "start",
            DayMark::End => "end",
        }
    }
}

/// Controller for the work-time page
#[derive(Debug, Clone)]
pub struct TimeTrackerController<T> {
    table: TableController<T>,
}

impl<T: Transport> TimeTrackerController<T> {
    pub fn from_catalog(catalog: &Catalog, transport: T) -> DeskResult<Self> {
        Ok(Self {
            table: TableController::from_catalog(catalog, WORK_TIME, transport)?,
        })
    }

    /// Table operations (load, select, edit)
    pub fn table(&self) -> &TableController<T> {
        &self.table
    }

    pub fn new_state(&self) -> TableState {
        self.table.new_state()
    }

    /// Open today's entry for a personnel number
    pub async fn start_day(&self, state: &mut TableState, personnel_number: &str) -> DeskResult<()> {
        self.mark(state, DayMark::Start, personnel_number).await
    }

    /// Close today's entry for a personnel number
    pub async fn end_day(&self, state: &mut TableState, personnel_number: &str) -> DeskResult<()> {
        self.mark(state, DayMark::End, personnel_number).await
    }

    /// Send a day mark; blank input sends nothing
    async fn mark(
        &self,
        state: &mut TableState,
        mark: DayMark,
        personnel_number: &str,
    ) -> DeskResult<()> {
        let personnel_number = personnel_number.trim();
        if personnel_number.is_empty() {
            tracing::debug!("Ignoring day {} without a personnel number", mark.name());
            return Ok(());
        }

        let request = ApiRequest::post(
            mark.path(),
            json!({"personnelNumber": personnel_number}),
        );
        let outcome = match self.table.transport().send(request).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => {
                tracing::error!(
                    "Day {} for {} rejected with {}: {}",
                    mark.name(),
                    personnel_number,
                    response.status,
                    response.body
                );
                Err(response.into_error(mark.path()))
            }
            Err(e) => {
                tracing::error!("Day {} for {} failed: {}", mark.name(), personnel_number, e);
                Err(e)
            }
        };

        if let Err(e) = outcome {
            state.show_error(ERROR_MESSAGE);
            return Err(e);
        }

        tracing::info!("Day {} recorded for {}", mark.name(), personnel_number);
        state.show_success(SUCCESS_MESSAGE);
        self.table.refresh_after_save(state).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ModalKind;
    use sitedesk_client::{HttpMethod, ScriptedTransport};

    fn tracker() -> TimeTrackerController<ScriptedTransport> {
        TimeTrackerController::from_catalog(&Catalog::builtin(), ScriptedTransport::new()).unwrap()
    }

    #[tokio::test]
    async fn test_start_day_posts_and_reloads() {
        let tracker = tracker();
        let mut state = tracker.new_state();
        tracker
            .table()
            .transport()
            .respond(201, json!({"status": "started"}))
            .respond(200, json!([]));

        tracker.start_day(&mut state, " T-17 ").await.unwrap();

        let transport = tracker.table().transport();
        let post = &transport.requests()[0];
        assert_eq!(post.path, "/api/wtt/start/");
        assert_eq!(post.body, Some(json!({"personnelNumber": "T-17"})));
        assert_eq!(transport.count(HttpMethod::Get, "/api/wtt/listWTT/"), 1);
        assert!(state.modals.is_visible(ModalKind::Success));
    }

    #[tokio::test]
    async fn test_blank_personnel_number_is_ignored() {
        let tracker = tracker();
        let mut state = tracker.new_state();
        tracker.end_day(&mut state, "   ").await.unwrap();
        assert!(tracker.table().transport().requests().is_empty());
        assert!(!state.modals.any_visible());
    }

    #[tokio::test]
    async fn test_recorded_day_survives_failed_reload() {
        let tracker = tracker();
        let mut state = tracker.new_state();
        tracker
            .table()
            .transport()
            .respond(200, json!({"status": "started"}))
            .respond(500, json!({}));

        tracker.start_day(&mut state, "T-17").await.unwrap();

        assert_eq!(state.modals.visible(), vec![ModalKind::Success]);
        assert!(state.stale);
        assert_eq!(tracker.table().transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_end_day_rejected() {
        let tracker = tracker();
        let mut state = tracker.new_state();
        tracker
            .table()
            .transport()
            .respond(400, json!({"error": "Day not started"}));

        let err = tracker.end_day(&mut state, "T-17").await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(state.modals.is_visible(ModalKind::Error));
        assert_eq!(tracker.table().transport().requests().len(), 1);
    }
}

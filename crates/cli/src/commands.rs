//! Command execution
//!
//! Every command drives the same controllers as the desktop pages. The
//! transport is borrowed so a `--login` session carries over to the
//! command that follows it.

use anyhow::{Context, Result, bail};
use sitedesk_client::Transport;
use sitedesk_controller::{
    AuthController, DayMark, IntakeController, IntakeForm, IntakeOutcome, LoginStatus,
    STALE_MESSAGE, TableController, TableState, TimeTrackerController, login_error_message,
};
use sitedesk_core::{RecordId, StatusLevel};
use sitedesk_schema::Catalog;
use std::io::Write;

use crate::args::{Cli, Command};
use crate::output;

/// Run the parsed command line against a transport
pub async fn run<T: Transport>(cli: &Cli, transport: &T, out: &mut impl Write) -> Result<()> {
    let catalog = Catalog::builtin();

    if let Some(login) = &cli.login {
        let password = cli.password.as_deref().unwrap_or_default();
        AuthController::new(transport)
            .login(login, password)
            .await
            .map_err(|e| anyhow::anyhow!(login_error_message(&e)))
            .context("Sign-in failed")?;
        tracing::debug!("Signed in before {:?}", cli.command);
    }

    match &cli.command {
        Command::Collections => output::print_collections(out, &catalog)?,

        Command::List { collection } => {
            let table = TableController::from_catalog(&catalog, collection, transport)?;
            let mut state = table.new_state();
            table
                .load(&mut state)
                .await
                .with_context(|| format!("Could not load {}", collection))?;
            output::print_table(out, &table.spec().columns, &state.rows)?;
        }

        Command::Add { collection, set } => {
            let table = TableController::from_catalog(&catalog, collection, transport)?;
            let mut state = table.new_state();
            table.open_add(&mut state)?;
            for (key, value) in set {
                table.set_add_field(&mut state, key, value)?;
            }
            table
                .submit_add(&mut state)
                .await
                .with_context(|| format!("Could not add to {}", collection))?;
            report(out, &state)?;
        }

        Command::Edit { collection, id, set } => {
            let table = TableController::from_catalog(&catalog, collection, transport)?;
            let mut state = table.new_state();
            select_by_id(&table, &mut state, &RecordId::new(id.as_str())).await?;
            table.open_edit(&mut state)?;
            for (key, value) in set {
                table.set_edit_field(&mut state, key, value)?;
            }
            table
                .submit_edit(&mut state)
                .await
                .with_context(|| format!("Could not edit {} {}", collection, id))?;
            report(out, &state)?;
        }

        Command::Delete { collection, id } => {
            let table = TableController::from_catalog(&catalog, collection, transport)?;
            let mut state = table.new_state();
            table
                .delete_by_id(&mut state, &RecordId::new(id.as_str()))
                .await
                .with_context(|| format!("Could not delete {} {}", collection, id))?;
            report(out, &state)?;
        }

        Command::Wtt {
            action,
            personnel_number,
        } => {
            if personnel_number.trim().is_empty() {
                bail!("A personnel number is required");
            }
            let tracker = TimeTrackerController::from_catalog(&catalog, transport)?;
            let mut state = tracker.new_state();
            let result = match DayMark::from(*action) {
                DayMark::Start => tracker.start_day(&mut state, personnel_number).await,
                DayMark::End => tracker.end_day(&mut state, personnel_number).await,
            };
            result.with_context(|| format!("Could not record the day for {}", personnel_number))?;
            report(out, &state)?;
        }

        Command::CheckLogin => {
            let status = AuthController::new(transport).check_login().await?;
            let (level, message) = match status {
                LoginStatus::LoggedIn => (StatusLevel::Success, "Signed in"),
                LoginStatus::LoggedOut => (StatusLevel::Warning, "Not signed in"),
                LoginStatus::Unknown => (StatusLevel::Error, "Session state unknown"),
            };
            output::print_status(out, level, message)?;
        }

        Command::Apply {
            full_name,
            phone,
            description,
        } => {
            let mut form = IntakeForm {
                full_name: full_name.clone(),
                phone_number: phone.clone(),
                description: description.clone(),
            };
            let outcome = IntakeController::new(transport).submit(&mut form).await;
            output::print_status(out, outcome.level(), outcome.message())?;
            if outcome != IntakeOutcome::Submitted {
                bail!(outcome.message());
            }
        }
    }

    Ok(())
}

/// Load the list and select the row whose `id` cell matches
async fn select_by_id<T: Transport>(
    table: &TableController<T>,
    state: &mut TableState,
    id: &RecordId,
) -> Result<()> {
    table
        .load(state)
        .await
        .with_context(|| format!("Could not load {}", table.spec().name))?;

    let id_column = table
        .spec()
        .column_index("id")
        .with_context(|| format!("{} has no id column", table.spec().name))?;
    let index = state
        .rows
        .iter()
        .position(|row| row.get(id_column).map(|cell| cell.trim()) == Some(id.as_str()))
        .with_context(|| format!("No {} with id {}", table.spec().name, id.as_str()))?;

    table.select_row(state, index)?;
    Ok(())
}

/// Print the notice a mutation left on the page state
fn report(out: &mut impl Write, state: &TableState) -> Result<()> {
    if let Some(notice) = &state.notice {
        output::print_status(out, notice.level, &notice.message)?;
    }
    if state.stale {
        output::print_status(out, StatusLevel::Warning, STALE_MESSAGE)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sitedesk_client::{HttpMethod, ScriptedTransport};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["sitedesk-cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    async fn run_text(cli: &Cli, transport: &ScriptedTransport) -> (Result<()>, String) {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        let result = run(cli, transport, &mut buffer).await;
        (result, String::from_utf8(buffer).unwrap())
    }

    #[tokio::test]
    async fn test_list_prints_rows() {
        let transport = ScriptedTransport::new();
        transport.respond(
            200,
            json!([
                {"id": 1, "name": "Cement", "amount": 50, "object": "Warehouse"},
                {"id": 2, "name": "Sand", "amount": null, "object": "Office"}
            ]),
        );

        let (result, text) = run_text(&cli(&["list", "materials"]), &transport).await;
        result.unwrap();
        assert!(text.contains("Cement"));
        assert!(text.contains("2 rows"));
        assert_eq!(transport.count(HttpMethod::Get, "/api/materials/"), 1);
    }

    #[tokio::test]
    async fn test_add_posts_trimmed_values() {
        let transport = ScriptedTransport::new();
        transport
            .respond(201, json!({"id": 3}))
            .respond(200, json!([]));

        let command = cli(&[
            "add",
            "job-titles",
            "--set",
            "name= Foreman ",
        ]);
        let (result, text) = run_text(&command, &transport).await;
        result.unwrap();

        let post = &transport.requests()[0];
        assert_eq!(post.method, HttpMethod::Post);
        assert_eq!(post.body, Some(json!({"name": "Foreman"})));
        assert!(text.starts_with("ok "));
    }

    #[tokio::test]
    async fn test_add_saved_but_reload_failed() {
        let transport = ScriptedTransport::new();
        transport
            .respond(201, json!({"id": 3}))
            .respond(500, json!({}));

        let command = cli(&["add", "job-titles", "--set", "name=Foreman"]);
        let (result, text) = run_text(&command, &transport).await;
        result.unwrap();

        assert_eq!(
            text,
            "ok Changes saved\nwarning The list could not be refreshed\n"
        );
        assert_eq!(transport.count(HttpMethod::Post, "/api/job-titles/"), 1);
    }

    #[tokio::test]
    async fn test_add_unknown_field_sends_nothing() {
        let transport = ScriptedTransport::new();
        let (result, _) = run_text(&cli(&["add", "job-titles", "--set", "colour=red"]), &transport).await;
        assert!(result.is_err());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_add_on_read_only_collection_fails() {
        let transport = ScriptedTransport::new();
        let (result, _) = run_text(&cli(&["add", "roles", "--set", "name=x"]), &transport).await;
        assert!(result.is_err());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_edit_keeps_unchanged_fields() {
        let transport = ScriptedTransport::new();
        transport
            .respond(200, json!([{"id": 7, "name": "Cement", "amount": 50, "object": "Warehouse"}]))
            .respond(200, json!({"id": 7}))
            .respond(200, json!([]));

        let command = cli(&["edit", "materials", "7", "--set", "amount=45"]);
        let (result, _) = run_text(&command, &transport).await;
        result.unwrap();

        let put = &transport.requests()[1];
        assert_eq!(put.method, HttpMethod::Put);
        assert_eq!(put.path, "/api/materials/7/");
        assert_eq!(put.body, Some(json!({"name": "Cement", "amount": "45"})));
    }

    #[tokio::test]
    async fn test_edit_missing_id() {
        let transport = ScriptedTransport::new();
        transport.respond(200, json!([{"id": 1, "name": "Cement"}]));
        let (result, _) = run_text(&cli(&["edit", "materials", "99"]), &transport).await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("No materials with id 99"));
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let transport = ScriptedTransport::new();
        transport.respond_text(204, "").respond(200, json!([]));
        let (result, _) = run_text(&cli(&["delete", "job-titles", "4"]), &transport).await;
        result.unwrap();
        assert_eq!(transport.count(HttpMethod::Delete, "/api/job-titles/4/"), 1);
    }

    #[tokio::test]
    async fn test_login_before_command() {
        let transport = ScriptedTransport::new();
        transport
            .respond(200, json!({"status": "Success"}))
            .respond(200, json!({"logged_in": true}));

        let command = cli(&["--login", "admin", "--password", "secret", "check-login"]);
        let (result, text) = run_text(&command, &transport).await;
        result.unwrap();
        assert_eq!(text, "ok Signed in\n");
        assert_eq!(transport.requests()[0].path, "/api/login/");
    }

    #[tokio::test]
    async fn test_rejected_login_stops_command() {
        let transport = ScriptedTransport::new();
        transport.respond(400, json!({"error": "Wrong password"}));

        let command = cli(&["--login", "admin", "--password", "nope", "list", "roles"]);
        let (result, _) = run_text(&command, &transport).await;
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Wrong password"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_wtt_start() {
        let transport = ScriptedTransport::new();
        transport
            .respond(200, json!({"status": "ok"}))
            .respond(200, json!([]));
        let (result, _) = run_text(&cli(&["wtt", "start", "T-17"]), &transport).await;
        result.unwrap();
        assert_eq!(transport.requests()[0].path, "/api/wtt/start/");
    }

    #[tokio::test]
    async fn test_apply_rejected_is_error() {
        let transport = ScriptedTransport::new();
        transport.respond(400, json!({"phoneNumber": ["invalid"]}));
        let command = cli(&["apply", "--full-name", "Ivan", "--phone", "x"]);
        let (result, text) = run_text(&command, &transport).await;
        assert!(result.is_err());
        assert!(text.starts_with("warning "));
    }
}

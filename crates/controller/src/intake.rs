//! Public application intake form

use serde_json::json;
use sitedesk_client::{ApiRequest, Transport};
use sitedesk_core::StatusLevel;
use sitedesk_schema::paths;

/// Inputs of the intake form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub full_name: String,
    pub phone_number: String,
    pub description: String,
}

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// 201, the form was reset
    Submitted,
    /// Any other status
    Rejected,
    /// No answer
    NetworkFailure,
}

impl IntakeOutcome {
    /// Notice shown to the applicant
    pub fn message(&self) -> &'static str {
        match self {
            IntakeOutcome::Submitted => "Your application has been sent!",
            IntakeOutcome::Rejected => "Could not send the application. Please check the fields.",
            IntakeOutcome::NetworkFailure => "Network error. Please try again later.",
        }
    }

    pub fn level(&self) -> StatusLevel {
        match self {
            IntakeOutcome::Submitted => StatusLevel::Success,
            IntakeOutcome::Rejected => StatusLevel::Warning,
            IntakeOutcome::NetworkFailure => StatusLevel::Error,
        }
    }
}

/// Sends intake forms to the applications endpoint
#[derive(Debug, Clone)]
pub struct IntakeController<T> {
    transport: T,
}

impl<T: Transport> IntakeController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit the form; it is cleared only when the backend answers 201
    pub async fn submit(&self, form: &mut IntakeForm) -> IntakeOutcome {
        let body = json!({
            "fullName": form.full_name.trim(),
            "phoneNumber": form.phone_number.trim(),
            "description": form.description.trim(),
        });

        match self
            .transport
            .send(ApiRequest::post(paths::APPLICATIONS, body))
            .await
        {
            Ok(response) if response.is_created() => {
                tracing::info!("Application received");
                *form = IntakeForm::default();
                IntakeOutcome::Submitted
            }
            Ok(response) => {
                tracing::error!(
                    "Application rejected with {}: {}",
                    response.status,
                    response.body
                );
                IntakeOutcome::Rejected
            }
            Err(e) => {
                tracing::error!("Application not sent: {}", e);
                IntakeOutcome::NetworkFailure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitedesk_client::ScriptedTransport;

    fn form() -> IntakeForm {
        IntakeForm {
            full_name: " Ivan Petrov ".to_string(),
            phone_number: "+7 900 000 00 00".to_string(),
            description: "Leaking roof".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_resets_whole_form() {
        let intake = IntakeController::new(ScriptedTransport::new());
        intake.transport().respond(201, json!({"id": 1}));

        let mut form = form();
        assert_eq!(intake.submit(&mut form).await, IntakeOutcome::Submitted);
        assert_eq!(form, IntakeForm::default());

        let request = intake.transport().last_request().unwrap();
        assert_eq!(request.path, "/api/applications/");
        assert_eq!(
            request.body,
            Some(json!({
                "fullName": "Ivan Petrov",
                "phoneNumber": "+7 900 000 00 00",
                "description": "Leaking roof"
            }))
        );
    }

    #[tokio::test]
    async fn test_rejected_keeps_form() {
        let intake = IntakeController::new(ScriptedTransport::new());
        intake
            .transport()
            .respond(400, json!({"phoneNumber": ["required"]}));

        let mut form = form();
        let outcome = intake.submit(&mut form).await;
        assert_eq!(outcome, IntakeOutcome::Rejected);
        assert_eq!(outcome.level(), StatusLevel::Warning);
        assert_eq!(form.full_name, " Ivan Petrov ");
    }

    #[tokio::test]
    async fn test_network_failure() {
        let intake = IntakeController::new(ScriptedTransport::new());
        intake.transport().fail("dns");
        let mut form = form();
        assert_eq!(intake.submit(&mut form).await, IntakeOutcome::NetworkFailure);
        assert_eq!(form, self::form());
    }
}

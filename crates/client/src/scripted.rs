//! In-memory transport
//!
//! Replays queued answers in order and records every request it receives.
//! Controller tests drive pages through it without a backend.

use crate::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use serde_json::Value;
use sitedesk_core::{DeskError, DeskResult};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that answers from a queue
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    answers: Mutex<VecDeque<DeskResult<ApiResponse>>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON answer
    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.push(Ok(ApiResponse::json_body(status, &body)))
    }

    /// Queue a raw-text answer
    pub fn respond_text(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(ApiResponse::new(status, body)))
    }

    /// Queue a request that never gets an answer
    pub fn fail(&self, message: &str) -> &Self {
        self.push(Err(DeskError::network(message)))
    }

    fn push(&self, answer: DeskResult<ApiResponse>) -> &Self {
        if let Ok(mut answers) = self.answers.lock() {
            answers.push_back(answer);
        }
        self
    }

    /// Every request sent so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    /// Number of requests sent with `method` to `path`
    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests().pop()
    }

    /// Answers still queued
    pub fn pending(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or(0)
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> DeskResult<ApiResponse> {
        let description = request.to_string();
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(request);
        }
        let answer = self
            .answers
            .lock()
            .map_err(|_| DeskError::internal("scripted transport poisoned"))?
            .pop_front();
        answer.unwrap_or_else(|| Err(DeskError::network(format!("no answer for {}", description))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_replays_in_order() {
        let transport = ScriptedTransport::new();
        transport
            .respond(200, json!([]))
            .respond(201, json!({"id": 1}));

        let first = transport.send(ApiRequest::get("/api/roles/")).await.unwrap();
        let second = transport
            .send(ApiRequest::post("/api/roles/", json!({"name": "x"})))
            .await
            .unwrap();

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 201);
        assert_eq!(transport.count(HttpMethod::Get, "/api/roles/"), 1);
        assert_eq!(transport.pending(), 0);
    }

    #[tokio::test]
    async fn test_borrowed_transport_shares_queue() {
        let transport = ScriptedTransport::new();
        transport.respond(200, json!([]));

        async fn fetch<T: Transport>(transport: T) -> DeskResult<ApiResponse> {
            transport.send(ApiRequest::get("/api/roles/")).await
        }

        let response = fetch(&transport).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_exhausted_queue_is_network_error() {
        let transport = ScriptedTransport::new();
        let err = transport
            .send(ApiRequest::get("/api/roles/"))
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let transport = ScriptedTransport::new();
        transport.fail("connection refused");
        let err = transport
            .send(ApiRequest::get("/api/roles/"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}

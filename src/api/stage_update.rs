//! Stage-update service: persists a stage transition.

use reqwest::blocking::Client;
use tracing::debug;

use super::client::validate_response_status;
use super::error::ApiError;

/// Backend confirmation seam for stage transitions. The board drives
/// this through a trait so tests can script verdicts without a server.
pub trait StageUpdateService {
    /// Persist a move. The candidate id addresses the URL; the
    /// application id and the resolved step *id* travel in the body.
    fn update_stage(
        &self,
        candidate_id: i64,
        application_id: i64,
        step_id: i64,
    ) -> Result<(), ApiError>;
}

/// HTTP implementation: `PUT /candidates/{candidateId}`.
pub struct HttpStageUpdate {
    client: Client,
    base_url: String,
}

impl HttpStageUpdate {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl StageUpdateService for HttpStageUpdate {
    fn update_stage(
        &self,
        candidate_id: i64,
        application_id: i64,
        step_id: i64,
    ) -> Result<(), ApiError> {
        let url = format!("{}/candidates/{}", self.base_url, candidate_id);
        debug!(candidate_id, application_id, step_id, "updating candidate stage");

        let response = self
            .client
            .put(&url)
            .json(&update_body(application_id, step_id))
            .send()?;
        validate_response_status(&response)
    }
}

/// Request body for the update call.
fn update_body(application_id: i64, step_id: i64) -> serde_json::Value {
    serde_json::json!({
        "applicationId": application_id,
        "currentInterviewStep": step_id,
    })
}

//! Position loader: the interview flow and candidate list for one
//! position.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::models::{Candidate, InterviewStep};

use super::client::validate_response_status;
use super::error::ApiError;

/// Envelope for `GET /position/{id}/interviewflow`. The backend nests
/// the flow twice; mirrored here rather than flattened.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InterviewFlowResponse {
    interview_flow: PositionFlowEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionFlowEnvelope {
    position_name: String,
    interview_flow: StepList,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StepList {
    interview_steps: Vec<InterviewStep>,
}

/// Everything the board needs to open a position.
#[derive(Debug)]
pub struct PositionBoardData {
    pub position_name: String,
    pub steps: Vec<InterviewStep>,
    pub candidates: Vec<Candidate>,
}

/// Fetches board data over HTTP. Load failures surface to the caller
/// as a page-level error; the board is never entered on a failed load.
pub struct PositionLoader<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> PositionLoader<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Fetch the ordered steps and current candidates for a position.
    pub fn load(&self, position_id: i64) -> Result<PositionBoardData, ApiError> {
        let flow = self.fetch_interview_flow(position_id)?;
        let candidates = self.fetch_candidates(position_id)?;

        debug!(
            position_id,
            steps = flow.interview_flow.interview_steps.len(),
            candidates = candidates.len(),
            "loaded position board data"
        );

        Ok(PositionBoardData {
            position_name: flow.position_name,
            steps: flow.interview_flow.interview_steps,
            candidates,
        })
    }

    fn fetch_interview_flow(&self, position_id: i64) -> Result<PositionFlowEnvelope, ApiError> {
        let url = format!("{}/position/{}/interviewflow", self.base_url, position_id);
        let response = self.client.get(&url).send()?;
        validate_response_status(&response)?;
        let body: InterviewFlowResponse = response.json()?;
        Ok(body.interview_flow)
    }

    fn fetch_candidates(&self, position_id: i64) -> Result<Vec<Candidate>, ApiError> {
        let url = format!("{}/position/{}/candidates", self.base_url, position_id);
        let response = self.client.get(&url).send()?;
        validate_response_status(&response)?;
        Ok(response.json()?)
    }
}

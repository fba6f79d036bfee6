use serde::{Deserialize, Serialize};

/// A candidate card on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub full_name: String,
    /// Denormalized step *name*. Grouping and drop-target resolution
    /// match on this string; a name with no matching step leaves the
    /// candidate off the board entirely.
    pub current_interview_step: String,
    /// Average interview score, expected range [0, 5].
    pub average_score: f64,
    /// Addresses the backend update call; distinct from the candidate id.
    pub application_id: i64,
}

use serde::{Deserialize, Serialize};

/// One phase of a position's interview flow; rendered as a board column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewStep {
    pub id: i64,
    pub interview_flow_id: i64,
    pub interview_type_id: i64,
    /// Display name and grouping key. Candidates reference steps by this
    /// string, not by id.
    pub name: String,
    /// Left-to-right column position. Ties keep declaration order
    /// (stable sort).
    pub order_index: i64,
}

//! Transient record of the card being moved.

use crate::models::Candidate;

/// Holds at most one candidate, valid between pick-up and drop.
#[derive(Debug, Default)]
pub struct DragSession {
    active: Option<Candidate>,
}

impl DragSession {
    /// Start a drag. A pick-up while another card is held supersedes it
    /// without warning (single-pointer environments only ever produce
    /// one drag at a time).
    pub fn begin(&mut self, candidate: Candidate) {
        self.active = Some(candidate);
    }

    /// End the drag, whatever its state.
    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Candidate> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

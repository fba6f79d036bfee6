//! Board state: the authoritative candidate list and the transition
//! executor that mutates it.

use std::collections::HashMap;

use crate::models::{Candidate, InterviewStep};

use super::drag::DragSession;
use super::grouping::group_by_step;
use super::notify::{Notice, Notifier, Severity};

/// A transition applied locally and awaiting backend confirmation.
///
/// Carries the update-call addressing plus the full pre-move snapshot
/// to restore on rejection. `seq` records issuance order; completions
/// are applied in whatever order they arrive and the board does not
/// consult it today (see DESIGN.md).
#[derive(Debug)]
pub struct PendingMove {
    pub seq: u64,
    pub candidate_id: i64,
    pub application_id: i64,
    pub target_step_id: i64,
    snapshot: Vec<Candidate>,
}

/// Backend verdict for a pending move. Rejection is uniform; the board
/// does not distinguish transport errors from HTTP failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Confirmed,
    Rejected,
}

/// Owns the candidate list, the drag session, and the notice emitter.
/// Renderers only read derived views; every mutation goes through here.
#[derive(Debug)]
pub struct BoardState {
    steps: Vec<InterviewStep>,
    candidates: Vec<Candidate>,
    drag: DragSession,
    notifier: Notifier,
    next_seq: u64,
}

impl BoardState {
    /// Build a board. Steps are sorted once by `order_index`; the sort
    /// is stable so ties keep declaration order.
    pub fn new(mut steps: Vec<InterviewStep>, candidates: Vec<Candidate>) -> Self {
        steps.sort_by_key(|step| step.order_index);
        Self {
            steps,
            candidates,
            drag: DragSession::default(),
            notifier: Notifier::default(),
            next_seq: 0,
        }
    }

    /// Columns in display order.
    pub fn steps(&self) -> &[InterviewStep] {
        &self.steps
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Replace the board contents after a reload: steps re-sorted,
    /// candidates swapped wholesale. The drag session is cleared; a
    /// held card may not exist in the new list.
    pub fn reset(&mut self, mut steps: Vec<InterviewStep>, candidates: Vec<Candidate>) {
        steps.sort_by_key(|step| step.order_index);
        self.steps = steps;
        self.candidates = candidates;
        self.drag.clear();
    }

    /// Current per-stage partition, keyed by step name.
    pub fn grouped(&self) -> HashMap<String, Vec<Candidate>> {
        group_by_step(&self.candidates)
    }

    /// The visible notice, if any; expired notices clear on read.
    pub fn notice(&mut self) -> Option<&Notice> {
        self.notifier.current()
    }

    pub fn dismiss_notice(&mut self) {
        self.notifier.dismiss();
    }

    pub fn begin_drag(&mut self, candidate: Candidate) {
        self.drag.begin(candidate);
    }

    pub fn cancel_drag(&mut self) {
        self.drag.clear();
    }

    pub fn dragging(&self) -> Option<&Candidate> {
        self.drag.active()
    }

    /// Drop the held card on the named column.
    ///
    /// Applies the optimistic update and returns the pending move for
    /// dispatch, or `None` when there is nothing to confirm: no card
    /// held, same column, or unknown target. The unknown-target early
    /// return deliberately leaves the drag session set, matching the
    /// shipped behavior this board reproduces.
    pub fn drop_on(&mut self, target_step_name: &str) -> Option<PendingMove> {
        let dragged = self.drag.active()?.clone();

        let Some(target) = self.steps.iter().find(|step| step.name == target_step_name) else {
            self.notifier.show("Stage not found", Severity::Error);
            return None;
        };
        let target_step_id = target.id;

        if dragged.current_interview_step == target_step_name {
            self.drag.clear();
            return None;
        }

        let snapshot = self.candidates.clone();
        for candidate in &mut self.candidates {
            if candidate.id == dragged.id {
                candidate.current_interview_step = target_step_name.to_string();
            }
        }
        self.drag.clear();

        let seq = self.next_seq;
        self.next_seq += 1;

        Some(PendingMove {
            seq,
            candidate_id: dragged.id,
            application_id: dragged.application_id,
            target_step_id,
            snapshot,
        })
    }

    /// Apply the backend verdict for a previously issued move.
    ///
    /// Rejection restores the full snapshot, which also discards any
    /// later move's optimistic update when completions arrive out of
    /// order. That hazard is a documented property of the design, not
    /// an accident (see DESIGN.md and the regression test).
    pub fn resolve(&mut self, pending: PendingMove, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Confirmed => {
                self.notifier.show("Candidate moved", Severity::Success);
            }
            MoveOutcome::Rejected => {
                self.candidates = pending.snapshot;
                self.notifier
                    .show("Could not move candidate, try again", Severity::Error);
            }
        }
    }
}

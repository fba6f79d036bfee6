//! Move flows end to end: optimistic apply, backend confirmation,
//! rollback, and reordered completions.

use std::collections::VecDeque;
use std::sync::Mutex;

use slate::api::stage_update::StageUpdateService;
use slate::api::ApiError;
use slate::board::{BoardState, MoveOutcome, PendingMove, Severity};
use slate::models::{Candidate, InterviewStep};

/// Stage-update service with scripted verdicts, consumed in call order.
struct ScriptedService {
    verdicts: Mutex<VecDeque<Result<(), ApiError>>>,
    calls: Mutex<Vec<(i64, i64, i64)>>,
}

impl ScriptedService {
    fn new(verdicts: Vec<Result<(), ApiError>>) -> Self {
        Self {
            verdicts: Mutex::new(verdicts.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(i64, i64, i64)> {
        self.calls.lock().unwrap().clone()
    }
}

impl StageUpdateService for ScriptedService {
    fn update_stage(
        &self,
        candidate_id: i64,
        application_id: i64,
        step_id: i64,
    ) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((candidate_id, application_id, step_id));
        self.verdicts.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

fn rejection() -> Result<(), ApiError> {
    Err(ApiError::Status {
        status: 500,
        reason: "internal server error".to_string(),
    })
}

/// Drive one pending move through the service the way the app worker
/// does: any failure becomes a uniform rejection.
fn complete(board: &mut BoardState, service: &ScriptedService, pending: PendingMove) {
    let outcome = match service.update_stage(
        pending.candidate_id,
        pending.application_id,
        pending.target_step_id,
    ) {
        Ok(()) => MoveOutcome::Confirmed,
        Err(_) => MoveOutcome::Rejected,
    };
    board.resolve(pending, outcome);
}

fn step(id: i64, name: &str, order_index: i64) -> InterviewStep {
    InterviewStep {
        id,
        interview_flow_id: 1,
        interview_type_id: 1,
        name: name.to_string(),
        order_index,
    }
}

fn candidate(id: i64, name: &str, step: &str) -> Candidate {
    Candidate {
        id,
        full_name: name.to_string(),
        current_interview_step: step.to_string(),
        average_score: 3.5,
        application_id: id + 100,
    }
}

fn board() -> BoardState {
    BoardState::new(
        vec![
            step(1, "Phone Screen", 1),
            step(2, "Technical Interview", 2),
            step(3, "Offer", 3),
        ],
        vec![
            candidate(10, "Ada Lovelace", "Phone Screen"),
            candidate(11, "Grace Hopper", "Phone Screen"),
        ],
    )
}

fn stage_of(board: &BoardState, candidate_id: i64) -> String {
    board
        .candidates()
        .iter()
        .find(|c| c.id == candidate_id)
        .map(|c| c.current_interview_step.clone())
        .expect("candidate present")
}

#[test]
fn test_confirmed_move_keeps_new_stage_and_addresses_backend_by_id() {
    let mut board = board();
    let service = ScriptedService::new(vec![Ok(())]);

    board.begin_drag(candidate(10, "Ada Lovelace", "Phone Screen"));
    let pending = board.drop_on("Technical Interview").expect("dispatched");

    // Optimistic: the list moved before any backend traffic.
    assert_eq!(stage_of(&board, 10), "Technical Interview");
    assert!(service.calls().is_empty());

    complete(&mut board, &service, pending);

    assert_eq!(stage_of(&board, 10), "Technical Interview");
    // The call carries the resolved step *id*, not its name.
    assert_eq!(service.calls(), vec![(10, 110, 2)]);
    let notice = board.notice().expect("success notice");
    assert_eq!(notice.severity, Severity::Success);
}

#[test]
fn test_rejected_move_restores_pre_drop_state() {
    let mut board = board();
    let service = ScriptedService::new(vec![rejection()]);
    let before: Vec<Candidate> = board.candidates().to_vec();

    board.begin_drag(candidate(10, "Ada Lovelace", "Phone Screen"));
    let pending = board.drop_on("Technical Interview").expect("dispatched");
    complete(&mut board, &service, pending);

    assert_eq!(board.candidates(), before.as_slice());
    let notice = board.notice().expect("error notice");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn test_same_column_drop_makes_no_backend_call() {
    let mut board = board();
    let service = ScriptedService::new(vec![]);

    board.begin_drag(candidate(10, "Ada Lovelace", "Phone Screen"));
    let pending = board.drop_on("Phone Screen");

    assert!(pending.is_none());
    assert!(service.calls().is_empty());
    assert!(board.notice().is_none());
    assert!(board.dragging().is_none());
}

#[test]
fn test_unknown_stage_drop_makes_no_backend_call() {
    let mut board = board();
    let service = ScriptedService::new(vec![]);
    let before: Vec<Candidate> = board.candidates().to_vec();

    board.begin_drag(candidate(10, "Ada Lovelace", "Phone Screen"));
    let pending = board.drop_on("Culture Fit");

    assert!(pending.is_none());
    assert!(service.calls().is_empty());
    assert_eq!(board.candidates(), before.as_slice());
    let notice = board.notice().expect("error notice");
    assert_eq!(notice.severity, Severity::Error);
}

/// Two overlapping moves whose completions arrive in reverse order:
/// the earlier move's rejection restores a snapshot that predates the
/// later move's optimistic update, discarding it even though the
/// backend confirmed it. Pinned here as designed behavior, not a bug
/// to patch silently.
#[test]
fn test_reordered_completions_roll_back_later_move() {
    let mut board = board();
    // Completion order: second move confirmed first, then the first
    // move rejected.
    let service = ScriptedService::new(vec![Ok(()), rejection()]);

    board.begin_drag(candidate(10, "Ada Lovelace", "Phone Screen"));
    let first = board.drop_on("Technical Interview").expect("dispatched");

    board.begin_drag(candidate(11, "Grace Hopper", "Phone Screen"));
    let second = board.drop_on("Offer").expect("dispatched");

    complete(&mut board, &service, second);
    assert_eq!(stage_of(&board, 11), "Offer");

    complete(&mut board, &service, first);

    // The first move's snapshot wins: both candidates are back where
    // they started, including the confirmed second move.
    assert_eq!(stage_of(&board, 10), "Phone Screen");
    assert_eq!(stage_of(&board, 11), "Phone Screen");
    let notice = board.notice().expect("error notice");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn test_rapid_outcomes_leave_only_latest_notice() {
    let mut board = board();
    let service = ScriptedService::new(vec![Ok(()), rejection()]);

    board.begin_drag(candidate(10, "Ada Lovelace", "Phone Screen"));
    let first = board.drop_on("Technical Interview").expect("dispatched");
    complete(&mut board, &service, first);
    assert_eq!(
        board.notice().map(|n| n.severity),
        Some(Severity::Success)
    );

    board.begin_drag(candidate(11, "Grace Hopper", "Phone Screen"));
    let second = board.drop_on("Offer").expect("dispatched");
    complete(&mut board, &service, second);

    // The error notice pre-empts the success notice; exactly one is
    // visible.
    let notice = board.notice().expect("one notice visible");
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.message, "Could not move candidate, try again");
}

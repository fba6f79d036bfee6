//! Optimistic stage-transition state machine for the kanban board.
//!
//! The board owns the authoritative candidate list. A move is applied
//! locally first, then confirmed against the backend; a rejected
//! confirmation restores the pre-move snapshot and surfaces an error
//! notice. Grouping, the drag session, and the notice emitter are the
//! supporting pieces.

mod drag;
mod grouping;
mod notify;
mod state;

pub use drag::DragSession;
pub use grouping::group_by_step;
pub use notify::{Notice, Notifier, Severity, NOTICE_TTL};
pub use state::{BoardState, MoveOutcome, PendingMove};

//! Keyboard input for the board.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::board::BoardState;

use super::state::Selection;

/// Result of handling a key event.
pub enum KeyEventResult {
    /// User requested exit.
    Exit,
    /// Re-fetch the board from the backend.
    Reload,
    /// Drop the held card on the named column.
    Drop { step_name: String },
    /// Continue running.
    Continue,
}

/// Handle a key press against the board and the cursor.
///
/// Pick-up and drag cancellation mutate the board directly; the drop is
/// returned to the caller, which owns request dispatch.
pub fn handle_key_event(
    code: KeyCode,
    modifiers: KeyModifiers,
    board: &mut BoardState,
    selection: &mut Selection,
) -> KeyEventResult {
    match code {
        KeyCode::Char('q') => KeyEventResult::Exit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyEventResult::Exit,

        KeyCode::Esc => {
            if board.dragging().is_some() {
                board.cancel_drag();
                KeyEventResult::Continue
            } else {
                KeyEventResult::Exit
            }
        }

        KeyCode::Char('r') => KeyEventResult::Reload,

        KeyCode::Char('x') => {
            board.dismiss_notice();
            KeyEventResult::Continue
        }

        KeyCode::Left => {
            selection.move_column(-1, board.steps().len());
            selection.clamp_card(column_len(board, selection.column));
            KeyEventResult::Continue
        }
        KeyCode::Right => {
            selection.move_column(1, board.steps().len());
            selection.clamp_card(column_len(board, selection.column));
            KeyEventResult::Continue
        }
        KeyCode::Up => {
            selection.move_card(-1, column_len(board, selection.column));
            KeyEventResult::Continue
        }
        KeyCode::Down => {
            selection.move_card(1, column_len(board, selection.column));
            KeyEventResult::Continue
        }

        KeyCode::Enter | KeyCode::Char(' ') => {
            if board.dragging().is_some() {
                match board.steps().get(selection.column) {
                    Some(step) => KeyEventResult::Drop {
                        step_name: step.name.clone(),
                    },
                    None => KeyEventResult::Continue,
                }
            } else {
                pick_up(board, selection);
                KeyEventResult::Continue
            }
        }

        _ => KeyEventResult::Continue,
    }
}

/// Start a drag with the card under the cursor, if there is one.
fn pick_up(board: &mut BoardState, selection: &Selection) {
    let candidate = board.steps().get(selection.column).and_then(|step| {
        board
            .grouped()
            .get(&step.name)
            .and_then(|bucket| bucket.get(selection.card).cloned())
    });

    if let Some(candidate) = candidate {
        board.begin_drag(candidate);
    }
}

/// Number of cards in the column at `index`.
fn column_len(board: &BoardState, index: usize) -> usize {
    board
        .steps()
        .get(index)
        .and_then(|step| board.grouped().get(&step.name).map(Vec::len))
        .unwrap_or(0)
}

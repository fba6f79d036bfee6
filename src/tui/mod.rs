//! Interactive board UI.
//!
//! Layout:
//! - Header with position name and candidate count
//! - Notice bar (success/error, auto-clearing)
//! - One column per interview step, cards inside
//! - Footer with keybinds
//!
//! Moving a card is a two-step gesture: Enter picks the selected card
//! up, Left/Right choose the target column, Enter drops it there. The
//! drop is applied optimistically and confirmed in the background.

mod app;
mod event_handler;
mod renderer;
mod state;
mod theme;

use anyhow::Result;

pub use app::BoardApp;
pub use renderer::score_dots;

use crate::api::position::PositionBoardData;
use crate::api::stage_update::StageUpdateService;
use crate::api::ApiError;

/// Entry point for the interactive board.
pub fn run_board<S, F>(data: PositionBoardData, service: S, reload: F) -> Result<()>
where
    S: StageUpdateService + Send + Sync + 'static,
    F: Fn() -> Result<PositionBoardData, ApiError> + 'static,
{
    let mut app = BoardApp::new(data, service, reload)?;
    app.run()
}

//! Board application state and main loop.

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use crate::api::position::PositionBoardData;
use crate::api::stage_update::StageUpdateService;
use crate::api::ApiError;
use crate::board::{BoardState, MoveOutcome, PendingMove};

use super::event_handler::{handle_key_event, KeyEventResult};
use super::renderer::{render_board, BoardView};
use super::state::Selection;

/// Poll timeout for event loop (100ms for responsive UI).
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Board application state.
pub struct BoardApp<S: StageUpdateService + Send + Sync + 'static> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    running: Arc<AtomicBool>,
    position_name: String,
    board: BoardState,
    selection: Selection,
    service: Arc<S>,
    reload: Box<dyn Fn() -> Result<PositionBoardData, ApiError>>,
    completions_tx: Sender<(PendingMove, MoveOutcome)>,
    completions_rx: Receiver<(PendingMove, MoveOutcome)>,
    /// Flag to prevent double cleanup in Drop.
    cleaned_up: bool,
}

impl<S: StageUpdateService + Send + Sync + 'static> BoardApp<S> {
    /// Create a new board application and take over the terminal.
    pub fn new(
        data: PositionBoardData,
        service: S,
        reload: impl Fn() -> Result<PositionBoardData, ApiError> + 'static,
    ) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        crate::utils::install_crossterm_panic_hook();

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let (completions_tx, completions_rx) = mpsc::channel();

        Ok(Self {
            terminal,
            running: Arc::new(AtomicBool::new(true)),
            position_name: data.position_name.clone(),
            board: BoardState::new(data.steps, data.candidates),
            selection: Selection::default(),
            service: Arc::new(service),
            reload: Box::new(reload),
            completions_tx,
            completions_rx,
            cleaned_up: false,
        })
    }

    /// Run the board event loop.
    pub fn run(&mut self) -> Result<()> {
        // Ctrl+C handler restores the terminal; Drop may not run on
        // process exit.
        let running = self.running.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
            crate::utils::cleanup_terminal_crossterm();
            std::process::exit(0);
        })
        .context("Failed to set Ctrl+C handler")?;

        let result = self.run_event_loop();
        self.cleanup_terminal();
        result
    }

    fn run_event_loop(&mut self) -> Result<()> {
        while self.running.load(Ordering::SeqCst) {
            // Confirmation callbacks land here in arrival order, which
            // may differ from issuance order; the board applies them
            // as-is.
            while let Ok((pending, outcome)) = self.completions_rx.try_recv() {
                self.board.resolve(pending, outcome);
            }

            if event::poll(POLL_TIMEOUT)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match handle_key_event(
                            key.code,
                            key.modifiers,
                            &mut self.board,
                            &mut self.selection,
                        ) {
                            KeyEventResult::Exit => break,
                            KeyEventResult::Reload => self.reload_board(),
                            KeyEventResult::Drop { step_name } => {
                                if let Some(pending) = self.board.drop_on(&step_name) {
                                    self.dispatch(pending);
                                }
                            }
                            KeyEventResult::Continue => {}
                        }
                    }
                }
            }

            self.render()?;
        }

        Ok(())
    }

    /// Fire-and-forget confirmation call. The worker maps any failure
    /// to a uniform rejection; the cause only goes to the log.
    fn dispatch(&self, pending: PendingMove) {
        let service = Arc::clone(&self.service);
        let tx = self.completions_tx.clone();

        thread::spawn(move || {
            let outcome = match service.update_stage(
                pending.candidate_id,
                pending.application_id,
                pending.target_step_id,
            ) {
                Ok(()) => MoveOutcome::Confirmed,
                Err(err) => {
                    warn!(candidate_id = pending.candidate_id, error = %err, "stage update failed");
                    MoveOutcome::Rejected
                }
            };

            // A closed receiver means the app is shutting down.
            let _ = tx.send((pending, outcome));
        });
    }

    /// Re-fetch the whole board: title, steps, and candidates. A
    /// failed reload keeps the current board and surfaces nothing
    /// fatal.
    fn reload_board(&mut self) {
        match (self.reload)() {
            Ok(data) => {
                self.position_name = data.position_name;
                self.board.reset(data.steps, data.candidates);
                self.selection = Selection::default();
            }
            Err(err) => {
                warn!(error = %err, "board reload failed");
            }
        }
    }

    /// Cleanup terminal state (leave alternate screen, disable raw mode).
    /// Sets cleaned_up flag to prevent double cleanup in Drop.
    fn cleanup_terminal(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }

    /// Render the UI.
    fn render(&mut self) -> Result<()> {
        let view = BoardView {
            position_name: self.position_name.clone(),
            steps: self.board.steps().to_vec(),
            grouped: self.board.grouped(),
            notice: self.board.notice().cloned(),
            selection: self.selection,
            held: self.board.dragging().map(|c| c.id),
        };

        self.terminal.draw(|frame| {
            render_board(frame, &view);
        })?;

        Ok(())
    }
}

impl<S: StageUpdateService + Send + Sync + 'static> Drop for BoardApp<S> {
    fn drop(&mut self) {
        self.cleanup_terminal();
    }
}

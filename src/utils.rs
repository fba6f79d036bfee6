use std::io::{self, Write};
use std::sync::Once;

use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Restore terminal state after crossterm raw mode / alternate screen.
///
/// Safe to call multiple times; every step is best effort. Call this
/// before exiting so the shell gets its terminal back even when the
/// board dies on a signal.
pub fn cleanup_terminal_crossterm() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, LeaveAlternateScreen);
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = stdout.flush();
}

/// Install a panic hook that restores terminal state before panicking.
///
/// Only installs once no matter how often it is called.
pub fn install_crossterm_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            cleanup_terminal_crossterm();
            default_hook(panic_info);
        }));
    });
}

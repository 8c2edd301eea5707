//! Terminal modes held by the carousel page.
//!
//! The page runs in raw mode on the alternate screen with mouse capture on
//! (clicks select dots and arrows, motion drives hover) and the cursor hidden.
//! All four are undone exactly once, by whichever comes first: the guard
//! dropping or a panic unwinding through the draw loop.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct TerminalGuard {
    armed: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let guard = Self {
            armed: Arc::new(AtomicBool::new(true)),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let armed = Arc::clone(&self.armed);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_into(&armed, &mut io::stdout());
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_into(&self.armed, &mut io::stdout()) {
            tracing::warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves the carousel's terminal modes if `armed` is still set.
/// Returns whether anything was written.
fn restore_into(armed: &AtomicBool, out: &mut impl Write) -> io::Result<bool> {
    if !armed.swap(false, Ordering::SeqCst) {
        return Ok(false);
    }
    let _ = disable_raw_mode();
    execute!(out, DisableMouseCapture, LeaveAlternateScreen, Show)?;
    Ok(true)
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

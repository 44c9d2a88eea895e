//! Terminal lifecycle: raw mode, alternate screen, crash recovery.

use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

/// RAII guard around the raw-mode terminal. The shell is restored when
/// the guard drops, whichever way the app loop ends.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Switch the terminal into dashboard mode and hand back the guard.
    pub fn acquire() -> Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Undo [`TerminalGuard::acquire`]; every step is best-effort and the
/// whole sequence is safe to run more than once.
fn restore() {
    let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
}

/// Install panic and error hooks that run [`restore`] before printing,
/// so a crash never leaves the shell in raw mode. Must run before
/// [`TerminalGuard::acquire`] to cover failures during startup.
pub fn install_crash_hooks() -> Result<()> {
    let hooks = color_eyre::config::HookBuilder::default().display_env_section(false);
    let (panic_hook, eyre_hook) = hooks.into_hooks();
    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        panic_hook(info);
    }));
    Ok(())
}

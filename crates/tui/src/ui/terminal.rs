use std::io::{Stdout, stdout};

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::Result;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// Also installs a panic hook that leaves both before the panic message
/// prints, so a crash does not strand the shell in raw mode with the
/// message swallowed by the alternate screen.
pub fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode()?;
    let mut out = stdout();
    crossterm::execute!(out, EnterAlternateScreen)?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

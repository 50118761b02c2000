use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Cancel,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Input(char),
    None,
}

/// Maps raw key events to app actions. Plain characters stay `Input` so the
/// app can route them to text fields or treat them as shortcuts depending on
/// the active mode; only Ctrl+C quits unconditionally.
pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && let KeyCode::Char('c') = key.code
    {
        return AppAction::Quit;
    }

    match key.code {
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Left => AppAction::Left,
        KeyCode::Right => AppAction::Right,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

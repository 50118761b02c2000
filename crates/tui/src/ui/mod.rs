pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, Mode, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = state.theme();

    // Root fill so the light/dark toggle covers the gaps between cards.
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Dashboard => screens::dashboard::render(frame, layout[2], state),
        Section::Expenses => screens::expenses::render(frame, layout[2], state),
        Section::Analytics => screens::analytics::render(frame, layout[2], state),
        Section::Settings => screens::settings::render(frame, layout[2], state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);

    // Overlays last so they paint above the section content.
    components::confirm::render(frame, area, state.confirm.as_ref(), &theme);
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let summary = state.summary();
    let currency = state.settings.currency;
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = if state.connection_ok { "OK" } else { "ERR" };
    let status_style = if state.connection_ok {
        Style::default().fg(theme.positive)
    } else {
        Style::default().fg(theme.error)
    };

    let line = Line::from(vec![
        Span::styled("Spent", Style::default().fg(theme.text_muted)),
        Span::raw(": "),
        components::money::styled_amount_bold(summary.total_spent, currency, theme),
        Span::raw("  "),
        Span::styled("Budget", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.settings.budget.format(currency))),
        Span::styled("Refresh", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {refresh}  ")),
        Span::styled(status, status_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    // Global shortcuts (always shown, compact)
    let mut parts = components::tabs::tab_shortcuts(theme);

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("r", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" refresh"));

    // Context-specific hints based on section and mode
    let context_hints = get_context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.extend(context_hints);
    }

    // Quit hint at the end
    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Returns context-specific keyboard hints based on current section and mode.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(key, Style::default().fg(theme.accent)),
            Span::raw(format!(" {label}  ")),
        ]
    };

    match state.mode {
        Mode::Form => [
            hint("Tab", "next"),
            hint("Enter", "save"),
            hint("Esc", "cancel"),
        ]
        .concat(),
        Mode::Search => [hint("Enter", "done"), hint("Esc", "cancel")].concat(),
        Mode::Budget => [hint("Enter", "apply"), hint("Esc", "cancel")].concat(),
        Mode::Confirm => [hint("y", "delete"), hint("n", "cancel")].concat(),
        Mode::Normal => match state.section {
            Section::Dashboard => [hint("i", "add expense")].concat(),
            Section::Expenses => [
                hint("/", "search"),
                hint("c", "category"),
                hint("j/k", "move"),
                hint("x", "delete"),
                hint("o", "export"),
            ]
            .concat(),
            Section::Analytics => Vec::new(),
            Section::Settings => [
                hint("c", "currency"),
                hint("b", "budget"),
                hint("n", "notifications"),
                hint("t", "theme"),
                hint("o", "export"),
            ]
            .concat(),
        },
    }
}

/// Truncates display text to `max` characters, ellipsis included.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

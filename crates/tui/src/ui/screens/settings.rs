use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, Mode},
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = state.theme();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(4),
            Constraint::Min(5),
        ])
        .split(area);

    render_preferences(frame, layout[0], state, &theme);
    render_data(frame, layout[1], state, &theme);
    render_about(frame, layout[2], state, &theme);
}

fn setting_row<'a>(
    label: &'a str,
    value: String,
    key: &'a str,
    action: &'a str,
    theme: &Theme,
) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), Style::default().fg(theme.text_muted)),
        Span::styled(format!("{value:<22}"), Style::default().fg(theme.text)),
        Span::styled(format!("[{key}]"), Style::default().fg(theme.accent)),
        Span::styled(format!(" {action}"), Style::default().fg(theme.dim)),
    ])
}

fn render_preferences(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let editing_budget = state.mode == Mode::Budget;
    let card = Card::new("Preferences", theme).focused(editing_budget);

    let settings = &state.settings;
    let currency = settings.currency;

    let budget_value = if editing_budget {
        format!("{}▏", settings.budget_input)
    } else {
        settings.budget.format(currency)
    };

    let mut lines = vec![
        setting_row(
            "Currency",
            format!("{} ({})", currency.code(), currency.symbol()),
            "c",
            "cycle",
            theme,
        ),
        setting_row("Monthly budget", budget_value, "b", "edit", theme),
        setting_row(
            "Notifications",
            on_off(settings.notifications),
            "n",
            "toggle",
            theme,
        ),
        setting_row(
            "Theme",
            if settings.dark { "Dark" } else { "Light" }.to_string(),
            "t",
            "toggle",
            theme,
        ),
    ];

    if editing_budget {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" apply  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ]));
    }

    card.render_with(frame, area, Paragraph::new(lines));
}

fn render_data(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Data", theme);

    let file_name = engine::export::file_name(chrono::Utc::now());
    let lines = vec![
        Line::from(vec![
            Span::styled("[o]", Style::default().fg(theme.accent)),
            Span::styled(
                format!(" Export all records to {file_name}"),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} records held locally", state.expenses.len()),
            Style::default().fg(theme.dim),
        )),
    ];

    card.render_with(frame, area, Paragraph::new(lines));
}

fn render_about(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("About", theme);

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), Style::default().fg(theme.text_muted)),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    };

    let last_refresh = state
        .last_refresh
        .map(|at| at.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    let lines = vec![
        row("Version", env!("CARGO_PKG_VERSION").to_string()),
        row("Store", state.base_url.clone()),
        row("Last refresh", last_refresh),
    ];

    card.render_with(frame, area, Paragraph::new(lines));
}

fn on_off(value: bool) -> String {
    if value { "On" } else { "Off" }.to_string()
}

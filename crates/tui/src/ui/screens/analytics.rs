use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::glyph_for;

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, charts::percentage_bar},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = state.theme();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    render_breakdown(frame, layout[0], state, &theme);
    render_insights(frame, layout[1], state, &theme);
}

fn render_breakdown(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Category Distribution", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let breakdown = engine::category_breakdown(&state.expenses);
    if breakdown.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No data yet. Add a few expenses first.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let currency = state.settings.currency;
    let lines: Vec<Line> = breakdown
        .iter()
        .take(inner.height as usize)
        .map(|entry| {
            Line::from(vec![
                Span::raw(format!("{} ", glyph_for(&entry.category))),
                Span::styled(
                    format!("{:<14}", entry.category),
                    Style::default().fg(Theme::category_color(&entry.category)),
                ),
                Span::styled(
                    format!("{:>12}  ", entry.total.format(currency)),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    percentage_bar(entry.percent.round() as u16, 24),
                    Style::default().fg(Theme::category_color(&entry.category)),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_insights(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Monthly Insights", theme);

    let summary = state.summary();
    let currency = state.settings.currency;
    let daily = engine::average_daily_spend(summary.total_spent);

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<22}"), Style::default().fg(theme.text_muted)),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    };

    let lines = vec![
        row("Average daily spend", daily.format(currency)),
        row(
            "Budget utilization",
            format!("{:.1}%", summary.usage_percent),
        ),
        row("Transactions", summary.transactions.to_string()),
    ];

    card.render_with(frame, area, Paragraph::new(lines));
}

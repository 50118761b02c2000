use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use engine::{CategoryFilter, MoneyCents, glyph_for};

use crate::{
    app::{AppState, Mode},
    ui::{components::card::Card, theme::Theme, truncate},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = state.theme();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_header(frame, layout[0], state, &theme);
    render_table(frame, layout[1], state, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Filters", theme).focused(state.mode == Mode::Search);

    let cursor = if state.mode == Mode::Search { "▏" } else { "" };
    let filter_label = match &state.category_filter {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Category(label) => format!("{} {label}", glyph_for(label)),
    };
    let shown = state.filtered().len();
    let total = state.expenses.len();

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("{}{cursor}", state.search),
            Style::default().fg(theme.text),
        ),
        Span::raw("   "),
        Span::styled("Category: ", Style::default().fg(theme.text_muted)),
        Span::styled(filter_label, Style::default().fg(theme.accent)),
        Span::raw("   "),
        Span::styled(
            format!("{shown} of {total}"),
            Style::default().fg(theme.dim),
        ),
    ]);

    card.render_with(frame, area, Paragraph::new(line));
}

fn render_table(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Expenses", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let filtered = state.filtered();
    if filtered.is_empty() {
        let hint = if state.expenses.is_empty() {
            "Add your first expense to get started!"
        } else {
            "Nothing matches the current search or filter."
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "No expenses found",
                    Style::default().fg(theme.text_muted),
                )),
                Line::from(Span::styled(hint, Style::default().fg(theme.dim))),
            ]),
            inner,
        );
        return;
    }

    let currency = state.settings.currency;
    let items: Vec<ListItem> = filtered
        .iter()
        .map(|expense| {
            let date = engine::dates::format_long(expense.date);
            let amount = MoneyCents::from_major(expense.amount).format(currency);
            let note = expense.description.as_deref().unwrap_or("");

            ListItem::new(Line::from(vec![
                Span::styled(format!("{date:<12}"), Style::default().fg(theme.dim)),
                Span::styled(
                    format!("{} {:<14}", glyph_for(&expense.category), expense.category),
                    Style::default().fg(Theme::category_color(&expense.category)),
                ),
                Span::styled(
                    format!("{:<26}", truncate(&expense.title, 26)),
                    Style::default().fg(theme.text),
                ),
                Span::styled(format!("{amount:>12}  "), Style::default().fg(theme.text)),
                Span::styled(
                    truncate(note, 30),
                    Style::default().fg(theme.text_muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(theme.border_focused)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(filtered.len() - 1)));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

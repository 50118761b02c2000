use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use engine::glyph_for;

use crate::{
    app::{AppState, Mode},
    expense_form::FormField,
    ui::{
        components::{
            card::{Card, StatCard},
            money::{budget_gauge, styled_amount},
        },
        theme::Theme,
        truncate,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = state.theme();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat cards
            Constraint::Length(3), // Budget gauge
            Constraint::Min(8),    // Form + recent expenses
        ])
        .split(area);

    render_stats(frame, layout[0], state, &theme);
    render_budget(frame, layout[1], state, &theme);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[2]);

    render_form(frame, cols[0], state, &theme);
    render_recent(frame, cols[1], state, &theme);
}

fn render_stats(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let summary = state.summary();
    let currency = state.settings.currency;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    StatCard::new("Total Spent", summary.total_spent.format(currency), theme)
        .render(frame, cols[0]);

    let remaining_color = if summary.remaining_budget.is_negative() {
        theme.negative
    } else {
        theme.positive
    };
    StatCard::new("Remaining", summary.remaining_budget.format(currency), theme)
        .value_color(remaining_color)
        .subtitle(format!("{:.1}% of budget used", summary.usage_percent))
        .render(frame, cols[1]);

    StatCard::new("Transactions", summary.transactions.to_string(), theme)
        .render(frame, cols[2]);
}

fn render_budget(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let summary = state.summary();
    let currency = state.settings.currency;

    let title = format!(
        "Monthly Budget ({})",
        state.settings.budget.format(currency)
    );
    let card = Card::new(&title, theme);

    if state.settings.budget.is_zero() {
        // No gauge without a budget; usage is reported as 0 by contract.
        card.render_with(
            frame,
            area,
            Paragraph::new(Span::styled(
                "No budget set",
                Style::default().fg(theme.dim),
            )),
        );
        return;
    }

    card.render_with(frame, area, budget_gauge(summary.usage_percent, theme));
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let editing = state.mode == Mode::Form;
    let card = Card::new("Add Expense", theme).focused(editing);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let form = &state.form;
    let field_line = |field: FormField, label: &str, value: String| {
        let marker = if editing && form.focus == field {
            Span::styled("▸ ", Style::default().fg(theme.accent))
        } else {
            Span::raw("  ")
        };
        Line::from(vec![
            marker,
            Span::styled(format!("{label}: "), Style::default().fg(theme.text_muted)),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    };

    let category = form.category();
    let mut lines = vec![
        field_line(FormField::Title, "Title", form.title.clone()),
        field_line(FormField::Amount, "Amount", form.amount.clone()),
        field_line(
            FormField::Category,
            "Category",
            format!("◀ {} {} ▶", category.glyph(), category.label()),
        ),
        field_line(FormField::Description, "Note", form.description.clone()),
        Line::from(""),
    ];

    if editing {
        lines.push(Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" next  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" close"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("i", Style::default().fg(theme.accent)),
            Span::raw(" to add an expense"),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_recent(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let currency = state.settings.currency;

    let card = Card::new("Recent Expenses", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let items: Vec<ListItem> = state
        .recent()
        .iter()
        .take(inner.height as usize)
        .map(|expense| {
            let date = engine::dates::format_short(expense.date);
            let amount = styled_amount(
                engine::MoneyCents::from_major(expense.amount),
                currency,
                theme,
            );

            ListItem::new(Line::from(vec![
                Span::styled(format!("{date:<7}"), Style::default().fg(theme.dim)),
                Span::raw(format!("{} ", glyph_for(&expense.category))),
                Span::styled(
                    format!("{:<24}", truncate(&expense.title, 24)),
                    Style::default().fg(theme.text),
                ),
                amount,
            ]))
        })
        .collect();

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Add your first expense to get started!",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
    } else {
        frame.render_widget(List::new(items), inner);
    }
}

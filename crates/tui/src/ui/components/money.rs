use engine::{Currency, MoneyCents};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::Gauge,
};

use crate::ui::theme::Theme;

/// Styled span for a money amount: negative values (overspend) show red,
/// everything else in the plain text color.
#[must_use]
pub fn styled_amount(amount: MoneyCents, currency: Currency, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.negative
    } else {
        theme.text
    };
    Span::styled(amount.format(currency), Style::default().fg(color))
}

/// Bold variant for totals.
#[must_use]
pub fn styled_amount_bold(amount: MoneyCents, currency: Currency, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.negative
    } else {
        theme.text
    };
    Span::styled(
        amount.format(currency),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Budget usage gauge. Green below 60%, warning up to 80%, red beyond.
/// The bar itself caps at 100% while the label keeps the true percentage.
#[must_use]
pub fn budget_gauge(usage_percent: f64, theme: &Theme) -> Gauge<'static> {
    let color = if usage_percent > 80.0 {
        theme.negative
    } else if usage_percent > 60.0 {
        theme.warning
    } else {
        theme.positive
    };

    let capped = usage_percent.clamp(0.0, 100.0) as u16;
    Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(capped)
        .label(format!("{usage_percent:.1}%"))
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{app::ConfirmDelete, ui::theme::Theme};

/// Blocking confirmation modal shown before a delete request is issued.
pub fn render(frame: &mut Frame<'_>, area: Rect, confirm: Option<&ConfirmDelete>, theme: &Theme) {
    let Some(confirm) = confirm else {
        return;
    };

    let width = (confirm.title.len() as u16 + 22).clamp(34, area.width);
    let height = 5u16.min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            " Confirm delete ",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.surface));

    let lines = vec![
        Line::from(vec![
            Span::raw("Delete \""),
            Span::styled(confirm.title.as_str(), Style::default().fg(theme.text)),
            Span::raw("\"?"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.accent)),
            Span::raw(" delete   "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ]),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

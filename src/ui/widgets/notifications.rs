//! Notification rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationLevel};

fn level_style(level: NotificationLevel) -> (Color, &'static str, &'static str) {
    match level {
        NotificationLevel::Info => (Color::Cyan, "ℹ", " Info "),
        NotificationLevel::Warning => (Color::Yellow, "⚠", " Warning "),
        NotificationLevel::Error => (Color::Red, "✗", " Error "),
    }
}

/// Render a notification popup.
pub fn render_notification(frame: &mut Frame, area: Rect, notification: &Notification) {
    frame.render_widget(Clear, area);

    let (color, icon, title) = level_style(notification.level);
    let content = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::raw(notification.message.as_str()),
    ]);

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, area);
}

/// Render an error popup. Errors stay until dismissed.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str, dismiss_key: &str) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "✗ ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(error),
        ]),
        Line::from(Span::styled(
            format!("{} to dismiss", dismiss_key),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(paragraph, area);
}

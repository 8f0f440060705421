//! Popup confirming a submission.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::layout::centered_rect;
use crate::state::SuccessMessage;

/// Success popup widget.
pub struct SuccessPopup;

impl SuccessPopup {
    pub fn render(frame: &mut Frame, area: Rect, message: &SuccessMessage) {
        if !message.is_visible() {
            return;
        }

        let popup_area = centered_rect(50, 50, area);
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Bets placed",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(message.bets().iter().map(|bet| {
            Line::from(vec![
                Span::raw("• "),
                Span::raw(bet.event_label.as_str()),
                Span::raw(": "),
                Span::raw(bet.choice_label.as_str()),
                Span::styled(format!(" @ {:.2}", bet.odd), Style::default().fg(Color::Green)),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Total: "),
            Span::styled(message.total(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("Potential gain: "),
            Span::styled(
                message.potential_gain(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Closes after {}s · Esc to close now",
                message.duration().as_secs()
            ),
            Style::default().fg(Color::DarkGray),
        )));

        let popup = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Success ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );

        frame.render_widget(popup, popup_area);
    }
}

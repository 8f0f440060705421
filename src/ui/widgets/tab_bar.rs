//! Tab bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::{Store, View};

/// Tab bar widget.
pub struct TabBar;

impl TabBar {
    /// Render the tab bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let tabs = [
            (keys.events.as_str(), "Events".to_string(), View::Events),
            (
                keys.history.as_str(),
                format!("History ({})", store.slip.total_submissions()),
                View::History,
            ),
        ];

        let mut spans = vec![Span::raw(" ")];

        for (key, name, view) in tabs {
            let name_style = if store.app.current_view == view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled(
                format!("[{}] ", key),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(name, name_style));
            spans.push(Span::raw("  "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

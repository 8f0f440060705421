//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{InputMode, Store, format_amount};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, help_key: &str) {
        if area.height == 0 {
            return;
        }

        let source = Span::styled(
            format!("● {}", store.app.source_label),
            Style::default().fg(Color::Green),
        );

        let mode = match store.app.input_mode {
            InputMode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::Yellow)),
            InputMode::EditStake => Span::styled(
                " EDIT STAKE ",
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
        };

        let slip = Span::raw(format!(
            "{} bet(s) @ {}",
            store.slip.bet_count(),
            format_amount(store.slip.bet_amount())
        ));

        let loading = if store.app.loading {
            Span::styled(
                " Loading... ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else if let Some(updated) = store.catalog.last_updated {
            Span::styled(
                format!(" updated {} ", updated.format("%H:%M:%S")),
                Style::default().fg(Color::Gray),
            )
        } else {
            Span::raw("")
        };

        let help_hint = Span::styled(
            format!(" Press {} for help ", help_key),
            Style::default().fg(Color::Gray),
        );

        let left = vec![
            Span::styled(
                " Betslip ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            source,
            Span::raw(" | "),
            mode,
            Span::raw(" | "),
            slip,
            loading,
        ];

        // Right-align the help hint.
        let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
        let right_len = help_hint.content.chars().count();
        let padding = (area.width as usize).saturating_sub(left_len + right_len);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(help_hint);

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}

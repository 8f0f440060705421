//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;

/// Help panel showing keybindings.
pub struct HelpPanel;

fn section(title: &str) -> [Line<'_>; 2] {
    [
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

fn binding(key: impl Into<String>, description: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!("  {:<8}", key.into()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(description),
    ])
}

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let popup_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, popup_area);

        let mut text = Vec::new();

        text.extend(section("Navigation"));
        text.push(binding(format!("{}/↓", keys.down), "Move down"));
        text.push(binding(format!("{}/↑", keys.up), "Move up"));
        text.push(binding(format!("{}/←", keys.left), "Previous choice"));
        text.push(binding(format!("{}/→", keys.right), "Next choice"));
        text.push(binding("Home/End", "Go to top / bottom"));
        text.push(binding(keys.focus.as_str(), "Switch between events and slip"));
        text.push(binding(keys.events.as_str(), "Events view"));
        text.push(binding(keys.history.as_str(), "History view"));
        text.push(Line::from(""));

        text.extend(section("Slip"));
        text.push(binding(keys.select.as_str(), "Add / remove highlighted choice"));
        text.push(binding(keys.remove_bet.as_str(), "Remove highlighted slip bet"));
        text.push(binding(
            format!("{}/{}", keys.increase_stake, keys.decrease_stake),
            "Raise / lower stake",
        ));
        text.push(binding(keys.reset_stake.as_str(), "Reset stake to default"));
        text.push(binding(keys.edit_stake.as_str(), "Type a stake"));
        text.push(binding(keys.submit.as_str(), "Submit bets"));
        text.push(binding(keys.clear_slip.as_str(), "Clear slip"));
        text.push(binding(keys.clear_history.as_str(), "Clear history (history view)"));
        text.push(Line::from(""));

        text.extend(section("General"));
        text.push(binding(keys.refresh.as_str(), "Reload events"));
        text.push(binding(keys.back.as_str(), "Close popup / dismiss"));
        text.push(binding(keys.help.as_str(), "Toggle help"));
        text.push(binding(keys.quit.as_str(), "Quit"));

        let help = Paragraph::new(text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

//! Betting slip panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::config::KeyBindings;
use crate::state::{Focus, InputMode, Store, format_amount};

const STAKE_PROMPT: &str = "Stake: ";

/// Slip panel widget.
pub struct SlipPanel;

impl SlipPanel {
    /// Render the selected bets and the stake summary.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let slip = &store.slip;
        let focused = store.app.focus == Focus::Slip;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(6)])
            .split(area);

        let block = Block::default()
            .title(format!(" Betting Slip ({}) ", slip.bet_count()))
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });

        if slip.has_bets() {
            let items: Vec<ListItem> = slip
                .selected_bets()
                .iter()
                .map(|bet| {
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            bet.event_label.as_str(),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            bet.question.as_str(),
                            Style::default().fg(Color::DarkGray),
                        )),
                        Line::from(vec![
                            Span::raw(bet.choice_label.as_str()),
                            Span::raw(" @ "),
                            Span::styled(
                                format!("{:.2}", bet.odd),
                                Style::default().fg(Color::Green),
                            ),
                        ]),
                    ])
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("▶ ");

            let mut state = ListState::default();
            state.select(if focused { slip.selected_index } else { None });
            frame.render_stateful_widget(list, chunks[0], &mut state);
        } else {
            let empty = Paragraph::new(Span::styled(
                "Select a choice to add it here",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .block(block);
            frame.render_widget(empty, chunks[0]);
        }

        Self::render_summary(frame, chunks[1], store, keys);
    }

    fn render_summary(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let slip = &store.slip;
        let editing = store.app.input_mode == InputMode::EditStake;

        let stake_line = if editing {
            Line::from(vec![
                Span::raw(STAKE_PROMPT),
                Span::styled(
                    store.app.input_buffer.as_str(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw(STAKE_PROMPT),
                Span::styled(
                    format_amount(slip.bet_amount()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  (min {})", format_amount(slip.rules().min_stake)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        };

        let lines = vec![
            stake_line,
            Line::from(vec![
                Span::raw("Total: "),
                Span::styled(slip.calculate_total(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::raw("Potential gain: "),
                Span::styled(
                    slip.calculate_potential_gain(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                if editing {
                    "Enter to apply, Esc to cancel".to_string()
                } else {
                    format!(
                        "{} submit · {} clear · {} edit stake",
                        keys.submit, keys.clear_slip, keys.edit_stake
                    )
                },
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if editing {
            let typed = store.app.input_buffer[..store.app.cursor_position]
                .chars()
                .count() as u16;
            let x = inner.x + STAKE_PROMPT.len() as u16 + typed;
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}

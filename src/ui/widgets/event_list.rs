//! Event list widget.

use chrono::FixedOffset;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::catalog::{self, Event};
use crate::state::{Focus, Store};

/// Event list widget.
pub struct EventList;

impl EventList {
    /// Render the event list.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, offset: FixedOffset) {
        let focused = store.app.focus == Focus::Events;
        let block = Block::default()
            .title(format!(" Events ({}) ", store.catalog.events.len()))
            .borders(Borders::ALL)
            .border_style(border_style(focused));

        if store.catalog.events.is_empty() {
            let message = if store.catalog.loading {
                "Loading events..."
            } else {
                "No events available"
            };
            let empty = Paragraph::new(Span::styled(
                message,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = store
            .catalog
            .events
            .iter()
            .enumerate()
            .map(|(i, event)| {
                let highlighted = store.catalog.selected_index == Some(i);
                let cursor = (highlighted && focused).then_some(store.catalog.choice_index);
                ListItem::new(event_text(event, store, cursor, offset))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(store.catalog.selected_index);

        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Lines for one event: breadcrumb, title and date, question, choices.
fn event_text<'a>(
    event: &'a Event,
    store: &Store,
    cursor: Option<usize>,
    offset: FixedOffset,
) -> Text<'a> {
    let title = if catalog::has_event_label(event) {
        Span::styled(
            event.label_or_default(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "(no label)",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    };

    let mut lines = vec![
        Line::from(Span::styled(
            catalog::event_breadcrumb(event),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            title,
            Span::raw("  "),
            Span::styled(
                catalog::format_date(&event.start.with_timezone(&offset)),
                Style::default().fg(Color::Blue),
            ),
        ]),
    ];

    match (catalog::bet_question(event), catalog::bet_choices(event)) {
        (Ok(question), Ok(choices)) => {
            lines.push(Line::from(Span::styled(
                question,
                Style::default().fg(Color::Yellow),
            )));

            let mut spans = Vec::with_capacity(choices.len() * 2);
            for (i, choice) in choices.iter().enumerate() {
                let in_slip = store.slip.is_selected(&event.id, &choice.id);
                let mut style = if in_slip {
                    Style::default().fg(Color::Black).bg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                if cursor == Some(i) {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                let mark = if in_slip { "✓ " } else { "" };
                spans.push(Span::styled(
                    format!(" {}{} {:.2} ", mark, choice.actor.label, choice.odd),
                    style,
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        _ => lines.push(Line::from(Span::styled(
            "No bets available",
            Style::default().fg(Color::Red),
        ))),
    }

    lines.push(Line::from(""));
    Text::from(lines)
}

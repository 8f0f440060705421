//! Submission history widget.

use chrono::FixedOffset;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::state::{Store, SubmissionRecord, format_amount};

/// History list widget.
pub struct HistoryList;

impl HistoryList {
    /// Render past submissions, newest last, with details of the highlighted one.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, offset: FixedOffset) {
        let slip = &store.slip;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let header_cells = ["Placed", "Bets", "Stake", "Total", "Potential gain"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = slip.submission_history().iter().map(|record| {
            Row::new(vec![
                Cell::from(
                    record
                        .timestamp
                        .with_timezone(&offset)
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string(),
                ),
                Cell::from(record.bets.len().to_string()),
                Cell::from(format_amount(record.amount)),
                Cell::from(record.total.as_str()),
                Cell::from(record.potential_gain.as_str()).style(Style::default().fg(Color::Green)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(21),
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Min(14),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    " History ({}) · wagered {} ",
                    slip.total_submissions(),
                    slip.total_amount_wagered()
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(slip.history_index);
        frame.render_stateful_widget(table, chunks[0], &mut state);

        let selected = slip
            .history_index
            .and_then(|i| slip.submission_history().get(i))
            .or_else(|| slip.last_submission());
        render_details(frame, chunks[1], selected);
    }
}

fn render_details(frame: &mut Frame, area: Rect, record: Option<&SubmissionRecord>) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(record) = record else {
        let empty = Paragraph::new(Span::styled(
            "No submissions yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{}  {}", record.id, record.timestamp_iso()),
        Style::default().fg(Color::DarkGray),
    ))];
    lines.extend(record.bets.iter().map(|bet| {
        Line::from(vec![
            Span::styled(
                bet.event_label.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" · "),
            Span::raw(bet.question.as_str()),
            Span::raw(" · "),
            Span::raw(bet.choice_label.as_str()),
            Span::styled(format!(" @ {:.2}", bet.odd), Style::default().fg(Color::Green)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

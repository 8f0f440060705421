//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top). Zero-height when the status bar is hidden.
    pub status_area: Rect,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Main content area.
    pub main_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, show_status_bar: bool) -> Self {
        let status_height = if show_status_bar { 1 } else { 0 };
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(status_height),
                Constraint::Length(1), // Tab bar
                Constraint::Min(0),    // Main content
            ])
            .split(area);

        // Bottom of the main area, clear of the slip summary.
        let notification_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + area.height.saturating_sub(5),
            width: area.width / 2,
            height: 4.min(area.height),
        };

        Self {
            status_area: chunks[0],
            tab_area: chunks[1],
            main_area: chunks[2],
            notification_area,
        }
    }

    /// Split the main area into the event list (left) and the slip (right).
    pub fn events_and_slip(&self) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(self.main_area);
        (chunks[0], chunks[1])
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_status_bar() {
        let layout = Layout::new(Rect::new(0, 0, 100, 40), false);
        assert_eq!(layout.status_area.height, 0);
        assert_eq!(layout.tab_area.y, 0);
        assert_eq!(layout.main_area.height, 39);
    }

    #[test]
    fn test_events_and_slip_split() {
        let layout = Layout::new(Rect::new(0, 0, 100, 40), true);
        let (events, slip) = layout.events_and_slip();
        assert_eq!(events.width + slip.width, 100);
        assert_eq!(events.height, 38);
        assert!(events.width > slip.width);
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let layout = Layout::new(Rect::new(0, 0, 10, 2), true);
        assert!(layout.notification_area.height <= 2);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 50, area);
        assert!(popup.x >= 20 && popup.right() <= 80);
        assert!(popup.y >= 12 && popup.bottom() <= 38);
    }
}

//! Application-level state.

use super::Notification;

/// The current view/screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Events,
    History,
}

/// Which panel of the events view receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Events,
    Slip,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Events => Self::Slip,
            Self::Slip => Self::Events,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a stake amount.
    EditStake,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Focused panel.
    pub focus: Focus,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Current error message.
    pub error: Option<String>,
    /// Whether the app is loading data.
    pub loading: bool,
    /// Where events come from, for the status bar.
    pub source_label: String,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Current stake input.
    pub input_buffer: String,
    /// Cursor position in input buffer.
    pub cursor_position: usize,
}

impl AppState {
    /// Check if in an input mode.
    pub fn is_editing(&self) -> bool {
        self.input_mode != InputMode::Normal
    }

    /// Start editing with the buffer pre-filled.
    pub fn begin_input(&mut self, mode: InputMode, initial: impl Into<String>) {
        self.input_mode = mode;
        self.input_buffer = initial.into();
        self.cursor_position = self.input_buffer.len();
    }

    /// Leave input mode, returning what was typed.
    pub fn take_input(&mut self) -> String {
        self.input_mode = InputMode::Normal;
        self.cursor_position = 0;
        std::mem::take(&mut self.input_buffer)
    }

    /// Add a character to the input buffer.
    pub fn push_char(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if let Some(c) = self.input_buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
            self.input_buffer.remove(self.cursor_position);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        if let Some(c) = self.input_buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if let Some(c) = self.input_buffer[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }
}

//! TUI widgets.

mod event_list;
mod help;
mod history_list;
mod notifications;
mod slip_panel;
mod status_bar;
mod success_popup;
mod tab_bar;

pub use event_list::EventList;
pub use help::HelpPanel;
pub use history_list::HistoryList;
pub use notifications::{render_error, render_notification};
pub use slip_panel::SlipPanel;
pub use status_bar::StatusBar;
pub use success_popup::SuccessPopup;
pub use tab_bar::TabBar;

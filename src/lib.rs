//! # Betslip - a terminal betting slip
//!
//! Browse sporting events, pick outcomes, set a stake and submit the slip,
//! all from the terminal. Built with ratatui.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the main loop
//! - **Catalog**: Event data, presentation helpers and event sources
//! - **State**: Centralized store, the betting slip and the success message
//! - **Input**: Key handling and key binding matching
//! - **UI**: Layout and rendering
//! - **Config**: Configuration management

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};

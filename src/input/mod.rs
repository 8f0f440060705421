//! Terminal input handling.

mod handler;
mod keys;

pub use handler::InputHandler;
pub use keys::{InputEvent, Key, Modifiers};

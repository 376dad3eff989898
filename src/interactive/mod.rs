//! Interactive TUI for the code-guessing game

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};

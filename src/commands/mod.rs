//! Command implementations

pub mod birthday;
pub mod pico;
pub mod prompt;

pub use birthday::{BirthdayOptions, run_birthday};
pub use pico::{SessionStats, new_round, run_pico};

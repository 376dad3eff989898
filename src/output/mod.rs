//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_birthday_banner, print_clues, print_estimate, print_match, print_pico_rules,
    print_reveal, print_sample, print_win,
};

//! Pico Paradox
//!
//! Two small probability and logic games: a Monte Carlo birthday paradox
//! simulator and a hexadecimal code-guessing game with Right / Pico / Bagels
//! clues.
//!
//! # Quick Start
//!
//! ```rust
//! use pico_paradox::core::{Guess, SecretCode, compute_clues, find_collision, generate_sample};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Birthday paradox: look for a shared birthday among 23 people
//! let birthdays = generate_sample(23, &mut rng).unwrap();
//! if let Some(day) = find_collision(&birthdays) {
//!     println!("Shared birthday: {day}");
//! }
//!
//! // Code guessing: score a guess
//! let secret = SecretCode::new("3F4").unwrap();
//! let clues = compute_clues(&Guess::new("0F3").unwrap(), &secret).unwrap();
//! assert_eq!(clues.to_string(), "PicoRight");
//! ```

// Core domain types
pub mod core;

// Monte Carlo estimation
pub mod simulation;

// Run configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

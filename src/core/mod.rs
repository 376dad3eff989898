//! Core domain types for both games
//!
//! Pure logic only: no I/O, and randomness always comes from a caller-supplied
//! `Rng`, so every function here is deterministic under a seeded generator.

mod birthday;
mod clue;
mod code;
mod error;
mod round;

pub use birthday::{
    Birthday, DAYS_IN_YEAR, find_collision, find_collision_counted, generate_sample,
};
pub use clue::{Clue, ClueSet, compute_clues};
pub use code::{ALPHABET, ALPHABET_SIZE, Guess, SecretCode, canonical_symbol, generate_secret};
pub use error::{CoreError, GuessError};
pub use round::{GuessOutcome, Round, RoundState};

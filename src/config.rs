//! Run configuration
//!
//! Immutable values built once from the command line and passed down.
//! Nothing here is global or mutable.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Allowed secret lengths for the guessing game
pub const DIGITS_RANGE: RangeInclusive<usize> = 1..=10;

/// Allowed attempt budgets for the guessing game
pub const GUESSES_RANGE: RangeInclusive<usize> = 1..=100;

/// Allowed group sizes for the birthday simulation
pub const PEOPLE_RANGE: RangeInclusive<usize> = 1..=100;

pub const DEFAULT_DIGITS: usize = 3;
pub const DEFAULT_MAX_GUESSES: usize = 15;
pub const DEFAULT_TRIALS: usize = 100_000;
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

/// Configuration values outside their allowed ranges
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("digit count must be between 1 and 10, got {0}")]
    DigitsOutOfRange(usize),

    #[error("maximum guesses must be between 1 and 100, got {0}")]
    GuessesOutOfRange(usize),

    #[error("number of birthdays must be between 1 and 100, got {0}")]
    PeopleOutOfRange(usize),

    #[error("trial count must be at least 1")]
    TrialsZero,
}

/// Settings for the code-guessing game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    digits: usize,
    max_guesses: usize,
}

impl GameConfig {
    /// # Errors
    /// Returns `ConfigError` if either value is outside its range.
    pub fn new(digits: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        if !DIGITS_RANGE.contains(&digits) {
            return Err(ConfigError::DigitsOutOfRange(digits));
        }
        if !GUESSES_RANGE.contains(&max_guesses) {
            return Err(ConfigError::GuessesOutOfRange(max_guesses));
        }
        Ok(Self {
            digits,
            max_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.digits
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Settings for one birthday simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub people: usize,
    pub trials: usize,
    pub progress_interval: usize,
}

impl SimulationConfig {
    /// # Errors
    /// Returns `ConfigError` if `people` is outside 1-100 or `trials` is zero.
    pub fn new(people: usize, trials: usize) -> Result<Self, ConfigError> {
        if !PEOPLE_RANGE.contains(&people) {
            return Err(ConfigError::PeopleOutOfRange(people));
        }
        if trials == 0 {
            return Err(ConfigError::TrialsZero);
        }
        Ok(Self {
            people,
            trials,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        })
    }
}

/// Build the process random source
///
/// A fixed seed makes every run reproducible; otherwise the OS seeds it.
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

//! One round of the code-guessing game
//!
//! `AwaitingGuess` → (scored) → `AwaitingGuess` | `Won` | `Exhausted`

use super::{ClueSet, CoreError, Guess, SecretCode, compute_clues};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Won,
    Exhausted,
}

/// What happened to a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not the secret; attempts remain
    Scored(ClueSet),
    /// Exact match
    Won { attempts: usize },
    /// Not the secret and that was the last attempt
    Exhausted(ClueSet),
}

/// A single round: one secret, a bounded number of attempts
#[derive(Debug, Clone)]
pub struct Round {
    secret: SecretCode,
    max_guesses: usize,
    history: Vec<(Guess, ClueSet)>,
    state: RoundState,
}

impl Round {
    /// Start a round
    ///
    /// # Errors
    /// Returns `CoreError::InvalidArgument` if `max_guesses` is zero.
    pub fn new(secret: SecretCode, max_guesses: usize) -> Result<Self, CoreError> {
        if max_guesses == 0 {
            return Err(CoreError::invalid("a round needs at least one guess"));
        }
        Ok(Self {
            secret,
            max_guesses,
            history: Vec::with_capacity(max_guesses),
            state: RoundState::AwaitingGuess,
        })
    }

    /// Score a guess and advance the round
    ///
    /// # Errors
    /// Returns `CoreError::InvalidArgument` if the round is already over or
    /// the guess length differs from the secret.
    pub fn submit(&mut self, guess: Guess) -> Result<GuessOutcome, CoreError> {
        if self.is_over() {
            return Err(CoreError::invalid("the round is already over"));
        }

        let clues = compute_clues(&guess, &self.secret)?;
        let won = self.secret.matches(&guess);
        self.history.push((guess, clues.clone()));

        let outcome = if won {
            self.state = RoundState::Won;
            GuessOutcome::Won {
                attempts: self.history.len(),
            }
        } else if self.history.len() >= self.max_guesses {
            self.state = RoundState::Exhausted;
            GuessOutcome::Exhausted(clues)
        } else {
            GuessOutcome::Scored(clues)
        };

        Ok(outcome)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != RoundState::AwaitingGuess
    }

    /// Guesses made so far, with their feedback
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Guess, ClueSet)] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    /// Number of symbols in the secret
    #[inline]
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.secret.len()
    }

    /// The secret, once the round has ended
    #[must_use]
    pub fn reveal(&self) -> Option<&SecretCode> {
        self.is_over().then_some(&self.secret)
    }
}

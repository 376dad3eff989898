//! Text-mode code-guessing game
//!
//! Plays rounds until the player declines a replay.

use super::prompt::{is_yes, read_line};
use crate::config::GameConfig;
use crate::core::{Guess, GuessOutcome, Round, generate_secret};
use crate::output::{print_clues, print_pico_rules, print_reveal, print_win};
use anyhow::Result;
use rand::Rng;
use std::io::BufRead;
use tracing::debug;

/// Results across all rounds of a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// Guesses used in each won round
    pub winning_guesses: Vec<usize>,
}

impl SessionStats {
    pub fn record(&mut self, outcome: &GuessOutcome) {
        match outcome {
            GuessOutcome::Won { attempts } => {
                self.rounds_played += 1;
                self.rounds_won += 1;
                self.winning_guesses.push(*attempts);
            }
            GuessOutcome::Exhausted(_) => self.rounds_played += 1,
            GuessOutcome::Scored(_) => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64
        }
    }

    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.winning_guesses.is_empty() {
            return None;
        }
        let total: usize = self.winning_guesses.iter().sum();
        Some(total as f64 / self.winning_guesses.len() as f64)
    }
}

/// Start a fresh round with a new random secret
///
/// # Errors
///
/// Never fails for a validated `GameConfig`; errors are propagated anyway.
pub fn new_round<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Round> {
    let secret = generate_secret(config.digits(), rng)?;
    let round = Round::new(secret, config.max_guesses())?;
    debug!(
        digits = config.digits(),
        max_guesses = config.max_guesses(),
        "new round"
    );
    Ok(round)
}

/// Run the text-mode game
///
/// # Errors
///
/// Returns an error if reading input fails or the input is closed.
pub fn run_pico<R, I>(config: &GameConfig, input: &mut I, rng: &mut R) -> Result<SessionStats>
where
    R: Rng + ?Sized,
    I: BufRead,
{
    print_pico_rules(config);

    let mut stats = SessionStats::default();

    loop {
        let mut round = new_round(config, rng)?;
        println!(
            "\nI have thought up a code. You have {} guesses to get it.",
            config.max_guesses()
        );

        while !round.is_over() {
            let prompt = format!("Guess #{}:\n> ", round.attempts() + 1);
            let text = read_line(input, &prompt)?;

            let guess = match Guess::parse(&text, config.digits()) {
                Ok(guess) => guess,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };

            let outcome = round.submit(guess)?;
            match &outcome {
                GuessOutcome::Scored(clues) => print_clues(clues),
                GuessOutcome::Won { attempts } => print_win(*attempts),
                GuessOutcome::Exhausted(clues) => {
                    print_clues(clues);
                    if let Some(secret) = round.reveal() {
                        print_reveal(secret, round.max_guesses());
                    }
                }
            }
            stats.record(&outcome);
        }

        debug!(
            state = ?round.state(),
            attempts = round.attempts(),
            "round finished"
        );

        let answer = read_line(input, "Do you want to play again? (yes or no)\n> ")?;
        if !is_yes(&answer) {
            break;
        }
    }

    println!("Thanks for playing!");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClueSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    /// Secret the game will draw for `seed`, using the same RNG sequence
    fn secret_for(seed: u64, config: &GameConfig) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_secret(config.digits(), &mut rng).unwrap().text()
    }

    #[test]
    fn stats_record_outcomes() {
        let mut stats = SessionStats::default();
        stats.record(&GuessOutcome::Scored(ClueSet::default()));
        stats.record(&GuessOutcome::Won { attempts: 4 });
        stats.record(&GuessOutcome::Exhausted(ClueSet::default()));

        assert_eq!(stats.rounds_played, 2);
        assert_eq!(stats.rounds_won, 1);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
        assert_eq!(stats.average_guesses(), Some(4.0));
    }

    #[test]
    fn empty_stats() {
        let stats = SessionStats::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.average_guesses(), None);
    }

    #[test]
    fn win_then_quit() {
        let config = GameConfig::default();
        let secret = secret_for(99, &config);

        // One invalid entry (re-prompted, not counted), one miss, then the answer
        let script = format!("zz\n{}\n{}\nno\n", miss_for(&secret), secret.to_lowercase());
        let mut input = Cursor::new(script);
        let mut rng = StdRng::seed_from_u64(99);

        let stats = run_pico(&config, &mut input, &mut rng).unwrap();
        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.winning_guesses, [2]);
    }

    #[test]
    fn exhaust_budget() {
        let config = GameConfig::new(3, 2).unwrap();
        let secret = secret_for(5, &config);
        let miss = miss_for(&secret);

        let script = format!("{miss}\n{miss}\nn\n");
        let mut input = Cursor::new(script);
        let mut rng = StdRng::seed_from_u64(5);

        let stats = run_pico(&config, &mut input, &mut rng).unwrap();
        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 0);
    }

    #[test]
    fn closed_input_is_an_error() {
        let config = GameConfig::default();
        let mut input = Cursor::new("");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(run_pico(&config, &mut input, &mut rng).is_err());
    }

    /// A guess of the same length that is certainly not `secret`
    fn miss_for(secret: &str) -> String {
        let first = if secret.starts_with('0') { '1' } else { '0' };
        std::iter::repeat_n(first, secret.len()).collect()
    }
}

//! Right / Pico / Bagels feedback
//!
//! Feedback is a multiset of tokens, always kept sorted so the rendered
//! string says how many symbols matched of each kind but never where.

use super::{CoreError, Guess, SecretCode};
use std::fmt;

/// A single feedback token
///
/// Declaration order is the display order: `Pico < Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Clue {
    /// Symbol is in the secret, at another position
    Pico,
    /// Symbol is in the secret at this position
    Right,
}

impl Clue {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pico => "Pico",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorted feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ClueSet {
    clues: Vec<Clue>,
}

impl ClueSet {
    /// Rendering of the empty set
    pub const BAGELS: &'static str = "Bagels";

    /// Build a clue set from tokens in any order
    #[must_use]
    pub fn from_clues(mut clues: Vec<Clue>) -> Self {
        clues.sort_unstable();
        Self { clues }
    }

    /// Tokens in canonical order
    #[inline]
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// True when no symbol of the guess is in the secret
    #[inline]
    #[must_use]
    pub fn is_bagels(&self) -> bool {
        self.clues.is_empty()
    }

    #[must_use]
    pub fn count_right(&self) -> usize {
        self.clues.iter().filter(|&&c| c == Clue::Right).count()
    }

    #[must_use]
    pub fn count_pico(&self) -> usize {
        self.clues.iter().filter(|&&c| c == Clue::Pico).count()
    }
}

impl fmt::Display for ClueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bagels() {
            return f.write_str(Self::BAGELS);
        }
        for clue in &self.clues {
            f.write_str(clue.as_str())?;
        }
        Ok(())
    }
}

/// Score `guess` against `secret`
///
/// Each position is judged on its own: an exact match gives `Right`, a symbol
/// found elsewhere in the secret gives `Pico`, anything else gives nothing.
/// Secret symbols are distinct, so nothing is double counted; repeated guess
/// symbols each earn their own token.
///
/// # Errors
/// Returns `CoreError::InvalidArgument` if the lengths differ.
///
/// # Examples
/// ```
/// use pico_paradox::core::{Guess, SecretCode, compute_clues};
///
/// let secret = SecretCode::new("3F4").unwrap();
///
/// let clues = compute_clues(&Guess::new("0F3").unwrap(), &secret).unwrap();
/// assert_eq!(clues.to_string(), "PicoRight");
///
/// let clues = compute_clues(&Guess::new("012").unwrap(), &secret).unwrap();
/// assert_eq!(clues.to_string(), "Bagels");
/// ```
pub fn compute_clues(guess: &Guess, secret: &SecretCode) -> Result<ClueSet, CoreError> {
    if guess.len() != secret.len() {
        return Err(CoreError::invalid(format!(
            "guess has {} symbols but the secret has {}",
            guess.len(),
            secret.len()
        )));
    }

    let clues = guess
        .symbols()
        .iter()
        .zip(secret.symbols())
        .filter_map(|(&g, &s)| {
            if g == s {
                Some(Clue::Right)
            } else if secret.contains(g) {
                Some(Clue::Pico)
            } else {
                None
            }
        })
        .collect();

    Ok(ClueSet::from_clues(clues))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clues_for(guess: &str, secret: &str) -> String {
        let guess = Guess::new(guess).unwrap();
        let secret = SecretCode::new(secret).unwrap();
        compute_clues(&guess, &secret).unwrap().to_string()
    }

    #[test]
    fn clue_order() {
        assert!(Clue::Pico < Clue::Right);
    }

    #[test]
    fn bagels_when_nothing_shared() {
        assert_eq!(clues_for("012", "3F4"), "Bagels");
    }

    #[test]
    fn worked_example_pico_right() {
        assert_eq!(clues_for("0F3", "3F4"), "PicoRight");
    }

    #[test]
    fn all_right() {
        assert_eq!(clues_for("ABC", "ABC"), "RightRightRight");
        assert_eq!(clues_for("abc", "ABC"), "RightRightRight");
    }

    #[test]
    fn all_pico() {
        assert_eq!(clues_for("CAB", "ABC"), "PicoPicoPico");
    }

    #[test]
    fn sorted_regardless_of_position() {
        // Right at position 0 vs Right at position 2
        let a = clues_for("3A4", "3F4");
        let b = clues_for("F94", "3F4");
        assert_eq!(a, "RightRight");
        assert_eq!(b, "PicoRight");

        // Pico then Right vs Right then Pico
        assert_eq!(clues_for("F9A", "3F4"), "Pico");
        assert_eq!(clues_for("4F0", "3F4"), clues_for("0F3", "3F4"));
    }

    #[test]
    fn repeated_guess_symbols_score_independently() {
        // F matches at position 1 and is present elsewhere for positions 0 and 2
        assert_eq!(clues_for("FFF", "3F4"), "PicoPicoRight");
        // 3 is Right at 0 and Pico at 1 and 2
        assert_eq!(clues_for("333", "3F4"), "PicoPicoRight");
    }

    #[test]
    fn counts() {
        let guess = Guess::new("FFF").unwrap();
        let secret = SecretCode::new("3F4").unwrap();
        let clues = compute_clues(&guess, &secret).unwrap();
        assert_eq!(clues.count_right(), 1);
        assert_eq!(clues.count_pico(), 2);
        assert!(!clues.is_bagels());
    }

    #[test]
    fn length_mismatch_is_invalid_argument() {
        let guess = Guess::new("12").unwrap();
        let secret = SecretCode::new("3F4").unwrap();
        assert!(matches!(
            compute_clues(&guess, &secret),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_clues_sorts() {
        let set = ClueSet::from_clues(vec![Clue::Right, Clue::Pico, Clue::Right]);
        assert_eq!(set.clues(), &[Clue::Pico, Clue::Right, Clue::Right]);
        assert_eq!(set.to_string(), "PicoRightRight");
        assert_eq!(ClueSet::default().to_string(), "Bagels");
    }
}

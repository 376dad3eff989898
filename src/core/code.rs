//! Secret codes and guesses over the hexadecimal alphabet
//!
//! Symbols are stored as uppercase ASCII bytes. Input is case-insensitive.

use super::{CoreError, GuessError};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// The 16 symbols a code is built from
pub const ALPHABET: [u8; 16] = *b"0123456789ABCDEF";

/// Number of symbols in [`ALPHABET`]; also the longest possible secret
pub const ALPHABET_SIZE: usize = ALPHABET.len();

/// Canonicalize one character to an alphabet symbol, if it is one
#[inline]
#[must_use]
pub fn canonical_symbol(ch: char) -> Option<u8> {
    ch.is_ascii_hexdigit().then(|| ch.to_ascii_uppercase() as u8)
}

/// A secret code: pairwise-distinct symbols in a fixed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCode {
    symbols: Vec<u8>,
}

impl SecretCode {
    /// Build a secret from text, e.g. `"3F4"`
    ///
    /// # Errors
    /// Returns `CoreError::InvalidArgument` if the text is empty, longer than
    /// the alphabet, contains a non-hex character or repeats a symbol.
    ///
    /// # Examples
    /// ```
    /// use pico_paradox::core::SecretCode;
    ///
    /// let secret = SecretCode::new("3f4").unwrap();
    /// assert_eq!(secret.text(), "3F4");
    /// assert!(SecretCode::new("33").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CoreError> {
        let mut symbols = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let symbol = canonical_symbol(ch)
                .ok_or_else(|| CoreError::invalid(format!("'{ch}' is not a hex digit")))?;
            if symbols.contains(&symbol) {
                return Err(CoreError::invalid(format!(
                    "secret symbols must be distinct, '{}' repeats",
                    symbol as char
                )));
            }
            symbols.push(symbol);
        }

        check_secret_length(symbols.len())?;
        Ok(Self { symbols })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: a secret holds at least one symbol
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// The code as uppercase text
    #[must_use]
    pub fn text(&self) -> String {
        self.symbols.iter().map(|&s| s as char).collect()
    }

    /// True when `guess` matches this secret at every position
    #[must_use]
    pub fn matches(&self, guess: &Guess) -> bool {
        self.symbols == guess.symbols
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// A player's guess; symbols may repeat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    symbols: Vec<u8>,
}

impl Guess {
    /// Parse a guess of any non-zero length
    ///
    /// # Errors
    /// Returns `GuessError::NotHex` for the first non-hex character, or
    /// `GuessError::InvalidLength` if the trimmed text is empty.
    pub fn new(text: &str) -> Result<Self, GuessError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GuessError::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }

        let symbols = trimmed
            .chars()
            .map(|ch| canonical_symbol(ch).ok_or(GuessError::NotHex(ch)))
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self { symbols })
    }

    /// Parse a guess that must be exactly `expected_len` symbols long
    ///
    /// Surrounding whitespace is ignored and letters are uppercased.
    ///
    /// # Errors
    /// Returns `GuessError::InvalidLength` or `GuessError::NotHex`.
    ///
    /// # Examples
    /// ```
    /// use pico_paradox::core::{Guess, GuessError};
    ///
    /// let guess = Guess::parse(" 0fa ", 3).unwrap();
    /// assert_eq!(guess.text(), "0FA");
    ///
    /// assert!(matches!(Guess::parse("0f", 3), Err(GuessError::InvalidLength { .. })));
    /// assert!(matches!(Guess::parse("0fz", 3), Err(GuessError::NotHex('z'))));
    /// ```
    pub fn parse(text: &str, expected_len: usize) -> Result<Self, GuessError> {
        let actual = text.trim().chars().count();
        if actual != expected_len {
            return Err(GuessError::InvalidLength {
                expected: expected_len,
                actual,
            });
        }
        Self::new(text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.symbols.iter().map(|&s| s as char).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

fn check_secret_length(length: usize) -> Result<(), CoreError> {
    if length == 0 || length > ALPHABET_SIZE {
        return Err(CoreError::invalid(format!(
            "secret length must be between 1 and {ALPHABET_SIZE}, got {length}"
        )));
    }
    Ok(())
}

/// Generate a random secret of `length` distinct symbols
///
/// Shuffles the whole alphabet and keeps the first `length` symbols.
///
/// # Errors
/// Returns `CoreError::InvalidArgument` if `length` is 0 or exceeds the
/// alphabet size.
pub fn generate_secret<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<SecretCode, CoreError> {
    check_secret_length(length)?;

    let mut symbols = ALPHABET.to_vec();
    symbols.shuffle(rng);
    symbols.truncate(length);

    Ok(SecretCode { symbols })
}

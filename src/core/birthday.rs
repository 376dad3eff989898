//! Birthday sampling and collision detection
//!
//! A `Birthday` is a day-of-year ordinal in `0..365`. The year carries no
//! meaning, so every value is anchored on the non-leap reference year 2001
//! when a calendar date is needed.

use super::CoreError;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Number of equally likely days in the reference year (no leap day)
pub const DAYS_IN_YEAR: u16 = 365;

/// Non-leap year every birthday is anchored on
const REFERENCE_YEAR: i32 = 2001;

/// Short month names, indexed by `month0`
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A single sampled birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(u16);

impl Birthday {
    /// Create a birthday from a zero-based day-of-year ordinal
    ///
    /// # Errors
    /// Returns `CoreError::InvalidArgument` if `ordinal >= 365`.
    ///
    /// # Examples
    /// ```
    /// use pico_paradox::core::Birthday;
    ///
    /// let b = Birthday::from_ordinal(59).unwrap();
    /// assert_eq!(b.to_string(), "Mar 1");
    /// assert!(Birthday::from_ordinal(365).is_err());
    /// ```
    pub fn from_ordinal(ordinal: u16) -> Result<Self, CoreError> {
        if ordinal >= DAYS_IN_YEAR {
            return Err(CoreError::invalid(format!(
                "day-of-year ordinal must be below {DAYS_IN_YEAR}, got {ordinal}"
            )));
        }
        Ok(Self(ordinal))
    }

    /// Zero-based day of the year (Jan 1 = 0, Dec 31 = 364)
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u16 {
        self.0
    }

    /// Calendar date of this birthday in the reference year
    ///
    /// # Panics
    /// Will not panic - the ordinal is always inside the reference year.
    #[must_use]
    pub fn date(self) -> NaiveDate {
        NaiveDate::from_yo_opt(REFERENCE_YEAR, u32::from(self.0) + 1)
            .expect("ordinal validated against DAYS_IN_YEAR")
    }

    /// Three-letter month name, e.g. "Feb"
    #[must_use]
    pub fn month_name(self) -> &'static str {
        MONTHS[self.date().month0() as usize]
    }

    /// Day of the month (1-31)
    #[must_use]
    pub fn day(self) -> u32 {
        self.date().day()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.day())
    }
}

/// Draw `count` uniformly random birthdays, with replacement
///
/// The result keeps generation order.
///
/// # Errors
/// Returns `CoreError::InvalidArgument` if `count` is zero.
pub fn generate_sample<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<Birthday>, CoreError> {
    if count == 0 {
        return Err(CoreError::invalid("sample size must be at least 1"));
    }

    Ok((0..count)
        .map(|_| Birthday(rng.random_range(0..DAYS_IN_YEAR)))
        .collect())
}

/// Find the first birthday that occurs more than once
///
/// Scans pairs `(a, b)` with `a` ascending from 0 and `b` ascending from
/// `a + 1`, returning the value at the first equal pair. When every value is
/// distinct the scan is skipped entirely.
///
/// # Examples
/// ```
/// use pico_paradox::core::{Birthday, find_collision};
///
/// let days: Vec<Birthday> = [10, 20, 30, 20, 10]
///     .into_iter()
///     .map(|d| Birthday::from_ordinal(d).unwrap())
///     .collect();
///
/// // 10 repeats first in scan order (a = 0, b = 4)
/// assert_eq!(find_collision(&days).map(Birthday::ordinal), Some(10));
/// ```
#[must_use]
pub fn find_collision(sample: &[Birthday]) -> Option<Birthday> {
    let distinct: FxHashSet<Birthday> = sample.iter().copied().collect();
    if distinct.len() == sample.len() {
        return None;
    }

    for (a, birthday_a) in sample.iter().enumerate() {
        for birthday_b in &sample[a + 1..] {
            if birthday_a == birthday_b {
                return Some(*birthday_a);
            }
        }
    }

    None
}

/// Linear-time equivalent of [`find_collision`]
///
/// The pairwise scan returns the value at the smallest index that has a later
/// duplicate, which is the first element (by index) whose value occurs at
/// least twice. Counting occurrences finds the same element in O(n).
#[must_use]
pub fn find_collision_counted(sample: &[Birthday]) -> Option<Birthday> {
    let mut counts: FxHashMap<Birthday, u32> = FxHashMap::default();
    for &birthday in sample {
        *counts.entry(birthday).or_insert(0) += 1;
    }

    sample
        .iter()
        .copied()
        .find(|birthday| counts.get(birthday).is_some_and(|&count| count > 1))
}

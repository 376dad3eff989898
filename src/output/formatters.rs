//! Formatting utilities for terminal output

use crate::core::{Birthday, Clue, ClueSet};

/// Comma-join birthdays as "Mon D" text
#[must_use]
pub fn join_birthdays(birthdays: &[Birthday]) -> String {
    birthdays
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render clues as compact markers: `●` for Right, `○` for Pico, `·` for Bagels
#[must_use]
pub fn clue_markers(clues: &ClueSet) -> String {
    if clues.is_bagels() {
        return "·".to_string();
    }
    clues
        .clues()
        .iter()
        .map(|clue| match clue {
            Clue::Right => '●',
            Clue::Pico => '○',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a probability in `[0, 1]` as a bar
#[must_use]
pub fn probability_bar(probability: f64, width: usize) -> String {
    create_progress_bar(probability, 1.0, width)
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_word(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(ordinals: &[u16]) -> Vec<Birthday> {
        ordinals
            .iter()
            .map(|&d| Birthday::from_ordinal(d).unwrap())
            .collect()
    }

    #[test]
    fn join_birthdays_comma_separated() {
        assert_eq!(join_birthdays(&days(&[0, 59, 364])), "Jan 1, Mar 1, Dec 31");
        assert_eq!(join_birthdays(&days(&[100])), "Apr 11");
        assert_eq!(join_birthdays(&[]), "");
    }

    #[test]
    fn clue_markers_sorted() {
        let set = ClueSet::from_clues(vec![Clue::Right, Clue::Pico]);
        assert_eq!(clue_markers(&set), "○●");
        assert_eq!(clue_markers(&ClueSet::default()), "·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn probability_bar_half() {
        let bar = probability_bar(0.5, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn guesses_word_plural() {
        assert_eq!(guesses_word(1), "guess");
        assert_eq!(guesses_word(2), "guesses");
    }
}

//! Display functions for command results

use super::formatters::{guesses_word, join_birthdays, probability_bar};
use crate::config::GameConfig;
use crate::core::{Birthday, ClueSet, SecretCode};
use crate::simulation::Estimate;
use colored::Colorize;

/// Print the birthday paradox introduction
pub fn print_birthday_banner() {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BIRTHDAY PARADOX".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();
    println!("The birthday paradox shows that the probability of two people");
    println!("sharing a birthday is surprisingly high, even in small groups.");
    println!("This program runs Monte Carlo experiments to estimate it.\n");
}

/// Print one generated sample
pub fn print_sample(birthdays: &[Birthday]) {
    println!("\nHere are {} birthdays:", birthdays.len());
    println!("{}", join_birthdays(birthdays));
    println!();
}

/// Print the collision found in the single sample, if any
pub fn print_match(found: Option<Birthday>) {
    print!("In this simulation, ");
    match found {
        Some(birthday) => println!(
            "multiple people have a birthday on {}",
            birthday.to_string().bright_yellow().bold()
        ),
        None => println!("there are no matching birthdays."),
    }
    println!();
}

/// Print the result of a Monte Carlo run
pub fn print_estimate(estimate: &Estimate) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Out of {} simulations of {} people, there was a",
        format_count(estimate.trials),
        estimate.people
    );
    println!(
        "matching birthday in that group {} times. This means",
        estimate.collisions
    );
    println!(
        "that {} people have a {} chance of",
        estimate.people,
        format!("{}%", estimate.percentage()).bright_yellow().bold()
    );
    println!("having a matching birthday in their group.");
    println!(
        "   [{}]",
        probability_bar(estimate.probability(), 40).green()
    );
    println!("That's probably more than you would think!");
}

/// Print the guessing game rules
pub fn print_pico_rules(config: &GameConfig) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Pico - Hex Code Guessing Game                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "I am thinking of a {}-digit hex code (0-9, A-F) with no repeated digits.",
        config.digits()
    );
    println!("Try to guess what it is. Letters are case-insensitive.\n");
    println!("Here are some clues:");
    println!("  When I say:    That means:");
    println!("  {}           One digit is correct and in the right position.", "Right".green());
    println!("  {}            One digit is correct but in the wrong position.", "Pico".yellow());
    println!("  {}          No digit is correct.\n", "Bagels".bright_black());
    println!("For example, if the secret code was 3F4 and your guess was 0F3,");
    println!("the clues would be PicoRight.\n");
}

/// Print the clues for a non-winning guess
pub fn print_clues(clues: &ClueSet) {
    let text = clues.to_string();
    if clues.is_bagels() {
        println!("{}", text.bright_black());
    } else {
        println!("{}", text.bright_white().bold());
    }
}

/// Print the win message
pub fn print_win(attempts: usize) {
    println!(
        "{}",
        format!("You got it! ({attempts} {})", guesses_word(attempts))
            .green()
            .bold()
    );
}

/// Print the secret after the attempt budget ran out
pub fn print_reveal(secret: &SecretCode, max_guesses: usize) {
    println!(
        "{}",
        format!("You ran out of guesses after {max_guesses}.").red()
    );
    println!("The answer was {}.", secret.text().bright_yellow().bold());
}

fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

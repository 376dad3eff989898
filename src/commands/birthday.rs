//! Birthday paradox command
//!
//! Shows one sample with its first shared birthday, then runs the Monte Carlo
//! estimate with progress output.

use super::prompt::read_line;
use crate::config::{PEOPLE_RANGE, SimulationConfig};
use crate::core::{find_collision, generate_sample};
use crate::output::{print_birthday_banner, print_estimate, print_match, print_sample};
use crate::simulation::{Estimate, run_estimate};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Options for one `birthday` run
pub struct BirthdayOptions {
    /// Group size; prompted for when absent
    pub people: Option<usize>,
    pub trials: usize,
    /// Wait for Enter before the long simulation
    pub pause: bool,
}

/// Parse a group size typed at the prompt
///
/// Accepts only plain decimal digits within 1-100.
#[must_use]
pub fn parse_people(response: &str) -> Option<usize> {
    if response.is_empty() || !response.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    response
        .parse::<usize>()
        .ok()
        .filter(|n| PEOPLE_RANGE.contains(n))
}

/// Run the birthday paradox demonstration
///
/// # Errors
///
/// Returns an error if the options are out of range or reading input fails.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_birthday<R, I>(options: &BirthdayOptions, input: &mut I, rng: &mut R) -> Result<Estimate>
where
    R: Rng + ?Sized,
    I: BufRead,
{
    print_birthday_banner();

    let people = match options.people {
        Some(n) => n,
        None => prompt_people(input)?,
    };
    let config = SimulationConfig::new(people, options.trials)?;

    let birthdays = generate_sample(config.people, rng)?;
    debug!(people = config.people, "generated sample");
    print_sample(&birthdays);
    print_match(find_collision(&birthdays));

    println!(
        "Generating {} random birthdays {} times...",
        config.people, config.trials
    );
    if options.pause {
        read_line(input, "Press Enter to begin...")?;
    }

    println!("Let's run another {} simulations.", config.trials);
    let estimate = simulate(&config, rng, &mut io::stdout().lock())?;

    print_estimate(&estimate);
    Ok(estimate)
}

/// Run the estimate, writing a `N simulations run...` line to `out` at every
/// progress interval
///
/// The bar only tracks position, so the lines still appear when it is hidden.
fn simulate<R, W>(config: &SimulationConfig, rng: &mut R, out: &mut W) -> Result<Estimate>
where
    R: Rng + ?Sized,
    W: Write,
{
    let pb = ProgressBar::new(config.trials as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut written = Ok(());
    let estimate = run_estimate(
        config.people,
        config.trials,
        config.progress_interval,
        rng,
        |done| {
            pb.set_position(done as u64);
            if written.is_ok() {
                written = pb.suspend(|| writeln!(out, "{done} simulations run..."));
            }
        },
    )?;
    pb.finish_and_clear();
    written?;

    writeln!(out, "{} simulations run.", config.trials)?;
    Ok(estimate)
}

fn prompt_people<I: BufRead>(input: &mut I) -> Result<usize> {
    loop {
        println!("How many birthdays shall I generate? (Max 100)");
        let response = read_line(input, "> ")?;
        if let Some(n) = parse_people(&response) {
            return Ok(n);
        }
    }
}

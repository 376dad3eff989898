//! Monte Carlo estimate of the birthday collision probability
//!
//! Each trial draws a fresh sample and checks it with the pairwise scan.
//! Cost is O(trials × n²) in the worst case, which is fine for n ≤ 100.

use crate::core::{CoreError, find_collision, generate_sample};
use rand::Rng;
use tracing::debug;

/// Outcome of a batch of trials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub people: usize,
    pub trials: usize,
    pub collisions: usize,
}

impl Estimate {
    /// Fraction of trials with at least one shared birthday, in `[0, 1]`
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.collisions as f64 / self.trials as f64
    }

    /// Probability as a percentage rounded to two decimal places
    ///
    /// # Examples
    /// ```
    /// use pico_paradox::simulation::Estimate;
    ///
    /// let estimate = Estimate { people: 23, trials: 3, collisions: 2 };
    /// assert_eq!(estimate.percentage(), 66.67);
    /// ```
    #[must_use]
    pub fn percentage(&self) -> f64 {
        (self.probability() * 10_000.0).round() / 100.0
    }
}

/// Run `trials` simulations of `people` birthdays
///
/// `on_progress` is called with the number of finished trials before every
/// trial whose index is a multiple of `progress_interval` (0 disables it).
///
/// # Errors
/// Returns `CoreError::InvalidArgument` if `people` or `trials` is zero.
/// Both are checked before the first trial runs.
pub fn run_estimate<R, F>(
    people: usize,
    trials: usize,
    progress_interval: usize,
    rng: &mut R,
    mut on_progress: F,
) -> Result<Estimate, CoreError>
where
    R: Rng + ?Sized,
    F: FnMut(usize),
{
    if people == 0 {
        return Err(CoreError::invalid("sample size must be at least 1"));
    }
    if trials == 0 {
        return Err(CoreError::invalid("trial count must be at least 1"));
    }

    let mut collisions = 0;
    for trial in 0..trials {
        if progress_interval > 0 && trial % progress_interval == 0 {
            on_progress(trial);
        }

        let sample = generate_sample(people, rng)?;
        if find_collision(&sample).is_some() {
            collisions += 1;
        }
    }

    let estimate = Estimate {
        people,
        trials,
        collisions,
    };
    debug!(
        people,
        trials,
        collisions,
        probability = estimate.probability(),
        "estimate complete"
    );

    Ok(estimate)
}

/// Estimate the probability that `people` random birthdays contain a repeat
///
/// # Errors
/// Returns `CoreError::InvalidArgument` if `people` or `trials` is zero.
///
/// # Examples
/// ```
/// use pico_paradox::simulation::estimate_collision_probability;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let p = estimate_collision_probability(1, 1_000, &mut rng).unwrap();
/// assert_eq!(p, 0.0);
/// ```
pub fn estimate_collision_probability<R: Rng + ?Sized>(
    people: usize,
    trials: usize,
    rng: &mut R,
) -> Result<f64, CoreError> {
    run_estimate(people, trials, 0, rng, |_| {}).map(|estimate| estimate.probability())
}

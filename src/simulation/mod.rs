//! Birthday paradox simulation
//!
//! Repeated-trial estimation built on the sampler in `core`.

mod monte_carlo;

pub use monte_carlo::{Estimate, estimate_collision_probability, run_estimate};

//! Per-stage samplers for one patient record.
//!
//! Each stage is a pure function of an RNG and the already-computed upstream
//! values, so stages stay independently testable. The order in which the
//! generator calls them is part of the reproducibility contract; see
//! [`crate::generator`].

pub mod activity;
pub mod demographics;
pub mod humidity;
pub mod identity;
pub mod pressure;
pub mod risk_factors;
pub mod scoring;
pub mod thermal;

use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};

/// Draw from Normal(mean, std_dev).
///
/// The standard deviation was validated non-negative with the configuration,
/// so construction cannot fail here.
pub(crate) fn draw_normal<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    Normal::new(mean, std_dev)
        .expect("standard deviation validated with the configuration")
        .sample(rng)
}

/// Draw from an exponential distribution with the given mean.
///
/// The mean was validated strictly positive with the configuration.
pub(crate) fn draw_exponential<R: Rng>(rng: &mut R, mean: f64) -> f64 {
    Exp::new(1.0 / mean)
        .expect("exponential mean validated positive with the configuration")
        .sample(rng)
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

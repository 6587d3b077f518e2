//! Bilateral skin-temperature simulation with conditional hot-spot
//! injection.

use super::{draw_normal, round_to};
use rand::Rng;
use synth_core::ThermalConfig;

/// Sampled temperature block of one patient.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSample {
    pub left_c: f64,
    pub right_c: f64,
    pub asymmetry_c: f64,
}

/// Draw both foot temperatures and, for high-risk patients, possibly
/// inject an inflammatory hot spot.
///
/// Neuropathy raises the baseline mean. A hot spot sets one side (picked
/// fairly) to the other side plus a difference drawn above the clinical
/// asymmetry threshold; only the elevated side may use the wider
/// inflammation ceiling. The asymmetry field is derived strictly after
/// injection — deriving it earlier would under-report the anomaly rate.
pub fn sample_temperatures<R: Rng>(
    rng: &mut R,
    cfg: &ThermalConfig,
    neuropathy: bool,
    high_risk: bool,
) -> TemperatureSample {
    let mean = if neuropathy {
        cfg.neuropathy_mean_c
    } else {
        cfg.baseline_mean_c
    };

    let mut left_c = round_to(
        cfg.temperature_bounds
            .clip(draw_normal(rng, mean, cfg.std_dev_c)),
        1,
    );
    let mut right_c = round_to(
        cfg.temperature_bounds
            .clip(draw_normal(rng, mean, cfg.std_dev_c)),
        1,
    );

    if high_risk && rng.gen_bool(cfg.hotspot_probability) {
        let diff = rng.gen_range(
            cfg.asymmetry_threshold_c..=cfg.asymmetry_threshold_c + cfg.hotspot_spread_c,
        );
        if rng.gen_bool(0.5) {
            right_c = round_to(cfg.hotspot_bounds.clip(left_c + diff), 1);
        } else {
            left_c = round_to(cfg.hotspot_bounds.clip(right_c + diff), 1);
        }
    }

    TemperatureSample {
        left_c,
        right_c,
        asymmetry_c: (left_c - right_c).abs(),
    }
}

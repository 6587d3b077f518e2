//! Bilateral plantar-pressure simulation: peak pressure, stance time and
//! pressure-time integral, coupled to gait speed.

use super::{draw_normal, round_to};
use rand::Rng;
use synth_core::{GaitConfig, PressureConfig};

/// Sampled pressure block of one patient.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSample {
    pub peak_left_kpa: f64,
    pub peak_right_kpa: f64,
    pub stance_time_left_s: f64,
    pub stance_time_right_s: f64,
    pub pti_left_kpa_s: f64,
    pub pti_right_kpa_s: f64,
}

/// Draw the pressure block.
///
/// Both feet share one mean pressure: a uniform base draw, raised by a
/// uniform increment for high-risk patients, then scaled with gait speed
/// (faster gait loads the forefoot harder). The right foot draws with an
/// inflated standard deviation to break bilateral symmetry. Stance time
/// shrinks as gait speed rises relative to baseline, and the pressure-time
/// integral is the exact product of peak and stance per foot.
pub fn sample_pressure<R: Rng>(
    rng: &mut R,
    cfg: &PressureConfig,
    gait: &GaitConfig,
    high_risk: bool,
    gait_speed_m_s: f64,
) -> PressureSample {
    let mut mean_pressure = rng.gen_range(cfg.base_range_kpa.min..=cfg.base_range_kpa.max);
    if high_risk {
        mean_pressure += rng.gen_range(cfg.risk_increment_kpa.min..=cfg.risk_increment_kpa.max);
    }
    mean_pressure *= 1.0 + (gait_speed_m_s - gait.base_speed_mean_m_s) * cfg.speed_coupling;

    let peak_left_kpa = round_to(
        cfg.peak_bounds
            .clip(draw_normal(rng, mean_pressure, cfg.std_dev_kpa)),
        2,
    );
    let peak_right_kpa = round_to(
        cfg.peak_bounds.clip(draw_normal(
            rng,
            mean_pressure,
            cfg.std_dev_kpa * cfg.right_std_factor,
        )),
        2,
    );

    let stance_mean_s = gait.stance_time_mean_s / (gait_speed_m_s / gait.base_speed_mean_m_s);
    let stance_time_left_s = gait
        .stance_time_bounds
        .clip(draw_normal(rng, stance_mean_s, gait.stance_time_std_s));
    let stance_time_right_s = gait
        .stance_time_bounds
        .clip(draw_normal(rng, stance_mean_s, gait.stance_time_std_s));

    PressureSample {
        peak_left_kpa,
        peak_right_kpa,
        stance_time_left_s,
        stance_time_right_s,
        pti_left_kpa_s: peak_left_kpa * stance_time_left_s,
        pti_right_kpa_s: peak_right_kpa * stance_time_right_s,
    }
}

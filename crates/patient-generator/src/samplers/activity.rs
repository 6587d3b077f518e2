//! Activity and gait-feature simulation, conditioned on the risk label.

use super::{draw_normal, round_to};
use rand::Rng;
use synth_core::{ActivityConfig, GaitConfig};

/// Sampled activity features of one patient.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySample {
    pub step_count: u32,
    pub vertical_accel_rms: f64,
    pub foot_orientation_deg: f64,
}

/// Draw daily step count, vertical acceleration RMS and foot-orientation
/// angle from the profile matching the risk label.
///
/// High-risk patients walk less, strike the ground more softly and show a
/// larger angular deviation of the foot.
pub fn sample_activity<R: Rng>(rng: &mut R, cfg: &ActivityConfig, high_risk: bool) -> ActivitySample {
    let profile = if high_risk {
        &cfg.high_risk
    } else {
        &cfg.low_risk
    };

    let step_count = cfg
        .step_count_bounds
        .clip(draw_normal(
            rng,
            profile.step_count.mean,
            profile.step_count.std_dev,
        ))
        .round() as u32;

    let vertical_accel_rms = round_to(
        cfg.vertical_accel_bounds.clip(draw_normal(
            rng,
            profile.vertical_accel_rms.mean,
            profile.vertical_accel_rms.std_dev,
        )),
        2,
    );

    let foot_orientation_deg = round_to(
        cfg.foot_orientation_bounds.clip(draw_normal(
            rng,
            profile.foot_orientation_deg.mean,
            profile.foot_orientation_deg.std_dev,
        )),
        1,
    );

    ActivitySample {
        step_count,
        vertical_accel_rms,
        foot_orientation_deg,
    }
}

/// Draw gait speed; the mean drops by the configured reduction for
/// high-risk patients.
pub fn sample_gait_speed<R: Rng>(rng: &mut R, cfg: &GaitConfig, high_risk: bool) -> f64 {
    let mean = if high_risk {
        cfg.base_speed_mean_m_s - cfg.high_risk_speed_reduction_m_s
    } else {
        cfg.base_speed_mean_m_s
    };

    round_to(
        cfg.speed_bounds
            .clip(draw_normal(rng, mean, cfg.speed_std_m_s)),
        2,
    )
}

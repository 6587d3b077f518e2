//! Demographic sampling: age, sex, diabetes duration, BMI, HbA1c.

use super::{draw_exponential, draw_normal, round_to};
use rand::Rng;
use synth_core::{DemographicsConfig, Sex};

/// Sampled demographic profile of one patient.
#[derive(Debug, Clone, PartialEq)]
pub struct Demographics {
    pub age: u32,
    pub sex: Sex,
    pub diabetes_duration_years: u32,
    pub bmi: f64,
    pub hba1c_pct: f64,
}

/// Draw the demographic block.
///
/// Age, BMI and HbA1c are normal; diabetes duration is exponential (long
/// durations are rarer but clinically decisive). Each value is clipped to
/// its configured range and rounded to its declared precision.
pub fn sample_demographics<R: Rng>(rng: &mut R, cfg: &DemographicsConfig) -> Demographics {
    let age = cfg
        .age_bounds
        .clip(draw_normal(rng, cfg.age.mean, cfg.age.std_dev))
        .round() as u32;

    let diabetes_duration_years = cfg
        .diabetes_duration_bounds
        .clip(draw_exponential(rng, cfg.diabetes_duration_mean_years))
        .round() as u32;

    let bmi = round_to(
        cfg.bmi_bounds
            .clip(draw_normal(rng, cfg.bmi.mean, cfg.bmi.std_dev)),
        1,
    );

    let hba1c_pct = round_to(
        cfg.hba1c_bounds
            .clip(draw_normal(rng, cfg.hba1c.mean, cfg.hba1c.std_dev)),
        1,
    );

    let sex = if rng.gen_range(0..2) == 0 {
        Sex::Male
    } else {
        Sex::Female
    };

    Demographics {
        age,
        sex,
        diabetes_duration_years,
        bmi,
        hba1c_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demographics_within_bounds() {
        let cfg = DemographicsConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let d = sample_demographics(&mut rng, &cfg);
            assert!((25..=95).contains(&d.age));
            assert!((1..=60).contains(&d.diabetes_duration_years));
            assert!(cfg.bmi_bounds.contains(d.bmi));
            assert!(cfg.hba1c_bounds.contains(d.hba1c_pct));
        }
    }

    #[test]
    fn test_demographics_rounded_to_one_decimal() {
        let cfg = DemographicsConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let d = sample_demographics(&mut rng, &cfg);
            assert_eq!(d.bmi, round_to(d.bmi, 1));
            assert_eq!(d.hba1c_pct, round_to(d.hba1c_pct, 1));
        }
    }

    #[test]
    fn test_both_sexes_occur() {
        let cfg = DemographicsConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        let mut male = 0;
        let mut female = 0;
        for _ in 0..200 {
            match sample_demographics(&mut rng, &cfg).sex {
                Sex::Male => male += 1,
                Sex::Female => female += 1,
            }
        }
        assert!(male > 0 && female > 0);
    }
}

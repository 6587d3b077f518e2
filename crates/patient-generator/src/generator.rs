//! Main generator producing synthetic patient records.

use crate::samplers::activity::{sample_activity, sample_gait_speed};
use crate::samplers::demographics::sample_demographics;
use crate::samplers::humidity::sample_humidity;
use crate::samplers::identity::{patient_id, sample_name};
use crate::samplers::pressure::sample_pressure;
use crate::samplers::risk_factors::sample_risk_factors;
use crate::samplers::scoring::composite_score;
use crate::samplers::thermal::sample_temperatures;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use synth_core::{ConfigError, GenerationConfig, PatientRecord};

/// Generate `count` patient records for the given seed and configuration.
///
/// Deterministic: the same (count, seed, config) triple always yields the
/// same sequence. The only failure mode is an invalid configuration,
/// rejected before any sampling happens.
pub fn generate(
    count: u64,
    seed: u64,
    config: &GenerationConfig,
) -> Result<Vec<PatientRecord>, ConfigError> {
    let mut generator = PatientGenerator::new(config.clone(), seed)?;
    Ok(generator.records(count).collect())
}

/// Generator that produces deterministic synthetic patient records.
///
/// Each record draws from its own sub-stream, seeded from the base seed and
/// the record index. Records are therefore independent of each other while
/// the whole sequence stays reproducible, and generation may resume from
/// any index without replaying the prefix.
pub struct PatientGenerator {
    /// Validated distribution parameters
    config: GenerationConfig,
    /// Base seed for sub-stream derivation
    seed: u64,
    /// Current record index (for incremental generation)
    index: u64,
}

impl PatientGenerator {
    /// Create a new generator with the given configuration and seed.
    ///
    /// Validates the configuration eagerly; sampling itself cannot fail
    /// afterwards.
    pub fn new(config: GenerationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            index: 0,
        })
    }

    /// Set the starting index for record generation.
    ///
    /// Record N of a resumed generator is identical to record N of a full
    /// run, because every record derives its RNG from (seed, index).
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Derive the RNG seed for a specific record index.
    fn record_seed(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> PatientRecord {
        let index = self.index;
        let mut rng = StdRng::seed_from_u64(self.record_seed(index));
        let record = sample_record(&mut rng, &self.config, index);
        self.index += 1;
        record
    }

    /// Generate multiple records as a lazy iterator.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// One full pass through the sampling stages.
///
/// The stage order is the reproducibility contract: demographics, risk
/// flags, score, activity, gait speed, pressure, temperature, humidity,
/// identity. The risk label conditions activity, gait, pressure and
/// thermal sampling; gait speed feeds pressure scaling and stance time.
fn sample_record<R: Rng>(rng: &mut R, config: &GenerationConfig, index: u64) -> PatientRecord {
    let demographics = sample_demographics(rng, &config.demographics);
    let flags = sample_risk_factors(rng, &config.risk_factors);

    let composite_risk_score = composite_score(
        &flags,
        demographics.hba1c_pct,
        demographics.diabetes_duration_years,
    );
    let risk_label = composite_risk_score >= config.risk_score_threshold;

    let activity = sample_activity(rng, &config.activity, risk_label);
    let gait_speed_m_s = sample_gait_speed(rng, &config.gait, risk_label);
    let pressure = sample_pressure(
        rng,
        &config.pressure,
        &config.gait,
        risk_label,
        gait_speed_m_s,
    );
    let temperature = sample_temperatures(rng, &config.thermal, flags.neuropathy, risk_label);
    let (humidity_left_pct, humidity_right_pct) = sample_humidity(rng, &config.humidity);
    let (given_name, family_name) = sample_name(rng);

    PatientRecord {
        id: patient_id(index),
        given_name,
        family_name,
        age: demographics.age,
        sex: demographics.sex,
        diabetes_duration_years: demographics.diabetes_duration_years,
        hba1c_pct: demographics.hba1c_pct,
        bmi: demographics.bmi,
        neuropathy: flags.neuropathy,
        deformity: flags.deformity,
        prior_ulcer: flags.prior_ulcer,
        prior_amputation: flags.prior_amputation,
        pad: flags.pad,
        retinopathy: flags.retinopathy,
        nephropathy: flags.nephropathy,
        hypertension: flags.hypertension,
        smoking: flags.smoking,
        alcohol: flags.alcohol,
        physically_active: flags.physically_active,
        composite_risk_score,
        risk_label,
        gait_speed_m_s,
        step_count: activity.step_count,
        vertical_accel_rms: activity.vertical_accel_rms,
        foot_orientation_deg: activity.foot_orientation_deg,
        pressure_peak_left_kpa: pressure.peak_left_kpa,
        pressure_peak_right_kpa: pressure.peak_right_kpa,
        stance_time_left_s: pressure.stance_time_left_s,
        stance_time_right_s: pressure.stance_time_right_s,
        pti_left_kpa_s: pressure.pti_left_kpa_s,
        pti_right_kpa_s: pressure.pti_right_kpa_s,
        temperature_left_c: temperature.left_c,
        temperature_right_c: temperature.right_c,
        temperature_asymmetry_c: temperature.asymmetry_c,
        humidity_left_pct,
        humidity_right_pct,
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut PatientGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = PatientRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

//! Generation configuration for the patient simulator.
//!
//! Every tunable of the simulation is enumerated here as a named field; the
//! sampling code carries no hidden constants. Defaults are the
//! literature-derived values the downstream risk classifier was trained
//! against, so `GenerationConfig::default()` is directly usable in tests.
//!
//! A configuration is validated eagerly via [`GenerationConfig::validate`]
//! (probabilities within [0, 1], standard deviations non-negative, clip
//! bounds ordered) before any sampling begins. Once validated, sampling
//! never fails.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An inclusive clip range for a sampled quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Bounds {
    /// Create a new bounds pair.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clip a value to this range.
    pub fn clip(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether a value lies within this range, inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidBounds {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Mean and standard deviation of a normal distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalParams {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        check_std_dev(field, self.std_dev)
    }
}

/// Demographic distribution parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicsConfig {
    /// Age in years, Normal(58, 15).
    pub age: NormalParams,
    pub age_bounds: Bounds,

    /// Mean of the exponential diabetes-duration distribution, in years.
    pub diabetes_duration_mean_years: f64,
    pub diabetes_duration_bounds: Bounds,

    /// Body-mass index, Normal(30.0, 5.0).
    pub bmi: NormalParams,
    pub bmi_bounds: Bounds,

    /// Glycated hemoglobin in percent, Normal(8.8, 1.8).
    pub hba1c: NormalParams,
    pub hba1c_bounds: Bounds,
}

impl Default for DemographicsConfig {
    fn default() -> Self {
        Self {
            age: NormalParams::new(58.0, 15.0),
            age_bounds: Bounds::new(25.0, 95.0),
            diabetes_duration_mean_years: 15.0,
            diabetes_duration_bounds: Bounds::new(1.0, 60.0),
            bmi: NormalParams::new(30.0, 5.0),
            bmi_bounds: Bounds::new(18.5, 50.0),
            hba1c: NormalParams::new(8.8, 1.8),
            hba1c_bounds: Bounds::new(5.0, 15.0),
        }
    }
}

impl DemographicsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.age.validate("demographics.age.std_dev")?;
        self.bmi.validate("demographics.bmi.std_dev")?;
        self.hba1c.validate("demographics.hba1c.std_dev")?;
        check_positive(
            "demographics.diabetes_duration_mean_years",
            self.diabetes_duration_mean_years,
        )?;
        self.age_bounds.validate("demographics.age_bounds")?;
        self.diabetes_duration_bounds
            .validate("demographics.diabetes_duration_bounds")?;
        self.bmi_bounds.validate("demographics.bmi_bounds")?;
        self.hba1c_bounds.validate("demographics.hba1c_bounds")?;
        Ok(())
    }
}

/// Bernoulli probabilities for the eleven binary risk flags.
///
/// Prior ulceration is only drawn when prior amputation came up false; an
/// amputee always carries the prior-ulcer flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFactorProbabilities {
    pub neuropathy: f64,
    pub deformity: f64,
    pub prior_ulcer: f64,
    pub prior_amputation: f64,
    pub pad: f64,
    pub retinopathy: f64,
    pub nephropathy: f64,
    pub hypertension: f64,
    pub smoking: f64,
    pub alcohol: f64,
    pub physically_active: f64,
}

impl Default for RiskFactorProbabilities {
    fn default() -> Self {
        Self {
            neuropathy: 0.50,
            deformity: 0.30,
            prior_ulcer: 0.25,
            prior_amputation: 0.08,
            pad: 0.35,
            retinopathy: 0.30,
            nephropathy: 0.25,
            hypertension: 0.60,
            smoking: 0.25,
            alcohol: 0.15,
            physically_active: 0.40,
        }
    }
}

impl RiskFactorProbabilities {
    fn validate(&self) -> Result<(), ConfigError> {
        check_probability("risk_factors.neuropathy", self.neuropathy)?;
        check_probability("risk_factors.deformity", self.deformity)?;
        check_probability("risk_factors.prior_ulcer", self.prior_ulcer)?;
        check_probability("risk_factors.prior_amputation", self.prior_amputation)?;
        check_probability("risk_factors.pad", self.pad)?;
        check_probability("risk_factors.retinopathy", self.retinopathy)?;
        check_probability("risk_factors.nephropathy", self.nephropathy)?;
        check_probability("risk_factors.hypertension", self.hypertension)?;
        check_probability("risk_factors.smoking", self.smoking)?;
        check_probability("risk_factors.alcohol", self.alcohol)?;
        check_probability("risk_factors.physically_active", self.physically_active)?;
        Ok(())
    }
}

/// Activity distributions for one risk stratum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProfile {
    pub step_count: NormalParams,
    pub vertical_accel_rms: NormalParams,
    pub foot_orientation_deg: NormalParams,
}

/// Activity and gait-feature parameters, branched on the computed risk label.
///
/// High-risk patients walk less, with lower vertical impact and larger
/// angular deviation of the foot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub high_risk: ActivityProfile,
    pub low_risk: ActivityProfile,
    pub step_count_bounds: Bounds,
    pub vertical_accel_bounds: Bounds,
    pub foot_orientation_bounds: Bounds,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            high_risk: ActivityProfile {
                step_count: NormalParams::new(3000.0, 1000.0),
                vertical_accel_rms: NormalParams::new(1.1, 0.2),
                foot_orientation_deg: NormalParams::new(8.0, 1.5),
            },
            low_risk: ActivityProfile {
                step_count: NormalParams::new(7000.0, 2000.0),
                vertical_accel_rms: NormalParams::new(1.5, 0.3),
                foot_orientation_deg: NormalParams::new(5.0, 1.0),
            },
            step_count_bounds: Bounds::new(500.0, 20_000.0),
            vertical_accel_bounds: Bounds::new(0.5, 3.0),
            foot_orientation_bounds: Bounds::new(2.0, 15.0),
        }
    }
}

impl ActivityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.high_risk
            .step_count
            .validate("activity.high_risk.step_count.std_dev")?;
        self.high_risk
            .vertical_accel_rms
            .validate("activity.high_risk.vertical_accel_rms.std_dev")?;
        self.high_risk
            .foot_orientation_deg
            .validate("activity.high_risk.foot_orientation_deg.std_dev")?;
        self.low_risk
            .step_count
            .validate("activity.low_risk.step_count.std_dev")?;
        self.low_risk
            .vertical_accel_rms
            .validate("activity.low_risk.vertical_accel_rms.std_dev")?;
        self.low_risk
            .foot_orientation_deg
            .validate("activity.low_risk.foot_orientation_deg.std_dev")?;
        self.step_count_bounds
            .validate("activity.step_count_bounds")?;
        self.vertical_accel_bounds
            .validate("activity.vertical_accel_bounds")?;
        self.foot_orientation_bounds
            .validate("activity.foot_orientation_bounds")?;
        Ok(())
    }
}

/// Gait-speed and stance-time parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitConfig {
    /// Baseline mean walking speed in m/s.
    pub base_speed_mean_m_s: f64,
    pub speed_std_m_s: f64,
    /// Subtracted from the baseline mean for high-risk patients.
    pub high_risk_speed_reduction_m_s: f64,
    pub speed_bounds: Bounds,

    /// Mean stance time at baseline speed, in seconds. The per-foot stance
    /// mean is this value divided by the speed ratio to baseline.
    pub stance_time_mean_s: f64,
    pub stance_time_std_s: f64,
    pub stance_time_bounds: Bounds,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self {
            base_speed_mean_m_s: 1.2,
            speed_std_m_s: 0.2,
            high_risk_speed_reduction_m_s: 0.2,
            speed_bounds: Bounds::new(0.5, 2.0),
            stance_time_mean_s: 0.8,
            stance_time_std_s: 0.1,
            stance_time_bounds: Bounds::new(0.5, 1.1),
        }
    }
}

impl GaitConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        check_std_dev("gait.speed_std_m_s", self.speed_std_m_s)?;
        check_std_dev("gait.stance_time_std_s", self.stance_time_std_s)?;
        check_positive("gait.base_speed_mean_m_s", self.base_speed_mean_m_s)?;
        self.speed_bounds.validate("gait.speed_bounds")?;
        self.stance_time_bounds.validate("gait.stance_time_bounds")?;
        Ok(())
    }
}

/// Plantar-pressure parameters for the in-shoe sensor pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureConfig {
    /// Uniform range the shared mean peak pressure is drawn from, in kPa.
    pub base_range_kpa: Bounds,
    /// Uniform range of the additional load applied to high-risk patients.
    pub risk_increment_kpa: Bounds,
    /// Standard deviation of the per-foot peak draw.
    pub std_dev_kpa: f64,
    /// Inflation factor applied to the right-foot standard deviation to
    /// break bilateral symmetry.
    pub right_std_factor: f64,
    /// Scaling of mean pressure per m/s of deviation from the baseline
    /// gait speed.
    pub speed_coupling: f64,
    pub peak_bounds: Bounds,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            base_range_kpa: Bounds::new(80.0, 400.0),
            risk_increment_kpa: Bounds::new(50.0, 300.0),
            std_dev_kpa: 100.0,
            right_std_factor: 1.1,
            speed_coupling: 0.5,
            peak_bounds: Bounds::new(40.0, 1500.0),
        }
    }
}

impl PressureConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        check_std_dev("pressure.std_dev_kpa", self.std_dev_kpa)?;
        check_non_negative("pressure.right_std_factor", self.right_std_factor)?;
        self.base_range_kpa.validate("pressure.base_range_kpa")?;
        self.risk_increment_kpa
            .validate("pressure.risk_increment_kpa")?;
        self.peak_bounds.validate("pressure.peak_bounds")?;
        Ok(())
    }
}

/// Skin-temperature parameters, including hot-spot injection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalConfig {
    /// Mean foot temperature without neuropathy, in °C.
    pub baseline_mean_c: f64,
    /// Mean foot temperature with neuropathy (autonomic dysfunction raises
    /// the baseline).
    pub neuropathy_mean_c: f64,
    pub std_dev_c: f64,

    /// Left/right difference regarded as clinically significant.
    pub asymmetry_threshold_c: f64,
    /// Chance of injecting a hot spot into a high-risk record.
    pub hotspot_probability: f64,
    /// Injected differences are drawn uniformly from
    /// [threshold, threshold + spread].
    pub hotspot_spread_c: f64,

    pub temperature_bounds: Bounds,
    /// Wider ceiling applied only to the elevated side of a hot spot.
    pub hotspot_bounds: Bounds,
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            baseline_mean_c: 29.0,
            neuropathy_mean_c: 32.0,
            std_dev_c: 1.5,
            asymmetry_threshold_c: 2.2,
            hotspot_probability: 0.40,
            hotspot_spread_c: 2.5,
            temperature_bounds: Bounds::new(20.0, 37.0),
            hotspot_bounds: Bounds::new(20.0, 38.5),
        }
    }
}

impl ThermalConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        check_std_dev("thermal.std_dev_c", self.std_dev_c)?;
        check_probability("thermal.hotspot_probability", self.hotspot_probability)?;
        check_non_negative("thermal.hotspot_spread_c", self.hotspot_spread_c)?;
        self.temperature_bounds
            .validate("thermal.temperature_bounds")?;
        self.hotspot_bounds.validate("thermal.hotspot_bounds")?;
        Ok(())
    }
}

/// In-shoe humidity parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumidityConfig {
    /// Uniform range both feet are drawn from independently, in percent.
    pub range_pct: Bounds,
}

impl Default for HumidityConfig {
    fn default() -> Self {
        Self {
            range_pct: Bounds::new(30.0, 95.0),
        }
    }
}

impl HumidityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.range_pct.validate("humidity.range_pct")
    }
}

fn default_risk_score_threshold() -> u32 {
    5
}

/// Full configuration for one generation run.
///
/// Loadable from YAML; any omitted section or field falls back to the
/// literature defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub demographics: DemographicsConfig,
    pub risk_factors: RiskFactorProbabilities,

    /// Records with a composite score at or above this are labeled high
    /// risk. Fixed at 5 by the scoring rubric; exposed for testability, not
    /// as a tuning knob.
    pub risk_score_threshold: u32,

    pub activity: ActivityConfig,
    pub gait: GaitConfig,
    pub pressure: PressureConfig,
    pub thermal: ThermalConfig,
    pub humidity: HumidityConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            demographics: DemographicsConfig::default(),
            risk_factors: RiskFactorProbabilities::default(),
            risk_score_threshold: default_risk_score_threshold(),
            activity: ActivityConfig::default(),
            gait: GaitConfig::default(),
            pressure: PressureConfig::default(),
            thermal: ThermalConfig::default(),
            humidity: HumidityConfig::default(),
        }
    }
}

impl GenerationConfig {
    /// Load a configuration from a YAML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: GenerationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter domain.
    ///
    /// Runs once before sampling starts; a configuration that passes cannot
    /// make any later draw panic or fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.demographics.validate()?;
        self.risk_factors.validate()?;
        self.activity.validate()?;
        self.gait.validate()?;
        self.pressure.validate()?;
        self.thermal.validate()?;
        self.humidity.validate()?;
        Ok(())
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { field, value });
    }
    Ok(())
}

fn check_std_dev(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // Also rejects NaN.
    if !(value >= 0.0) {
        return Err(ConfigError::NegativeStdDev { field, value });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value >= 0.0) {
        return Err(ConfigError::NegativeValue { field, value });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value > 0.0) {
        return Err(ConfigError::NonPositiveMean { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        GenerationConfig::default().validate().unwrap();
    }

    #[test]
    fn test_default_literature_constants() {
        let config = GenerationConfig::default();

        assert_eq!(config.demographics.age.mean, 58.0);
        assert_eq!(config.demographics.diabetes_duration_mean_years, 15.0);
        assert_eq!(config.risk_factors.neuropathy, 0.50);
        assert_eq!(config.risk_factors.prior_amputation, 0.08);
        assert_eq!(config.risk_score_threshold, 5);
        assert_eq!(config.pressure.base_range_kpa, Bounds::new(80.0, 400.0));
        assert_eq!(config.thermal.asymmetry_threshold_c, 2.2);
        assert_eq!(config.humidity.range_pct, Bounds::new(30.0, 95.0));
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let mut config = GenerationConfig::default();
        config.risk_factors.neuropathy = 1.2;

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidProbability {
                field: "risk_factors.neuropathy",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_probability_rejected() {
        let mut config = GenerationConfig::default();
        config.thermal.hotspot_probability = -0.1;

        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidProbability { .. }
        ));
    }

    #[test]
    fn test_negative_std_dev_rejected() {
        let mut config = GenerationConfig::default();
        config.demographics.hba1c.std_dev = -1.0;

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeStdDev {
                field: "demographics.hba1c.std_dev",
                ..
            }
        ));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut config = GenerationConfig::default();
        config.activity.step_count_bounds = Bounds::new(20_000.0, 500.0);

        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidBounds {
                field: "activity.step_count_bounds",
                ..
            }
        ));
    }

    #[test]
    fn test_inverted_uniform_range_rejected() {
        let mut config = GenerationConfig::default();
        config.pressure.risk_increment_kpa = Bounds::new(300.0, 50.0);

        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidBounds { .. }
        ));
    }

    #[test]
    fn test_non_positive_exponential_mean_rejected() {
        let mut config = GenerationConfig::default();
        config.demographics.diabetes_duration_mean_years = 0.0;

        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::NonPositiveMean { .. }
        ));
    }

    #[test]
    fn test_nan_std_dev_rejected() {
        let mut config = GenerationConfig::default();
        config.pressure.std_dev_kpa = f64::NAN;

        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::NegativeStdDev { .. }
        ));
    }

    #[test]
    fn test_partial_yaml_overrides_defaults() {
        let config = GenerationConfig::from_yaml(
            r#"
risk_factors:
  neuropathy: 0.75
thermal:
  hotspot_probability: 0.10
"#,
        )
        .unwrap();

        assert_eq!(config.risk_factors.neuropathy, 0.75);
        assert_eq!(config.thermal.hotspot_probability, 0.10);
        // Untouched sections keep their defaults.
        assert_eq!(config.risk_factors.deformity, 0.30);
        assert_eq!(config.gait.base_speed_mean_m_s, 1.2);
    }

    #[test]
    fn test_yaml_with_invalid_parameter_rejected() {
        let result = GenerationConfig::from_yaml(
            r#"
risk_factors:
  smoking: 2.0
"#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::InvalidProbability {
                field: "risk_factors.smoking",
                ..
            })
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = GenerationConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = GenerationConfig::from_yaml(&yaml).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_bounds_clip() {
        let bounds = Bounds::new(0.5, 2.0);

        assert_eq!(bounds.clip(0.1), 0.5);
        assert_eq!(bounds.clip(3.0), 2.0);
        assert_eq!(bounds.clip(1.3), 1.3);
        assert!(bounds.contains(0.5));
        assert!(bounds.contains(2.0));
        assert!(!bounds.contains(2.1));
    }
}

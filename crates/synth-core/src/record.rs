//! The assembled synthetic patient record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column order expected by downstream consumers of the dataset: the
/// clinical-profile block first, then the sensor block.
///
/// The composite score and per-foot stance times live on the record for
/// testability but are not part of the exported table.
pub const COLUMNS: [&str; 33] = [
    "id",
    "given_name",
    "family_name",
    "age",
    "sex",
    "diabetes_duration_years",
    "hba1c_pct",
    "bmi",
    "neuropathy",
    "deformity",
    "prior_ulcer",
    "prior_amputation",
    "pad",
    "retinopathy",
    "nephropathy",
    "hypertension",
    "smoking",
    "alcohol",
    "physically_active",
    "risk_label",
    "gait_speed_m_s",
    "step_count",
    "vertical_accel_rms",
    "foot_orientation_deg",
    "pressure_peak_left_kpa",
    "pressure_peak_right_kpa",
    "pti_left_kpa_s",
    "pti_right_kpa_s",
    "temperature_left_c",
    "temperature_right_c",
    "temperature_asymmetry_c",
    "humidity_left_pct",
    "humidity_right_pct",
];

/// Patient sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "M"),
            Sex::Female => write!(f, "F"),
        }
    }
}

/// One synthetic patient: clinical risk profile plus one session of
/// bilateral in-shoe sensor readings.
///
/// Records are assembled whole by a single generator pass and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    // Identity (cosmetic apart from the sequential id)
    pub id: String,
    pub given_name: String,
    pub family_name: String,

    // Demographics
    pub age: u32,
    pub sex: Sex,
    pub diabetes_duration_years: u32,
    pub hba1c_pct: f64,
    pub bmi: f64,

    // Risk flags
    pub neuropathy: bool,
    pub deformity: bool,
    pub prior_ulcer: bool,
    pub prior_amputation: bool,
    pub pad: bool,
    pub retinopathy: bool,
    pub nephropathy: bool,
    pub hypertension: bool,
    pub smoking: bool,
    pub alcohol: bool,
    pub physically_active: bool,

    // Derived risk
    pub composite_risk_score: u32,
    pub risk_label: bool,

    // Gait and activity features
    pub gait_speed_m_s: f64,
    pub step_count: u32,
    pub vertical_accel_rms: f64,
    pub foot_orientation_deg: f64,

    // Bilateral pressure readings; the pressure-time integral is the exact
    // product of peak and stance time per foot.
    pub pressure_peak_left_kpa: f64,
    pub pressure_peak_right_kpa: f64,
    pub stance_time_left_s: f64,
    pub stance_time_right_s: f64,
    pub pti_left_kpa_s: f64,
    pub pti_right_kpa_s: f64,

    // Bilateral temperature; asymmetry is |left - right| after any hot-spot
    // injection.
    pub temperature_left_c: f64,
    pub temperature_right_c: f64,
    pub temperature_asymmetry_c: f64,

    // Bilateral humidity
    pub humidity_left_pct: f64,
    pub humidity_right_pct: f64,
}

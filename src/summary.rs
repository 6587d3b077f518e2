//! Verification summary over a generated dataset.
//!
//! Mirrors the sanity statistics the research workflow checks after each
//! generation run: how many patients the rubric labels high risk, how the
//! thermal asymmetry behaves inside that stratum, and how far the pressure
//! distributions of the two strata sit apart.

use synth_core::PatientRecord;

/// Aggregate statistics of one generated dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSummary {
    pub total: u64,
    pub high_risk: u64,
    /// Mean temperature asymmetry among high-risk records.
    pub mean_asymmetry_high_risk_c: Option<f64>,
    /// High-risk records whose asymmetry exceeds the clinical threshold.
    pub critical_asymmetry_high_risk: u64,
    /// Mean left peak pressure per stratum.
    pub mean_peak_left_high_risk_kpa: Option<f64>,
    pub mean_peak_left_low_risk_kpa: Option<f64>,
}

impl DatasetSummary {
    /// Compute the summary for a dataset.
    ///
    /// `asymmetry_threshold_c` is the configured clinical threshold used to
    /// count critical asymmetries.
    pub fn from_records(records: &[PatientRecord], asymmetry_threshold_c: f64) -> Self {
        let total = records.len() as u64;

        let high: Vec<&PatientRecord> = records.iter().filter(|r| r.risk_label).collect();
        let low: Vec<&PatientRecord> = records.iter().filter(|r| !r.risk_label).collect();

        let mean = |values: &[f64]| {
            if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            }
        };

        let high_asymmetries: Vec<f64> =
            high.iter().map(|r| r.temperature_asymmetry_c).collect();
        let high_peaks: Vec<f64> = high.iter().map(|r| r.pressure_peak_left_kpa).collect();
        let low_peaks: Vec<f64> = low.iter().map(|r| r.pressure_peak_left_kpa).collect();

        Self {
            total,
            high_risk: high.len() as u64,
            mean_asymmetry_high_risk_c: mean(&high_asymmetries),
            critical_asymmetry_high_risk: high
                .iter()
                .filter(|r| r.temperature_asymmetry_c > asymmetry_threshold_c)
                .count() as u64,
            mean_peak_left_high_risk_kpa: mean(&high_peaks),
            mean_peak_left_low_risk_kpa: mean(&low_peaks),
        }
    }

    /// Fraction of records labeled high risk.
    pub fn high_risk_share(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.high_risk as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patient_generator::generate;
    use synth_core::GenerationConfig;

    #[test]
    fn test_empty_dataset_summary() {
        let summary = DatasetSummary::from_records(&[], 2.2);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.high_risk, 0);
        assert_eq!(summary.high_risk_share(), 0.0);
        assert_eq!(summary.mean_asymmetry_high_risk_c, None);
        assert_eq!(summary.mean_peak_left_low_risk_kpa, None);
    }

    #[test]
    fn test_summary_counts_match_labels() {
        let config = GenerationConfig::default();
        let records = generate(500, 42, &config).unwrap();

        let summary = DatasetSummary::from_records(&records, config.thermal.asymmetry_threshold_c);

        assert_eq!(summary.total, 500);
        assert_eq!(
            summary.high_risk,
            records.iter().filter(|r| r.risk_label).count() as u64
        );
        assert!(summary.critical_asymmetry_high_risk <= summary.high_risk);
    }

    #[test]
    fn test_summary_reflects_pressure_separation() {
        let config = GenerationConfig::default();
        let records = generate(2000, 42, &config).unwrap();

        let summary = DatasetSummary::from_records(&records, config.thermal.asymmetry_threshold_c);

        let high = summary.mean_peak_left_high_risk_kpa.unwrap();
        let low = summary.mean_peak_left_low_risk_kpa.unwrap();
        assert!(high > low);
    }
}

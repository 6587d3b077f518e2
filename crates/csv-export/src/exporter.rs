//! Dataset writer producing the documented tabular layout.

use crate::error::ExportError;
use csv::WriterBuilder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use synth_core::{PatientRecord, COLUMNS};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Exporter writing patient records in the fixed 33-column order.
///
/// Defaults to the format the downstream pipeline ingests: `;` as field
/// delimiter and `,` as decimal separator. Both are configurable for
/// consumers that expect plain CSV.
pub struct DatasetExporter {
    delimiter: u8,
    decimal_comma: bool,
    include_header: bool,
}

impl Default for DatasetExporter {
    fn default() -> Self {
        Self {
            delimiter: b';',
            decimal_comma: true,
            include_header: true,
        }
    }
}

impl DatasetExporter {
    /// Create an exporter with the default format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Use `,` (true) or `.` (false) as decimal separator.
    pub fn with_decimal_comma(mut self, decimal_comma: bool) -> Self {
        self.decimal_comma = decimal_comma;
        self
    }

    /// Set whether to include a header row.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write all records to the given path.
    pub fn export<P: AsRef<Path>>(
        &self,
        records: &[PatientRecord],
        output_path: P,
    ) -> Result<ExportMetrics, ExportError> {
        let start_time = Instant::now();
        let mut metrics = ExportMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Writing dataset '{}' with {} rows",
            output_path.display(),
            records.len()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(buf_writer);

        if self.include_header {
            writer.write_record(COLUMNS)?;
        }

        for record in records {
            writer.write_record(self.record_fields(record))?;
            metrics.rows_written += 1;

            if metrics.rows_written % 10_000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "Export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Render one record as strings, in [`COLUMNS`] order.
    fn record_fields(&self, r: &PatientRecord) -> Vec<String> {
        vec![
            r.id.clone(),
            r.given_name.clone(),
            r.family_name.clone(),
            r.age.to_string(),
            r.sex.to_string(),
            r.diabetes_duration_years.to_string(),
            self.decimal(r.hba1c_pct, 1),
            self.decimal(r.bmi, 1),
            flag(r.neuropathy),
            flag(r.deformity),
            flag(r.prior_ulcer),
            flag(r.prior_amputation),
            flag(r.pad),
            flag(r.retinopathy),
            flag(r.nephropathy),
            flag(r.hypertension),
            flag(r.smoking),
            flag(r.alcohol),
            flag(r.physically_active),
            flag(r.risk_label),
            self.decimal(r.gait_speed_m_s, 2),
            r.step_count.to_string(),
            self.decimal(r.vertical_accel_rms, 2),
            self.decimal(r.foot_orientation_deg, 1),
            self.decimal(r.pressure_peak_left_kpa, 2),
            self.decimal(r.pressure_peak_right_kpa, 2),
            self.decimal(r.pti_left_kpa_s, 2),
            self.decimal(r.pti_right_kpa_s, 2),
            self.decimal(r.temperature_left_c, 1),
            self.decimal(r.temperature_right_c, 1),
            self.decimal(r.temperature_asymmetry_c, 1),
            self.decimal(r.humidity_left_pct, 1),
            self.decimal(r.humidity_right_pct, 1),
        ]
    }

    /// Format a float with fixed decimals and the configured separator.
    fn decimal(&self, value: f64, decimals: usize) -> String {
        let formatted = format!("{value:.decimals$}");
        if self.decimal_comma {
            formatted.replace('.', ",")
        } else {
            formatted
        }
    }
}

/// Binary flags are written as 0/1 for the training pipeline.
fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use patient_generator::generate;
    use synth_core::GenerationConfig;
    use tempfile::TempDir;

    fn sample_records(count: u64) -> Vec<PatientRecord> {
        generate(count, 42, &GenerationConfig::default()).unwrap()
    }

    #[test]
    fn test_header_matches_column_order() {
        let records = sample_records(1);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patients.csv");

        DatasetExporter::default().export(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(";"));
    }

    #[test]
    fn test_row_count_and_field_count() {
        let records = sample_records(10);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patients.csv");

        let metrics = DatasetExporter::default().export(&records, &path).unwrap();
        assert_eq!(metrics.rows_written, 10);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 11); // 1 header + 10 data rows

        for line in &lines {
            assert_eq!(line.split(';').count(), COLUMNS.len());
        }
    }

    #[test]
    fn test_decimal_comma_formatting() {
        let records = sample_records(5);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patients.csv");

        DatasetExporter::default().export(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let first_row = content.lines().nth(1).unwrap();
        // Comma decimals, so no '.' anywhere in a data row.
        assert!(!first_row.contains('.'));
        assert!(first_row.contains(','));
    }

    #[test]
    fn test_plain_csv_formatting() {
        let records = sample_records(5);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patients.csv");

        DatasetExporter::default()
            .with_delimiter(b',')
            .with_decimal_comma(false)
            .export(&records, &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));

        let first_row = content.lines().nth(1).unwrap();
        assert!(first_row.contains('.'));
    }

    #[test]
    fn test_flags_and_label_written_as_binary() {
        let records = sample_records(20);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patients.csv");

        DatasetExporter::default().export(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        for (line, record) in content.lines().skip(1).zip(&records) {
            let fields: Vec<&str> = line.split(';').collect();
            // Columns 8..=19 are the flag block plus the risk label.
            for field in &fields[8..=19] {
                assert!(*field == "0" || *field == "1");
            }
            assert_eq!(fields[19], if record.risk_label { "1" } else { "0" });
        }
    }

    #[test]
    fn test_export_without_header() {
        let records = sample_records(3);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patients.csv");

        DatasetExporter::default()
            .with_header(false)
            .export(&records, &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.starts_with("PAC_0001"));
    }

    #[test]
    fn test_deterministic_export_is_byte_identical() {
        let records = sample_records(25);
        let temp_dir = TempDir::new().unwrap();

        let path1 = temp_dir.path().join("first.csv");
        let path2 = temp_dir.path().join("second.csv");
        DatasetExporter::default().export(&records, &path1).unwrap();
        DatasetExporter::default().export(&records, &path2).unwrap();

        let content1 = std::fs::read_to_string(&path1).unwrap();
        let content2 = std::fs::read_to_string(&path2).unwrap();
        assert_eq!(content1, content2);
    }

    #[test]
    fn test_empty_dataset_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patients.csv");

        let metrics = DatasetExporter::default().export(&[], &path).unwrap();
        assert_eq!(metrics.rows_written, 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}

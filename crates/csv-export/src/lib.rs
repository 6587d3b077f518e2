//! CSV dataset exporter for dfu-synth.
//!
//! Writes generated patient records as tabular rows in the documented
//! column order. The default output format matches what the downstream
//! training pipeline ingests: semicolon-delimited fields with comma decimal
//! separators.
//!
//! # Example
//!
//! ```ignore
//! use csv_export::DatasetExporter;
//!
//! let exporter = DatasetExporter::default();
//! let metrics = exporter.export(&records, "patients.csv")?;
//! println!("wrote {} rows", metrics.rows_written);
//! ```

mod error;
mod exporter;

pub use error::ExportError;
pub use exporter::{DatasetExporter, ExportMetrics};

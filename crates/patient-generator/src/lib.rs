//! Patient sample generator for the dfu-synth dataset.
//!
//! This crate produces clinically plausible synthetic patient records for
//! diabetic-foot-ulcer risk research. Each record is built in one strictly
//! ordered pass: demographics, risk flags, composite risk score, activity
//! and gait features, bilateral pressure, bilateral temperature with
//! conditional hot-spot injection, humidity, and finally the cosmetic
//! identity fields. The risk label computed in the third stage conditions
//! every later stage, producing the label-correlated sensor distributions a
//! downstream classifier is trained on.
//!
//! # Architecture
//!
//! ```text
//! GenerationConfig (synth-core, validated eagerly)
//!        │
//!        ▼
//! ┌────────────────────┐
//! │  PatientGenerator  │
//! │                    │
//! │  - seed            │    per record: StdRng sub-stream derived
//! │  - index           │──▶ from (seed, index), consumed in the
//! └────────────────────┘    fixed stage order above
//!        │
//!        ▼
//!    PatientRecord
//! ```
//!
//! # Example
//!
//! ```rust
//! use patient_generator::generate;
//! use synth_core::GenerationConfig;
//!
//! let records = generate(100, 42, &GenerationConfig::default()).unwrap();
//! assert_eq!(records.len(), 100);
//! assert!(records.iter().all(|r| !r.prior_amputation || r.prior_ulcer));
//! ```

pub mod generator;
pub mod samplers;

// Re-exports for convenience
pub use generator::{generate, PatientGenerator, RecordIterator};

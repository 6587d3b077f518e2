//! Core types for the dfu-synth patient dataset generator.
//!
//! This crate provides the foundational types used across the generator
//! workspace, including:
//!
//! - [`GenerationConfig`] - Every distribution parameter of the simulation,
//!   loadable from YAML, validated eagerly before any sampling
//! - [`PatientRecord`] - One fully assembled synthetic patient
//! - [`ConfigError`] - The single failure mode of the core
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── patient-generator  (samples PatientRecords from a GenerationConfig)
//!    │
//!    └─── csv-export         (writes PatientRecords in the documented column order)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::GenerationConfig;
//!
//! let config = GenerationConfig::from_yaml(
//!     r#"
//! thermal:
//!   hotspot_probability: 0.55
//! "#,
//! )
//! .unwrap();
//! assert_eq!(config.thermal.hotspot_probability, 0.55);
//! ```

pub mod config;
pub mod error;
pub mod record;

// Re-exports for convenience
pub use config::{
    ActivityConfig, ActivityProfile, Bounds, DemographicsConfig, GaitConfig, GenerationConfig,
    HumidityConfig, NormalParams, PressureConfig, RiskFactorProbabilities, ThermalConfig,
};
pub use error::ConfigError;
pub use record::{PatientRecord, Sex, COLUMNS};

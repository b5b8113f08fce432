//! # Boostprep: Experiment Preparation for Boosting Research
//!
//! Boostprep provides the data and configuration plumbing around an external
//! boosting tool: benchmark format conversion, configuration-file generation,
//! and dataset acquisition with a reproducible train/valid/test split.
//!
//! ## Architecture
//!
//! - **convert**: IDA benchmark (paired data/label ASCII files) to LIBSVM text
//! - **configgen**: booster configuration files for experiment sweeps
//! - **prepare**: dataset download, concatenation, and 60/20/20 splitting

pub mod cli;
pub mod configgen;
pub mod convert;
pub mod prepare;

pub mod error;

// Re-export commonly used types
pub use error::{Error, Result};

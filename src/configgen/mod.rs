//! Booster configuration-file generation
//!
//! The external booster is driven by line-oriented configuration files of
//! `#`-prefixed comments and `key = value` assignments. This module renders
//! those files for whole experiment sweeps: the Cartesian product of dataset,
//! weak-learner oracle, and one swept hyperparameter per mode.
//!
//! # Example
//!
//! ```
//! use boostprep::configgen::{corrective_configs, Oracle, SweepMode};
//!
//! let records = corrective_configs(Oracle::DecisionStump, "01", 10_000, SweepMode::EtaSweep);
//! assert_eq!(records.len(), 7 * 12);
//! assert!(records[0].render().contains("booster_type = Corrective"));
//! ```

mod families;
mod record;

#[cfg(test)]
mod tests;

pub use families::{
    ada_configs, corrective_configs, erlp_configs, lp_configs, optimizer_sweep, write_family,
    SweepMode, DATASETS, TRAIN_SIZES,
};
pub use record::{write_config, Booster, ConfigRecord, Optimizer, Oracle};

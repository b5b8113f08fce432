//! Experiment sweeps per algorithm family
//!
//! Each generator walks the Cartesian product of dataset, oracle, and one
//! swept hyperparameter and yields a [`ConfigRecord`] per combination. No
//! range validation is performed; an inapplicable combination simply renders
//! with defaulted or omitted fields.

use super::record::{Booster, ConfigRecord, Optimizer, Oracle};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Benchmark datasets the experiments run on.
pub const DATASETS: [&str; 7] = [
    "news20",
    "real-sim",
    "astro-ph",
    "a9a",
    "rcv1",
    "german",
    "diabetes",
];

/// Training-set sizes of [`DATASETS`], used to scale nu in capping sweeps.
pub const TRAIN_SIZES: [usize; 7] = [15960, 43385, 56913, 29305, 418584, 600, 460];

/// Eta values swept by the regularization sweeps.
const ETA_SWEEP: [&str; 12] = [
    "1", "2", "5", "10", "20", "50", "100", "200", "500", "1000", "2000", "3000",
];

/// Capping fractions swept by the nu sweeps, tagged 1..9 in file names.
const NU_FRACTIONS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// Which hyperparameter a family sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepMode {
    /// Default eta, no capping
    Default,
    /// Vary eta, no capping
    EtaSweep,
    /// Default eta, vary nu capping with the training-set size
    NuCapping,
}

fn base_record(family: Booster, oracle: Oracle, eps: &str, results_dir: &str) -> ConfigRecord {
    ConfigRecord {
        dataset: String::new(),
        family,
        oracle,
        reflexive: true,
        results_dir: results_dir.to_string(),
        eps: Some(eps.to_string()),
        nu_tag: "nc".to_string(),
        nu: None,
        eta: None,
        optimizer: None,
        max_iter: None,
        booster_type: None,
    }
}

/// Expand a template record over every dataset.
fn per_dataset(template: &ConfigRecord) -> Vec<ConfigRecord> {
    DATASETS
        .iter()
        .map(|dataset| ConfigRecord {
            dataset: (*dataset).to_string(),
            ..template.clone()
        })
        .collect()
}

/// Expand a template record over the nu-capping sweep: for each capping
/// fraction and dataset, nu is the fraction of the training-set size.
fn nu_capping_sweep(template: &ConfigRecord) -> Vec<ConfigRecord> {
    let mut records = Vec::with_capacity(NU_FRACTIONS.len() * DATASETS.len());
    for (tag, fraction) in NU_FRACTIONS.iter().enumerate() {
        for (dataset, size) in DATASETS.iter().zip(TRAIN_SIZES) {
            records.push(ConfigRecord {
                dataset: (*dataset).to_string(),
                nu_tag: (tag + 1).to_string(),
                nu: Some(fraction * size as f64),
                ..template.clone()
            });
        }
    }
    records
}

/// Expand a template record over the eta sweep for every dataset.
fn eta_sweep(template: &ConfigRecord) -> Vec<ConfigRecord> {
    let mut records = Vec::with_capacity(DATASETS.len() * ETA_SWEEP.len());
    for dataset in DATASETS {
        for eta in ETA_SWEEP {
            records.push(ConfigRecord {
                dataset: dataset.to_string(),
                eta: Some(eta.to_string()),
                ..template.clone()
            });
        }
    }
    records
}

/// LP-boost configurations: fixed nu = 1.0, or the capping sweep.
#[must_use]
pub fn lp_configs(oracle: Oracle, eps: &str, mode: SweepMode) -> Vec<ConfigRecord> {
    let mut template = base_record(Booster::LpBoost, oracle, eps, "lp");
    template.booster_type = Some("LPBoost");
    template.nu = Some(1.0);

    match mode {
        SweepMode::NuCapping => nu_capping_sweep(&template),
        // LP-boost has no eta to sweep; anything else is the fixed-nu run.
        _ => per_dataset(&template),
    }
}

/// AdaBoost configurations: one per dataset, no eps/nu/eta fields.
#[must_use]
pub fn ada_configs(oracle: Oracle, max_iter: u32) -> Vec<ConfigRecord> {
    let mut template = base_record(Booster::AdaBoost, oracle, "01", "ada");
    template.booster_type = Some("AdaBoost");
    template.eps = None;
    template.max_iter = Some(max_iter);
    per_dataset(&template)
}

/// Corrective-boost configurations for the given sweep mode.
#[must_use]
pub fn corrective_configs(
    oracle: Oracle,
    eps: &str,
    max_iter: u32,
    mode: SweepMode,
) -> Vec<ConfigRecord> {
    let mut template = base_record(Booster::Corrective, oracle, eps, "corr");
    template.booster_type = Some("Corrective");
    template.max_iter = Some(max_iter);

    match mode {
        SweepMode::Default => per_dataset(&template),
        SweepMode::EtaSweep => eta_sweep(&template),
        SweepMode::NuCapping => nu_capping_sweep(&template),
    }
}

/// ERLPBoost configurations, plain or binary variant, for the given sweep
/// mode. The results directory matches the family code.
#[must_use]
pub fn erlp_configs(oracle: Oracle, eps: &str, binary: bool, mode: SweepMode) -> Vec<ConfigRecord> {
    let family = if binary {
        Booster::BinaryErlp
    } else {
        Booster::ErlpBoost
    };
    let mut template = base_record(family, oracle, eps, family.code());
    template.max_iter = Some(1000);

    match mode {
        SweepMode::Default => per_dataset(&template),
        SweepMode::EtaSweep => eta_sweep(&template),
        SweepMode::NuCapping => nu_capping_sweep(&template),
    }
}

/// Optimizer-comparison sweep: the eta sweep on real-sim only, crossed with
/// one inner optimizer, written under `opt/`.
#[must_use]
pub fn optimizer_sweep(
    oracle: Oracle,
    eps: &str,
    binary: bool,
    optimizer: Optimizer,
) -> Vec<ConfigRecord> {
    let family = if binary {
        Booster::BinaryErlp
    } else {
        Booster::ErlpBoost
    };
    let mut template = base_record(family, oracle, eps, "opt");
    template.max_iter = Some(1000);
    template.optimizer = Some(optimizer);

    ETA_SWEEP
        .iter()
        .map(|eta| ConfigRecord {
            dataset: "real-sim".to_string(),
            eta: Some((*eta).to_string()),
            ..template.clone()
        })
        .collect()
}

/// Write a batch of records under `<out_dir>/<results_dir>/<file_name>` and
/// return the paths written, in generation order.
///
/// # Errors
///
/// Fails on the first file or directory that cannot be created.
pub fn write_family(out_dir: &Path, records: &[ConfigRecord]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let dir = out_dir.join(&record.results_dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join(record.file_name());
        super::record::write_config(&path, record)?;
        written.push(path);
    }
    Ok(written)
}

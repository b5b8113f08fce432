//! Tests for the configuration generator

use super::*;
use std::fs;
use tempfile::TempDir;

fn corrective_record(dataset: &str) -> ConfigRecord {
    let mut records = corrective_configs(Oracle::DecisionStump, "01", 10_000, SweepMode::Default);
    let idx = records
        .iter()
        .position(|r| r.dataset == dataset)
        .expect("dataset in registry");
    records.swap_remove(idx)
}

#[test]
fn test_corrective_render_golden() {
    let record = corrective_record("german");
    let expected = "\
# Configuration file for erlpboost

# Read training data from this file (LIBSVM format)
train_file = ../data/german.train

# Read testing data from this file (LIBSVM format)
test_file = ../data/german.test

# Read validation data from this file (LIBSVM format)
valid_file = ../data/german.valid

# Dump all results and output into this file
output_file = ../results/corr/german.corr.ds.t.01.nc.output

# What kind of oracle to use
# Possible values are rawdata, decisionstump, or svm
oracle_type = decisionstump

# Should the weak learner set the reflexive flag?
reflexive = true

# Maximum number of iterations of boosting
max_iter = 10000

# Epsilon tolerance
eps = 0.01

# nu for softening. Actually 1/nu is used in the code
nu = 1.0

# type of boosting algorithm
# choices are ERLPBoost, AdaBoost, Corrective, and LPBoost
booster_type = Corrective

";
    assert_eq!(record.render(), expected);
}

#[test]
fn test_ada_render_omits_tolerance_fields() {
    let records = ada_configs(Oracle::Svm, 5000);
    assert_eq!(records.len(), DATASETS.len());

    let text = records[0].render();
    assert!(text.contains("booster_type = AdaBoost"));
    assert!(text.contains("max_iter = 5000"));
    assert!(text.contains("oracle_type = svm"));
    assert!(!text.contains("eps ="));
    assert!(!text.contains("nu ="));
    assert!(!text.contains("eta ="));
    assert!(!text.contains("binary ="));
    assert!(!text.contains("optimizer_type"));
}

#[test]
fn test_erlp_render_has_binary_and_default_optimizer() {
    let records = erlp_configs(Oracle::RawData, "001", false, SweepMode::Default);
    let text = records[0].render();

    assert!(text.contains("eps = 0.001"));
    assert!(text.contains("binary = false"));
    assert!(text.ends_with("optimizer_type = tao\n"));
    // ERLPBoost is selected via the binary flag, not booster_type.
    assert!(!text.contains("booster_type"));
}

#[test]
fn test_binary_erlp_sets_binary_true() {
    let records = erlp_configs(Oracle::DecisionStump, "001", true, SweepMode::Default);
    let text = records[0].render();
    assert!(text.contains("binary = true"));
    assert!(records[0].file_name().contains(".bin."));
    assert_eq!(records[0].results_dir, "bin");
}

#[test]
fn test_file_name_patterns() {
    let lp = &lp_configs(Oracle::Svm, "05", SweepMode::Default)[5];
    assert_eq!(lp.file_name(), "german.lp.svm.t.05.nc.conf");

    let ada = &ada_configs(Oracle::DecisionStump, 50_000)[5];
    assert_eq!(ada.file_name(), "german.ada.ds.t.conf");

    let corr = &corrective_configs(Oracle::RawData, "01", 10_000, SweepMode::EtaSweep)[3];
    assert_eq!(corr.file_name(), "news20.corr.rd.t.01.nc.10.conf");

    let opt = &optimizer_sweep(Oracle::DecisionStump, "01", false, Optimizer::Cd)[0];
    assert_eq!(opt.file_name(), "real-sim.erlp.ds.t.01.nc.1.cd.conf");
    assert_eq!(opt.results_dir, "opt");
}

#[test]
fn test_optimizer_sweep_binary_variant() {
    let records = optimizer_sweep(Oracle::DecisionStump, "01", true, Optimizer::Pg);

    assert_eq!(records.len(), 12);
    let text = records[0].render();
    assert!(text.contains("binary = true"));
    assert!(text.ends_with("optimizer_type = pg\n"));
    assert_eq!(records[0].file_name(), "real-sim.bin.ds.t.01.nc.1.pg.conf");
    // Binary or not, the sweep lands under opt/.
    assert_eq!(records[0].results_dir, "opt");
}

#[test]
fn test_output_name_mirrors_file_name() {
    let record = &corrective_configs(Oracle::DecisionStump, "01", 10_000, SweepMode::Default)[0];
    assert_eq!(
        record.output_name(),
        "corr/news20.corr.ds.t.01.nc.output"
    );
}

#[test]
fn test_sweep_sizes() {
    assert_eq!(lp_configs(Oracle::Svm, "05", SweepMode::Default).len(), 7);
    assert_eq!(lp_configs(Oracle::Svm, "05", SweepMode::NuCapping).len(), 63);
    assert_eq!(
        corrective_configs(Oracle::DecisionStump, "01", 10_000, SweepMode::EtaSweep).len(),
        84
    );
    assert_eq!(
        erlp_configs(Oracle::DecisionStump, "001", true, SweepMode::NuCapping).len(),
        63
    );
    assert_eq!(
        optimizer_sweep(Oracle::DecisionStump, "01", false, Optimizer::Hz).len(),
        12
    );
}

#[test]
fn test_nu_capping_scales_with_train_size() {
    let records = lp_configs(Oracle::DecisionStump, "05", SweepMode::NuCapping);

    // First fraction (0.1) over the registry, news20 has 15960 training rows.
    assert_eq!(records[0].dataset, "news20");
    assert_eq!(records[0].nu_tag, "1");
    assert!(records[0].render().contains("nu = 1596.0"));

    // Last fraction (0.9), diabetes has 460 training rows.
    let last = records.last().unwrap();
    assert_eq!(last.dataset, "diabetes");
    assert_eq!(last.nu_tag, "9");
    assert!(last.render().contains("nu = 414.0"));
}

#[test]
fn test_write_family_creates_subdirectory_layout() {
    let dir = TempDir::new().unwrap();
    let records = ada_configs(Oracle::DecisionStump, 5000);

    let written = write_family(dir.path(), &records).unwrap();

    assert_eq!(written.len(), records.len());
    assert_eq!(written[0], dir.path().join("ada/news20.ada.ds.t.conf"));
    assert!(written.iter().all(|p| p.is_file()));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let records = erlp_configs(Oracle::RawData, "001", false, SweepMode::Default);

    let first = write_family(dir.path(), &records).unwrap();
    let before: Vec<Vec<u8>> = first.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = write_family(dir.path(), &records).unwrap();
    let after: Vec<Vec<u8>> = second.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn test_eps_defaults_when_absent() {
    let mut record = corrective_record("diabetes");
    record.eps = None;
    let text = record.render();
    assert!(text.contains("eps = 0.01"));
    assert!(record.file_name().contains(".01.nc."));
}

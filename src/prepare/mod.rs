//! Dataset acquisition and splitting
//!
//! Prepares the public binary-classification datasets the experiments run
//! on:
//!
//! 1. Downloads any dataset missing from the data directory, decompressing
//!    bz2 sources.
//! 2. Concatenates datasets that ship pre-split into train/test files.
//! 3. Splits every unified file 60/20/20 into train/valid/test with a
//!    fixed-seed permutation, never overwriting an existing split.

mod fetch;
mod split;


pub use fetch::{decompress_bz2, fetch_missing};
pub use split::{partition_bounds, split_dataset, split_permutation, SplitCounts, SPLIT_SEED};

use crate::error::Result;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// One downloadable dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSource {
    /// File name under the data directory
    pub name: &'static str,
    /// Source URL; a `.bz2` suffix marks a compressed source
    pub url: &'static str,
}

/// Registry of dataset sources.
pub const SOURCES: [DatasetSource; 6] = [
    DatasetSource {
        name: "a9a",
        url: "http://www.csie.ntu.edu.tw/~cjlin/libsvmtools/datasets/binary/a9a",
    },
    DatasetSource {
        name: "a9a.t",
        url: "http://www.csie.ntu.edu.tw/~cjlin/libsvmtools/datasets/binary/a9a.t",
    },
    DatasetSource {
        name: "real-sim",
        url: "http://www.csie.ntu.edu.tw/~cjlin/libsvmtools/datasets/binary/real-sim.bz2",
    },
    DatasetSource {
        name: "news20.binary",
        url: "http://www.csie.ntu.edu.tw/~cjlin/libsvmtools/datasets/binary/news20.binary.bz2",
    },
    DatasetSource {
        name: "german.numer_scale",
        url: "http://www.csie.ntu.edu.tw/~cjlin/libsvmtools/datasets/binary/german.numer_scale",
    },
    DatasetSource {
        name: "diabetes_scale",
        url: "http://www.csie.ntu.edu.tw/~cjlin/libsvmtools/datasets/binary/diabetes_scale",
    },
];

/// Unified-file to split-stem mapping for datasets that are always present
/// after the fetch step.
const SPLIT_JOBS: [(&str, &str); 5] = [
    ("a9a_all", "a9a"),
    ("real-sim", "real-sim"),
    ("news20.binary", "news20"),
    ("german.numer_scale", "german"),
    ("diabetes_scale", "diabetes"),
];

/// Run the full preparation pass: fetch, concatenate, split. Progress
/// lines are suppressed when `quiet` is set.
///
/// # Errors
///
/// The first network, decompression, or file-system failure aborts the run;
/// artifacts written before the failure are left in place.
pub fn prepare(data_dir: &Path, quiet: bool) -> Result<()> {
    fs::create_dir_all(data_dir)?;

    fetch_missing(data_dir, &SOURCES, quiet)?;
    concat_presplit(data_dir, quiet)?;

    if !quiet {
        println!("splitting data");
    }
    for (unified, stem) in split_targets(data_dir) {
        split_dataset(&data_dir.join(unified), &data_dir.join(stem), quiet)?;
    }
    Ok(())
}

/// Concatenate datasets that ship as separate train/test files into one
/// unified `_all` file, skipped when the target already exists.
///
/// The astro-ph pair is optional: it is not downloadable from the mirror
/// and only concatenated when both parts were placed manually.
pub fn concat_presplit(data_dir: &Path, quiet: bool) -> Result<()> {
    if !quiet {
        println!("concatenating data sets");
    }

    concat_into(data_dir, "a9a_all", &["a9a", "a9a.t"], quiet)?;

    let astro_parts = ["astroph.train", "astroph.test"];
    if astro_parts.iter().all(|p| data_dir.join(p).is_file()) {
        concat_into(data_dir, "astro-ph_all", &astro_parts, quiet)?;
    }
    Ok(())
}

/// Unified-file/stem pairs to split, including astro-ph when present.
fn split_targets(data_dir: &Path) -> Vec<(&'static str, &'static str)> {
    let mut jobs = SPLIT_JOBS.to_vec();
    if data_dir.join("astro-ph_all").is_file() {
        jobs.push(("astro-ph_all", "astro-ph"));
    }
    jobs
}

/// Concatenate `parts` (in order) into `<data_dir>/<target>`, skipped when
/// the target exists.
fn concat_into(data_dir: &Path, target: &str, parts: &[&str], quiet: bool) -> Result<()> {
    let target_path = data_dir.join(target);
    if target_path.is_file() {
        return Ok(());
    }

    if !quiet {
        println!("\t{target}");
    }
    let mut out = File::create(&target_path)?;
    for part in parts {
        let mut input = File::open(data_dir.join(part))?;
        io::copy(&mut input, &mut out)?;
    }
    Ok(())
}

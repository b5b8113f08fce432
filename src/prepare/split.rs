//! Deterministic 60/20/20 dataset splitting

use crate::error::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Fixed seed for the split permutation. Re-running against the same input
/// file always yields the same partitions.
pub const SPLIT_SEED: u64 = 4_748_590_902;

/// Row counts of the three partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitCounts {
    pub train: usize,
    pub valid: usize,
    pub test: usize,
}

/// Partition boundaries for `m` rows: train takes `[0, 0.6m)`, valid
/// `[0.6m, 0.8m)`, test the rest, with floor-rounded thresholds.
#[must_use]
pub fn partition_bounds(m: usize) -> (usize, usize) {
    let train_end = (0.6 * m as f64) as usize;
    let valid_end = (0.8 * m as f64) as usize;
    (train_end, valid_end)
}

/// Seeded index permutation driving the split.
#[must_use]
pub fn split_permutation(m: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..m).collect();
    let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
    perm.shuffle(&mut rng);
    perm
}

/// Split the dataset in `input` into `<stem>.train`, `<stem>.valid`, and
/// `<stem>.test` by a fixed-seed random permutation of its rows.
///
/// Each output file that already exists is left untouched, so re-running
/// never disturbs a previous split. Progress lines are suppressed when
/// `quiet` is set. Returns the partition row counts.
///
/// # Errors
///
/// Fails when the input cannot be read or a missing output cannot be
/// written.
pub fn split_dataset(input: &Path, stem: &Path, quiet: bool) -> Result<SplitCounts> {
    let reader = BufReader::new(File::open(input)?);
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;

    let m = lines.len();
    let perm = split_permutation(m);
    let (train_end, valid_end) = partition_bounds(m);

    write_partition(
        &partition_path(stem, "train"),
        &lines,
        &perm[..train_end],
        quiet,
    )?;
    write_partition(
        &partition_path(stem, "test"),
        &lines,
        &perm[valid_end..],
        quiet,
    )?;
    write_partition(
        &partition_path(stem, "valid"),
        &lines,
        &perm[train_end..valid_end],
        quiet,
    )?;

    Ok(SplitCounts {
        train: train_end,
        valid: valid_end - train_end,
        test: m - valid_end,
    })
}

fn partition_path(stem: &Path, kind: &str) -> PathBuf {
    PathBuf::from(format!("{}.{kind}", stem.display()))
}

/// Write the selected rows to `path`, skipping when the file exists.
fn write_partition(path: &Path, lines: &[String], indices: &[usize], quiet: bool) -> Result<()> {
    if path.is_file() {
        if !quiet {
            println!("\t{} exists", path.display());
        }
        return Ok(());
    }

    if !quiet {
        println!("\tcreating {}", path.display());
    }
    let mut out = BufWriter::new(File::create(path)?);
    for &i in indices {
        out.write_all(lines[i].as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

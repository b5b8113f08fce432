//! IDA benchmark to LIBSVM conversion
//!
//! The IDA binary-classification benchmarks ship each resampling split as a
//! pair of ASCII files: a whitespace-separated feature matrix
//! (`<base>_train_data_<N>.asc`) and a label vector
//! (`<base>_train_labels_<N>.asc`), plus test equivalents. The booster reads
//! LIBSVM text, so both files are merged line-by-line into
//! `label index:value ...` records with 1-based, dense feature indices.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};


/// Number of resampling splits per side (train and test) in the benchmark.
pub const SPLITS_PER_SIDE: usize = 100;

/// Summary of one converted split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    /// Path of the LIBSVM file that was written
    pub path: PathBuf,
    /// Number of samples it contains
    pub samples: usize,
}

/// Find the single file in `dir` matching a glob `pattern`.
///
/// # Errors
///
/// Returns [`Error::NoMatch`] when nothing matches and
/// [`Error::AmbiguousPattern`] when more than one file does; both cases mean
/// the directory does not hold a well-formed benchmark.
pub fn find_matching_file(dir: &Path, pattern: &str) -> Result<PathBuf> {
    let full_pattern = dir.join(pattern).to_string_lossy().into_owned();
    let mut matches: Vec<PathBuf> = glob::glob(&full_pattern)?
        .filter_map(std::result::Result::ok)
        .collect();
    matches.sort();

    match matches.len() {
        0 => Err(Error::NoMatch {
            pattern: full_pattern,
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(Error::AmbiguousPattern {
            pattern: full_pattern,
            matches: matches.iter().map(|p| p.display().to_string()).collect(),
        }),
    }
}

/// Merge a data stream and a label stream into LIBSVM lines.
///
/// Each data line is tokenized on whitespace and every token is emitted
/// verbatim as `<index>:<token>` with indices starting at 1. The label is
/// parsed as a float, truncated to a signed integer, and always written with
/// an explicit sign.
///
/// Returns the number of samples written.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] when exactly one of the two streams
/// reaches end-of-file before the other.
pub fn merge_data_and_labels<D, L, W>(
    data: D,
    labels: L,
    out: &mut W,
    data_name: &str,
    labels_name: &str,
) -> Result<usize>
where
    D: BufRead,
    L: BufRead,
    W: Write,
{
    let mut data_lines = data.lines();
    let mut label_lines = labels.lines();
    let mut samples = 0usize;

    loop {
        match (data_lines.next(), label_lines.next()) {
            (None, None) => break,
            (Some(data_line), Some(label_line)) => {
                let data_line = data_line?;
                let label_line = label_line?;

                let label = parse_label(&label_line)?;
                write!(out, "{label:+}")?;
                for (index, token) in data_line.split_whitespace().enumerate() {
                    write!(out, " {}:{}", index + 1, token)?;
                }
                out.write_all(b"\n")?;
                samples += 1;
            }
            _ => {
                return Err(Error::LengthMismatch {
                    data: data_name.to_string(),
                    labels: labels_name.to_string(),
                })
            }
        }
    }

    Ok(samples)
}

/// Parse a label line into a signed integer, truncating real-valued labels.
fn parse_label(line: &str) -> Result<i64> {
    let value: f64 = line.trim().parse().map_err(|_| Error::InvalidLabel {
        line: line.to_string(),
    })?;
    Ok(value as i64)
}

/// Convert every split of the benchmark in `dir`.
///
/// Equivalent to [`convert_splits`] with [`SPLITS_PER_SIDE`] splits.
///
/// # Errors
///
/// Any missing, ambiguous, or mismatched split aborts the whole run; files
/// written before the failure are left in place.
pub fn convert_directory(dir: &Path) -> Result<Vec<ConvertedFile>> {
    convert_splits(dir, SPLITS_PER_SIDE)
}

/// Convert splits 1..=`num_splits` of the benchmark in `dir`.
///
/// All train files are converted before any test file so the produced
/// summaries read in benchmark order.
pub fn convert_splits(dir: &Path, num_splits: usize) -> Result<Vec<ConvertedFile>> {
    convert_splits_with(dir, num_splits, |_| {})
}

/// Like [`convert_splits`], invoking `on_file` with each summary as soon as
/// its split is written, so progress is reported even when a later split
/// fails.
pub fn convert_splits_with<F>(
    dir: &Path,
    num_splits: usize,
    mut on_file: F,
) -> Result<Vec<ConvertedFile>>
where
    F: FnMut(&ConvertedFile),
{
    let mut jobs = Vec::with_capacity(2 * num_splits);
    for i in 1..=num_splits {
        jobs.push((
            format!("*_train_data_{i}.asc"),
            format!("*_train_labels_{i}.asc"),
            format!("_train_{i}.libsvm.txt"),
        ));
    }
    for i in 1..=num_splits {
        jobs.push((
            format!("*_test_data_{i}.asc"),
            format!("*_test_labels_{i}.asc"),
            format!("_test_{i}.libsvm.txt"),
        ));
    }

    let mut converted = Vec::with_capacity(jobs.len());
    for (data_pattern, labels_pattern, out_suffix) in jobs {
        let file = convert_split(dir, &data_pattern, &labels_pattern, &out_suffix)?;
        on_file(&file);
        converted.push(file);
    }
    Ok(converted)
}

/// Convert one data/label pair into its LIBSVM file.
fn convert_split(
    dir: &Path,
    data_pattern: &str,
    labels_pattern: &str,
    out_suffix: &str,
) -> Result<ConvertedFile> {
    let data_path = find_matching_file(dir, data_pattern)?;
    let labels_path = find_matching_file(dir, labels_pattern)?;

    let data_base = base_name(&data_path, data_pattern);
    let labels_base = base_name(&labels_path, labels_pattern);
    if data_base != labels_base {
        return Err(Error::BaseNameMismatch {
            data: data_path.display().to_string(),
            labels: labels_path.display().to_string(),
        });
    }

    let out_path = dir.join(format!("{data_base}{out_suffix}"));
    let data = BufReader::new(File::open(&data_path)?);
    let labels = BufReader::new(File::open(&labels_path)?);
    let mut out = BufWriter::new(File::create(&out_path)?);

    let samples = merge_data_and_labels(
        data,
        labels,
        &mut out,
        &data_path.display().to_string(),
        &labels_path.display().to_string(),
    )?;
    out.flush()?;

    Ok(ConvertedFile {
        path: out_path,
        samples,
    })
}

/// Strip the fixed tail of a glob pattern (`*` prefix removed) from a file
/// name, leaving the dataset base name.
fn base_name(path: &Path, pattern: &str) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = pattern.strip_prefix('*').unwrap_or(pattern);
    file_name
        .strip_suffix(suffix)
        .unwrap_or(&file_name)
        .to_string()
}

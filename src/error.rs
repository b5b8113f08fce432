//! Error types for boostprep

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("found zero files matching pattern {pattern}")]
    NoMatch { pattern: String },

    #[error("found more than one file matching pattern {pattern}: {matches:?}")]
    AmbiguousPattern {
        pattern: String,
        matches: Vec<String>,
    },

    #[error("base name of data file {data} does not match label file {labels}")]
    BaseNameMismatch { data: String, labels: String },

    #[error("data file {data} and label file {labels} do not have the same length")]
    LengthMismatch { data: String, labels: String },

    #[error("cannot parse label from line {line:?}")]
    InvalidLabel { line: String },

    #[error("download of {url} failed: {detail}")]
    Download { url: String, detail: String },

    #[error("decompression of {path} failed: {detail}")]
    Decompress { path: String, detail: String },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

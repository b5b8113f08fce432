//! Configuration records and the key/value file writer

use crate::error::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Weak-learner oracle queried by the booster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oracle {
    DecisionStump,
    RawData,
    Svm,
}

impl Oracle {
    /// Short code used in file names
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::DecisionStump => "ds",
            Self::RawData => "rd",
            Self::Svm => "svm",
        }
    }

    /// Value written to the `oracle_type` field
    #[must_use]
    pub fn config_value(self) -> &'static str {
        match self {
            Self::DecisionStump => "decisionstump",
            Self::RawData => "rawdata",
            Self::Svm => "svm",
        }
    }
}

/// Boosting algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Booster {
    LpBoost,
    AdaBoost,
    Corrective,
    ErlpBoost,
    /// ERLPBoost with the binary flag set
    BinaryErlp,
}

impl Booster {
    /// Short code used in file names
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::LpBoost => "lp",
            Self::AdaBoost => "ada",
            Self::Corrective => "corr",
            Self::ErlpBoost => "erlp",
            Self::BinaryErlp => "bin",
        }
    }

    /// Whether the family is an ERLPBoost variant, which carries the
    /// `binary` and `optimizer_type` fields.
    #[must_use]
    pub fn is_erlp_variant(self) -> bool {
        matches!(self, Self::ErlpBoost | Self::BinaryErlp)
    }
}

/// Inner optimizer used by the ERLPBoost variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optimizer {
    Tao,
    Hz,
    Pg,
    Cd,
}

impl Optimizer {
    /// Value written to the `optimizer_type` field and used in file names
    #[must_use]
    pub fn config_value(self) -> &'static str {
        match self {
            Self::Tao => "tao",
            Self::Hz => "hz",
            Self::Pg => "pg",
            Self::Cd => "cd",
        }
    }
}

/// One experiment configuration, the unit the generator emits per
/// combination of the sweep.
///
/// Hyperparameters that double as file-name components (`eps`, `eta`) are
/// kept as the token that appears in the name: an `eps` token `"01"` renders
/// as `eps = 0.01`, an `eta` token `"20"` as `eta = 20.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRecord {
    /// Dataset short name (resolves to `../data/<name>.{train,test,valid}`)
    pub dataset: String,
    /// Algorithm family
    pub family: Booster,
    /// Weak-learner oracle
    pub oracle: Oracle,
    /// Reflexive flag for the weak learner
    pub reflexive: bool,
    /// Subdirectory under `../results` (and under the config output root)
    pub results_dir: String,
    /// Epsilon tolerance token; `None` falls back to 0.01
    pub eps: Option<String>,
    /// Capping tag for file names: `nc` when nu is not capped, `1`..`9`
    /// for the capping sweep
    pub nu_tag: String,
    /// Softening parameter; `None` falls back to 1.0
    pub nu: Option<f64>,
    /// Regularization parameter token; omitted from the file when `None`
    pub eta: Option<String>,
    /// Inner optimizer; ERLPBoost variants default to tao when `None`
    pub optimizer: Option<Optimizer>,
    /// Iteration cap; `None` falls back to 1000
    pub max_iter: Option<u32>,
    /// `booster_type` field value, set only by families the external tool
    /// selects through it
    pub booster_type: Option<&'static str>,
}

impl ConfigRecord {
    /// File name of this configuration, encoding the combination as
    /// dot-joined components.
    #[must_use]
    pub fn file_name(&self) -> String {
        let mut name = format!(
            "{}.{}.{}.{}",
            self.dataset,
            self.family.code(),
            self.oracle.code(),
            reflexive_code(self.reflexive),
        );
        if self.family != Booster::AdaBoost {
            let _ = write!(name, ".{}.{}", self.eps_token(), self.nu_tag);
        }
        if let Some(eta) = &self.eta {
            let _ = write!(name, ".{eta}");
        }
        if let Some(opt) = self.optimizer {
            let _ = write!(name, ".{}", opt.config_value());
        }
        name.push_str(".conf");
        name
    }

    /// Name of the results file the booster will write, mirroring
    /// [`Self::file_name`] under the results directory.
    #[must_use]
    pub fn output_name(&self) -> String {
        let mut name = format!(
            "{}/{}.{}.{}.{}",
            self.results_dir,
            self.dataset,
            self.family.code(),
            self.oracle.code(),
            reflexive_code(self.reflexive),
        );
        if self.family != Booster::AdaBoost {
            let _ = write!(name, ".{}.{}", self.eps_token(), self.nu_tag);
        }
        if let Some(eta) = &self.eta {
            let _ = write!(name, ".{eta}");
        }
        if let Some(opt) = self.optimizer {
            let _ = write!(name, ".{}", opt.config_value());
        }
        name.push_str(".output");
        name
    }

    fn eps_token(&self) -> &str {
        self.eps.as_deref().unwrap_or("01")
    }

    /// Render the commented `key = value` configuration text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("# Configuration file for erlpboost\n\n");

        out.push_str("# Read training data from this file (LIBSVM format)\n");
        let _ = writeln!(out, "train_file = ../data/{}.train\n", self.dataset);

        out.push_str("# Read testing data from this file (LIBSVM format)\n");
        let _ = writeln!(out, "test_file = ../data/{}.test\n", self.dataset);

        out.push_str("# Read validation data from this file (LIBSVM format)\n");
        let _ = writeln!(out, "valid_file = ../data/{}.valid\n", self.dataset);

        out.push_str("# Dump all results and output into this file\n");
        let _ = writeln!(out, "output_file = ../results/{}\n", self.output_name());

        out.push_str("# What kind of oracle to use\n");
        out.push_str("# Possible values are rawdata, decisionstump, or svm\n");
        let _ = writeln!(out, "oracle_type = {}\n", self.oracle.config_value());

        out.push_str("# Should the weak learner set the reflexive flag?\n");
        let _ = writeln!(out, "reflexive = {}\n", self.reflexive);

        out.push_str("# Maximum number of iterations of boosting\n");
        let _ = writeln!(out, "max_iter = {}\n", self.max_iter.unwrap_or(1000));

        if self.family != Booster::AdaBoost {
            out.push_str("# Epsilon tolerance\n");
            let _ = writeln!(out, "eps = 0.{}\n", self.eps_token());
        }

        if let Some(eta) = &self.eta {
            out.push_str("# Regularization Parameter\n");
            let _ = writeln!(out, "eta = {eta}.0\n");
        }

        if self.family != Booster::AdaBoost {
            out.push_str("# nu for softening. Actually 1/nu is used in the code\n");
            let _ = writeln!(out, "nu = {:.1}\n", self.nu.unwrap_or(1.0));
        }

        if self.family.is_erlp_variant() {
            out.push_str("# binary boost or normal ERLPBoost\n");
            let _ = writeln!(out, "binary = {}\n", self.family == Booster::BinaryErlp);
        }

        if let Some(booster_type) = self.booster_type {
            out.push_str("# type of boosting algorithm\n");
            out.push_str("# choices are ERLPBoost, AdaBoost, Corrective, and LPBoost\n");
            let _ = writeln!(out, "booster_type = {booster_type}");
        }
        out.push('\n');

        if self.family.is_erlp_variant() {
            out.push_str("# What kind of optimizer to use\n");
            out.push_str("# Possible values are tao, hz, pg and cd\n");
            let _ = writeln!(
                out,
                "optimizer_type = {}",
                self.optimizer.unwrap_or(Optimizer::Tao).config_value()
            );
        }

        out
    }
}

fn reflexive_code(reflexive: bool) -> &'static str {
    if reflexive {
        "t"
    } else {
        "f"
    }
}

/// Write a configuration record to `path`, overwriting any previous file.
/// Regeneration with the same record is byte-identical.
///
/// # Errors
///
/// Fails when the file cannot be written.
pub fn write_config(path: &Path, record: &ConfigRecord) -> Result<()> {
    fs::write(path, record.render())?;
    Ok(())
}

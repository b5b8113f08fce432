//! CLI argument parsing
//!
//! This module provides the command-line interface for the boostprep
//! utilities.
//!
//! # Usage
//!
//! ```bash
//! boostprep convert ./benchmarks/banana
//! boostprep configs --family corr --oracle ds --mode eta
//! boostprep prepare --data-dir ../data
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::configgen::{Optimizer, Oracle, SweepMode};

/// Boostprep: experiment preparation for boosting research
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "boostprep")]
#[command(version)]
#[command(about = "Benchmark conversion, config generation, and dataset preparation")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert IDA benchmark splits to LIBSVM text files
    Convert(ConvertArgs),

    /// Generate booster configuration files for an experiment sweep
    Configs(ConfigsArgs),

    /// Download, concatenate, and split the benchmark datasets
    Prepare(PrepareArgs),
}

/// Arguments for the convert command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ConvertArgs {
    /// Directory holding the IDA benchmark files
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

/// Arguments for the configs command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ConfigsArgs {
    /// Algorithm family to generate configurations for
    #[arg(long, value_enum)]
    pub family: FamilyArg,

    /// Weak-learner oracle
    #[arg(long, value_enum, default_value = "ds")]
    pub oracle: OracleArg,

    /// Epsilon tolerance token; "01" is written as eps = 0.01
    #[arg(long, default_value = "01")]
    pub eps: String,

    /// Override the per-family iteration cap
    #[arg(long)]
    pub max_iter: Option<u32>,

    /// Sweep mode
    #[arg(long, value_enum, default_value = "default")]
    pub mode: SweepModeArg,

    /// Optimizer for the optimizer-comparison sweep
    #[arg(long, value_enum)]
    pub optimizer: Option<OptimizerArg>,

    /// Run the optimizer-comparison sweep on the binary-ERLPBoost variant
    #[arg(long)]
    pub binary: bool,

    /// Directory the per-family config subdirectories are written under
    #[arg(long, default_value = "../config")]
    pub out: PathBuf,
}

/// Arguments for the prepare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PrepareArgs {
    /// Directory the datasets are downloaded to and split under
    #[arg(long, default_value = "../data")]
    pub data_dir: PathBuf,
}

/// Algorithm family selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyArg {
    /// LP-boost
    Lp,
    /// AdaBoost
    Ada,
    /// Corrective boost
    Corr,
    /// Entropy-regularized LP-boost
    Erlp,
    /// Binary ERLPBoost variant
    Bin,
    /// Optimizer-comparison sweep (ERLPBoost on real-sim)
    Opt,
}

/// Weak-learner oracle selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleArg {
    /// Decision stump
    Ds,
    /// Raw data
    Rd,
    /// SVM
    Svm,
}

impl From<OracleArg> for Oracle {
    fn from(arg: OracleArg) -> Self {
        match arg {
            OracleArg::Ds => Oracle::DecisionStump,
            OracleArg::Rd => Oracle::RawData,
            OracleArg::Svm => Oracle::Svm,
        }
    }
}

/// Sweep mode selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepModeArg {
    /// Default hyperparameters, no sweep
    Default,
    /// Sweep the eta regularization parameter
    Eta,
    /// Sweep nu capping proportional to training-set size
    Nu,
}

impl From<SweepModeArg> for SweepMode {
    fn from(arg: SweepModeArg) -> Self {
        match arg {
            SweepModeArg::Default => SweepMode::Default,
            SweepModeArg::Eta => SweepMode::EtaSweep,
            SweepModeArg::Nu => SweepMode::NuCapping,
        }
    }
}

/// Optimizer selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerArg {
    Tao,
    Hz,
    Pg,
    Cd,
}

impl From<OptimizerArg> for Optimizer {
    fn from(arg: OptimizerArg) -> Self {
        match arg {
            OptimizerArg::Tao => Optimizer::Tao,
            OptimizerArg::Hz => Optimizer::Hz,
            OptimizerArg::Pg => Optimizer::Pg,
            OptimizerArg::Cd => Optimizer::Cd,
        }
    }
}

/// Parse command-line arguments
///
/// # Panics
///
/// Exits the process on invalid arguments (standard clap behavior).
#[must_use]
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_convert_defaults_to_current_dir() {
        let cli = Cli::parse_from(["boostprep", "convert"]);
        match cli.command {
            Command::Convert(args) => assert_eq!(args.dir, PathBuf::from(".")),
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_configs_args_parse() {
        let cli = Cli::parse_from([
            "boostprep", "configs", "--family", "corr", "--oracle", "rd", "--eps", "001",
            "--mode", "eta",
        ]);
        match cli.command {
            Command::Configs(args) => {
                assert_eq!(args.family, FamilyArg::Corr);
                assert_eq!(args.oracle, OracleArg::Rd);
                assert_eq!(args.eps, "001");
                assert_eq!(args.mode, SweepModeArg::Eta);
                assert_eq!(args.out, PathBuf::from("../config"));
            }
            _ => panic!("expected configs command"),
        }
    }

    #[test]
    fn test_optimizer_sweep_binary_variant_is_selectable() {
        let cli = Cli::parse_from([
            "boostprep", "configs", "--family", "opt", "--optimizer", "hz", "--binary",
        ]);
        match cli.command {
            Command::Configs(args) => {
                assert_eq!(args.family, FamilyArg::Opt);
                assert_eq!(args.optimizer, Some(OptimizerArg::Hz));
                assert!(args.binary);
            }
            _ => panic!("expected configs command"),
        }
    }

    #[test]
    fn test_global_quiet_flag() {
        let cli = Cli::parse_from(["boostprep", "--quiet", "prepare"]);
        assert!(cli.quiet);
    }
}

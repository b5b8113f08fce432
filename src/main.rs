//! Boostprep CLI
//!
//! Single entry point for the three experiment-preparation utilities.
//!
//! # Usage
//!
//! ```bash
//! # Convert IDA benchmark splits in a directory to LIBSVM text
//! boostprep convert ./benchmarks/banana
//!
//! # Generate a corrective-boost eta sweep
//! boostprep configs --family corr --oracle ds --mode eta --max-iter 10000
//!
//! # Download, concatenate, and split the benchmark datasets
//! boostprep prepare --data-dir ../data
//! ```

use boostprep::cli::{
    parse_args, Cli, Command, ConfigsArgs, ConvertArgs, FamilyArg, OptimizerArg, PrepareArgs,
};
use boostprep::configgen::{
    ada_configs, corrective_configs, erlp_configs, lp_configs, optimizer_sweep, write_family,
    Optimizer, Oracle, SweepMode,
};
use boostprep::{convert, prepare};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_args();

    let result = match &cli.command {
        Command::Convert(args) => run_convert(args, &cli),
        Command::Configs(args) => run_configs(args, &cli),
        Command::Prepare(args) => run_prepare(args, &cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_convert(args: &ConvertArgs, cli: &Cli) -> boostprep::Result<()> {
    // Summaries stream as each split finishes, so a mid-run failure still
    // reports every file already written.
    convert::convert_splits_with(&args.dir, convert::SPLITS_PER_SIDE, |file| {
        if !cli.quiet {
            println!(
                "File {} created, contains {} samples.",
                file.path.display(),
                file.samples
            );
        }
    })?;
    Ok(())
}

fn run_configs(args: &ConfigsArgs, cli: &Cli) -> boostprep::Result<()> {
    let oracle: Oracle = args.oracle.into();
    let mode: SweepMode = args.mode.into();
    let eps = args.eps.as_str();

    // Per-family iteration caps from the experiment protocol.
    let mut records = match args.family {
        FamilyArg::Lp => lp_configs(oracle, eps, mode),
        FamilyArg::Ada => ada_configs(oracle, 50_000),
        FamilyArg::Corr => corrective_configs(oracle, eps, 10_000, mode),
        FamilyArg::Erlp => erlp_configs(oracle, eps, false, mode),
        FamilyArg::Bin => erlp_configs(oracle, eps, true, mode),
        FamilyArg::Opt => {
            let optimizer: Optimizer = args.optimizer.unwrap_or(OptimizerArg::Tao).into();
            optimizer_sweep(oracle, eps, args.binary, optimizer)
        }
    };

    if let Some(max_iter) = args.max_iter {
        for record in &mut records {
            record.max_iter = Some(max_iter);
        }
    }

    let written = write_family(&args.out, &records)?;

    if !cli.quiet {
        for path in &written {
            println!("{}", path.display());
        }
        if cli.verbose {
            println!("{} configuration files written", written.len());
        }
    }
    Ok(())
}

fn run_prepare(args: &PrepareArgs, cli: &Cli) -> boostprep::Result<()> {
    prepare::prepare(&args.data_dir, cli.quiet)
}

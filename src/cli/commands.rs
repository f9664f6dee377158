// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Positional arguments follow the original scripts:
//
//   svor-eval  <dataset-file> <train-fraction>
//   label-dist <dataset-file>
//
// Every flag is optional and its default reproduces the
// original behaviour (10 trials, tools in ./, files next to
// the dataset).

use std::path::PathBuf;

use clap::Args;

use crate::application::experiment_use_case::{ExperimentConfig, DEFAULT_TRIALS};
use crate::data::splitter::parse_fraction;
use crate::error::EvalError;

/// Arguments for the evaluation run.
#[derive(Args, Debug)]
pub struct ExperimentArgs {
    /// Dataset file: one `<label> <features...>` record per line
    pub dataset: PathBuf,

    /// Fraction of records used for training, in (0, 1]
    #[arg(allow_negative_numbers = true)]
    pub train_fraction: String,

    /// Number of independent train/test trials
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Seed the shuffle for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory containing svm-train and svm-predict
    /// (pass an empty string to search PATH)
    #[arg(long, default_value = ".")]
    pub tool_dir: String,

    /// Write each trial's files to a private temporary directory
    /// instead of <dataset>.train / .test / .model
    #[arg(long)]
    pub scratch: bool,

    /// Also write run_config.json, trials.csv and summary.json here
    #[arg(long)]
    pub results_dir: Option<PathBuf>,
}

/// Convert CLI args into the application-layer config.
/// The application layer never sees clap types.
impl TryFrom<ExperimentArgs> for ExperimentConfig {
    type Error = EvalError;

    fn try_from(a: ExperimentArgs) -> Result<Self, Self::Error> {
        Ok(ExperimentConfig {
            train_fraction: parse_fraction(&a.train_fraction)?,
            dataset:        a.dataset,
            trials:         a.trials,
            seed:           a.seed,
            tool_dir:       PathBuf::from(a.tool_dir),
            scratch:        a.scratch,
            results_dir:    a.results_dir,
        })
    }
}

/// Arguments for the label-distribution report.
#[derive(Args, Debug)]
pub struct DistributionArgs {
    /// Dataset file: one `<label> <features...>` record per line
    pub dataset: PathBuf,
}

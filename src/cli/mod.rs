// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry points for the two binaries. Parsing is done with
// clap; all work is delegated to Layer 2 (application).
//
//   svor-eval  — repeated train/test evaluation
//   label-dist — label mean ± standard deviation
//
// A missing positional argument prints the usage message and
// exits with status 1.

pub mod commands;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use commands::{DistributionArgs, ExperimentArgs};

use crate::application::{
    distribution_use_case::DistributionUseCase,
    experiment_use_case::{ExperimentConfig, ExperimentUseCase},
};
use crate::error::EvalError;
use crate::ml::svm_tool::SvmTool;

/// Diagnostics go to stderr; stdout carries the transcript.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(
        "svor_eval=info"
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse argv, or print usage and exit 1 on bad arguments.
/// `--help` / `--version` still exit 0.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(parsed) => parsed,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn log_failure(e: &EvalError) {
    tracing::error!(kind = e.kind(), "Run aborted");
}

#[derive(Parser, Debug)]
#[command(
    name = "svor-eval",
    version,
    about = "Evaluate an external ordinal SVM against a majority-class baseline \
             over repeated random train/test splits."
)]
pub struct ExperimentCli {
    #[command(flatten)]
    pub args: ExperimentArgs,
}

impl ExperimentCli {
    pub fn run(self) -> Result<()> {
        let config = ExperimentConfig::try_from(self.args)?;
        let tool   = SvmTool::new(&config.tool_dir);

        if config.tool_dir.as_os_str().is_empty() {
            tracing::info!("Using svm tools found on PATH");
        } else {
            tracing::info!("Using svm tools from '{}'", config.tool_dir.display());
        }

        let use_case = ExperimentUseCase::new(config, tool);
        let stdout   = io::stdout();
        use_case
            .execute(&mut stdout.lock())
            .inspect_err(log_failure)
            .with_context(|| format!("evaluating '{}'", use_case.config().dataset.display()))?;
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "label-dist",
    version,
    about = "Print the mean and sample standard deviation of a dataset's labels."
)]
pub struct DistributionCli {
    #[command(flatten)]
    pub args: DistributionArgs,
}

impl DistributionCli {
    pub fn run(self) -> Result<()> {
        let use_case = DistributionUseCase::new(&self.args.dataset);
        let stdout   = io::stdout();
        use_case
            .execute(&mut stdout.lock())
            .inspect_err(log_failure)
            .with_context(|| format!("reading labels from '{}'", self.args.dataset.display()))?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_positional_arguments() {
        let cli = ExperimentCli::try_parse_from(["svor-eval", "grades.txt", "0.8"]).unwrap();
        let cfg = ExperimentConfig::try_from(cli.args).unwrap();
        assert_eq!(cfg.dataset, PathBuf::from("grades.txt"));
        assert_eq!(cfg.train_fraction, 0.8);
        assert_eq!(cfg.trials, 10);
        assert_eq!(cfg.tool_dir, PathBuf::from("."));
        assert!(!cfg.scratch);
    }

    #[test]
    fn test_missing_fraction_is_rejected() {
        assert!(ExperimentCli::try_parse_from(["svor-eval", "grades.txt"]).is_err());
    }

    #[test]
    fn test_unparseable_fraction_is_config_error() {
        let cli = ExperimentCli::try_parse_from(["svor-eval", "grades.txt", "most"]).unwrap();
        let err = ExperimentConfig::try_from(cli.args).unwrap_err();
        assert!(matches!(err, crate::error::EvalError::Config(_)));
    }

    #[test]
    fn test_optional_flags() {
        let cli = ExperimentCli::try_parse_from([
            "svor-eval", "g.txt", "0.5", "--trials", "3", "--seed", "42", "--scratch",
            "--tool-dir", "/opt/libsvm", "--results-dir", "out",
        ])
        .unwrap();
        let cfg = ExperimentConfig::try_from(cli.args).unwrap();
        assert_eq!(cfg.trials, 3);
        assert_eq!(cfg.seed, Some(42));
        assert!(cfg.scratch);
        assert_eq!(cfg.tool_dir, PathBuf::from("/opt/libsvm"));
        assert_eq!(cfg.results_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_empty_tool_dir_means_path_lookup() {
        let cli = ExperimentCli::try_parse_from([
            "svor-eval", "g.txt", "0.5", "--tool-dir", "",
        ])
        .unwrap();
        let cfg = ExperimentConfig::try_from(cli.args).unwrap();
        assert!(cfg.tool_dir.as_os_str().is_empty());
        assert_eq!(cfg.tool_dir.join("svm-train"), PathBuf::from("svm-train"));
    }

    #[test]
    fn test_distribution_positional() {
        let cli = DistributionCli::try_parse_from(["label-dist", "grades.txt"]).unwrap();
        assert_eq!(cli.args.dataset, PathBuf::from("grades.txt"));
    }
}

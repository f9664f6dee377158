// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams keep the experiment loop free of process and
// filesystem details:
//
//   ExternalModelAdapter — how a model is trained and asked
//                          for predictions (SvmTool shells out
//                          to svm-train / svm-predict; tests
//                          use an in-memory fake)
//   PathPolicy           — where a trial's train/test/model
//                          files live
//
// The use case only sees these traits.

use std::path::{Path, PathBuf};

use crate::error::Result;

// ─── ExternalModelAdapter ─────────────────────────────────────────────────────
/// Anything that can fit an ordinal model on a file and report
/// on predictions for another file.
pub trait ExternalModelAdapter {
    /// Fit a model on `train_path` and store it at `model_path`.
    /// Returns the raw training log for display.
    fn train(&self, train_path: &Path, model_path: &Path) -> Result<String>;

    /// Predict every record of `data_path` with the stored model.
    /// Returns the summary report text (per-record predictions
    /// are discarded).
    fn predict(&self, data_path: &Path, model_path: &Path) -> Result<String>;
}

// ─── PathPolicy ───────────────────────────────────────────────────────────────
/// File locations used by one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialPaths {
    pub train: PathBuf,
    pub test:  PathBuf,
    pub model: PathBuf,
}

/// Decides where each trial writes its artifacts.
pub trait PathPolicy {
    /// Paths for the given 1-based trial number. May create
    /// directories; must not create the files themselves.
    fn trial_paths(&self, trial: usize) -> Result<TrialPaths>;
}

// ============================================================
// Layer 4 — Trial File Layout
// ============================================================
// Two PathPolicy implementations:
//
//   SiblingPaths  — <dataset>.train / .test / .model next to
//                   the input file, reused by every trial.
//                   This is the default layout.
//
//   ScratchPaths  — a private temporary directory with one
//                   sub-directory per trial:
//                     /tmp/.tmpXXXX/trial-01/<name>.train
//                   Removed when the policy is dropped.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::domain::traits::{PathPolicy, TrialPaths};
use crate::error::{EvalError, Result};

/// Append `.ext` to the full file name (so `grades.txt` becomes
/// `grades.txt.train`, not `grades.train`).
fn with_suffix(path: &Path, ext: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn paths_for(base: &Path) -> TrialPaths {
    TrialPaths {
        train: with_suffix(base, "train"),
        test:  with_suffix(base, "test"),
        model: with_suffix(base, "model"),
    }
}

// ─── SiblingPaths ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct SiblingPaths {
    dataset: PathBuf,
}

impl SiblingPaths {
    pub fn new(dataset: impl Into<PathBuf>) -> Self {
        Self { dataset: dataset.into() }
    }
}

impl PathPolicy for SiblingPaths {
    fn trial_paths(&self, _trial: usize) -> Result<TrialPaths> {
        Ok(paths_for(&self.dataset))
    }
}

// ─── ScratchPaths ─────────────────────────────────────────────────────────────
#[derive(Debug)]
pub struct ScratchPaths {
    dir:       TempDir,
    file_name: OsString,
}

impl ScratchPaths {
    /// Create a fresh temporary directory for a run over `dataset`.
    pub fn new(dataset: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("svor-eval-")
            .tempdir()
            .map_err(|e| EvalError::io(std::env::temp_dir(), e))?;

        let file_name = dataset
            .file_name()
            .map(|n| n.to_owned())
            .unwrap_or_else(|| OsString::from("dataset"));

        tracing::debug!("Scratch directory: '{}'", dir.path().display());
        Ok(Self { dir, file_name })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

impl PathPolicy for ScratchPaths {
    fn trial_paths(&self, trial: usize) -> Result<TrialPaths> {
        let trial_dir = self.dir.path().join(format!("trial-{trial:02}"));
        fs::create_dir_all(&trial_dir).map_err(|e| EvalError::io(&trial_dir, e))?;
        Ok(paths_for(&trial_dir.join(&self.file_name)))
    }
}

// ============================================================
// Layer 6 — Results Log
// ============================================================
// Optional on-disk record of a run, next to the console
// transcript:
//
//   <results-dir>/
//     run_config.json   ← the resolved ExperimentConfig
//     trials.csv        ← one row per completed trial
//     summary.json      ← aggregate statistics, after the last trial
//
// Example trials.csv:
//   trial,train_size,test_size,majority_class,baseline_accuracy,...
//   1,80,20,3,0.450000,0.700000,0.550000,0.500000,0.312500
//
// The CSV is truncated when the logger is created, so every
// run starts a fresh file.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::domain::trial::TrialResult;
use crate::error::{EvalError, Result};

pub const CONFIG_FILE: &str = "run_config.json";
pub const TRIALS_FILE: &str = "trials.csv";
pub const SUMMARY_FILE: &str = "summary.json";

pub struct ResultsLog {
    dir:      PathBuf,
    csv_path: PathBuf,
}

impl ResultsLog {
    /// Create the directory if needed and write the CSV header.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| EvalError::io(&dir, e))?;

        let csv_path = dir.join(TRIALS_FILE);
        let mut f    = fs::File::create(&csv_path).map_err(|e| EvalError::io(&csv_path, e))?;
        writeln!(f, "{}", TrialResult::CSV_HEADER).map_err(|e| EvalError::io(&csv_path, e))?;
        tracing::debug!("Created trials CSV: '{}'", csv_path.display());

        Ok(Self { dir, csv_path })
    }

    /// Save the run configuration as pretty JSON.
    pub fn save_config<C: Serialize>(&self, config: &C) -> Result<()> {
        self.save_json(CONFIG_FILE, config)
    }

    /// Save the end-of-run statistics as pretty JSON.
    pub fn save_summary<S: Serialize>(&self, summary: &S) -> Result<()> {
        self.save_json(SUMMARY_FILE, summary)
    }

    fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).map_err(|e| EvalError::io(&path, e))?;
        tracing::debug!("Saved '{}'", path.display());
        Ok(())
    }

    /// Append one trial as a CSV row.
    pub fn log(&self, r: &TrialResult) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .map_err(|e| EvalError::io(&self.csv_path, e))?;

        writeln!(f, "{}", r.to_csv_row()).map_err(|e| EvalError::io(&self.csv_path, e))?;

        tracing::debug!("Logged trial {} (svor_mae={:.4})", r.trial, r.svor_mae);
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

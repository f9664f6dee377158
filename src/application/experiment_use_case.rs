// ============================================================
// Layer 2 — ExperimentUseCase
// ============================================================
// Runs the repeated train/test evaluation. For each trial:
//
//   Step 1: Reload the dataset from disk      (Layer 4 - data)
//   Step 2: Shuffle + split, write files      (Layer 4 - data)
//   Step 3: Print label histograms and sizes
//   Step 4: Score the majority-class baseline (Layer 5 - ml)
//   Step 5: svm-train on the training file    (Layer 5 - ml)
//   Step 6: svm-predict on the testing file   → SVOR acc / MAE
//   Step 7: svm-predict on the training file  → training MAE
//   Step 8: Print baseline-vs-SVOR comparison
//
// After the last trial the Aggregator turns the collected
// TrialResults into mean ± sample standard deviation lines,
// including two LaTeX-ready ones.
//
// Any error ends the whole run; results from earlier trials
// are not reported.

use std::{
    fmt,
    io::Write,
    path::PathBuf,
};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::load_dataset,
    paths::{ScratchPaths, SiblingPaths},
    splitter,
};
use crate::domain::{
    histogram::LabelHistogram,
    traits::{ExternalModelAdapter, PathPolicy},
    trial::TrialResult,
};
use crate::error::{EvalError, Result};
use crate::infra::{results::ResultsLog, stats::Summary};
use crate::ml::{baseline, report};

pub const DEFAULT_TRIALS: usize = 10;

// ─── Experiment Configuration ────────────────────────────────────────────────
// Serialisable so a run can record exactly what it did
// (see infra::results).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub dataset:        PathBuf,
    pub train_fraction: f64,
    pub trials:         usize,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed:           Option<u64>,
    /// Directory holding svm-train / svm-predict
    pub tool_dir:       PathBuf,
    /// Per-trial temporary files instead of <dataset>.train etc.
    pub scratch:        bool,
    pub results_dir:    Option<PathBuf>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            dataset:        PathBuf::from("data.txt"),
            train_fraction: 0.8,
            trials:         DEFAULT_TRIALS,
            seed:           None,
            tool_dir:       PathBuf::from("."),
            scratch:        false,
            results_dir:    None,
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.train_fraction.is_finite()
            && self.train_fraction > 0.0
            && self.train_fraction <= 1.0)
        {
            return Err(EvalError::Config(format!(
                "train fraction {} must be in (0, 1]",
                self.train_fraction
            )));
        }
        if self.trials < 2 {
            return Err(EvalError::Config(format!(
                "at least 2 trials are needed for a standard deviation, got {}",
                self.trials
            )));
        }
        Ok(())
    }
}

// ─── Aggregator ──────────────────────────────────────────────────────────────
// Owns every TrialResult of the run. Append-only.
#[derive(Debug, Default)]
pub struct Aggregator {
    results: Vec<TrialResult>,
}

/// End-of-run statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentSummary {
    pub baseline_mae:      Summary,
    pub svor_mae:          Summary,
    pub train_mae:         Summary,
    pub baseline_accuracy: Summary,
    pub svor_accuracy:     Summary,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: TrialResult) {
        self.results.push(result);
    }

    fn series(&self, f: impl Fn(&TrialResult) -> f64) -> Vec<f64> {
        self.results.iter().map(f).collect()
    }

    pub fn summarize(&self) -> Result<ExperimentSummary> {
        Ok(ExperimentSummary {
            baseline_mae:      Summary::of(&self.series(|r| r.baseline_mae))?,
            svor_mae:          Summary::of(&self.series(|r| r.svor_mae))?,
            train_mae:         Summary::of(&self.series(|r| r.train_mae))?,
            baseline_accuracy: Summary::of(&self.series(|r| r.baseline_accuracy))?,
            svor_accuracy:     Summary::of(&self.series(|r| r.svor_accuracy))?,
        })
    }
}

// ─── Comparison sentences ────────────────────────────────────────────────────
// Ties count in the baseline's favour, for both metrics.

pub fn compare_accuracy(svor: f64, baseline: f64) -> String {
    if svor > baseline {
        format!("SVOR is better than baseline by {} ACC", svor - baseline)
    } else {
        format!("Baseline is better than SVOR by {} ACC", baseline - svor)
    }
}

pub fn compare_mae(svor: f64, baseline: f64) -> String {
    if svor < baseline {
        format!("SVOR is better than baseline by {} MAE", baseline - svor)
    } else {
        format!("Baseline is better than SVOR by {} MAE", svor - baseline)
    }
}

// ─── Transcript ──────────────────────────────────────────────────────────────
// The console transcript is the product, so it goes to the
// caller's writer rather than through tracing.
struct Transcript<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> Transcript<'_, W> {
    fn line(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{text}").map_err(EvalError::Transcript)
    }

    fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// Tool output, verbatim, newline-terminated.
    fn block(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).map_err(EvalError::Transcript)?;
        if !text.ends_with('\n') {
            self.blank()?;
        }
        Ok(())
    }
}

// ─── ExperimentUseCase ───────────────────────────────────────────────────────
pub struct ExperimentUseCase<A: ExternalModelAdapter> {
    config:  ExperimentConfig,
    adapter: A,
}

impl<A: ExternalModelAdapter> ExperimentUseCase<A> {
    pub fn new(config: ExperimentConfig, adapter: A) -> Self {
        Self { config, adapter }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// Run every trial, writing the transcript to `out`.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<ExperimentSummary> {
        let cfg = &self.config;
        cfg.validate()?;

        let policy: Box<dyn PathPolicy> = if cfg.scratch {
            Box::new(ScratchPaths::new(&cfg.dataset)?)
        } else {
            Box::new(SiblingPaths::new(&cfg.dataset))
        };

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        let results_log = match &cfg.results_dir {
            Some(dir) => {
                let log = ResultsLog::create(dir)?;
                log.save_config(cfg)?;
                Some(log)
            }
            None => None,
        };

        tracing::info!(
            "Evaluating '{}' over {} trials (train fraction {})",
            cfg.dataset.display(),
            cfg.trials,
            cfg.train_fraction
        );

        let mut t   = Transcript { out };
        let mut agg = Aggregator::new();

        for trial in 1..=cfg.trials {
            t.line(format_args!("=== Trial {trial}/{} ===", cfg.trials))?;
            let result = self.run_trial(trial, policy.as_ref(), &mut rng, &mut t)?;

            if let Some(log) = &results_log {
                log.log(&result)?;
            }
            tracing::info!(
                "Trial {trial}: baseline MAE {:.4}, SVOR MAE {:.4}",
                result.baseline_mae,
                result.svor_mae
            );
            agg.push(result);
        }

        let summary = agg.summarize()?;
        print_summary(&summary, &mut t)?;

        if let Some(log) = &results_log {
            log.save_summary(&summary)?;
        }
        Ok(summary)
    }

    fn run_trial<W: Write>(
        &self,
        trial:  usize,
        policy: &dyn PathPolicy,
        rng:    &mut StdRng,
        t:      &mut Transcript<'_, W>,
    ) -> Result<TrialResult> {
        let cfg = &self.config;

        // ── Steps 1-2: fresh load, shuffle, split, write ─────────────────────
        let dataset = load_dataset(&cfg.dataset)?;
        let split   = splitter::split(dataset, cfg.train_fraction, rng);
        let paths   = policy.trial_paths(trial)?;
        splitter::write_split(&split, &paths)?;

        // ── Step 3: histograms ───────────────────────────────────────────────
        let train_hist = LabelHistogram::from_records(&split.train);
        let test_hist  = LabelHistogram::from_records(&split.test);

        t.line(format_args!("Training set size: {}", split.train.len()))?;
        t.block(&train_hist.to_string())?;
        t.line(format_args!("Testing set size: {}", split.test.len()))?;
        if !test_hist.is_empty() {
            t.block(&test_hist.to_string())?;
        }
        t.blank()?;

        // ── Step 4: majority-class baseline ──────────────────────────────────
        let base = baseline::evaluate_with(&train_hist, &split.test)?;

        t.line(format_args!(
            "Majority class (in training = {}) baseline performance:",
            base.majority
        ))?;
        t.line(format_args!("Accuracy (0-1): {}", base.accuracy))?;
        t.line(format_args!("Mean absolute error: {}", base.mae))?;
        t.blank()?;

        // ── Steps 5-7: the external model ────────────────────────────────────
        t.line("SVOR results:")?;
        let train_log = self.adapter.train(&paths.train, &paths.model)?;
        t.block(&train_log)?;

        let test_report = self.adapter.predict(&paths.test, &paths.model)?;
        t.block(&test_report)?;
        t.blank()?;
        let svor = report::parse_report(&test_report)?;

        // Training-set fit is diagnostic only; its accuracy is ignored
        let train_report = self.adapter.predict(&paths.train, &paths.model)?;
        let train_mae    = report::parse_mae(&train_report)?;

        // ── Step 8: comparison ───────────────────────────────────────────────
        t.line(compare_accuracy(svor.accuracy, base.accuracy))?;
        t.line(compare_mae(svor.mae, base.mae))?;
        t.blank()?;

        Ok(TrialResult {
            trial,
            train_size:        split.train.len(),
            test_size:         split.test.len(),
            majority_class:    base.majority.to_string(),
            baseline_accuracy: base.accuracy,
            baseline_mae:      base.mae,
            svor_accuracy:     svor.accuracy,
            svor_mae:          svor.mae,
            train_mae,
        })
    }
}

fn print_summary<W: Write>(s: &ExperimentSummary, t: &mut Transcript<'_, W>) -> Result<()> {
    t.line(format_args!(
        "Baseline average MAE: {}, stddev: {}",
        s.baseline_mae.mean, s.baseline_mae.std_dev
    ))?;
    t.line(format_args!(
        "SVOR average MAE: {}, stddev: {}",
        s.svor_mae.mean, s.svor_mae.std_dev
    ))?;
    t.line(format_args!(
        "SVOR average MAE on training set: {}, stddev = {}",
        s.train_mae.mean, s.train_mae.std_dev
    ))?;
    t.line(format_args!("Baseline average accuracy: {}", s.baseline_accuracy))?;
    t.line(format_args!("SVOR average accuracy: {}", s.svor_accuracy))?;
    t.blank()?;

    t.line(format_args!("{}\\\\", s.baseline_mae.latex()))?;
    t.line(s.svor_mae.latex())?;
    Ok(())
}

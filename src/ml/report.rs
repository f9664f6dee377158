// ============================================================
// Layer 5 — svm-predict Report Parser
// ============================================================
// svm-predict prints a human-readable summary such as:
//
//   Accuracy = 62.5% (5/8) (classification)
//   Mean absolute error = 1.375 (regression)
//
// (the ordinal build prints its accuracy as "62.5% )").
// We only rely on four literal markers:
//
//   "Accuracy = " ... "% )"           → accuracy, percent
//   "error = "    ... " (regression)" → mean absolute error
//
// A missing marker means the tool's output format changed or
// the tool failed without saying so: Parse error.

use crate::domain::trial::ModelReport;
use crate::error::{EvalError, Result};

const ACCURACY_START: &str = "Accuracy = ";
const ACCURACY_END:   &str = "% )";
const MAE_START:      &str = "error = ";
const MAE_END:        &str = " (regression)";

/// Text between the first `start` marker and the next `end`.
fn between<'a>(report: &'a str, start: &str, end: &str) -> Result<&'a str> {
    let from = report
        .find(start)
        .map(|i| i + start.len())
        .ok_or_else(|| EvalError::Parse(format!("report has no '{start}' marker")))?;

    let rest = &report[from..];
    let to   = rest
        .find(end)
        .ok_or_else(|| EvalError::Parse(format!("report has no '{end}' marker after '{start}'")))?;

    Ok(&rest[..to])
}

fn number(text: &str, what: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| EvalError::Parse(format!("{what} '{text}' is not a number")))
}

/// Accuracy as a fraction in [0, 1].
pub fn parse_accuracy(report: &str) -> Result<f64> {
    let pct = number(between(report, ACCURACY_START, ACCURACY_END)?, "accuracy")?;
    Ok(pct / 100.0)
}

pub fn parse_mae(report: &str) -> Result<f64> {
    number(between(report, MAE_START, MAE_END)?, "mean absolute error")
}

/// Both figures from one report.
pub fn parse_report(report: &str) -> Result<ModelReport> {
    Ok(ModelReport {
        accuracy: parse_accuracy(report)?,
        mae:      parse_mae(report)?,
    })
}

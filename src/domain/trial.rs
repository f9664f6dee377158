// ============================================================
// Layer 3 — Trial Result Types
// ============================================================
// Plain data produced by one train/test trial.

use serde::{Deserialize, Serialize};

/// Accuracy and mean absolute error scraped from an
/// `svm-predict` summary report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    /// Fraction in [0, 1] (the report prints a percentage)
    pub accuracy: f64,
    pub mae:      f64,
}

/// Everything measured in a single trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// 1-based trial number
    pub trial:             usize,
    pub train_size:        usize,
    pub test_size:         usize,
    pub majority_class:    String,
    pub baseline_accuracy: f64,
    pub baseline_mae:      f64,
    /// SVOR on the held-out test set
    pub svor_accuracy:     f64,
    pub svor_mae:          f64,
    /// SVOR predicting its own training set
    pub train_mae:         f64,
}

impl TrialResult {
    /// Column names for the per-trial CSV log, in field order.
    pub const CSV_HEADER: &'static str = "trial,train_size,test_size,majority_class,\
baseline_accuracy,baseline_mae,svor_accuracy,svor_mae,train_mae";

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6}",
            self.trial,
            self.train_size,
            self.test_size,
            self.majority_class,
            self.baseline_accuracy,
            self.baseline_mae,
            self.svor_accuracy,
            self.svor_mae,
            self.train_mae,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_matches_header_width() {
        let r = TrialResult {
            trial:             1,
            train_size:        8,
            test_size:         2,
            majority_class:    "3".into(),
            baseline_accuracy: 0.5,
            baseline_mae:      1.0,
            svor_accuracy:     0.625,
            svor_mae:          1.375,
            train_mae:         0.25,
        };
        let row = r.to_csv_row();
        assert_eq!(
            row.split(',').count(),
            TrialResult::CSV_HEADER.split(',').count()
        );
        assert!(row.starts_with("1,8,2,3,0.500000,1.000000"));
    }
}

// ============================================================
// Layer 5 — Majority-Class Baseline
// ============================================================
// The trivial lower bar every real model has to beat:
// always predict the most frequent training label.
//
//   accuracy = (# test labels equal to majority) / |test|
//
// "Equal" is label text equality, the same identity the
// histogram uses; the integer value only feeds the MAE.
//   MAE      = Σ |majority - label| / |test|
//
// Labels must be integers here; anything else is a Parse
// error. An empty testing set has no accuracy at all and is a
// Computation error.

use crate::domain::histogram::LabelHistogram;
use crate::domain::record::{Label, Record};
use crate::error::{EvalError, Result};

/// Baseline scores for one trial.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineResult {
    pub majority: Label,
    pub accuracy: f64,
    pub mae:      f64,
}

/// Score the majority class of `train` against `test`.
pub fn evaluate(train: &[Record], test: &[Record]) -> Result<BaselineResult> {
    let hist = LabelHistogram::from_records(train);
    evaluate_with(&hist, test)
}

/// Same as [`evaluate`] when the training histogram is already built.
pub fn evaluate_with(train_hist: &LabelHistogram, test: &[Record]) -> Result<BaselineResult> {
    let majority = train_hist
        .majority()
        .cloned()
        .ok_or_else(|| EvalError::Computation("training set is empty".into()))?;

    if test.is_empty() {
        return Err(EvalError::Computation(
            "testing set is empty; baseline accuracy and MAE are undefined".into(),
        ));
    }

    let predicted   = majority.value()?;
    let mut correct = 0usize;
    let mut error   = 0f64;

    for r in test {
        let actual = r.label().value()?;
        if r.label() == &majority {
            correct += 1;
        }
        error += predicted.abs_diff(actual) as f64;
    }

    let total = test.len() as f64;
    Ok(BaselineResult {
        majority,
        accuracy: correct as f64 / total,
        mae:      error / total,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn records(labels: &[&str]) -> Vec<Record> {
        labels
            .iter()
            .map(|l| Record::parse(&format!("{l} 1:0.5")).unwrap())
            .collect()
    }

    #[test]
    fn test_scores_majority_class() {
        let train = records(&["2", "2", "3", "1"]);
        let test  = records(&["2", "3", "5", "2"]);
        let r     = evaluate(&train, &test).unwrap();

        assert_eq!(r.majority.as_str(), "2");
        assert_eq!(r.accuracy, 0.5);
        // |2-2| + |2-3| + |2-5| + |2-2| = 4
        assert_eq!(r.mae, 1.0);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let train = records(&["3", "1", "3", "1"]);
        let test  = records(&["1"]);
        let r     = evaluate(&train, &test).unwrap();
        assert_eq!(r.majority.as_str(), "1");
        assert_eq!(r.accuracy, 1.0);
    }

    #[test]
    fn test_bounds() {
        let train = records(&["1", "1", "4"]);
        let test  = records(&["4", "4", "3", "2"]);
        let r     = evaluate(&train, &test).unwrap();
        assert!((0.0..=1.0).contains(&r.accuracy));
        assert!(r.mae >= 0.0);
        assert_eq!(r.accuracy, 0.0);
    }

    #[test]
    fn test_extreme_labels_do_not_overflow() {
        let train = records(&["9223372036854775807"]);
        let test  = records(&["-1", "-9223372036854775808"]);
        let r     = evaluate(&train, &test).unwrap();
        assert_eq!(r.accuracy, 0.0);
        let expected = (9223372036854775808u64 as f64 + u64::MAX as f64) / 2.0;
        assert_eq!(r.mae, expected);
    }

    #[test]
    fn test_accuracy_matches_label_text() {
        // "01" and "1" are different classes in the histogram, so
        // only the exact majority text counts as correct
        let train = records(&["1", "1", "01"]);
        let test  = records(&["01", "1"]);
        let r     = evaluate(&train, &test).unwrap();
        assert_eq!(r.majority.as_str(), "1");
        assert_eq!(r.accuracy, 0.5);
        assert_eq!(r.mae, 0.0);
    }

    #[test]
    fn test_empty_test_set_is_computation_error() {
        let err = evaluate(&records(&["1"]), &[]).unwrap_err();
        assert!(matches!(err, EvalError::Computation(_)));
    }

    #[test]
    fn test_non_integer_label_is_parse_error() {
        let err = evaluate(&records(&["1"]), &records(&["x"])).unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
    }
}

// ============================================================
// Layer 2 — DistributionUseCase
// ============================================================
// Describes the label column of a dataset file:
//
//   labels [1, 1, 2, 3, 3, 3]  →  "2.1667 $\pm$ 0.9832"
//
// Every label must be an integer.

use std::{
    io::Write,
    path::PathBuf,
};

use crate::data::loader::load_dataset;
use crate::error::{EvalError, Result};
use crate::infra::stats::Summary;

pub struct DistributionUseCase {
    dataset: PathBuf,
}

impl DistributionUseCase {
    pub fn new(dataset: impl Into<PathBuf>) -> Self {
        Self { dataset: dataset.into() }
    }

    /// Integer labels of every record, in file order.
    pub fn labels(&self) -> Result<Vec<i64>> {
        load_dataset(&self.dataset)?
            .iter()
            .map(|r| r.label().value())
            .collect()
    }

    pub fn summarize(&self) -> Result<Summary> {
        let values: Vec<f64> = self.labels()?.into_iter().map(|l| l as f64).collect();
        tracing::debug!("{} labels in '{}'", values.len(), self.dataset.display());
        Summary::of(&values)
    }

    /// Print the LaTeX-ready line to `out`.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<Summary> {
        let summary = self.summarize()?;
        writeln!(out, "{}", summary.latex()).map_err(EvalError::Transcript)?;
        Ok(summary)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_reports_mean_and_std_dev() {
        let f = dataset("1 a\n1 b\n2 c\n3 d\n3 e\n3 f\n");
        let mut out = Vec::new();
        DistributionUseCase::new(f.path()).execute(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2.1667 $\\pm$ 0.9832\n");
    }

    #[test]
    fn test_non_integer_label_is_parse_error() {
        let f   = dataset("1 a\nB b\n");
        let err = DistributionUseCase::new(f.path()).summarize().unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DistributionUseCase::new(dir.path().join("missing"))
            .summarize()
            .unwrap_err();
        assert!(matches!(err, EvalError::Input(_)));
    }
}

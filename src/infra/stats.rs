// ============================================================
// Layer 6 — Descriptive Statistics
// ============================================================
// mean      = Σx / n
// std_dev   = sqrt( Σ(x - mean)² / (n - 1) )   (Bessel-corrected)
//
// The sample standard deviation needs at least two values.

use std::fmt;

use serde::Serialize;

use crate::error::{EvalError, Result};

pub fn mean(xs: &[f64]) -> Result<f64> {
    if xs.is_empty() {
        return Err(EvalError::Computation("mean of an empty series".into()));
    }
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

pub fn sample_std_dev(xs: &[f64]) -> Result<f64> {
    if xs.len() < 2 {
        return Err(EvalError::Computation(format!(
            "sample standard deviation needs at least 2 values, got {}",
            xs.len()
        )));
    }
    let m   = mean(xs)?;
    let ss: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    Ok((ss / (xs.len() - 1) as f64).sqrt())
}

/// Mean and sample standard deviation of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean:    f64,
    pub std_dev: f64,
    pub count:   usize,
}

impl Summary {
    pub fn of(xs: &[f64]) -> Result<Self> {
        Ok(Self {
            mean:    mean(xs)?,
            std_dev: sample_std_dev(xs)?,
            count:   xs.len(),
        })
    }

    /// `mean $\pm$ std`, both to 4 decimal places, for pasting
    /// into a LaTeX table.
    pub fn latex(&self) -> String {
        format!("{:.4} $\\pm$ {:.4}", self.mean, self.std_dev)
    }
}

/// Full precision, `mean ± std`.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.mean, self.std_dev)
    }
}

//! Repeated random train/test evaluation of an external ordinal SVM
//! (`svm-train` / `svm-predict`) against a majority-class baseline.
//!
//! Layers, outermost first:
//!
//! 1. [`cli`]         — argument parsing and process entry points
//! 2. [`application`] — the experiment loop and the label report
//! 3. [`domain`]      — records, labels, histograms, trial results, traits
//! 4. [`data`]        — loading, splitting and placing dataset files
//! 5. [`ml`]          — baseline scoring, the SVM adapter, report parsing
//! 6. [`infra`]       — statistics and the optional results log

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ml;

pub use error::{EvalError, Result};

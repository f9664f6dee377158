// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting helpers used by the use cases:
//
//   stats.rs   — mean and Bessel-corrected standard deviation,
//                plus the LaTeX "mean $\pm$ std" formatting
//
//   results.rs — optional results directory: the run config as
//                JSON and one CSV row per trial

/// Mean / sample standard deviation
pub mod stats;

/// Run config + per-trial CSV log
pub mod results;

// ============================================================
// Layer 5 — Model Evaluation Layer
// ============================================================
// Three pieces, one per kind of "model" in the experiment:
//
//   baseline.rs — the majority-class predictor, computed here
//   svm_tool.rs — the ordinal SVM, run as external processes
//   report.rs   — scrapes accuracy / MAE from svm-predict

/// Majority-class baseline scoring
pub mod baseline;

/// svm-train / svm-predict subprocess adapter
pub mod svm_tool;

/// Parser for svm-predict summary reports
pub mod report;

// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that touches dataset files:
//
//   dataset file
//       │
//       ▼
//   loader     → reads lines, skips blanks, keeps text verbatim
//       │
//       ▼
//   splitter   → shuffles, cuts at max(1, round(n * p)),
//       │        writes <train> and <test>
//       ▼
//   paths      → decides where <train>/<test>/<model> live

/// Reads a dataset file into Records
pub mod loader;

/// Shuffles and splits data into train/test sets
pub mod splitter;

/// Per-trial file locations
pub mod paths;

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers. No statistics math, no
// subprocess handling and no file formats live here; only
// the order in which things happen and what gets printed.

// The repeated train/test evaluation
pub mod experiment_use_case;

// The label-distribution report
pub mod distribution_use_case;

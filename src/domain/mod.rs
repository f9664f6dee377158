// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs and traits describing the experiment:
// records and labels, label histograms, per-trial results,
// and the two seams (model adapter, path policy).
//
// Rules for this layer:
//   - NO subprocesses
//   - NO file I/O
//   - NO printing

// A labelled line of a dataset file
pub mod record;

// Label → count, with majority-class selection
pub mod histogram;

// What one trial measures
pub mod trial;

// Core abstractions (traits) that other layers implement
pub mod traits;

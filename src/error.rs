// ============================================================
// Error Taxonomy
// ============================================================
// Every failure in the evaluation pipeline is fatal, but the
// kind of failure still matters for the diagnostic message:
//
//   Config       — bad CLI values (fraction, trial count)
//   Input        — dataset file missing or empty
//   Parse        — non-integer label, or a tool report that
//                  no longer carries the expected markers
//   ExternalTool — svm-train / svm-predict missing or failing
//   Computation  — statistics over an empty or too-short series
//
// The binaries wrap these in anyhow at the very top.

use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("external tool '{tool}' failed: {reason}")]
    ExternalTool { tool: String, reason: String },

    #[error("computation error: {0}")]
    Computation(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write transcript: {0}")]
    Transcript(#[source] std::io::Error),
}

impl EvalError {
    /// Attach a path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Short category name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_)           => "config",
            Self::Input(_)            => "input",
            Self::Parse(_)            => "parse",
            Self::ExternalTool { .. } => "external-tool",
            Self::Computation(_)      => "computation",
            Self::Io { .. }           => "io",
            Self::Json(_)             => "json",
            Self::Transcript(_)       => "transcript",
        }
    }
}

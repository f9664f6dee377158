// ============================================================
// Layer 5 — External Ordinal SVM (svm-train / svm-predict)
// ============================================================
// The learning algorithm is not ours: a libsvm build with an
// ordinal-regression mode does the work. We only shell out:
//
//   svm-train   -s 5 -t 0 <train-file> <model-file>
//   svm-predict <data-file> <model-file> <null-sink>
//
//   -s 5  ordinal regression (SVOR)
//   -t 0  linear kernel
//
// Calls are blocking and have no timeout. A missing binary or
// a non-zero exit status is an ExternalTool error; nothing is
// retried.

use std::{
    ffi::OsStr,
    io,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use crate::domain::traits::ExternalModelAdapter;
use crate::error::{EvalError, Result};

pub const TRAIN_BIN:   &str = "svm-train";
pub const PREDICT_BIN: &str = "svm-predict";

/// Fixed hyper-parameters passed to svm-train.
pub const TRAIN_FLAGS: [&str; 4] = ["-s", "5", "-t", "0"];

/// Where svm-predict writes per-record predictions we never read.
pub fn null_sink() -> &'static str {
    if cfg!(windows) { "NUL" } else { "/dev/null" }
}

/// Runs the svm-train / svm-predict executables found in `tool_dir`.
#[derive(Debug, Clone)]
pub struct SvmTool {
    tool_dir: PathBuf,
}

impl SvmTool {
    /// `tool_dir` is joined with the executable names; use `.` for
    /// binaries sitting in the working directory, or an empty path
    /// to let the OS search PATH.
    pub fn new(tool_dir: impl Into<PathBuf>) -> Self {
        Self { tool_dir: tool_dir.into() }
    }

    fn executable(&self, name: &str) -> PathBuf {
        self.tool_dir.join(name)
    }

    fn run<I, S>(&self, name: &str, args: I) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let exe = self.executable(name);
        let mut cmd = Command::new(&exe);
        cmd.args(args);
        tracing::debug!("Running {:?}", cmd);

        let output = cmd.output().map_err(|e| EvalError::ExternalTool {
            tool:   name.to_string(),
            reason: match e.kind() {
                io::ErrorKind::NotFound => format!("'{}' not found", exe.display()),
                _ => format!("could not start '{}': {e}", exe.display()),
            },
        })?;

        if !output.status.success() {
            return Err(EvalError::ExternalTool {
                tool:   name.to_string(),
                reason: format!(
                    "exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(output)
    }
}

impl ExternalModelAdapter for SvmTool {
    fn train(&self, train_path: &Path, model_path: &Path) -> Result<String> {
        let mut args: Vec<&OsStr> = TRAIN_FLAGS.iter().map(|f| OsStr::new(*f)).collect();
        args.push(train_path.as_os_str());
        args.push(model_path.as_os_str());

        let out = self.run(TRAIN_BIN, args)?;

        // Combined log, shown to the user but never parsed
        let mut log = String::from_utf8_lossy(&out.stdout).into_owned();
        log.push_str(&String::from_utf8_lossy(&out.stderr));
        Ok(log)
    }

    fn predict(&self, data_path: &Path, model_path: &Path) -> Result<String> {
        let out = self.run(
            PREDICT_BIN,
            [data_path.as_os_str(), model_path.as_os_str(), OsStr::new(null_sink())],
        )?;
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

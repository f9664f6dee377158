// ============================================================
// Layer 3 — Record and Label Domain Types
// ============================================================
// A dataset file is line-oriented:
//
//   <label> <payload...>
//
// e.g. a libsvm-style line
//
//   3 1:0.25 7:1.0 12:0.5
//
// The label is the first whitespace-delimited token and is an
// ordinal class ("1" < "2" < "3"). The payload is opaque: we
// never look at it, and the whole line is written back out
// byte-for-byte when a split is saved. Lines are raw bytes: a
// trailing '\r' or a non-UTF-8 payload survives untouched.
// Only the label token has to be text.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

/// An ordinal class label, kept as the original text token.
///
/// Labels compare numerically when both sides are integers, so
/// "2" sorts before "10". Text order breaks ties ("01" vs "1")
/// and non-numeric labels sort before numeric ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label as an ordinal integer.
    pub fn value(&self) -> Result<i64> {
        self.0.parse::<i64>().map_err(|_| {
            EvalError::Parse(format!("label '{}' is not an integer", self.0))
        })
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.0.parse::<i64>().ok();
        let rhs = other.0.parse::<i64>().ok();
        lhs.cmp(&rhs).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// One line of a dataset file, without its '\n'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line:  Vec<u8>,
    label: Label,
}

impl Record {
    /// Parse a raw line. Returns `None` for blank lines, which
    /// carry no label and are not records.
    pub fn parse(line: impl AsRef<[u8]>) -> Option<Self> {
        let line  = line.as_ref();
        let token = line
            .split(|b| b.is_ascii_whitespace())
            .find(|t| !t.is_empty())?;
        Some(Self {
            label: Label::new(String::from_utf8_lossy(token)),
            line:  line.to_vec(),
        })
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The original line, exactly as read.
    pub fn line(&self) -> &[u8] {
        &self.line
    }
}

/// An ordered sequence of records loaded from one file.
pub type Dataset = Vec<Record>;

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_line_verbatim() {
        let r = Record::parse("3 1:0.25  7:1.0").unwrap();
        assert_eq!(r.label().as_str(), "3");
        assert_eq!(r.line(), b"3 1:0.25  7:1.0");
    }

    #[test]
    fn test_carriage_return_and_binary_payload_survive() {
        let r = Record::parse(b"2 name:\xe9t\xe9\r").unwrap();
        assert_eq!(r.label().value().unwrap(), 2);
        assert_eq!(r.line(), b"2 name:\xe9t\xe9\r");

        let r = Record::parse(b"4\r").unwrap();
        assert_eq!(r.label().as_str(), "4");
    }

    #[test]
    fn test_blank_line_is_not_a_record() {
        assert!(Record::parse("").is_none());
        assert!(Record::parse("   \t").is_none());
        assert!(Record::parse("\r").is_none());
    }

    #[test]
    fn test_label_only_line() {
        let r = Record::parse("5").unwrap();
        assert_eq!(r.label().value().unwrap(), 5);
    }

    #[test]
    fn test_numeric_ordering() {
        let mut labels = vec![Label::new("10"), Label::new("2"), Label::new("-1")];
        labels.sort();
        let texts: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(texts, vec!["-1", "2", "10"]);
    }

    #[test]
    fn test_non_integer_label_is_parse_error() {
        let err = Label::new("B").value().unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
    }
}

// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Randomly shuffles a dataset and splits it into two sets:
//   - Training set: handed to svm-train
//   - Testing set:  scored by both the baseline and the model
//
// Split size:
//   k = max(1, round(n * p))
//
// so the training set is never empty, even for tiny datasets
// or tiny fractions. When p rounds up to the whole dataset the
// testing set is empty; scoring it later is a Computation
// error, never a NaN.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.

use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use rand::{seq::SliceRandom, Rng};

use crate::domain::record::{Dataset, Record};
use crate::domain::traits::TrialPaths;
use crate::error::{EvalError, Result};

/// A shuffled dataset partitioned at the split index.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Vec<Record>,
    pub test:  Vec<Record>,
}

/// Parse a train fraction given on the command line.
///
/// Accepts any finite number in (0, 1].
pub fn parse_fraction(text: &str) -> Result<f64> {
    let p: f64 = text.trim().parse().map_err(|_| {
        EvalError::Config(format!("train fraction '{text}' is not a number"))
    })?;

    if !p.is_finite() {
        return Err(EvalError::Config(format!(
            "train fraction '{text}' is not finite"
        )));
    }
    if p <= 0.0 || p > 1.0 {
        return Err(EvalError::Config(format!(
            "train fraction {p} must be in (0, 1]"
        )));
    }
    Ok(p)
}

/// Number of training records for a dataset of `n` records.
pub fn train_len(n: usize, fraction: f64) -> usize {
    let k = ((n as f64) * fraction).round() as usize;
    k.max(1).min(n.max(1))
}

/// Shuffle `records` and split into (train, test).
pub fn split<R: Rng + ?Sized>(mut records: Dataset, fraction: f64, rng: &mut R) -> Split {
    records.shuffle(rng);

    let split_at = train_len(records.len(), fraction).min(records.len());

    // split_off(n) leaves [0..n) in place and returns [n..len)
    let test = records.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} testing",
        records.len(),
        test.len()
    );

    Split { train: records, test }
}

/// Write both halves of a split to their files, overwriting
/// anything already there.
pub fn write_split(split: &Split, paths: &TrialPaths) -> Result<()> {
    write_records(&split.train, &paths.train)?;
    write_records(&split.test, &paths.test)?;
    Ok(())
}

/// One record per line, exactly as it was read.
pub fn write_records(records: &[Record], path: &Path) -> Result<()> {
    let file = fs::File::create(path).map_err(|e| EvalError::io(path, e))?;
    let mut w = BufWriter::new(file);
    for r in records {
        w.write_all(r.line())
            .and_then(|_| w.write_all(b"\n"))
            .map_err(|e| EvalError::io(path, e))?;
    }
    w.flush().map_err(|e| EvalError::io(path, e))?;
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn dataset(n: usize) -> Dataset {
        (0..n)
            .map(|i| Record::parse(&format!("{} {}:1", i % 3 + 1, i)).unwrap())
            .collect()
    }

    fn sorted_lines(records: &[Record]) -> Vec<Vec<u8>> {
        let mut v: Vec<Vec<u8>> = records.iter().map(|r| r.line().to_vec()).collect();
        v.sort();
        v
    }

    #[test]
    fn test_train_len() {
        assert_eq!(train_len(100, 0.8), 80);
        assert_eq!(train_len(10, 0.25), 3); // 2.5 rounds away from zero
        assert_eq!(train_len(10, 0.01), 1); // never empty
        assert_eq!(train_len(7, 1.0), 7);
    }

    #[test]
    fn test_split_is_a_partition() {
        let original = dataset(37);
        let mut rng  = StdRng::seed_from_u64(7);
        let s        = split(original.clone(), 0.6, &mut rng);

        assert_eq!(s.train.len(), 22);
        assert_eq!(s.train.len() + s.test.len(), 37);

        let mut joined = s.train.clone();
        joined.extend(s.test.iter().cloned());
        assert_eq!(sorted_lines(&joined), sorted_lines(&original));
    }

    #[test]
    fn test_train_size_does_not_depend_on_seed() {
        let a = split(dataset(50), 0.3, &mut StdRng::seed_from_u64(1));
        let b = split(dataset(50), 0.3, &mut StdRng::seed_from_u64(2));
        assert_eq!(a.train.len(), b.train.len());
    }

    #[test]
    fn test_full_fraction_leaves_test_empty() {
        let s = split(dataset(5), 1.0, &mut StdRng::seed_from_u64(3));
        assert_eq!(s.train.len(), 5);
        assert!(s.test.is_empty());
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_fraction("0.75").unwrap(), 0.75);
        assert_eq!(parse_fraction("1").unwrap(), 1.0);
        for bad in ["abc", "NaN", "inf", "0", "-0.5", "1.5", ""] {
            assert!(
                matches!(parse_fraction(bad), Err(EvalError::Config(_))),
                "expected config error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_write_split_round_trips_lines() {
        let dir   = tempfile::tempdir().unwrap();
        let paths = TrialPaths {
            train: dir.path().join("d.train"),
            test:  dir.path().join("d.test"),
            model: dir.path().join("d.model"),
        };
        // pre-existing content must be replaced
        fs::write(&paths.train, "stale\nstale\nstale\n").unwrap();

        let s = split(dataset(4), 0.5, &mut StdRng::seed_from_u64(9));
        write_split(&s, &paths).unwrap();

        let train = fs::read_to_string(&paths.train).unwrap();
        let test  = fs::read_to_string(&paths.test).unwrap();
        assert_eq!(train.lines().count(), 2);
        assert_eq!(test.lines().count(), 2);
        assert!(!train.contains("stale"));
        assert_eq!(train.lines().next().unwrap().as_bytes(), s.train[0].line());
    }

    #[test]
    fn test_write_split_keeps_crlf_and_raw_bytes() {
        let dir   = tempfile::tempdir().unwrap();
        let paths = TrialPaths {
            train: dir.path().join("d.train"),
            test:  dir.path().join("d.test"),
            model: dir.path().join("d.model"),
        };
        let raw: [&[u8]; 2] = [b"1 1:1\r", b"2 name:\xe9t\xe9\r"];
        let records: Dataset = raw
            .iter()
            .map(|l| Record::parse(l).unwrap())
            .collect();

        let s = split(records, 0.5, &mut StdRng::seed_from_u64(5));
        write_split(&s, &paths).unwrap();

        let mut written = fs::read(&paths.train).unwrap();
        written.extend(fs::read(&paths.test).unwrap());
        let mut lines: Vec<&[u8]> = written.split_inclusive(|&b| b == b'\n').collect();
        lines.sort();
        let expected: [&[u8]; 2] = [b"1 1:1\r\n", b"2 name:\xe9t\xe9\r\n"];
        assert_eq!(lines, expected);
    }
}

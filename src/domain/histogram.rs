// ============================================================
// Layer 3 — Label Histogram
// ============================================================
// Counts how often each label occurs in a subset. Built once
// for the training half and once for the testing half of every
// trial; the training histogram also picks the majority class.
//
// Backed by a BTreeMap so iteration is always in ascending
// label order, which is the order the transcript prints in.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::record::{Label, Record};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelHistogram {
    counts: BTreeMap<Label, usize>,
    total:  usize,
}

impl LabelHistogram {
    pub fn from_records(records: &[Record]) -> Self {
        let mut hist = Self::default();
        for r in records {
            hist.add(r.label().clone());
        }
        hist
    }

    pub fn add(&mut self, label: Label) {
        *self.counts.entry(label).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// (label, count) pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, usize)> {
        self.counts.iter().map(|(l, c)| (l, *c))
    }

    /// The most frequent label.
    ///
    /// Ties go to the smallest label: candidates are ranked by
    /// (count descending, label ascending) and the first wins.
    pub fn majority(&self) -> Option<&Label> {
        // BTreeMap iterates ascending, so keeping the first
        // strictly-greater count gives the smallest tied label.
        let mut best: Option<(&Label, usize)> = None;
        for (label, count) in self.iter() {
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((label, count)),
            }
        }
        best.map(|(l, _)| l)
    }
}

/// One line per label: `  <label>: <count> (<fraction>)`
impl fmt::Display for LabelHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, count) in self.iter() {
            let fraction = count as f64 / self.total as f64;
            writeln!(f, "  {label:>4}: {count} ({fraction:.4})")?;
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn records(labels: &[&str]) -> Vec<Record> {
        labels
            .iter()
            .map(|l| Record::parse(&format!("{l} 1:1")).unwrap())
            .collect()
    }

    #[test]
    fn test_counts() {
        let h = LabelHistogram::from_records(&records(&["1", "2", "2", "3"]));
        let counts: Vec<(&str, usize)> = h.iter().map(|(l, c)| (l.as_str(), c)).collect();
        assert_eq!(counts, vec![("1", 1), ("2", 2), ("3", 1)]);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn test_majority_picks_highest_count() {
        let h = LabelHistogram::from_records(&records(&["1", "3", "3", "2"]));
        assert_eq!(h.majority().unwrap().as_str(), "3");
    }

    #[test]
    fn test_majority_tie_goes_to_smallest_label() {
        // 4 and 2 both occur twice, regardless of insertion order
        let h = LabelHistogram::from_records(&records(&["4", "2", "4", "2", "5"]));
        assert_eq!(h.majority().unwrap().as_str(), "2");
    }

    #[test]
    fn test_empty_has_no_majority() {
        assert!(LabelHistogram::default().majority().is_none());
    }

    #[test]
    fn test_display_is_sorted_ascending() {
        let h = LabelHistogram::from_records(&records(&["10", "2", "2", "1"]));
        let text = h.to_string();
        let order: Vec<&str> = text
            .lines()
            .map(|l| l.split(':').next().unwrap().trim())
            .collect();
        assert_eq!(order, vec!["1", "2", "10"]);
        assert!(text.contains("2: 2 (0.5000)"));
    }
}

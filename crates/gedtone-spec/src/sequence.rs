//! Extracted month sequences and their per-month histogram.

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// Months in the order they were found in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthSequence(Vec<Month>);

impl MonthSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a month.
    pub fn push(&mut self, month: Month) {
        self.0.push(month);
    }

    /// Number of months.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no months were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates months in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Month> {
        self.0.iter()
    }

    /// Borrows the underlying slice.
    pub fn as_slice(&self) -> &[Month] {
        &self.0
    }

    /// Consumes the sequence, returning the months.
    pub fn into_vec(self) -> Vec<Month> {
        self.0
    }

    /// Per-month occurrence counts.
    pub fn counts(&self) -> MonthCounts {
        MonthCounts::from(self)
    }
}

impl From<Vec<Month>> for MonthSequence {
    fn from(months: Vec<Month>) -> Self {
        Self(months)
    }
}

impl FromIterator<Month> for MonthSequence {
    fn from_iter<I: IntoIterator<Item = Month>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MonthSequence {
    type Item = &'a Month;
    type IntoIter = std::slice::Iter<'a, Month>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Occurrence count for each of the twelve months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthCounts {
    counts: [usize; 12],
}

impl MonthCounts {
    /// Creates an all-zero histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for a month.
    pub fn add(&mut self, month: Month) {
        self.counts[month.index()] += 1;
    }

    /// Count for a month.
    pub fn get(&self, month: Month) -> usize {
        self.counts[month.index()]
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single-month count (0 when empty).
    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// All twelve months in calendar order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Month, usize)> + '_ {
        Month::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    /// Months with at least one occurrence, in calendar order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Month, usize)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }
}

impl From<&MonthSequence> for MonthCounts {
    fn from(sequence: &MonthSequence) -> Self {
        let mut counts = MonthCounts::new();
        for &month in sequence {
            counts.add(month);
        }
        counts
    }
}

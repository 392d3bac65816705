//! Arranges tone units into a play order.
//!
//! Chronological order walks the calendar and tiles one unit per month as many
//! times as that month occurred. Shuffled order permutes the raw month
//! sequence and emits one unit per occurrence.

use std::collections::HashMap;

use gedtone_spec::{Month, MonthCounts, MonthSequence, PlayPolicy, SynthesisParams};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::tone::tone_unit;

/// A run of identical tone units for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Month whose tone fills this segment.
    pub month: Month,
    /// Number of consecutive tone units.
    pub repeats: usize,
    /// The tiled samples (`repeats` copies of the unit).
    pub samples: Vec<f64>,
}

impl Segment {
    /// Tiles `unit` `repeats` times.
    pub fn tiled(month: Month, unit: &[f64], repeats: usize) -> Self {
        Self {
            month,
            repeats,
            samples: unit.repeat(repeats),
        }
    }

    /// Length in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the segment holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Builds the ordered segment list for a month sequence.
///
/// # Arguments
/// * `months` - Months in source order (used by shuffled order)
/// * `counts` - Per-month counts (used by chronological order)
/// * `params` - Synthesis parameters
/// * `policy` - Play order
/// * `rng` - Random source for shuffled order
///
/// # Returns
/// Segments in play order; empty when there are no months.
pub fn sequence<R: Rng + ?Sized>(
    months: &MonthSequence,
    counts: &MonthCounts,
    params: &SynthesisParams,
    policy: PlayPolicy,
    rng: &mut R,
) -> Vec<Segment> {
    let segments = match policy {
        PlayPolicy::Chronological => sequence_chronological(counts, params),
        PlayPolicy::Shuffled => sequence_shuffled(months, params, rng),
    };
    debug!(%policy, segments = segments.len(), "sequenced tone units");
    segments
}

/// One tiled block per month with a nonzero count, in calendar order.
pub fn sequence_chronological(counts: &MonthCounts, params: &SynthesisParams) -> Vec<Segment> {
    counts
        .nonzero()
        .map(|(month, count)| Segment::tiled(month, &tone_unit(month, params), count))
        .collect()
}

/// One unit per month occurrence, in a uniformly random order.
pub fn sequence_shuffled<R: Rng + ?Sized>(
    months: &MonthSequence,
    params: &SynthesisParams,
    rng: &mut R,
) -> Vec<Segment> {
    let mut order = months.as_slice().to_vec();
    order.shuffle(rng);

    // Units for the same month are identical; synthesize each month once.
    let mut units: HashMap<Month, Vec<f64>> = HashMap::new();
    order
        .into_iter()
        .map(|month| {
            let unit = units
                .entry(month)
                .or_insert_with(|| tone_unit(month, params));
            Segment::tiled(month, unit, 1)
        })
        .collect()
}

/// Expands segments into the month heard at each tone unit, in play order.
pub fn segments_months(segments: &[Segment]) -> Vec<Month> {
    segments
        .iter()
        .flat_map(|s| std::iter::repeat(s.month).take(s.repeats))
        .collect()
}

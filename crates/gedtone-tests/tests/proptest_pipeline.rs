//! Property-based pipeline tests for gedtone using proptest.
//!
//! These tests check the extraction, sequencing, synthesis and assembly
//! invariants over arbitrary inputs.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gedtone-tests --test proptest_pipeline
//! ```

use proptest::prelude::*;

use gedtone_backend_audio::mixer::{assemble, concatenate};
use gedtone_backend_audio::rng::create_rng;
use gedtone_backend_audio::sequencer::{segments_months, sequence, Segment};
use gedtone_backend_audio::tone::{synthesize_tone, tone_unit};
use gedtone_spec::extract::split_lines;
use gedtone_spec::{extract_months, Month, MonthSequence, PlayPolicy, SynthesisParams, DATE_MARKER};

/// Small parameters so sequencing properties stay fast.
fn small_params() -> SynthesisParams {
    SynthesisParams::new(0.02, 0.5).with_sample_rate(4000)
}

// ============================================================================
// 1. Extraction
// ============================================================================

/// Lines that look like dates, sometimes malformed, plus arbitrary noise.
fn gedcom_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-3] DATE [0-9]{0,2} ?(JAN|feb|Mar|APR|MAYO|JUNE|jul|AUG|XYZ|SEP|oct|NOV|DEC)? ?[0-9]{0,4}",
        "[0-3] (NAME|PLAC|NOTE|BIRT) [A-Za-z ]{0,20}",
        "[ -~]{0,40}",
    ]
}

fn gedcom_text() -> impl Strategy<Value = String> {
    prop::collection::vec(gedcom_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

fn month_sequence() -> impl Strategy<Value = MonthSequence> {
    prop::collection::vec(1u8..=12, 0..12).prop_map(|numbers| {
        numbers
            .into_iter()
            .filter_map(Month::from_number)
            .collect()
    })
}

proptest! {
    /// At most one month per DATE line.
    #[test]
    fn extraction_bounded_by_date_lines(text in gedcom_text()) {
        let date_lines = split_lines(&text).filter(|l| l.contains(DATE_MARKER)).count();
        prop_assert!(extract_months(&text).len() <= date_lines);
    }

    /// Histogram totals always match the sequence length.
    #[test]
    fn counts_total_matches_length(text in gedcom_text()) {
        let months = extract_months(&text);
        prop_assert_eq!(months.counts().total(), months.len());
    }

    /// Arbitrary bytes never fail extraction.
    #[test]
    fn extraction_accepts_any_bytes(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let months = gedtone_spec::extract_months_from_bytes(&bytes);
        prop_assert!(months.len() <= bytes.len());
    }
}

// ============================================================================
// 2. Sequencing
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Chronological output is each month's unit repeated count times, ascending.
    #[test]
    fn chronological_tiles_in_month_order(months in month_sequence(), seed in any::<u32>()) {
        let params = small_params();
        let counts = months.counts();
        let segments = sequence(&months, &counts, &params, PlayPolicy::Chronological, &mut create_rng(seed));

        let mut expected = Vec::new();
        for (month, count) in counts.iter() {
            for _ in 0..count {
                expected.extend(tone_unit(month, &params));
            }
        }
        prop_assert_eq!(concatenate(&segments), expected);

        let played = segments_months(&segments);
        prop_assert!(played.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(segments.iter().all(|s| s.repeats > 0));
    }

    /// Shuffled output is a permutation of the extracted months.
    #[test]
    fn shuffled_preserves_multiset(months in month_sequence(), seed in any::<u32>()) {
        let params = small_params();
        let segments = sequence(&months, &months.counts(), &params, PlayPolicy::Shuffled, &mut create_rng(seed));

        prop_assert_eq!(segments.len(), months.len());
        let mut played = segments_months(&segments);
        let mut source = months.into_vec();
        played.sort();
        source.sort();
        prop_assert_eq!(played, source);
    }
}

// ============================================================================
// 3. Synthesis
// ============================================================================

proptest! {
    /// Tone length is floor(sample_rate * duration).
    #[test]
    fn tone_length_is_floor(sample_rate in 1000u32..48000, duration in 0.0f64..0.3) {
        let tone = synthesize_tone(440.0, duration, sample_rate, 0.5);
        prop_assert_eq!(tone.len(), (sample_rate as f64 * duration).floor() as usize);
        prop_assert!(tone.iter().all(|s| s.abs() <= 0.5 + 1e-12));
    }

    /// Tones longer than both fades start and end at zero.
    #[test]
    fn faded_tone_edges_are_silent(sample_rate in 1000u32..48000, duration in 0.021f64..0.3) {
        let tone = synthesize_tone(523.25, duration, sample_rate, 1.0);
        let fade = (sample_rate as f64 * 0.01).floor() as usize;
        prop_assume!(tone.len() > 2 * fade);
        prop_assert_eq!(tone[0], 0.0);
        prop_assert_eq!(tone[tone.len() - 1], 0.0);
    }
}

// ============================================================================
// 4. Assembly
// ============================================================================

fn segment_strategy() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(prop::collection::vec(-1.0f64..1.0, 0..64), 0..6).prop_map(|chunks| {
        chunks
            .into_iter()
            .map(|samples| Segment {
                month: Month::Jan,
                repeats: 1,
                samples,
            })
            .collect()
    })
}

proptest! {
    /// Non-silent audio is normalized to exactly full scale.
    #[test]
    fn assembled_peak_is_full_scale(segments in segment_strategy()) {
        let total: usize = segments.iter().map(Segment::len).sum();
        let source_peak = segments
            .iter()
            .flat_map(|s| s.samples.iter())
            .fold(0.0f64, |a, s| a.max(s.abs()));

        match assemble(&segments, 8000) {
            None => prop_assert_eq!(total, 0),
            Some(buffer) => {
                prop_assert_eq!(buffer.len(), total);
                if source_peak > 0.0 {
                    prop_assert_eq!(buffer.peak(), 32767);
                } else {
                    prop_assert_eq!(buffer.peak(), 0);
                }
            }
        }
    }
}

#[test]
fn empty_sequence_produces_no_audio() {
    let months = MonthSequence::new();
    for policy in [PlayPolicy::Chronological, PlayPolicy::Shuffled] {
        let segments = sequence(&months, &months.counts(), &small_params(), policy, &mut create_rng(0));
        assert!(segments.is_empty());
        assert!(assemble(&segments, 4000).is_none());
    }
}

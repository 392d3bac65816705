//! Sine tone synthesis with linear fade shaping.
//!
//! Each note is a plain sine at the month's frequency. A short linear fade at
//! both ends removes the click a hard start or stop would produce.

use std::f64::consts::PI;

use gedtone_spec::{Month, SynthesisParams, FADE_SECONDS};

/// Synthesizes a faded sine tone.
///
/// Produces `floor(sample_rate * duration)` samples evenly spaced over
/// `[0, duration)`, each `amplitude * sin(2π * freq * t)`. Zero-length
/// results are returned as an empty vector.
///
/// # Arguments
/// * `freq` - Frequency in Hz
/// * `duration` - Length in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak amplitude
pub fn synthesize_tone(freq: f64, duration: f64, sample_rate: u32, amplitude: f64) -> Vec<f64> {
    let num_samples = sample_count(sample_rate, duration);
    if num_samples == 0 {
        return Vec::new();
    }

    let step = duration / num_samples as f64;
    let mut wave: Vec<f64> = (0..num_samples)
        .map(|i| {
            let t = i as f64 * step;
            amplitude * (2.0 * PI * freq * t).sin()
        })
        .collect();

    let fade_len = (sample_rate as f64 * FADE_SECONDS).floor() as usize;
    apply_fade(&mut wave, fade_len);
    wave
}

/// Applies a linear fade-in and fade-out of `fade_len` samples each.
///
/// The ramps include both endpoints, so the first and last samples become
/// zero. Skipped when the buffer is not longer than both ramps together.
pub fn apply_fade(samples: &mut [f64], fade_len: usize) {
    if fade_len == 0 || samples.len() <= 2 * fade_len {
        return;
    }

    let len = samples.len();
    for i in 0..fade_len {
        let gain = ramp(i, fade_len);
        samples[i] *= gain;
        samples[len - 1 - i] *= gain;
    }
}

/// Value `i` of an inclusive linear ramp from 0 to 1 over `n` points.
fn ramp(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

/// Creates `round(sample_rate * seconds)` samples of silence.
pub fn silence(sample_rate: u32, seconds: f64) -> Vec<f64> {
    let len = (sample_rate as f64 * seconds).round().max(0.0) as usize;
    vec![0.0; len]
}

/// Synthesizes one tone unit: the month's note followed by the inter-note silence.
pub fn tone_unit(month: Month, params: &SynthesisParams) -> Vec<f64> {
    let mut unit = synthesize_tone(
        month.frequency(),
        params.note_duration,
        params.sample_rate,
        params.amplitude,
    );
    unit.extend(silence(params.sample_rate, params.silence_seconds));
    unit
}

fn sample_count(sample_rate: u32, duration: f64) -> usize {
    let n = (sample_rate as f64 * duration).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

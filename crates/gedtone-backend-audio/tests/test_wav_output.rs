//! WAV output integration tests, read back with an independent decoder.

use std::io::Cursor;

use gedtone_backend_audio::{generate, GenerateRequest};
use gedtone_spec::{PlayPolicy, SynthesisParams};

const TREE: &str = "\
0 HEAD
1 DATE 1 JAN 2024
0 @I1@ INDI
1 NAME John /Smith/
1 BIRT
2 DATE 12 MAR 1901
2 PLAC Turku
1 DEAT
2 DATE ABT DEC 1980
0 @I2@ INDI
1 BIRT
2 DATE 30 MAR 1905
0 TRLR
";

fn render(policy: PlayPolicy, seed: u32) -> gedtone_backend_audio::GenerateResult {
    let request = GenerateRequest::new(SynthesisParams::default(), policy).with_seed(seed);
    generate(TREE, &request).expect("render should succeed")
}

#[test]
fn test_wav_readable_by_hound() {
    let result = render(PlayPolicy::Chronological, 0);
    let wav = result.wav.expect("dates were found");

    let reader = hound::WavReader::new(Cursor::new(wav.wav_data.clone())).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.len() as usize, wav.num_samples);
}

#[test]
fn test_full_scale_normalization() {
    let result = render(PlayPolicy::Chronological, 0);
    let wav = result.wav.unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(wav.wav_data)).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert_eq!(peak, 32767);
}

#[test]
fn test_duration_matches_date_count() {
    let result = render(PlayPolicy::Chronological, 0);
    // JAN header date, MAR, DEC, MAR
    assert_eq!(result.total, 4);

    let unit = SynthesisParams::default().unit_samples();
    assert_eq!(result.wav.unwrap().num_samples, 4 * unit);
}

#[test]
fn test_chronological_ignores_seed() {
    let a = render(PlayPolicy::Chronological, 1);
    let b = render(PlayPolicy::Chronological, 2);
    assert_eq!(a.wav.unwrap().pcm_hash, b.wav.unwrap().pcm_hash);
}

#[test]
fn test_shuffled_same_seed_same_bytes() {
    let a = render(PlayPolicy::Shuffled, 1234);
    let b = render(PlayPolicy::Shuffled, 1234);
    assert_eq!(a.wav.unwrap().wav_data, b.wav.unwrap().wav_data);
}

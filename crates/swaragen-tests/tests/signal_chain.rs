//! Stage-by-stage checks of the synthesis chain.

use std::f64::consts::PI;

use swaragen_backend_audio::envelope::AdsrShape;
use swaragen_backend_audio::filter::brickwall_lowpass;
use swaragen_backend_audio::gain::{normalize_peak, peak};
use swaragen_backend_audio::modulation::Tremolo;
use swaragen_backend_audio::oscillator::{additive, sample_count, HARMONIUM_PARTIALS};
use swaragen_backend_audio::{Harmonium, Voice};
use swaragen_spec::EnvelopeParams;

const SAMPLE_RATE: u32 = 44100;

fn sine(freq: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (2.0 * PI * freq * i as f64 / SAMPLE_RATE as f64).sin())
        .collect()
}

fn rms(signal: &[f64]) -> f64 {
    (signal.iter().map(|s| s * s).sum::<f64>() / signal.len() as f64).sqrt()
}

// ============================================================================
// Filter
// ============================================================================

#[test]
fn lowpass_keeps_a_440_tone() {
    let input = sine(440.0, SAMPLE_RATE as usize);
    let output = brickwall_lowpass(&input, 5000.0, SAMPLE_RATE);

    assert_eq!(output.len(), input.len());
    let max_error = input
        .iter()
        .zip(&output)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);
    assert!(max_error < 1e-6, "max error {}", max_error);
}

#[test]
fn lowpass_removes_a_12000_tone() {
    let input = sine(12000.0, SAMPLE_RATE as usize);
    let output = brickwall_lowpass(&input, 5000.0, SAMPLE_RATE);
    assert!(rms(&output) < 1e-6, "rms {}", rms(&output));
}

#[test]
fn lowpass_splits_a_mix() {
    let low = sine(440.0, SAMPLE_RATE as usize);
    let high = sine(12000.0, SAMPLE_RATE as usize);
    let mix: Vec<f64> = low.iter().zip(&high).map(|(a, b)| a + b).collect();

    let output = brickwall_lowpass(&mix, 5000.0, SAMPLE_RATE);
    for (out, expected) in output.iter().zip(&low) {
        assert!((out - expected).abs() < 1e-6);
    }
}

// ============================================================================
// Envelope
// ============================================================================

#[test]
fn envelope_on_short_signal_keeps_length() {
    let envelope = AdsrShape::from_params(&EnvelopeParams::default(), SAMPLE_RATE);
    // 0.2 s is shorter than attack + decay + release.
    let signal = vec![1.0; 8820];
    let shaped = envelope.apply(&signal);

    assert_eq!(shaped.len(), signal.len());
    assert_eq!(shaped[0], 0.0);
    assert!(shaped.iter().all(|s| (0.0..=1.0).contains(s)));
}

#[test]
fn envelope_on_long_signal_reaches_sustain() {
    let envelope = AdsrShape::from_params(&EnvelopeParams::default(), SAMPLE_RATE);
    let signal = vec![1.0; 2 * SAMPLE_RATE as usize];
    let shaped = envelope.apply(&signal);

    assert_eq!(shaped.len(), signal.len());
    assert_eq!(shaped[SAMPLE_RATE as usize], 0.7);
    assert_eq!(*shaped.last().unwrap(), 0.0);
}

// ============================================================================
// Tremolo and gain
// ============================================================================

#[test]
fn tremolo_stays_within_depth() {
    let tremolo = Tremolo::new(5.0, 0.1, SAMPLE_RATE);
    let signal = vec![1.0; SAMPLE_RATE as usize];
    let modulated = tremolo.apply(&signal);

    assert_eq!(modulated.len(), signal.len());
    assert!(modulated.iter().all(|&s| (0.9 - 1e-12..=1.1 + 1e-12).contains(&s)));
    assert_eq!(modulated[0], 1.0);
}

#[test]
fn normalize_brings_peak_to_one() {
    let mut signal: Vec<f64> = sine(440.0, 1000).iter().map(|s| s * 0.25).collect();
    let before = normalize_peak(&mut signal);

    assert!(before > 0.0 && before <= 0.25);
    assert!((peak(&signal) - 1.0).abs() < 1e-6);
}

#[test]
fn normalize_leaves_silence_alone() {
    let mut signal = vec![0.0; 512];
    assert_eq!(normalize_peak(&mut signal), 0.0);
    assert!(signal.iter().all(|&s| s == 0.0));

    let mut empty: Vec<f64> = Vec::new();
    assert_eq!(normalize_peak(&mut empty), 0.0);
}

// ============================================================================
// Whole voice
// ============================================================================

#[test]
fn oscillator_length_follows_duration() {
    assert_eq!(sample_count(2.0, SAMPLE_RATE), 88200);
    let signal = additive(261.626, &HARMONIUM_PARTIALS, 0.5, SAMPLE_RATE);
    assert_eq!(signal.len(), 22050);
    assert_eq!(signal[0], 0.0);
}

#[test]
fn harmonium_note_is_normalized() {
    let voice = Harmonium::new(SAMPLE_RATE).expect("valid sample rate");
    let samples = voice.generate(261.626, 1.0).expect("render");

    assert_eq!(samples.len(), SAMPLE_RATE as usize);
    assert!((peak(&samples) - 1.0).abs() < 1e-12);
    assert!(samples.iter().all(|s| s.is_finite()));
}

#[test]
fn harmonium_short_note_survives_the_chain() {
    let voice = Harmonium::new(SAMPLE_RATE).expect("valid sample rate");
    let samples = voice.generate(440.0, 0.05).expect("render");

    assert_eq!(samples.len(), 2205);
    assert!(samples.iter().all(|s| s.is_finite()));
}

#[test]
fn harmonium_rejects_bad_input() {
    let voice = Harmonium::new(SAMPLE_RATE).expect("valid sample rate");
    assert!(voice.generate(0.0, 1.0).is_err());
    assert!(voice.generate(440.0, 0.0).is_err());
    assert!(voice.generate(f64::NAN, 1.0).is_err());
}

//! Pitch properties of the frequency streams.

use swaragen_backend_audio::{anchor, freq_from_offset, FrequencyStream, NotePitch};
use swaragen_spec::{NoteRange, RatioTable, TuningReference};
use swaragen_tests::fixtures::{c4_reference, just_table, C4_FREQ};

fn collect(stream: FrequencyStream) -> Vec<NotePitch> {
    stream.collect()
}

fn freq_of(notes: &[NotePitch], midi: u8) -> f64 {
    notes
        .iter()
        .find(|n| n.midi == midi)
        .map(|n| n.freq_hz)
        .expect("note in range")
}

// ============================================================================
// Anchor
// ============================================================================

#[test]
fn anchor_of_reference_is_exact() {
    for (midi, freq) in [(0, 8.1758), (60, C4_FREQ), (69, 440.0), (127, 12543.85)] {
        let reference = TuningReference::new(midi, freq).expect("valid");
        let a = anchor(&reference, midi as u8);
        assert_eq!(a.offset, 0);
        assert_eq!(a.octave_base, freq);
    }
}

#[test]
fn anchor_an_octave_below() {
    let a = anchor(&c4_reference(), 48);
    assert_eq!(a.offset, 0);
    assert_eq!(a.octave_base, C4_FREQ / 2.0);
}

#[test]
fn anchor_offsets_are_always_in_range() {
    let reference = c4_reference();
    for midi in 0..=127u8 {
        let a = anchor(&reference, midi);
        assert!(a.offset < 12);
        assert_eq!((midi as i32 - 60 - a.offset as i32).rem_euclid(12), 0);
        let expected = freq_from_offset(midi as i32 - 60 - a.offset as i32, C4_FREQ);
        assert_eq!(a.octave_base, expected);
    }
}

// ============================================================================
// Equal temperament
// ============================================================================

#[test]
fn equal_temperament_matches_closed_form() {
    let notes = collect(FrequencyStream::equal_temperament(
        c4_reference(),
        NoteRange::DEFAULT,
    ));
    for note in &notes {
        let expected = C4_FREQ * 2f64.powf((note.midi as f64 - 60.0) / 12.0);
        assert!(((note.freq_hz - expected) / expected).abs() <= 1e-9);
    }
}

#[test]
fn equal_temperament_a4_is_440() {
    let notes = collect(FrequencyStream::equal_temperament(
        c4_reference(),
        NoteRange::DEFAULT,
    ));
    assert!((freq_of(&notes, 69) - 440.0).abs() < 0.01);
}

#[test]
fn equal_temperament_semitone_ratio() {
    let range = NoteRange::new(0, 128).expect("full MIDI range");
    let notes = collect(FrequencyStream::equal_temperament(c4_reference(), range));
    let semitone = 2f64.powf(1.0 / 12.0);
    for pair in notes.windows(2) {
        let ratio = pair[1].freq_hz / pair[0].freq_hz;
        assert!((ratio - semitone).abs() / semitone <= 1e-9);
    }
}

// ============================================================================
// Just intonation
// ============================================================================

#[test]
fn just_intonation_fifth_above_c4() {
    let notes = collect(FrequencyStream::just_intonation(
        c4_reference(),
        NoteRange::DEFAULT,
        just_table(),
    ));
    assert!((freq_of(&notes, 67) - 392.439).abs() < 0.01);
}

#[test]
fn just_intonation_octaves_double() {
    let notes = collect(FrequencyStream::just_intonation(
        c4_reference(),
        NoteRange::DEFAULT,
        just_table(),
    ));
    assert!((freq_of(&notes, 72) - 2.0 * freq_of(&notes, 60)).abs() < 1e-9);
    for midi in 48..78u8 {
        let low = freq_of(&notes, midi);
        let high = freq_of(&notes, midi + 12);
        assert!((high - 2.0 * low).abs() / high < 1e-12);
    }
}

#[test]
fn just_intonation_from_reference_off_the_range_start() {
    // Reference inside the range, range starting on a non-unison degree.
    let reference = TuningReference::new(62, 300.0).expect("valid");
    let range = NoteRange::new(50, 80).expect("valid");
    let table = just_table();
    let notes = collect(FrequencyStream::just_intonation(reference, range, table));

    assert_eq!(freq_of(&notes, 62), 300.0);
    assert!((freq_of(&notes, 69) - 450.0).abs() < 1e-9);
    assert!((freq_of(&notes, 57) - 225.0).abs() < 1e-9);
    assert!((freq_of(&notes, 50) - 150.0).abs() < 1e-9);
}

#[test]
fn unison_table_equals_reference_octaves() {
    let ones = RatioTable::new(vec![1.0; 12]).expect("valid table");
    let notes = collect(FrequencyStream::just_intonation(
        c4_reference(),
        NoteRange::DEFAULT,
        ones,
    ));
    assert_eq!(freq_of(&notes, 60), C4_FREQ);
    assert_eq!(freq_of(&notes, 65), C4_FREQ);
    assert_eq!(freq_of(&notes, 48), C4_FREQ / 2.0);
}

// ============================================================================
// Stream shape
// ============================================================================

#[test]
fn both_streams_cover_the_range_once() {
    for stream in [
        FrequencyStream::new(c4_reference(), NoteRange::DEFAULT, None),
        FrequencyStream::new(c4_reference(), NoteRange::DEFAULT, Some(just_table())),
    ] {
        let midis: Vec<u8> = stream.map(|n| n.midi).collect();
        assert_eq!(midis.len(), 42);
        assert!(midis.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(midis.first(), Some(&48));
        assert_eq!(midis.last(), Some(&89));
    }
}

#[test]
fn rejected_construction_inputs() {
    assert!(TuningReference::new(-1, 440.0).is_err());
    assert!(TuningReference::new(128, 440.0).is_err());
    assert!(TuningReference::new(69, 0.0).is_err());
    assert!(TuningReference::new(69, -440.0).is_err());
    assert!(RatioTable::new(vec![1.0; 11]).is_err());
    assert!(RatioTable::new(vec![1.5; 12]).is_err());
}

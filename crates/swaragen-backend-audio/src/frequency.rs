//! Frequency streams: the (MIDI note, frequency) sequence for a note range.
//!
//! Both tuning strategies share the floored-modulo [`anchor`] helper, which
//! finds the octave that contains a note relative to the tuning reference.
//! Streams are single-pass; restarting one means constructing it again with
//! the same reference and range.

use std::iter::FusedIterator;
use std::ops::Range;

use swaragen_spec::{NoteRange, RatioTable, TuningReference, DEGREES};

/// One note of a frequency stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotePitch {
    /// MIDI note number.
    pub midi: u8,
    /// Frequency in Hz.
    pub freq_hz: f64,
}

/// Position of a note within its octave relative to the tuning reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Chromatic degree above the octave base, always in `0..12`.
    pub offset: usize,
    /// Frequency of degree 0 of the octave containing the note.
    pub octave_base: f64,
}

/// Frequency `offset` equal-tempered semitones away from `ref_freq`.
pub fn freq_from_offset(offset: i32, ref_freq: f64) -> f64 {
    ref_freq * 2.0_f64.powf(offset as f64 / DEGREES as f64)
}

/// Finds the octave anchor of `midi`.
///
/// The offset uses floored modulo, so notes below the reference land in a
/// lower octave with a non-negative degree. `anchor(base_midi)` is exactly
/// `(0, base_freq)`.
pub fn anchor(reference: &TuningReference, midi: u8) -> Anchor {
    let diff = midi as i32 - reference.base_midi() as i32;
    let offset = diff.rem_euclid(DEGREES as i32);
    Anchor {
        offset: offset as usize,
        octave_base: freq_from_offset(diff - offset, reference.base_freq()),
    }
}

/// Equal-tempered notes over a range.
///
/// Each frequency is computed from the reference directly, so long ranges do
/// not accumulate multiplication error.
#[derive(Debug)]
pub struct EqualTemperamentStream {
    reference: TuningReference,
    notes: Range<u8>,
}

impl EqualTemperamentStream {
    /// Creates a stream over `range`.
    pub fn new(reference: TuningReference, range: NoteRange) -> Self {
        Self {
            reference,
            notes: range.iter(),
        }
    }
}

impl Iterator for EqualTemperamentStream {
    type Item = NotePitch;

    fn next(&mut self) -> Option<NotePitch> {
        let midi = self.notes.next()?;
        let a = anchor(&self.reference, midi);
        Some(NotePitch {
            midi,
            freq_hz: freq_from_offset(a.offset as i32, a.octave_base),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.notes.size_hint()
    }
}

/// Just-intonation notes over a range.
///
/// Walks the ratio table from the anchor degree of the first note and doubles
/// the anchor frequency every time the degree wraps back to unison.
#[derive(Debug)]
pub struct JustIntonationStream {
    ratios: RatioTable,
    notes: Range<u8>,
    anchor_freq: f64,
    index: usize,
}

impl JustIntonationStream {
    /// Creates a stream over `range` using `ratios`.
    pub fn new(reference: TuningReference, range: NoteRange, ratios: RatioTable) -> Self {
        let start = anchor(&reference, range.low());
        Self {
            ratios,
            notes: range.iter(),
            anchor_freq: start.octave_base,
            index: start.offset,
        }
    }
}

impl Iterator for JustIntonationStream {
    type Item = NotePitch;

    fn next(&mut self) -> Option<NotePitch> {
        let midi = self.notes.next()?;
        let pitch = NotePitch {
            midi,
            freq_hz: self.anchor_freq * self.ratios.ratio(self.index),
        };

        self.index = (self.index + 1) % DEGREES;
        if self.index == 0 {
            self.anchor_freq *= 2.0;
        }

        Some(pitch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.notes.size_hint()
    }
}

/// A frequency stream under one of the supported tuning strategies.
///
/// Yields exactly `range.len()` notes in strictly ascending MIDI order.
///
/// ```
/// use swaragen_backend_audio::FrequencyStream;
/// use swaragen_spec::{NoteRange, TuningReference};
///
/// let reference = TuningReference::new(60, 261.626).unwrap();
/// let range = NoteRange::new(69, 70).unwrap();
/// let a4 = FrequencyStream::equal_temperament(reference, range).next().unwrap();
/// assert!((a4.freq_hz - 440.0).abs() < 0.01);
/// ```
#[derive(Debug)]
pub enum FrequencyStream {
    /// Equal temperament, `2^(1/12)` per semitone.
    EqualTemperament(EqualTemperamentStream),
    /// Just intonation from a 12-entry ratio table.
    JustIntonation(JustIntonationStream),
}

impl FrequencyStream {
    /// Creates an equal-temperament stream.
    pub fn equal_temperament(reference: TuningReference, range: NoteRange) -> Self {
        Self::EqualTemperament(EqualTemperamentStream::new(reference, range))
    }

    /// Creates a just-intonation stream.
    pub fn just_intonation(
        reference: TuningReference,
        range: NoteRange,
        ratios: RatioTable,
    ) -> Self {
        Self::JustIntonation(JustIntonationStream::new(reference, range, ratios))
    }

    /// Creates a just-intonation stream when a ratio table is given,
    /// equal temperament otherwise.
    pub fn new(reference: TuningReference, range: NoteRange, ratios: Option<RatioTable>) -> Self {
        match ratios {
            Some(ratios) => Self::just_intonation(reference, range, ratios),
            None => Self::equal_temperament(reference, range),
        }
    }

    /// Name of the tuning strategy.
    pub fn tuning_name(&self) -> &'static str {
        match self {
            FrequencyStream::EqualTemperament(_) => "equal_temperament",
            FrequencyStream::JustIntonation(_) => "just_intonation",
        }
    }
}

impl Iterator for FrequencyStream {
    type Item = NotePitch;

    fn next(&mut self) -> Option<NotePitch> {
        match self {
            FrequencyStream::EqualTemperament(s) => s.next(),
            FrequencyStream::JustIntonation(s) => s.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            FrequencyStream::EqualTemperament(s) => s.size_hint(),
            FrequencyStream::JustIntonation(s) => s.size_hint(),
        }
    }
}

impl ExactSizeIterator for EqualTemperamentStream {}
impl ExactSizeIterator for JustIntonationStream {}
impl ExactSizeIterator for FrequencyStream {}

impl FusedIterator for EqualTemperamentStream {}
impl FusedIterator for JustIntonationStream {}
impl FusedIterator for FrequencyStream {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const C4: f64 = 261.626;

    fn reference() -> TuningReference {
        TuningReference::new(60, C4).unwrap()
    }

    fn pythagorean() -> RatioTable {
        RatioTable::parse(&[
            "1", "256/243", "10/9", "32/27", "5/4", "4/3", "45/32", "3/2", "128/81", "5/3",
            "16/9", "15/8",
        ])
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64, rel: f64) {
        assert!(
            ((actual - expected) / expected).abs() <= rel,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_freq_from_offset() {
        assert_eq!(freq_from_offset(0, 440.0), 440.0);
        assert_eq!(freq_from_offset(12, 440.0), 880.0);
        assert_eq!(freq_from_offset(-12, 440.0), 220.0);
        assert_close(freq_from_offset(7, 440.0), 659.255_113_825_739_9, 1e-12);
    }

    #[test]
    fn test_anchor_at_reference() {
        let a = anchor(&reference(), 60);
        assert_eq!(a.offset, 0);
        assert_eq!(a.octave_base, C4);
    }

    #[test]
    fn test_anchor_floors_negative_offsets() {
        let a = anchor(&reference(), 48);
        assert_eq!(a, Anchor { offset: 0, octave_base: C4 / 2.0 });

        let a = anchor(&reference(), 59);
        assert_eq!(a.offset, 11);
        assert_close(a.octave_base, C4 / 2.0, 1e-15);

        let a = anchor(&reference(), 73);
        assert_eq!(a.offset, 1);
        assert_close(a.octave_base, C4 * 2.0, 1e-15);
    }

    #[test]
    fn test_equal_temperament_matches_closed_form() {
        let stream = FrequencyStream::equal_temperament(reference(), NoteRange::DEFAULT);
        let notes: Vec<_> = stream.collect();

        assert_eq!(notes.len(), 42);
        for note in &notes {
            let expected = C4 * 2.0_f64.powf((note.midi as f64 - 60.0) / 12.0);
            assert_close(note.freq_hz, expected, 1e-9);
        }
        for pair in notes.windows(2) {
            assert_close(pair[1].freq_hz / pair[0].freq_hz, 2.0_f64.powf(1.0 / 12.0), 1e-9);
        }
    }

    #[test]
    fn test_equal_temperament_a4() {
        let a4 = FrequencyStream::equal_temperament(reference(), NoteRange::DEFAULT)
            .find(|n| n.midi == 69)
            .unwrap();
        assert!((a4.freq_hz - 440.0).abs() < 0.01, "{}", a4.freq_hz);
    }

    #[test]
    fn test_just_intonation_fifth() {
        let g4 = FrequencyStream::just_intonation(reference(), NoteRange::DEFAULT, pythagorean())
            .find(|n| n.midi == 67)
            .unwrap();
        assert!((g4.freq_hz - 392.439).abs() < 0.01, "{}", g4.freq_hz);
    }

    #[test]
    fn test_just_intonation_doubles_each_octave() {
        let notes: Vec<_> =
            FrequencyStream::just_intonation(reference(), NoteRange::DEFAULT, pythagorean())
                .collect();

        let by_midi = |m: u8| notes.iter().find(|n| n.midi == m).unwrap().freq_hz;
        assert_close(by_midi(72), 2.0 * by_midi(60), 1e-12);
        assert_close(by_midi(48), by_midi(60) / 2.0, 1e-12);
        for midi in 48..78u8 {
            assert_close(by_midi(midi + 12), 2.0 * by_midi(midi), 1e-12);
        }
        assert_eq!(by_midi(60), C4);
    }

    #[test]
    fn test_just_intonation_starts_mid_octave() {
        // Range starting on a non-unison degree below the reference.
        let range = NoteRange::new(55, 62).unwrap();
        let notes: Vec<_> =
            FrequencyStream::just_intonation(reference(), range, pythagorean()).collect();

        assert_close(notes[0].freq_hz, C4 / 2.0 * 1.5, 1e-12);
        assert_eq!(notes[5].midi, 60);
        assert_close(notes[5].freq_hz, C4, 1e-12);
        assert_close(notes[6].freq_hz, C4 * 256.0 / 243.0, 1e-12);
    }

    #[test]
    fn test_streams_are_ascending_and_complete() {
        let range = NoteRange::new(20, 110).unwrap();
        for stream in [
            FrequencyStream::new(reference(), range, None),
            FrequencyStream::new(reference(), range, Some(pythagorean())),
        ] {
            assert_eq!(stream.len(), 90);
            let midis: Vec<u8> = stream.map(|n| n.midi).collect();
            assert_eq!(midis, (20..110).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_stream_is_fused_and_sized() {
        let range = NoteRange::new(60, 62).unwrap();
        let mut stream = FrequencyStream::equal_temperament(reference(), range);
        assert_eq!(stream.tuning_name(), "equal_temperament");
        assert_eq!(stream.len(), 2);
        assert!(stream.next().is_some());
        assert_eq!(stream.len(), 1);
        assert!(stream.next().is_some());
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_empty_range() {
        let range = NoteRange::new(60, 60).unwrap();
        assert_eq!(FrequencyStream::new(reference(), range, None).count(), 0);
    }

    #[test]
    fn test_restart_by_reconstruction() {
        let build = || FrequencyStream::new(reference(), NoteRange::DEFAULT, Some(pythagorean()));
        let first: Vec<_> = build().collect();
        let second: Vec<_> = build().collect();
        assert_eq!(first, second);
    }
}

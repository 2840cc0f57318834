//! Sample-set builder.
//!
//! Drives a frequency stream through a voice, encodes every note as a WAV
//! buffer and collects the buffers under keys derived from the MIDI number.
//! The set is handed to a [`SamplePackager`] (an SFZ or SF2 writer, for
//! example), which owns the container format.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use tracing::debug;

use crate::error::{AudioError, AudioResult};
use crate::frequency::NotePitch;
use crate::synthesis::Voice;
use crate::wav::WavResult;

/// Key of a sample inside a set, derived from its MIDI number.
///
/// Displays as the virtual path `samples/{midi}.wav`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleKey(pub u8);

impl SampleKey {
    /// MIDI note number of the sample.
    pub fn midi(self) -> u8 {
        self.0
    }

    /// Parses a virtual path produced by `Display`.
    pub fn from_path(path: &str) -> Option<Self> {
        let midi = path.strip_prefix("samples/")?.strip_suffix(".wav")?;
        if midi.is_empty() || !midi.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        midi.parse().ok().map(SampleKey)
    }
}

impl fmt::Display for SampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "samples/{}.wav", self.0)
    }
}

/// One note of a sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleEntry {
    /// Key of the sample.
    pub key: SampleKey,
    /// Frequency the note was synthesized at, in Hz.
    pub frequency: f64,
    /// Encoded audio.
    pub wav: WavResult,
}

/// Encoded samples for a range of notes, ordered by ascending MIDI number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    entries: BTreeMap<u8, SampleEntry>,
}

impl SampleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry; a MIDI number may only be stored once.
    pub fn insert(&mut self, entry: SampleEntry) -> AudioResult<()> {
        match self.entries.entry(entry.key.midi()) {
            btree_map::Entry::Occupied(_) => Err(AudioError::DuplicateNote {
                midi: entry.key.midi(),
            }),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sample for a MIDI note.
    pub fn get(&self, midi: u8) -> Option<&SampleEntry> {
        self.entries.get(&midi)
    }

    /// Sample for a virtual path such as `samples/60.wav`.
    pub fn get_by_path(&self, path: &str) -> Option<&SampleEntry> {
        SampleKey::from_path(path).and_then(|key| self.get(key.midi()))
    }

    /// Samples in ascending MIDI order.
    pub fn iter(&self) -> impl Iterator<Item = &SampleEntry> + '_ {
        self.entries.values()
    }

    /// Keys in ascending MIDI order.
    pub fn keys(&self) -> impl Iterator<Item = SampleKey> + '_ {
        self.entries.values().map(|e| e.key)
    }

    /// Total size of all WAV buffers in bytes.
    pub fn total_bytes(&self) -> usize {
        self.entries.values().map(|e| e.wav.len_bytes()).sum()
    }

    /// Consumes the set, yielding its entries in ascending MIDI order.
    pub fn into_entries(self) -> impl Iterator<Item = SampleEntry> {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a SampleEntry;
    type IntoIter = btree_map::Values<'a, u8, SampleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Synthesizes and encodes one note.
fn render_note<V: Voice + ?Sized>(
    voice: &V,
    pitch: NotePitch,
    duration: f64,
) -> AudioResult<SampleEntry> {
    let samples = voice
        .generate(pitch.freq_hz, duration)
        .map_err(|e| AudioError::stage("synthesize", Some(pitch.midi), e))?;
    let wav = WavResult::from_mono(&samples, voice.sample_rate())
        .map_err(|e| AudioError::stage("encode", Some(pitch.midi), e))?;

    debug!(
        midi = pitch.midi,
        freq_hz = pitch.freq_hz,
        samples = wav.num_samples,
        "encoded sample"
    );

    Ok(SampleEntry {
        key: SampleKey(pitch.midi),
        frequency: pitch.freq_hz,
        wav,
    })
}

/// Builds a sample set by rendering every note of `stream` with `voice`.
///
/// Notes are rendered in stream order. The first failure aborts the build;
/// buffers rendered so far are dropped and the failure is returned wrapped in
/// [`AudioError::Stage`] naming the stage and note.
///
/// # Arguments
/// * `stream` - Notes to render, usually a [`crate::FrequencyStream`]
/// * `voice` - Instrument voice
/// * `duration` - Length of every note in seconds
pub fn build_sample_set<I, V>(stream: I, voice: &V, duration: f64) -> AudioResult<SampleSet>
where
    I: IntoIterator<Item = NotePitch>,
    V: Voice + ?Sized,
{
    let mut set = SampleSet::new();
    for pitch in stream {
        set.insert(render_note(voice, pitch, duration)?)?;
    }
    Ok(set)
}

/// Builds a sample set on the rayon thread pool.
///
/// Produces the same set as [`build_sample_set`]. When several notes fail,
/// the error of the lowest note in stream order is returned.
#[cfg(feature = "parallel")]
pub fn build_sample_set_parallel<I, V>(stream: I, voice: &V, duration: f64) -> AudioResult<SampleSet>
where
    I: IntoIterator<Item = NotePitch>,
    V: Voice + Sync + ?Sized,
{
    use rayon::prelude::*;

    let pitches: Vec<NotePitch> = stream.into_iter().collect();
    let rendered: Vec<AudioResult<SampleEntry>> = pitches
        .par_iter()
        .map(|&pitch| render_note(voice, pitch, duration))
        .collect();

    let mut set = SampleSet::new();
    for entry in rendered {
        set.insert(entry?)?;
    }
    Ok(set)
}

/// Consumer of a finished sample set, such as an SFZ or SF2 writer.
pub trait SamplePackager {
    /// Packaged output.
    type Output;
    /// Packaging error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Packages the samples.
    fn package(&mut self, samples: &SampleSet) -> Result<Self::Output, Self::Error>;
}

/// Hands `set` to `packager`.
///
/// The set is consumed and its buffers are released once the packager
/// returns, whether it succeeded or not.
pub fn package<P: SamplePackager>(set: SampleSet, packager: &mut P) -> AudioResult<P::Output> {
    let notes = set.len();
    let result = packager.package(&set);
    drop(set);

    let output = result.map_err(|e| AudioError::stage("package", None, e))?;
    debug!(notes, "packaged sample set");
    Ok(output)
}

//! MIDI note-name conversion.
//!
//! Names use sharps only and scientific octave numbering, so MIDI 60 is `C4`.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Pitch-class names in chromatic order starting at C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Octave assumed when a note name has none.
const DEFAULT_OCTAVE: i32 = 4;

/// Pattern for a note name: pitch class, then an optional octave from -1 to 9.
const NOTE_PATTERN: &str = r"^([A-G]#?)(-1|\d)?$";

static NOTE_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_regex() -> &'static Regex {
    NOTE_REGEX.get_or_init(|| Regex::new(NOTE_PATTERN).expect("invalid regex pattern"))
}

/// Errors raised while converting note names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The text is not a note name.
    #[error("invalid note '{0}'")]
    InvalidNote(String),

    /// The note name is well formed but falls outside 0..=127.
    #[error("MIDI value {midi} out of range for {note}")]
    NoteOutOfRange {
        /// The note name.
        note: String,
        /// The MIDI value it maps to.
        midi: i32,
    },
}

/// Converts a MIDI note number to its name, e.g. `69 -> "A4"`.
pub fn midi_to_note(midi: u8) -> String {
    let octave = (midi / 12) as i32 - 1;
    format!("{}{}", NOTE_NAMES[(midi % 12) as usize], octave)
}

/// Parses a note name such as `"C4"`, `"F#2"` or `"A"` into a MIDI number.
///
/// ```
/// use swaragen_spec::note_to_midi;
///
/// assert_eq!(note_to_midi("C4").unwrap(), 60);
/// assert_eq!(note_to_midi("A").unwrap(), 69);
/// ```
pub fn note_to_midi(note: &str) -> Result<u8, NoteError> {
    let captures = note_regex()
        .captures(note)
        .ok_or_else(|| NoteError::InvalidNote(note.to_string()))?;

    let name = &captures[1];
    let octave = match captures.get(2) {
        Some(m) => m
            .as_str()
            .parse::<i32>()
            .map_err(|_| NoteError::InvalidNote(note.to_string()))?,
        None => DEFAULT_OCTAVE,
    };
    let class = NOTE_NAMES
        .iter()
        .position(|&n| n == name)
        .ok_or_else(|| NoteError::InvalidNote(note.to_string()))?;

    let midi = (octave + 1) * 12 + class as i32;
    if !(0..=127).contains(&midi) {
        return Err(NoteError::NoteOutOfRange {
            note: note.to_string(),
            midi,
        });
    }
    Ok(midi as u8)
}

/// Returns the pitch-class part of a note name, e.g. `"F#3" -> "F#"`.
pub fn pitch_class(note: &str) -> Result<&str, NoteError> {
    note_regex()
        .captures(note)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| NoteError::InvalidNote(note.to_string()))
}

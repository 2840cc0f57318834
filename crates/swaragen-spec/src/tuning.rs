//! Validated tuning values.
//!
//! These types are checked once at construction and immutable afterwards, so the
//! frequency streams in the audio backend never have to re-validate their inputs.

use thiserror::Error;

/// Number of chromatic degrees in one octave.
pub const DEGREES: usize = 12;

/// Highest valid MIDI note number.
pub const MIDI_MAX: i32 = 127;

/// Tolerance when checking that the unison ratio is 1.
const UNISON_TOLERANCE: f64 = 1e-12;

/// Errors raised while constructing tuning values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// The reference MIDI note is outside 0..=127.
    #[error("base_midi must be in 0-127, got {value}")]
    BaseMidiOutOfRange {
        /// The rejected value.
        value: i32,
    },

    /// The reference frequency is not a positive finite number.
    #[error("base_freq must be positive, got {value}")]
    NonPositiveBaseFreq {
        /// The rejected value.
        value: f64,
    },

    /// The note range is inverted or leaves the MIDI range.
    #[error("note range [{low}, {high}) must satisfy 0 <= low <= high <= 128")]
    InvalidNoteRange {
        /// Inclusive lower bound.
        low: i32,
        /// Exclusive upper bound.
        high: i32,
    },

    /// The ratio table does not have one entry per chromatic degree.
    #[error("ratio table must have 12 entries, got {len}")]
    WrongLength {
        /// Number of entries supplied.
        len: usize,
    },

    /// A ratio is zero, negative, or not finite.
    #[error("ratio at degree {index} must be positive, got {value}")]
    NonPositiveRatio {
        /// Chromatic degree of the entry.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// The unison entry is not 1, which would break octave doubling.
    #[error("ratio at degree 0 (unison) must be 1, got {value}")]
    UnisonNotOne {
        /// The rejected value.
        value: f64,
    },

    /// A ratio string could not be parsed.
    #[error("invalid ratio '{input}': {reason}")]
    InvalidRatio {
        /// The rejected input text.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl TuningError {
    /// Returns a stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            TuningError::BaseMidiOutOfRange { .. } => "TUNING_001",
            TuningError::NonPositiveBaseFreq { .. } => "TUNING_002",
            TuningError::InvalidNoteRange { .. } => "TUNING_003",
            TuningError::WrongLength { .. } => "TUNING_004",
            TuningError::NonPositiveRatio { .. } => "TUNING_005",
            TuningError::UnisonNotOne { .. } => "TUNING_006",
            TuningError::InvalidRatio { .. } => "TUNING_007",
        }
    }

    /// Returns the name of the parameter the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            TuningError::BaseMidiOutOfRange { .. } => "base_midi",
            TuningError::NonPositiveBaseFreq { .. } => "base_freq",
            TuningError::InvalidNoteRange { .. } => "note_range",
            TuningError::WrongLength { .. }
            | TuningError::NonPositiveRatio { .. }
            | TuningError::UnisonNotOne { .. }
            | TuningError::InvalidRatio { .. } => "ratios",
        }
    }
}

/// A MIDI note pinned to a reference frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningReference {
    base_midi: u8,
    base_freq: f64,
}

impl TuningReference {
    /// Creates a tuning reference.
    ///
    /// # Errors
    /// Returns [`TuningError::BaseMidiOutOfRange`] if `base_midi` is outside
    /// 0..=127 and [`TuningError::NonPositiveBaseFreq`] if `base_freq` is not a
    /// positive finite number.
    pub fn new(base_midi: i32, base_freq: f64) -> Result<Self, TuningError> {
        if !(0..=MIDI_MAX).contains(&base_midi) {
            return Err(TuningError::BaseMidiOutOfRange { value: base_midi });
        }
        if !base_freq.is_finite() || base_freq <= 0.0 {
            return Err(TuningError::NonPositiveBaseFreq { value: base_freq });
        }
        Ok(Self {
            base_midi: base_midi as u8,
            base_freq,
        })
    }

    /// The reference MIDI note number.
    pub fn base_midi(&self) -> u8 {
        self.base_midi
    }

    /// The frequency of the reference note in Hz.
    pub fn base_freq(&self) -> f64 {
        self.base_freq
    }
}

/// Half-open range of MIDI notes `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRange {
    low: u8,
    high: u8,
}

impl NoteRange {
    /// Keys that receive a sample by default: C3 up to and including F6.
    pub const DEFAULT: NoteRange = NoteRange { low: 48, high: 90 };

    /// Creates a note range.
    pub fn new(low: i32, high: i32) -> Result<Self, TuningError> {
        if low < 0 || low > high || high > MIDI_MAX + 1 {
            return Err(TuningError::InvalidNoteRange { low, high });
        }
        Ok(Self {
            low: low as u8,
            high: high as u8,
        })
    }

    /// Inclusive lower bound.
    pub fn low(&self) -> u8 {
        self.low
    }

    /// Exclusive upper bound.
    pub fn high(&self) -> u8 {
        self.high
    }

    /// Number of notes in the range.
    pub fn len(&self) -> usize {
        (self.high - self.low) as usize
    }

    /// Returns true if the range holds no notes.
    pub fn is_empty(&self) -> bool {
        self.low == self.high
    }

    /// Returns true if `midi` falls inside the range.
    pub fn contains(&self, midi: u8) -> bool {
        (self.low..self.high).contains(&midi)
    }

    /// Iterates the MIDI notes in ascending order.
    pub fn iter(&self) -> std::ops::Range<u8> {
        self.low..self.high
    }
}

impl Default for NoteRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Frequency multipliers for the 12 chromatic degrees of an octave.
///
/// Degree 0 is the unison and is always exactly 1, so walking the table and
/// doubling the anchor at each wrap lands on a true octave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTable {
    pub(crate) ratios: [f64; DEGREES],
}

impl RatioTable {
    /// Creates a ratio table, rejecting anything that would break octave doubling.
    pub fn new(ratios: Vec<f64>) -> Result<Self, TuningError> {
        let ratios: [f64; DEGREES] = ratios
            .try_into()
            .map_err(|v: Vec<f64>| TuningError::WrongLength { len: v.len() })?;

        for (index, &value) in ratios.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::NonPositiveRatio { index, value });
            }
        }
        if (ratios[0] - 1.0).abs() > UNISON_TOLERANCE {
            return Err(TuningError::UnisonNotOne { value: ratios[0] });
        }

        Ok(Self { ratios })
    }

    /// Parses a ratio table from fraction or decimal strings.
    ///
    /// ```
    /// use swaragen_spec::RatioTable;
    ///
    /// let table = RatioTable::parse(&[
    ///     "1", "16/15", "10/9", "6/5", "5/4", "4/3", "45/32", "3/2", "8/5", "5/3", "9/5", "15/8",
    /// ])
    /// .unwrap();
    /// assert_eq!(table.ratio(7), 1.5);
    /// ```
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, TuningError> {
        let ratios = entries
            .iter()
            .map(|s| parse_ratio(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ratios)
    }

    /// Returns the multiplier for a chromatic degree (taken modulo 12).
    pub fn ratio(&self, degree: usize) -> f64 {
        self.ratios[degree % DEGREES]
    }

    /// Returns all ratios in degree order.
    pub fn as_slice(&self) -> &[f64] {
        &self.ratios
    }
}

/// Parses a frequency ratio written as `"a/b"` or as a decimal number.
///
/// Sign and magnitude are not checked here; [`RatioTable::new`] does that.
pub fn parse_ratio(input: &str) -> Result<f64, TuningError> {
    let invalid = |reason: &str| TuningError::InvalidRatio {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let text = input.trim();
    if text.is_empty() {
        return Err(invalid("empty ratio"));
    }

    let value = match text.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num
                .trim()
                .parse()
                .map_err(|_| invalid("numerator is not a number"))?;
            let den: f64 = den
                .trim()
                .parse()
                .map_err(|_| invalid("denominator is not a number"))?;
            if den == 0.0 {
                return Err(invalid("denominator is zero"));
            }
            num / den
        }
        None => text.parse().map_err(|_| invalid("not a number"))?,
    };

    if !value.is_finite() {
        return Err(invalid("ratio is not finite"));
    }
    Ok(value)
}

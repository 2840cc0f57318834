//! Shared parameter fixtures.

use std::fs;
use std::path::PathBuf;

use swaragen_spec::{RatioTable, SampleSetParams, TuningParams, TuningReference};
use tempfile::TempDir;

/// Reference pitch of the fixtures: C4 at 261.626 Hz.
pub const C4_MIDI: i32 = 60;

/// Frequency of C4 in the fixtures.
pub const C4_FREQ: f64 = 261.626;

/// A 12-degree just-intonation table with a 3/2 fifth.
pub const JUST_RATIOS: [&str; 12] = [
    "1", "256/243", "10/9", "32/27", "5/4", "4/3", "45/32", "3/2", "128/81", "5/3", "16/9",
    "15/8",
];

/// The C4 tuning reference.
pub fn c4_reference() -> TuningReference {
    TuningReference::new(C4_MIDI, C4_FREQ).expect("C4 reference is valid")
}

/// The just-intonation ratio table.
pub fn just_table() -> RatioTable {
    RatioTable::parse(&JUST_RATIOS).expect("fixture ratios are valid")
}

/// Equal-temperament parameters over the default range.
pub fn equal_params() -> SampleSetParams {
    SampleSetParams::with_base_note("C4", C4_FREQ)
}

/// Just-intonation parameters over the default range.
pub fn just_params() -> SampleSetParams {
    equal_params().with_tuning(TuningParams::just_intonation(&JUST_RATIOS))
}

/// A temporary directory holding parameter documents.
pub struct ParamsFixture {
    pub root: TempDir,
}

impl ParamsFixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Writes `params` as `{name}.json` and returns the path.
    pub fn write(&self, name: &str, params: &SampleSetParams) -> PathBuf {
        let path = self.root.path().join(format!("{}.json", name));
        let json = params.to_json_pretty().expect("params serialize");
        fs::write(&path, json).expect("Failed to write params file");
        path
    }
}

impl Default for ParamsFixture {
    fn default() -> Self {
        Self::new()
    }
}

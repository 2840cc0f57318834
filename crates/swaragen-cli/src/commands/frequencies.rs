//! Frequencies command implementation
//!
//! Prints the frequency table of a tuning without synthesizing anything.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use swaragen_backend_audio::FrequencyStream;
use swaragen_spec::{midi_to_note, SampleSetParams};

use super::json_output::{print_json, FrequencyRow};
use crate::input::{resolve_params, ParamArgs};

/// Run the frequencies command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(args: &ParamArgs, json_output: bool) -> Result<ExitCode> {
    let params = resolve_params(args)?;
    let rows = frequency_table(&params)?;

    if json_output {
        print_json(&rows)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {}",
        "Tuning:".cyan().bold(),
        params.tuning.name()
    );
    println!("{}", format!("{:>4}  {:<4}  {:>12}", "MIDI", "Note", "Hz").dimmed());
    for row in &rows {
        println!("{:>4}  {:<4}  {:>12.4}", row.midi, row.note, row.frequency_hz);
    }

    Ok(ExitCode::SUCCESS)
}

/// Computes one row per note of the configured range.
pub fn frequency_table(params: &SampleSetParams) -> Result<Vec<FrequencyRow>> {
    let reference = params
        .tuning_reference()
        .context("Invalid tuning reference")?;
    let range = params.note_range().context("Invalid note range")?;
    let ratios = params.ratio_table().context("Invalid ratio table")?;

    Ok(FrequencyStream::new(reference, range, ratios)
        .map(|pitch| FrequencyRow {
            midi: pitch.midi,
            note: midi_to_note(pitch.midi),
            frequency_hz: pitch.freq_hz,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaragen_spec::{Shruti, TuningParams};

    #[test]
    fn test_equal_temperament_table() {
        let rows = frequency_table(&SampleSetParams::new(60, 261.626)).unwrap();
        assert_eq!(rows.len(), 42);
        assert_eq!(rows[0].note, "C3");

        let a4 = rows.iter().find(|r| r.note == "A4").unwrap();
        assert!((a4.frequency_hz - 440.0).abs() < 0.01);
    }

    #[test]
    fn test_shruti_table() {
        let params = SampleSetParams::new(60, 240.0)
            .with_tuning(TuningParams::shruti(Shruti::DEFAULTS))
            .with_note_range(60, 73);
        let rows = frequency_table(&params).unwrap();

        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].frequency_hz, 240.0);
        assert!((rows[7].frequency_hz - 360.0).abs() < 1e-9);
        assert!((rows[12].frequency_hz - 480.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_reference() {
        let err = frequency_table(&SampleSetParams::new(60, 0.0)).unwrap_err();
        assert!(err.to_string().contains("Invalid tuning reference"));
    }
}

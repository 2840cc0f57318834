//! Parameter loading.
//!
//! A generation request comes from a JSON parameter document, from command
//! line flags, or from both, in which case the flags override the document.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use swaragen_spec::{SampleSetParams, Shruti, TuningParams};

/// Flags describing a sample set, shared by several commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// Parameter document (JSON); other flags override its fields
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Reference note name, e.g. C4 or F#3
    #[arg(long, conflicts_with = "base_midi")]
    pub base_note: Option<String>,

    /// Reference MIDI note number (0-127)
    #[arg(long)]
    pub base_midi: Option<i32>,

    /// Frequency of the reference note in Hz
    #[arg(long)]
    pub base_freq: Option<f64>,

    /// Just-intonation ratio table: 12 comma-separated ratios, e.g. 1,256/243,10/9,...
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["shrutis", "shruti_defaults"])]
    pub ratios: Option<Vec<String>>,

    /// Shruti per degree: 12 comma-separated symbols, e.g. S,r2,R1,...
    #[arg(long, value_delimiter = ',', conflicts_with = "shruti_defaults")]
    pub shrutis: Option<Vec<String>>,

    /// Use the default shruti for every degree
    #[arg(long)]
    pub shruti_defaults: bool,

    /// Lowest MIDI note of the range (inclusive)
    #[arg(long)]
    pub low: Option<i32>,

    /// Highest MIDI note of the range (exclusive)
    #[arg(long)]
    pub high: Option<i32>,

    /// Length of every note in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,
}

/// Loads a JSON parameter document.
pub fn load_params(path: &Path) -> Result<SampleSetParams> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameter file: {}", path.display()))?;
    SampleSetParams::from_json(&json)
        .with_context(|| format!("Failed to parse parameter file: {}", path.display()))
}

/// Builds the parameter document for a command from its flags.
///
/// Structural problems (no reference note, no frequency, unknown shruti
/// symbols) are reported here; value ranges are left to validation.
pub fn resolve_params(args: &ParamArgs) -> Result<SampleSetParams> {
    let mut params = match &args.params {
        Some(path) => load_params(path)?,
        None => {
            let base_freq = args
                .base_freq
                .context("--base-freq is required when no --params file is given")?;
            if args.base_note.is_none() && args.base_midi.is_none() {
                bail!("one of --base-note or --base-midi is required when no --params file is given");
            }
            let mut params = SampleSetParams::new(0, base_freq);
            params.base_midi = None;
            params
        }
    };

    if let Some(note) = &args.base_note {
        params.base_note = Some(note.clone());
        params.base_midi = None;
    }
    if let Some(midi) = args.base_midi {
        params.base_midi = Some(midi);
        params.base_note = None;
    }
    if let Some(freq) = args.base_freq {
        params.base_freq = freq;
    }

    if let Some(ratios) = &args.ratios {
        params.tuning = TuningParams::just_intonation(ratios.as_slice());
    } else if let Some(symbols) = &args.shrutis {
        let shrutis = symbols
            .iter()
            .map(|s| s.trim().parse::<Shruti>().map_err(|e| anyhow!(e)))
            .collect::<Result<Vec<_>>>()?;
        params.tuning = TuningParams::Shruti { shrutis };
    } else if args.shruti_defaults {
        params.tuning = TuningParams::shruti(Shruti::DEFAULTS);
    }

    if let Some(low) = args.low {
        params.note_range[0] = low;
    }
    if let Some(high) = args.high {
        params.note_range[1] = high;
    }
    if let Some(duration) = args.duration {
        params.note_duration_seconds = duration;
    }
    if let Some(rate) = args.sample_rate {
        params.voice.sample_rate = rate;
    }

    Ok(params)
}

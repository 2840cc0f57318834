//! Generate command implementation
//!
//! Renders a sample set and writes it to an output directory.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use swaragen_backend_audio::{generate, package, AudioResult, GenerateResult};
use swaragen_spec::{validate_params, BackendError, SampleSetParams};

use super::json_output::{
    print_json, validation_errors_to_json, GenerateOutput, JsonError, Manifest,
};
use super::package::{DirectoryPackager, MANIFEST_FILE};
use super::validate::print_validation_errors;
use crate::input::{resolve_params, ParamArgs};

/// Run the generate command
///
/// # Arguments
/// * `args` - Parameter flags
/// * `out_dir` - Output directory
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on failure
pub fn run(args: &ParamArgs, out_dir: &str, json_output: bool) -> Result<ExitCode> {
    let params = resolve_params(args)?;
    if json_output {
        run_json(&params, out_dir)
    } else {
        run_human(&params, out_dir)
    }
}

/// Renders and writes a sample set, returning its manifest.
pub fn generate_to_dir(params: &SampleSetParams, out_dir: &Path) -> AudioResult<Manifest> {
    let result = generate(params)?;
    let GenerateResult {
        samples,
        tuning,
        reference,
        note_range,
        note_duration_seconds,
        ..
    } = result;

    let template = Manifest {
        tuning: tuning.to_string(),
        base_midi: reference.base_midi(),
        base_freq: reference.base_freq(),
        note_range: [note_range.low(), note_range.high()],
        sample_rate: params.voice.sample_rate,
        note_duration_seconds,
        samples: Vec::new(),
    };
    let mut packager = DirectoryPackager::new(out_dir, template);
    package(samples, &mut packager)
}

fn run_human(params: &SampleSetParams, out_dir: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating:".cyan().bold(), params.tuning.name());

    let validation = validate_params(params);
    if !validation.is_ok() {
        print_validation_errors(&validation);
        println!("\n{} {}", "FAILED".red().bold(), "invalid parameters".dimmed());
        return Ok(ExitCode::from(1));
    }

    let manifest = generate_to_dir(params, Path::new(out_dir))?;

    for sample in &manifest.samples {
        println!(
            "  {} {:<4} {:>10.3} Hz  {}",
            "+".green(),
            sample.note,
            sample.frequency_hz,
            sample.key.dimmed()
        );
    }
    println!(
        "\n{} {} samples written to {} ({:.2}s)",
        "SUCCESS".green().bold(),
        manifest.samples.len(),
        out_dir,
        start.elapsed().as_secs_f64()
    );
    println!(
        "{} {}",
        "Manifest:".dimmed(),
        Path::new(out_dir).join(MANIFEST_FILE).display()
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(params: &SampleSetParams, out_dir: &str) -> Result<ExitCode> {
    let start = Instant::now();

    let validation = validate_params(params);
    if !validation.is_ok() {
        print_json(&GenerateOutput {
            success: false,
            out_dir: out_dir.to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
            manifest: None,
            errors: validation_errors_to_json(&validation),
        })?;
        return Ok(ExitCode::from(1));
    }

    let (manifest, errors) = match generate_to_dir(params, Path::new(out_dir)) {
        Ok(manifest) => (Some(manifest), Vec::new()),
        Err(e) => (None, vec![JsonError::new(e.code(), e.to_string())]),
    };
    let success = errors.is_empty();

    print_json(&GenerateOutput {
        success,
        out_dir: out_dir.to_string(),
        duration_ms: start.elapsed().as_millis() as u64,
        manifest,
        errors,
    })?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

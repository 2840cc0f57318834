//! Validate command implementation
//!
//! Validates a parameter document without rendering anything.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use swaragen_spec::{validate_params, ValidationResult};

use super::json_output::{print_json, validation_errors_to_json, ValidateOutput};
use crate::input::{resolve_params, ParamArgs};

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(args: &ParamArgs, json_output: bool) -> Result<ExitCode> {
    let params = resolve_params(args)?;
    let result = validate_params(&params);

    if json_output {
        print_json(&ValidateOutput {
            success: result.is_ok(),
            errors: validation_errors_to_json(&result),
        })?;
    } else {
        let source = args
            .params
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "command line".to_string());
        println!("{} {}", "Validating:".cyan().bold(), source);

        if result.is_ok() {
            println!("\n{} {}", "SUCCESS".green().bold(), params.tuning.name());
        } else {
            print_validation_errors(&result);
            println!(
                "\n{} {} error(s)",
                "FAILED".red().bold(),
                result.errors.len()
            );
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Print validation errors to the console
pub(crate) fn print_validation_errors(result: &ValidationResult) {
    if result.errors.is_empty() {
        return;
    }

    println!("\n{}", "Errors:".red().bold());
    for error in &result.errors {
        let path_info = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path_info.dimmed(),
            error.message
        );
    }
}

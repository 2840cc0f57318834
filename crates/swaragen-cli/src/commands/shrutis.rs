//! Shrutis command implementation
//!
//! Lists the 22 shrutis with their ratios.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use swaragen_spec::Shruti;

use super::json_output::{print_json, ShrutiRow};

/// Run the shrutis command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let rows = shruti_rows();

    if json_output {
        print_json(&rows)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{}",
        format!(
            "{:>3}  {:<6}  {:<8}  {:<12}  {:>8}  {:>8}",
            "Deg", "Symbol", "Swara", "Variant", "Ratio", "Value"
        )
        .dimmed()
    );
    for row in &rows {
        let line = format!(
            "{:>3}  {:<6}  {:<8}  {:<12}  {:>8}  {:>8.5}",
            row.degree,
            row.symbol,
            row.swara,
            row.variant.as_deref().unwrap_or("-"),
            row.fraction,
            row.ratio
        );
        if row.default {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
    println!("\n{}", "Defaults in bold.".dimmed());

    Ok(ExitCode::SUCCESS)
}

/// One row per shruti in ascending pitch order.
pub fn shruti_rows() -> Vec<ShrutiRow> {
    Shruti::ALL
        .iter()
        .map(|&shruti| {
            let (num, den) = shruti.fraction();
            ShrutiRow {
                symbol: shruti.symbol().to_string(),
                swara: shruti.swara().to_string(),
                variant: shruti.variant().map(str::to_string),
                degree: shruti.degree(),
                fraction: format!("{}/{}", num, den),
                ratio: shruti.ratio(),
                default: Shruti::DEFAULTS.contains(&shruti),
            }
        })
        .collect()
}

//! Swaragen CLI - tuned harmonium sample sets from the command line
//!
//! This binary renders, inspects, and validates sample sets.

use clap::Parser;
use std::process::ExitCode;

use swaragen_cli::{commands, logging};

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            params,
            out_dir,
            json,
        } => commands::generate::run(&params, &out_dir, json),
        Commands::Frequencies { params, json } => commands::frequencies::run(&params, json),
        Commands::Shrutis { json } => commands::shrutis::run(json),
        Commands::Validate { params, json } => commands::validate::run(&params, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "swaragen",
            "generate",
            "--base-note",
            "C4",
            "--base-freq",
            "261.626",
            "--ratios",
            "1,256/243,10/9,32/27,5/4,4/3,45/32,3/2,128/81,5/3,16/9,15/8",
            "--out-dir",
            "out",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                params,
                out_dir,
                json,
            } => {
                assert_eq!(params.base_note.as_deref(), Some("C4"));
                assert_eq!(params.base_freq, Some(261.626));
                assert_eq!(params.ratios.map(|r| r.len()), Some(12));
                assert_eq!(out_dir, "out");
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_rejects_conflicting_tunings() {
        let result = Cli::try_parse_from([
            "swaragen",
            "frequencies",
            "--base-midi",
            "60",
            "--base-freq",
            "261.626",
            "--ratios",
            "1",
            "--shruti-defaults",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_base_note_and_midi() {
        let result = Cli::try_parse_from([
            "swaragen",
            "validate",
            "--base-note",
            "C4",
            "--base-midi",
            "60",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_verbose() {
        let cli = Cli::try_parse_from(["swaragen", "shrutis", "-v", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Shrutis { json: true }));
    }
}

//! CLI argument definitions for the swaragen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use swaragen_cli::input::ParamArgs;

/// Swaragen - Tuned harmonium sample-set generator
#[derive(Parser)]
#[command(name = "swaragen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log pipeline progress to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render one sample per note and write them with a manifest
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output directory (samples go to DIR/samples/{midi}.wav)
        #[arg(short, long)]
        out_dir: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the frequency of every note without rendering audio
    Frequencies {
        #[command(flatten)]
        params: ParamArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the 22 shrutis and their ratios
    Shrutis {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a parameter document
    Validate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

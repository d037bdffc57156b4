//! CLI argument definitions for binfab
//!
//! All clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "binfab")]
#[command(about = "Prefab object array (binfab) decoder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a binfab file and print the structure plus damage fields
    #[command(visible_alias = "d")]
    Decode {
        /// Path to binfab file (reads stdin if omitted)
        input: Option<PathBuf>,

        /// Print a JSON document instead of the plain listing
        #[arg(short, long)]
        json: bool,

        /// Maximum structural nesting depth
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Print only the extracted damage fields
    #[command(visible_alias = "f")]
    Fields {
        /// Path to binfab file (reads stdin if omitted)
        input: Option<PathBuf>,

        /// Print a JSON document instead of the plain listing
        #[arg(short, long)]
        json: bool,
    },

    /// Hex dump and per-element breakdown of a binfab file
    #[command(visible_alias = "i")]
    Inspect {
        /// Path to binfab file (reads stdin if omitted)
        input: Option<PathBuf>,
    },
}

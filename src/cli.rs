//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the selective copier.
///
/// All three paths are positional and optional, falling back to placeholder
/// defaults relative to the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "pluck",
    about = "Copy a manifest-selected set of files between directories",
    version
)]
pub struct Cli {
    /// Path to the JSON manifest listing files to copy
    #[arg(default_value = "./manifest.json")]
    pub manifest: PathBuf,

    /// Directory to copy the listed files from
    #[arg(default_value = "./source")]
    pub source: PathBuf,

    /// Directory to copy the listed files into (created if absent)
    #[arg(default_value = "./dest")]
    pub dest: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

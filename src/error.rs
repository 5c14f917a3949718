//! Typed errors for the fatal failure modes of a copy run.
//!
//! Internal modules return these via [`thiserror`]; the binary converts
//! them to [`anyhow::Error`] at the outermost boundary and maps any `Err`
//! to a nonzero exit. Per-file copy failures are deliberately not here:
//! they are reported, counted, and never abort the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from loading and validating the JSON manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file does not exist.
    #[error("JSON file not found: {0}")]
    NotFound(PathBuf),

    /// The manifest file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest contents are not valid JSON.
    #[error("Failed to parse JSON: {source}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parser error, including line and column.
        source: serde_json::Error,
    },

    /// The document parsed but does not have the required shape.
    #[error("JSON must contain a key 'pip' with a list of filenames")]
    Shape,
}

/// Fatal errors that abort a copy run before any file is processed.
#[derive(Error, Debug)]
pub enum RunError {
    /// Manifest loading or validation failed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// The source directory does not exist.
    #[error("Source directory does not exist: {0}")]
    SourceDirMissing(PathBuf),

    /// The destination directory could not be created.
    #[error("Failed to create destination directory {path}: {source}")]
    CreateDestDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

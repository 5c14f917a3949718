//! Selective file copier.
//!
//! Reads a JSON manifest of the form `{ "pip": ["a.whl", "b.whl"] }` and
//! copies the listed files from a source directory to a destination
//! directory, printing a per-file outcome line and an aggregate summary.
//!
//! The public API is organised into small layers:
//!
//! - **[`cli`]** — command-line argument parsing
//! - **[`manifest`]** — JSON manifest loading and validation
//! - **[`copier`]** — the copy loop and run report
//! - **[`error`]** — typed fatal errors, converted to [`anyhow::Error`]
//!   at the binary boundary
//! - **[`logging`]** — console output with tagged, colored lines

pub mod cli;
pub mod copier;
pub mod error;
pub mod logging;
pub mod manifest;

pub use copier::{Report, run};

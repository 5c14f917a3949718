//! JSON manifest loading and validation.
//!
//! The manifest is a JSON object with a key `pip` holding a list of
//! filenames. Other top-level keys are ignored. Validation is strict about
//! the shape but lenient about the entries: any non-string entry is coerced
//! to its JSON text rather than rejected.

use std::path::Path;

use serde_json::Value;

use crate::error::ManifestError;

/// A validated copy manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Filenames to copy, in manifest order, duplicates preserved.
    pub files: Vec<String>,
}

impl Manifest {
    /// Load and validate the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ManifestError`] if the file is absent, unreadable, not
    /// valid JSON, or not an object with a `pip` list.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let doc: Value = serde_json::from_str(&contents).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_value(&doc)
    }

    /// Validate the parsed document shape and coerce entries to text.
    fn from_value(doc: &Value) -> Result<Self, ManifestError> {
        let entries = doc
            .as_object()
            .and_then(|obj| obj.get("pip"))
            .and_then(Value::as_array)
            .ok_or(ManifestError::Shape)?;

        let files = entries.iter().map(coerce_name).collect();
        Ok(Self { files })
    }
}

/// Render a manifest entry as a filename.
///
/// Strings are taken verbatim; any other JSON value becomes its compact
/// JSON text (`7`, `true`, `null`, ...).
fn coerce_name(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

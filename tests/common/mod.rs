// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed copy fixture and a fluent builder
// so each integration test can set up an isolated manifest/source/dest
// layout without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use pluck::error::RunError;
use pluck::logging::Logger;
use pluck::{Report, run};

/// An isolated copy run environment backed by a [`tempfile::TempDir`].
///
/// Holds the manifest path, a `source/` directory and a `dest/` path. The
/// `dest/` directory is not created up front; `run` is expected to create it.
/// Everything is deleted when the fixture is dropped.
pub struct CopyFixture {
    /// Temporary directory containing manifest, source and dest.
    pub dir: tempfile::TempDir,
}

impl CopyFixture {
    /// Path to the manifest file (may not exist yet).
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("manifest.json")
    }

    /// Path to the source directory.
    pub fn source_dir(&self) -> PathBuf {
        self.dir.path().join("source")
    }

    /// Path to the destination directory.
    pub fn dest_dir(&self) -> PathBuf {
        self.dir.path().join("dest")
    }

    /// Execute a copy run against the fixture's paths.
    pub fn run(&self) -> Result<Report, RunError> {
        let log = Logger::new(false);
        run(
            &self.manifest_path(),
            &self.source_dir(),
            &self.dest_dir(),
            &log,
        )
    }

    /// Read a file below `dest/` as a string.
    pub fn read_dest(&self, name: &str) -> String {
        std::fs::read_to_string(self.dest_dir().join(name)).expect("read dest file")
    }
}

/// Fluent builder for [`CopyFixture`].
pub struct FixtureBuilder {
    fixture: CopyFixture,
}

impl FixtureBuilder {
    /// Begin building a fixture with an empty `source/` directory and no
    /// manifest file.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("source")).expect("create source dir");
        Self {
            fixture: CopyFixture { dir },
        }
    }

    /// Write the manifest file with the given JSON content.
    pub fn with_manifest(self, json: &str) -> Self {
        std::fs::write(self.fixture.manifest_path(), json).expect("write manifest");
        self
    }

    /// Create a file under `source/`, including any parent directories
    /// embedded in `name`.
    pub fn with_source_file(self, name: &str, contents: &str) -> Self {
        let path = self.fixture.source_dir().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create source parent");
        }
        std::fs::write(&path, contents).expect("write source file");
        self
    }

    /// Pre-create a file under `dest/`, including parent directories.
    pub fn with_dest_file(self, name: &str, contents: &str) -> Self {
        let path = self.fixture.dest_dir().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create dest parent");
        }
        std::fs::write(&path, contents).expect("write dest file");
        self
    }

    /// Finish building and return the configured fixture.
    pub fn build(self) -> CopyFixture {
        self.fixture
    }
}

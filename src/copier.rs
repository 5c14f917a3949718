//! The copy loop: validate directories, copy each listed file, report.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::error::RunError;
use crate::logging::Logger;
use crate::manifest::Manifest;

/// Outcome of a single copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was copied to the destination.
    Copied,
    /// The file is not present in the source directory.
    Missing,
    /// The file exists but could not be copied, or its name was rejected.
    Failed,
}

/// Aggregate result of a copy run.
///
/// Every listed filename lands in exactly one bucket: `copied`, `missing`,
/// or `failed`. Failed names are reported as they happen but not carried
/// in the summary, matching the console contract.
#[derive(Debug, Default)]
pub struct Report {
    /// Number of filenames listed in the manifest.
    pub total: usize,
    /// Number of files copied successfully.
    pub copied: usize,
    /// Number of files that existed but failed to copy.
    pub failed: usize,
    /// Filenames absent from the source directory, in manifest order.
    pub missing: Vec<String>,
}

impl Report {
    /// Print the trailing summary block.
    pub fn print(&self, log: &Logger) {
        log.info("");
        log.info("===== Summary =====");
        log.info(&format!("Total listed: {}", self.total));
        log.info(&format!("Copied: {}", self.copied));
        log.info(&format!("Missing: {}", self.missing.len()));
        if !self.missing.is_empty() {
            log.info("Missing files:");
            for name in &self.missing {
                log.info(&format!(" - {name}"));
            }
        }
    }
}

/// Copy the files listed in the manifest at `manifest_path` from
/// `source_dir` to `dest_dir`.
///
/// Fatal problems (bad manifest, missing source directory, uncreatable
/// destination) abort before any file is touched. Per-file problems are
/// logged and tallied, and the run continues; they never produce an `Err`.
///
/// # Errors
///
/// Returns a [`RunError`] for the fatal cases above.
pub fn run(
    manifest_path: &Path,
    source_dir: &Path,
    dest_dir: &Path,
    log: &Logger,
) -> Result<Report, RunError> {
    let manifest = Manifest::load(manifest_path)?;

    if !source_dir.exists() {
        return Err(RunError::SourceDirMissing(source_dir.to_path_buf()));
    }

    fs::create_dir_all(dest_dir).map_err(|source| RunError::CreateDestDir {
        path: dest_dir.to_path_buf(),
        source,
    })?;

    let mut report = Report {
        total: manifest.files.len(),
        ..Report::default()
    };

    for name in &manifest.files {
        match copy_one(name, source_dir, dest_dir, log) {
            Outcome::Copied => report.copied += 1,
            Outcome::Missing => report.missing.push(name.clone()),
            Outcome::Failed => report.failed += 1,
        }
    }

    Ok(report)
}

/// Copy a single listed file, reporting the outcome line.
fn copy_one(name: &str, source_dir: &Path, dest_dir: &Path, log: &Logger) -> Outcome {
    let Some(relative) = sanitize(name) else {
        log.error(&format!(
            "Refusing to copy {name}: path escapes the destination directory"
        ));
        return Outcome::Failed;
    };

    let src = source_dir.join(&relative);
    let dst = dest_dir.join(&relative);

    if !src.exists() {
        log.miss(&format!("Not found: {}", src.display()));
        return Outcome::Missing;
    }

    match copy_file(&src, &dst, log) {
        Ok(()) => {
            log.ok(&format!("Copied: {name}"));
            Outcome::Copied
        }
        Err(e) => {
            log.error(&format!(
                "Failed to copy {} -> {}: {e:#}",
                src.display(),
                dst.display()
            ));
            Outcome::Failed
        }
    }
}

/// Reduce a manifest entry to a relative path confined to the destination.
///
/// Entries may carry relative sub-paths, which are mirrored at the
/// destination. Absolute paths, drive prefixes and `..` components are
/// rejected so a manifest cannot write outside the destination directory.
fn sanitize(name: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) | Component::ParentDir => return None,
        }
    }
    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}

/// Copy contents and metadata from `src` to `dst`, creating `dst`'s parent
/// directories first.
///
/// Permissions come over with the copy itself; the modification time is
/// carried separately and only best-effort.
fn copy_file(src: &Path, dst: &Path, log: &Logger) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }

    fs::copy(src, dst).with_context(|| "copy contents")?;

    match fs::metadata(src).and_then(|m| m.modified()) {
        Ok(mtime) => {
            let set = fs::File::options()
                .write(true)
                .open(dst)
                .and_then(|f| f.set_modified(mtime));
            if let Err(e) = set {
                log.debug(&format!("could not set mtime on {}: {e}", dst.display()));
            }
        }
        Err(e) => {
            log.debug(&format!("could not read mtime of {}: {e}", src.display()));
        }
    }

    Ok(())
}

//! Read-rewrite-write of a manifest file on disk.

use crate::error::{Result, VersionError};
use crate::ops::version::rewrite_version;
use std::fs;
use std::path::{Path, PathBuf};

/// Knobs for [`rewrite`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    /// Fail with [`VersionError::NoMatch`] instead of succeeding silently.
    pub strict: bool,
    /// Compute the change but leave the file alone.
    pub dry_run: bool,
}

/// What happened to the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub path: PathBuf,
    pub previous: Option<String>,
    pub new_version: String,
    /// New content differs from the old content.
    pub changed: bool,
    /// File was overwritten.
    pub written: bool,
}

/// Sets the first `version = "..."` in `manifest_path` to `new_version`.
///
/// The file is read in full before it is overwritten in place. A failed write
/// is not rolled back and may leave a truncated manifest behind.
pub fn rewrite(
    manifest_path: &Path,
    new_version: &str,
    options: &RewriteOptions,
) -> Result<RewriteOutcome> {
    let content = read_manifest(manifest_path)?;

    let rewritten = rewrite_version(&content, new_version)?;

    if !rewritten.matched() {
        if options.strict {
            return Err(VersionError::NoMatch(manifest_path.to_path_buf()));
        }
        log::warn!(
            "No version declaration in {}, leaving it unchanged",
            manifest_path.display()
        );
    }

    let changed = rewritten.text != content;
    let written = rewritten.matched() && !options.dry_run;

    if written {
        write_manifest(manifest_path, &rewritten.text)?;
    } else if options.dry_run {
        log::debug!("Dry run, not writing {}", manifest_path.display());
    }

    Ok(RewriteOutcome {
        path: manifest_path.to_path_buf(),
        previous: rewritten.previous,
        new_version: new_version.to_string(),
        changed,
        written,
    })
}

fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| VersionError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_manifest(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| VersionError::Write {
        path: path.to_path_buf(),
        source,
    })
}

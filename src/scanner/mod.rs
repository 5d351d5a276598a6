//! File discovery: walk a tree and keep the files whose basename matches
//! at least one glob pattern.

mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, PatternFilter};

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{KollektorError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted by
    /// their string representation.
    ///
    /// # Errors
    /// Returns an error if the directory or any entry below it cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Collect the absolute paths of every file under `root` whose basename
/// matches one of `patterns`, sorted by path string.
///
/// # Errors
/// Returns a configuration error for an empty or invalid pattern list and a
/// filesystem error if the tree cannot be walked.
pub fn collect(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let filter = PatternFilter::new(patterns)?;
    let root = resolve(root)?;
    let files = DirectoryScanner::new(filter).scan(&root)?;
    debug!(
        root = %root.display(),
        patterns = patterns.len(),
        matched = files.len(),
        "collected matching files"
    );
    Ok(files)
}

/// Absolute, lexically normalized form of `path`: `.` segments dropped and
/// `..` segments folded into their parent. Symlinks are left alone.
pub(crate) fn resolve(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|source| KollektorError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

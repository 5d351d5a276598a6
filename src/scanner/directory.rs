use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileFilter, FileScanner};
use crate::error::{KollektorError, Result};

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    follow_links: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            follow_links: false,
        }
    }

    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(self.follow_links) {
            let entry = entry.map_err(|e| KollektorError::FileSystem {
                path: e.path().unwrap_or(root).to_path_buf(),
                source: io::Error::from(e),
            })?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            let source = if root.exists() {
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory")
            } else {
                io::Error::new(io::ErrorKind::NotFound, "no such directory")
            };
            return Err(KollektorError::FileSystem {
                path: root.to_path_buf(),
                source,
            });
        }

        let mut files = self.walk(root)?;
        // Byte-wise string order, not component order: "a-b/x" sorts before "a/x".
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;

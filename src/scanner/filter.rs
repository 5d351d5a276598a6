use std::path::Path;

use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::error::{KollektorError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Matches a file's basename against an ordered list of glob patterns.
///
/// Keeps one compiled matcher per pattern so callers can ask which
/// individual pattern a file satisfies, plus a combined set for the
/// "any pattern" check used while walking.
pub struct PatternFilter {
    patterns: Vec<String>,
    matchers: Vec<GlobMatcher>,
    any: GlobSet,
}

impl PatternFilter {
    /// Compile the given patterns, preserving their order.
    ///
    /// # Errors
    /// Returns a configuration error if the list is empty or a pattern is invalid.
    pub fn new(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(KollektorError::config(
                "at least one glob pattern is required",
            ));
        }

        let mut builder = GlobSetBuilder::new();
        let mut matchers = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                KollektorError::config(format!("invalid glob pattern \"{pattern}\": {e}"))
            })?;
            matchers.push(glob.compile_matcher());
            builder.add(glob);
        }
        let any = builder.build().map_err(|e| {
            KollektorError::config(format!("invalid glob patterns: {e}"))
        })?;

        Ok(Self {
            patterns: patterns.to_vec(),
            matchers,
            any,
        })
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether the basename of `path` matches the pattern at `index`.
    #[must_use]
    pub fn matches(&self, index: usize, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        self.matchers
            .get(index)
            .is_some_and(|matcher| matcher.is_match(file_name))
    }
}

impl FileFilter for PatternFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|file_name| self.any.is_match(file_name))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

//! Run handlers over matched files and fold their output into one record
//! per directory.
//!
//! Handlers run one at a time. The outer loop walks handlers in
//! declaration order and the inner loop walks the sorted path list, so for
//! any directory the output of an earlier handler is visible to, and
//! overridden by, every later one.

mod handler;

pub use handler::{
    AsyncHandler, AsyncHandlers, Handler, HandlerResult, Handlers, SyncHandler, SyncHandlers,
};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use futures_util::FutureExt;
use globset::Glob;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{KollektorError, Result};
use crate::record::DirectoryRecord;
use crate::scanner::{self, DirectoryScanner, FileScanner, PatternFilter};

/// Call-time options for an aggregation.
pub struct Options<H> {
    handlers: Option<Handlers<H>>,
    cwd: Option<PathBuf>,
    follow_links: bool,
}

impl<H> Options<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handlers: None,
            cwd: None,
            follow_links: false,
        }
    }

    #[must_use]
    pub fn handlers(mut self, handlers: Handlers<H>) -> Self {
        self.handlers = Some(handlers);
        self
    }

    /// Root of the scan. Defaults to the process working directory.
    #[must_use]
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    #[must_use]
    pub const fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

impl<H> Default for Options<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> From<Handlers<H>> for Options<H> {
    fn from(handlers: Handlers<H>) -> Self {
        Self::new().handlers(handlers)
    }
}

/// Aggregate with handlers that may suspend.
///
/// # Errors
/// Returns a configuration error for missing, empty, invalid or duplicated
/// handlers, a filesystem error if the tree cannot be walked, and the first
/// error any handler returns.
pub async fn kollekt(options: Options<AsyncHandler<'_>>) -> Result<Vec<DirectoryRecord>> {
    run(options).await
}

/// Aggregate with synchronous handlers. Produces exactly what [`kollekt`]
/// produces for the same tree and handler output.
///
/// # Errors
/// Same as [`kollekt`].
pub fn kollekt_sync(options: Options<SyncHandler<'_>>) -> Result<Vec<DirectoryRecord>> {
    run(options)
        .now_or_never()
        .unwrap_or_else(|| unreachable!("synchronous handlers resolve on first poll"))
}

async fn run<H: Handler>(options: Options<H>) -> Result<Vec<DirectoryRecord>> {
    let Options {
        handlers,
        cwd,
        follow_links,
    } = options;
    let mut handlers = validate(handlers)?;

    let cwd = match cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().map_err(|source| KollektorError::FileSystem {
            path: PathBuf::from("."),
            source,
        })?,
    };
    let cwd = scanner::resolve(&cwd)?;

    let filter = PatternFilter::new(&handlers.patterns())?;
    let scanner = DirectoryScanner::new(filter).with_follow_links(follow_links);
    let paths = scanner.scan(&cwd)?;
    debug!(
        cwd = %cwd.display(),
        handlers = handlers.len(),
        matched = paths.len(),
        "aggregating"
    );

    let located: Vec<(String, &Path)> = paths
        .iter()
        .map(|path| {
            let dir_path = path.parent().unwrap_or(cwd.as_path());
            (relative_dir(&cwd, dir_path), dir_path)
        })
        .collect();

    let mut records: IndexMap<String, DirectoryRecord> = IndexMap::new();
    for (index, (pattern, handler)) in handlers.entries.iter_mut().enumerate() {
        for (path, (rel_dir, dir_path)) in paths.iter().zip(&located) {
            let record = records
                .entry(rel_dir.clone())
                .or_insert_with(|| DirectoryRecord::new(rel_dir, dir_path));
            if !scanner.filter().matches(index, path) {
                continue;
            }

            trace!(pattern = %pattern, path = %path.display(), "invoking handler");
            let partial = handler.call(path, record).await.map_err(|source| {
                KollektorError::Handler {
                    pattern: pattern.clone(),
                    path: path.clone(),
                    source,
                }
            })?;
            if let Some(partial) = partial {
                record.merge(partial);
            }
        }
    }

    debug!(records = records.len(), "aggregation finished");
    Ok(records.into_values().collect())
}

/// Checks that run before any filesystem access.
fn validate<H>(handlers: Option<Handlers<H>>) -> Result<Handlers<H>> {
    let handlers =
        handlers.ok_or_else(|| KollektorError::config("Missing handlers option"))?;
    if handlers.is_empty() {
        return Err(KollektorError::config(
            "handlers option must contain at least one handler",
        ));
    }

    let mut seen = HashSet::new();
    for pattern in handlers.patterns() {
        if let Err(e) = Glob::new(&pattern) {
            return Err(KollektorError::config(format!(
                "handler for \"{pattern}\" has an invalid glob pattern: {e}"
            )));
        }
        if seen.contains(&pattern) {
            return Err(KollektorError::config(format!(
                "handler for \"{pattern}\" is registered more than once"
            )));
        }
        seen.insert(pattern);
    }
    Ok(handlers)
}

/// `/`-separated path of `dir_path` below `cwd`, `.` for `cwd` itself.
fn relative_dir(cwd: &Path, dir_path: &Path) -> String {
    match dir_path.strip_prefix(cwd) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => dir_path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

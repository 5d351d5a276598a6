use std::future::{Ready, ready};
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;

use crate::error::BoxError;
use crate::record::{DirectoryRecord, Fields};

/// What a handler hands back: fields to merge, nothing, or an error that
/// aborts the aggregation.
pub type HandlerResult = std::result::Result<Option<Fields>, BoxError>;

/// A callback invoked for every file whose basename matches its pattern.
///
/// `Output` is the handler's possibly-deferred result. Synchronous handlers
/// return an already-resolved future, which lets both modes share one
/// aggregation routine.
pub trait Handler {
    type Output: Future<Output = HandlerResult>;

    fn call(&mut self, path: &Path, data: &DirectoryRecord) -> Self::Output;
}

/// Runs on the caller's thread, so it may capture non-`Send` state.
pub struct SyncHandler<'h>(Box<dyn FnMut(&Path, &DirectoryRecord) -> HandlerResult + 'h>);

impl Handler for SyncHandler<'_> {
    type Output = Ready<HandlerResult>;

    fn call(&mut self, path: &Path, data: &DirectoryRecord) -> Self::Output {
        ready((self.0)(path, data))
    }
}

/// Async handlers receive owned copies so their futures can outlive the call.
pub struct AsyncHandler<'h>(
    Box<dyn FnMut(PathBuf, DirectoryRecord) -> BoxFuture<'h, HandlerResult> + Send + 'h>,
);

impl<'h> Handler for AsyncHandler<'h> {
    type Output = BoxFuture<'h, HandlerResult>;

    fn call(&mut self, path: &Path, data: &DirectoryRecord) -> Self::Output {
        (self.0)(path.to_path_buf(), data.clone())
    }
}

/// Ordered (pattern, handler) pairs. Declaration order is the order in
/// which handlers run and merge.
pub struct Handlers<H> {
    pub(crate) entries: Vec<(String, H)>,
}

pub type SyncHandlers<'h> = Handlers<SyncHandler<'h>>;
pub type AsyncHandlers<'h> = Handlers<AsyncHandler<'h>>;

impl<H> Handlers<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Patterns in declaration order.
    #[must_use]
    pub fn patterns(&self) -> Vec<String> {
        self.entries.iter().map(|(p, _)| p.clone()).collect()
    }
}

impl<H> Default for Handlers<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h> Handlers<SyncHandler<'h>> {
    #[must_use]
    pub fn on<F>(mut self, pattern: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&Path, &DirectoryRecord) -> HandlerResult + 'h,
    {
        self.entries
            .push((pattern.into(), SyncHandler(Box::new(handler))));
        self
    }
}

impl<'h> Handlers<AsyncHandler<'h>> {
    #[must_use]
    pub fn on<F, Fut>(mut self, pattern: impl Into<String>, mut handler: F) -> Self
    where
        F: FnMut(PathBuf, DirectoryRecord) -> Fut + Send + 'h,
        Fut: Future<Output = HandlerResult> + Send + 'h,
    {
        let boxed = move |path: PathBuf, data: DirectoryRecord| -> BoxFuture<'h, HandlerResult> {
            Box::pin(handler(path, data))
        };
        self.entries
            .push((pattern.into(), AsyncHandler(Box::new(boxed))));
        self
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;

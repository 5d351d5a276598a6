//! Collect per-directory records from files matching glob patterns.
//!
//! Every file below the scan root whose basename matches a handler's
//! pattern is passed to that handler, together with the record built so
//! far for the file's directory. Whatever fields the handler returns are
//! merged into that record.
//!
//! ```no_run
//! use kollektor::{Options, SyncHandlers, kollekt_sync};
//! use serde_json::json;
//!
//! let handlers = SyncHandlers::new().on("package.json", |path, _data| {
//!     let manifest: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
//!     Ok(json!({ "name": manifest["name"] }).as_object().cloned())
//! });
//!
//! for record in kollekt_sync(Options::from(handlers).cwd("/path/to/project"))? {
//!     println!("{}: {:?}", record.dir().unwrap_or_default(), record.get("name"));
//! }
//! # Ok::<(), kollektor::KollektorError>(())
//! ```

pub mod aggregate;
pub mod error;
pub mod record;
pub mod scanner;

pub use aggregate::{
    AsyncHandlers, Handler, HandlerResult, Handlers, Options, SyncHandlers, kollekt, kollekt_sync,
};
pub use error::{BoxError, KollektorError, Result};
pub use record::{DirectoryRecord, Fields};
pub use scanner::collect;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

//! Config watcher and local preview server for folio.
//!
//! The watcher rebuilds `config.json` whenever the project config changes;
//! the preview server serves the built web directory.

pub mod server;
pub mod watcher;

pub use server::{PreviewServer, PreviewServerConfig, ServerError};
pub use watcher::{ConfigWatcher, WatchError, WatchHandle};

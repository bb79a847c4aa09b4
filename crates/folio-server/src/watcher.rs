//! Rebuilding the site config when the project config changes.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::JoinHandle;

use folio_site::{try_write_config, Session, WebOptions};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Errors that can occur while subscribing to file changes.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("File watch error: {0}")]
    Notify(#[from] notify::Error),

    #[error("Cannot watch {0}: not a file path")]
    InvalidPath(PathBuf),

    #[error("Failed to start watch worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Subscribes to changes of a single file.
pub struct ConfigWatcher;

impl ConfigWatcher {
    /// Rewrite `config.json` every time the session's config file changes.
    ///
    /// Rebuilds run one at a time on a worker thread, in non-strict mode:
    /// failures are logged and the watch continues.
    pub fn spawn(mut session: Session, opts: WebOptions) -> Result<WatchHandle, WatchError> {
        let path = session.config_path().to_path_buf();
        tracing::info!("Watching {} for changes", path.display());
        Self::on_change(&path, move || {
            tracing::info!("Config changed, rebuilding");
            try_write_config(&mut session, &opts);
        })
    }

    /// Call `callback` every time `path` is created or modified.
    ///
    /// Events are handled serially in arrival order and are not coalesced.
    pub fn on_change<F>(path: &Path, mut callback: F) -> Result<WatchHandle, WatchError>
    where
        F: FnMut() + Send + 'static,
    {
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| WatchError::InvalidPath(path.to_path_buf()))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (tx, rx) = mpsc::channel();

        // Editors often replace files instead of writing in place, so watch
        // the directory and filter by name.
        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let worker = std::thread::Builder::new()
            .name("folio-config-watch".to_string())
            .spawn(move || {
                while let Ok(event) = rx.recv() {
                    if touches(&event, &file_name) {
                        callback();
                    }
                }
            })?;

        Ok(WatchHandle {
            watcher: Some(watcher),
            worker: Some(worker),
        })
    }
}

/// Whether an event creates or modifies the watched file.
fn touches(event: &notify::Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

/// Keeps a subscription alive. Dropping it cancels the subscription.
pub struct WatchHandle {
    watcher: Option<RecommendedWatcher>,
    worker: Option<JoinHandle<()>>,
}

impl WatchHandle {
    /// Stop watching and wait for an in-flight rebuild to finish.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the watcher drops the event sender, which ends the worker loop.
        self.watcher.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

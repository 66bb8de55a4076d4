//! File system watcher feeding library change notifications

use notify::Watcher;
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

use crate::error::Result;

/// Debounce window for change notifications
const DEBOUNCE_MS: u64 = 300;

/// File watcher with debouncing for real-time library updates
pub struct FileWatcher {
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<DebouncedEvent>, notify::Error>>,
    root: PathBuf,
}

impl FileWatcher {
    /// Create a new watcher for the given library root, recursively
    pub fn new(root: &Path) -> Result<Self> {
        let (tx, rx) = channel();

        let mut debouncer = new_debouncer(Duration::from_millis(DEBOUNCE_MS), move |res| {
            let _ = tx.send(res);
        })?;

        debouncer
            .watcher()
            .watch(root, notify::RecursiveMode::Recursive)?;

        Ok(Self {
            _debouncer: debouncer,
            rx,
            root: root.to_path_buf(),
        })
    }

    /// Drain pending change events (non-blocking), returning changed paths
    /// relative to the library root
    pub fn poll(&self) -> Vec<PathBuf> {
        let mut changed = Vec::new();
        while let Ok(res) = self.rx.try_recv() {
            match res {
                Ok(events) => {
                    for event in events {
                        let rel = event
                            .path
                            .strip_prefix(&self.root)
                            .map(Path::to_path_buf)
                            .unwrap_or(event.path);
                        if !changed.contains(&rel) {
                            changed.push(rel);
                        }
                    }
                }
                Err(e) => tracing::warn!("file watcher error: {}", e),
            }
        }
        changed
    }
}

//! Interfaces to the outside world: the asset library and the global
//! selection

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::Entry;
use crate::error::Result;

/// Source of library entries and the operations that mutate them.
///
/// Paths are relative to the library root, which is the empty path.
pub trait AssetLibraryProvider {
    /// Root folder of the library
    fn root(&self) -> Entry {
        Entry::directory("")
    }

    /// Look up a single entry
    fn entry(&self, path: &Path) -> Option<Entry>;

    /// Check if the library has an entry at `path`
    fn exists(&self, path: &Path) -> bool {
        self.entry(path).is_some()
    }

    /// Direct children of a folder, in no particular order
    fn list_entries(&self, folder: &Path) -> Result<Vec<Entry>>;

    /// All entries in the library whose name matches a glob pattern
    fn search(&self, pattern: &str) -> Result<Vec<Entry>>;

    fn create_folder(&mut self, path: &Path) -> Result<()>;

    /// Rename an entry. `new_path` is the full new path, not just a name.
    fn rename(&mut self, path: &Path, new_path: &Path) -> Result<()>;

    fn move_entry(&mut self, from: &Path, to: &Path) -> Result<()>;

    /// Copy an entry. `from` may be an absolute path outside the library,
    /// which imports it.
    fn copy(&mut self, from: &Path, to: &Path) -> Result<()>;

    fn delete(&mut self, path: &Path) -> Result<()>;

    /// Paths changed since the last call (non-blocking)
    fn poll_changes(&mut self) -> Vec<PathBuf> {
        Vec::new()
    }
}

/// Receiver of the library window's selection
pub trait SelectionSink {
    fn publish(&mut self, paths: &[PathBuf]);
}

/// Selection change coming from outside the library window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalSelection {
    /// Number of non-library objects selected (scene objects and the like)
    pub scene_objects: usize,
    pub resource_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
struct SharedSelectionInner {
    paths: Vec<PathBuf>,
    revision: u64,
}

/// Cloneable selection store that hosts and tests can observe
#[derive(Debug, Clone, Default)]
pub struct SharedSelection {
    inner: Rc<RefCell<SharedSelectionInner>>,
}

impl SharedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently published paths
    pub fn paths(&self) -> Vec<PathBuf> {
        self.inner.borrow().paths.clone()
    }

    /// Number of publishes so far
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }
}

impl SelectionSink for SharedSelection {
    fn publish(&mut self, paths: &[PathBuf]) {
        let mut inner = self.inner.borrow_mut();
        inner.paths = paths.to_vec();
        inner.revision += 1;
    }
}

//! Library module - Entries, providers and path helpers

pub mod entry;
pub mod fs;
pub mod paths;
pub mod provider;
pub mod watcher;

pub use entry::{sort_entries, tail_name, Entry, EntryKind, ResourceType};
pub use fs::FsLibrary;
pub use paths::{is_valid_file_name, matches_pattern, unique_path, MAX_UNIQUE_ATTEMPTS};
pub use provider::{AssetLibraryProvider, ExternalSelection, SelectionSink, SharedSelection};
pub use watcher::FileWatcher;

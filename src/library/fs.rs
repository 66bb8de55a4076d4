//! Filesystem-backed asset library

use std::path::{Path, PathBuf};

use super::{matches_pattern, AssetLibraryProvider, Entry, FileWatcher};
use crate::error::{LibraryError, Result};

/// Asset library rooted at a directory on disk
pub struct FsLibrary {
    /// Absolute library root
    root: PathBuf,
    /// Whether to show hidden files
    show_hidden: bool,
    /// Move deleted entries to the system trash instead of removing them
    use_trash: bool,
    watcher: Option<FileWatcher>,
}

impl FsLibrary {
    /// Open a library at the given directory
    pub fn new(root: &Path) -> Result<Self> {
        let root = root.canonicalize()?;
        if !root.is_dir() {
            return Err(LibraryError::path(root, "not a directory"));
        }

        Ok(Self {
            root,
            show_hidden: false,
            use_trash: false,
            watcher: None,
        })
    }

    pub fn with_show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn with_trash(mut self, use_trash: bool) -> Self {
        self.use_trash = use_trash;
        self
    }

    /// Start watching the library for external changes
    pub fn watch(&mut self) -> Result<()> {
        if self.watcher.is_none() {
            self.watcher = Some(FileWatcher::new(&self.root)?);
            tracing::debug!(root = %self.root.display(), "watching library");
        }
        Ok(())
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    /// Absolute library root
    pub fn root_dir(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a library path. Absolute inputs are returned as is.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn is_visible(&self, name: &str) -> bool {
        self.show_hidden || !name.starts_with('.')
    }

    fn make_entry(rel: PathBuf, is_dir: bool) -> Entry {
        if is_dir {
            Entry::directory(rel)
        } else {
            Entry::file(rel)
        }
    }

    /// Recursively collect entries whose name matches `pattern`
    fn walk(&self, dir: &Path, pattern: &str, out: &mut Vec<Entry>) -> Result<()> {
        for dir_entry in std::fs::read_dir(self.resolve(dir))? {
            let dir_entry = dir_entry?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if !self.is_visible(&name) {
                continue;
            }

            let rel = dir.join(&name);
            let is_dir = dir_entry.file_type()?.is_dir();
            if matches_pattern(&name, pattern) {
                out.push(Self::make_entry(rel.clone(), is_dir));
            }
            if is_dir {
                self.walk(&rel, pattern, out)?;
            }
        }
        Ok(())
    }

    fn ensure_free(&self, dest: &Path) -> Result<PathBuf> {
        let abs = self.resolve(dest);
        if abs.exists() {
            return Err(LibraryError::path(dest, "destination already exists"));
        }
        Ok(abs)
    }
}

impl AssetLibraryProvider for FsLibrary {
    fn entry(&self, path: &Path) -> Option<Entry> {
        let abs = self.resolve(path);
        let rel = abs.strip_prefix(&self.root).ok()?.to_path_buf();
        let metadata = abs.metadata().ok()?;
        Some(Self::make_entry(rel, metadata.is_dir()))
    }

    fn list_entries(&self, folder: &Path) -> Result<Vec<Entry>> {
        let abs = self.resolve(folder);
        if !abs.is_dir() {
            return Err(LibraryError::not_found(folder));
        }

        let mut entries = Vec::new();
        for dir_entry in std::fs::read_dir(&abs)? {
            let dir_entry = dir_entry?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if !self.is_visible(&name) {
                continue;
            }
            let is_dir = dir_entry.file_type()?.is_dir();
            entries.push(Self::make_entry(folder.join(&name), is_dir));
        }
        Ok(entries)
    }

    fn search(&self, pattern: &str) -> Result<Vec<Entry>> {
        let mut out = Vec::new();
        self.walk(Path::new(""), pattern, &mut out)?;
        Ok(out)
    }

    fn create_folder(&mut self, path: &Path) -> Result<()> {
        std::fs::create_dir(self.resolve(path))?;
        tracing::info!(path = %path.display(), "created folder");
        Ok(())
    }

    fn rename(&mut self, path: &Path, new_path: &Path) -> Result<()> {
        self.move_entry(path, new_path)
    }

    fn move_entry(&mut self, from: &Path, to: &Path) -> Result<()> {
        let dest = self.ensure_free(to)?;
        std::fs::rename(self.resolve(from), dest)?;
        tracing::info!(from = %from.display(), to = %to.display(), "moved entry");
        Ok(())
    }

    fn copy(&mut self, from: &Path, to: &Path) -> Result<()> {
        let src = self.resolve(from);
        let dest = self.ensure_free(to)?;
        if src.is_dir() {
            copy_dir_recursive(&src, &dest)?;
        } else {
            std::fs::copy(&src, &dest)?;
        }
        tracing::info!(from = %from.display(), to = %to.display(), "copied entry");
        Ok(())
    }

    fn delete(&mut self, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(LibraryError::path(path, "cannot delete the library root"));
        }

        let abs = self.resolve(path);
        if self.use_trash {
            trash::delete(&abs)?;
        } else if abs.is_dir() {
            std::fs::remove_dir_all(&abs)?;
        } else {
            std::fs::remove_file(&abs)?;
        }
        tracing::info!(path = %path.display(), trash = self.use_trash, "deleted entry");
        Ok(())
    }

    fn poll_changes(&mut self) -> Vec<PathBuf> {
        self.watcher
            .as_ref()
            .map(FileWatcher::poll)
            .unwrap_or_default()
    }
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    std::fs::create_dir_all(dest)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            std::fs::copy(&src_path, &dest_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{EntryKind, ResourceType};
    use tempfile::TempDir;

    fn library_with_files() -> (TempDir, FsLibrary) {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("Textures")).unwrap();
        std::fs::write(temp.path().join("Textures/wood.png"), "").unwrap();
        std::fs::write(temp.path().join("readme.txt"), "hello").unwrap();
        std::fs::write(temp.path().join(".hidden"), "").unwrap();
        let lib = FsLibrary::new(temp.path()).unwrap();
        (temp, lib)
    }

    #[test]
    fn test_list_entries_relative_paths() {
        let (_temp, lib) = library_with_files();
        let mut entries = lib.list_entries(Path::new("")).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, PathBuf::from("Textures"));
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[1].path, PathBuf::from("readme.txt"));
    }

    #[test]
    fn test_show_hidden() {
        let (_temp, lib) = library_with_files();
        let lib = lib.with_show_hidden(true);
        let entries = lib.list_entries(Path::new("")).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_entry_lookup() {
        let (_temp, lib) = library_with_files();
        let entry = lib.entry(Path::new("Textures/wood.png")).unwrap();
        assert_eq!(entry.resource_type, Some(ResourceType::Texture));
        assert!(lib.exists(Path::new("Textures")));
        assert!(!lib.exists(Path::new("missing.png")));
        assert!(lib.entry(Path::new("")).unwrap().is_dir());
    }

    #[test]
    fn test_search_recursive() {
        let (_temp, lib) = library_with_files();
        let found = lib.search("*woo*").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, PathBuf::from("Textures/wood.png"));
    }

    #[test]
    fn test_copy_and_move() {
        let (temp, mut lib) = library_with_files();
        lib.copy(Path::new("Textures"), Path::new("Textures_0"))
            .unwrap();
        assert!(temp.path().join("Textures_0/wood.png").exists());

        lib.move_entry(Path::new("readme.txt"), Path::new("Textures/readme.txt"))
            .unwrap();
        assert!(!temp.path().join("readme.txt").exists());
        assert!(temp.path().join("Textures/readme.txt").exists());
    }

    #[test]
    fn test_move_refuses_overwrite() {
        let (_temp, mut lib) = library_with_files();
        lib.copy(Path::new("readme.txt"), Path::new("Textures/readme.txt"))
            .unwrap();
        let err = lib
            .move_entry(Path::new("readme.txt"), Path::new("Textures/readme.txt"))
            .unwrap_err();
        assert!(matches!(err, LibraryError::Path { .. }));
    }

    #[test]
    fn test_delete_without_trash() {
        let (temp, mut lib) = library_with_files();
        lib.delete(Path::new("Textures")).unwrap();
        assert!(!temp.path().join("Textures").exists());
        assert!(lib.delete(Path::new("")).is_err());
    }

    #[test]
    fn test_import_external_file() {
        let (temp, mut lib) = library_with_files();
        let outside = TempDir::new().unwrap();
        let src = outside.path().join("rock.fbx");
        std::fs::write(&src, "mesh").unwrap();

        lib.copy(&src, Path::new("rock.fbx")).unwrap();
        assert!(temp.path().join("rock.fbx").exists());
        assert!(src.exists());
    }
}

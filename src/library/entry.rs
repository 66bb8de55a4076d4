//! Library entry descriptors

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Whether an entry is a folder or a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

/// Type of resource stored in a file entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Texture,
    SpriteTexture,
    Mesh,
    Font,
    Shader,
    ShaderInclude,
    Material,
    Prefab,
    PlainText,
    ScriptCode,
    StringTable,
    GuiSkin,
    PhysicsMaterial,
    PhysicsMesh,
    Undefined,
}

/// Extension -> resource type mapping, lowercase extensions
const EXTENSION_TYPES: &[(&str, ResourceType)] = &[
    ("png", ResourceType::Texture),
    ("jpg", ResourceType::Texture),
    ("jpeg", ResourceType::Texture),
    ("bmp", ResourceType::Texture),
    ("tga", ResourceType::Texture),
    ("psd", ResourceType::Texture),
    ("gif", ResourceType::Texture),
    ("dds", ResourceType::Texture),
    ("sprite", ResourceType::SpriteTexture),
    ("fbx", ResourceType::Mesh),
    ("obj", ResourceType::Mesh),
    ("dae", ResourceType::Mesh),
    ("gltf", ResourceType::Mesh),
    ("glb", ResourceType::Mesh),
    ("ttf", ResourceType::Font),
    ("otf", ResourceType::Font),
    ("bsl", ResourceType::Shader),
    ("shader", ResourceType::Shader),
    ("hlsl", ResourceType::Shader),
    ("glsl", ResourceType::Shader),
    ("wgsl", ResourceType::Shader),
    ("bslinc", ResourceType::ShaderInclude),
    ("mat", ResourceType::Material),
    ("prefab", ResourceType::Prefab),
    ("txt", ResourceType::PlainText),
    ("md", ResourceType::PlainText),
    ("json", ResourceType::PlainText),
    ("toml", ResourceType::PlainText),
    ("yaml", ResourceType::PlainText),
    ("yml", ResourceType::PlainText),
    ("xml", ResourceType::PlainText),
    ("csv", ResourceType::PlainText),
    ("cs", ResourceType::ScriptCode),
    ("rs", ResourceType::ScriptCode),
    ("lua", ResourceType::ScriptCode),
    ("py", ResourceType::ScriptCode),
    ("js", ResourceType::ScriptCode),
    ("ts", ResourceType::ScriptCode),
    ("strtbl", ResourceType::StringTable),
    ("skin", ResourceType::GuiSkin),
    ("physmat", ResourceType::PhysicsMaterial),
    ("physmesh", ResourceType::PhysicsMesh),
];

impl ResourceType {
    /// Detect the resource type from a file extension
    pub fn from_path(path: &Path) -> ResourceType {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => e.to_lowercase(),
            None => return ResourceType::Undefined,
        };

        EXTENSION_TYPES
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, t)| *t)
            .unwrap_or(ResourceType::Undefined)
    }
}

/// A file or folder in the asset library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path relative to the library root
    pub path: PathBuf,
    /// Display name
    pub name: String,
    pub kind: EntryKind,
    /// Resource type (files only)
    pub resource_type: Option<ResourceType>,
}

impl Entry {
    /// Create a directory entry
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: tail_name(&path),
            path,
            kind: EntryKind::Directory,
            resource_type: None,
        }
    }

    /// Create a file entry, detecting its resource type from the extension
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let resource_type = Some(ResourceType::from_path(&path));
        Self {
            name: tail_name(&path),
            path,
            kind: EntryKind::File,
            resource_type,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Last path component as a display string
pub fn tail_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Sort: directories first, then by name
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_detection() {
        assert_eq!(
            ResourceType::from_path(Path::new("a/wood.PNG")),
            ResourceType::Texture
        );
        assert_eq!(
            ResourceType::from_path(Path::new("player.prefab")),
            ResourceType::Prefab
        );
        assert_eq!(
            ResourceType::from_path(Path::new("noext")),
            ResourceType::Undefined
        );
    }

    #[test]
    fn test_entry_name_from_path() {
        let e = Entry::file("Textures/wood.png");
        assert_eq!(e.name, "wood.png");
        assert_eq!(e.resource_type, Some(ResourceType::Texture));
        assert!(!e.is_dir());
    }

    #[test]
    fn test_sort_directories_first() {
        let mut entries = vec![
            Entry::file("b.txt"),
            Entry::directory("zeta"),
            Entry::file("a.txt"),
            Entry::directory("alpha"),
        ];
        sort_entries(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta", "a.txt", "b.txt"]);
    }
}

//! Library item icons
//!
//! Resource types map to icons through a static table; the terminal
//! front-end draws each icon as a Nerd Fonts glyph.

use crate::library::{Entry, ResourceType};

/// Icon shown on a library tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryIcon {
    Folder,
    Font,
    Mesh,
    Texture,
    PlainText,
    ScriptCode,
    SpriteTexture,
    Shader,
    Material,
    Prefab,
    GuiSkin,
    PhysicsMaterial,
    PhysicsMesh,
    /// Files whose resource type has no dedicated icon
    Unknown,
}

/// Resource type -> icon. Types missing here use [`LibraryIcon::Unknown`].
const RESOURCE_ICONS: &[(ResourceType, LibraryIcon)] = &[
    (ResourceType::Font, LibraryIcon::Font),
    (ResourceType::Mesh, LibraryIcon::Mesh),
    (ResourceType::Texture, LibraryIcon::Texture),
    (ResourceType::PlainText, LibraryIcon::PlainText),
    (ResourceType::ScriptCode, LibraryIcon::ScriptCode),
    (ResourceType::SpriteTexture, LibraryIcon::SpriteTexture),
    (ResourceType::Shader, LibraryIcon::Shader),
    (ResourceType::ShaderInclude, LibraryIcon::Shader),
    (ResourceType::Material, LibraryIcon::Material),
    (ResourceType::Prefab, LibraryIcon::Prefab),
    (ResourceType::GuiSkin, LibraryIcon::GuiSkin),
    (ResourceType::PhysicsMaterial, LibraryIcon::PhysicsMaterial),
    (ResourceType::PhysicsMesh, LibraryIcon::PhysicsMesh),
];

impl LibraryIcon {
    /// Icon for a resource type
    pub fn for_resource(resource_type: ResourceType) -> LibraryIcon {
        RESOURCE_ICONS
            .iter()
            .find(|(t, _)| *t == resource_type)
            .map(|(_, icon)| *icon)
            .unwrap_or(LibraryIcon::Unknown)
    }

    /// Icon for a library entry
    pub fn for_entry(entry: &Entry) -> LibraryIcon {
        if entry.is_dir() {
            return LibraryIcon::Folder;
        }
        entry
            .resource_type
            .map(Self::for_resource)
            .unwrap_or(LibraryIcon::Unknown)
    }

    /// Nerd Fonts glyph used by the terminal renderer
    pub fn glyph(self) -> &'static str {
        match self {
            LibraryIcon::Folder => "\u{f07b}",          //
            LibraryIcon::Font => "\u{f031}",            //
            LibraryIcon::Mesh => "\u{f1b2}",            //  (cube)
            LibraryIcon::Texture => "\u{f03e}",         //
            LibraryIcon::PlainText => "\u{f15c}",       //
            LibraryIcon::ScriptCode => "\u{f121}",      //
            LibraryIcon::SpriteTexture => "\u{f1c5}",   //
            LibraryIcon::Shader => "\u{f0eb}",          //
            LibraryIcon::Material => "\u{f1fc}",        //  (paint brush)
            LibraryIcon::Prefab => "\u{f1b3}",          //  (cubes)
            LibraryIcon::GuiSkin => "\u{f108}",         //
            LibraryIcon::PhysicsMaterial => "\u{f0e7}", //
            LibraryIcon::PhysicsMesh => "\u{f1b2}",     //
            LibraryIcon::Unknown => "\u{f15b}",         //
        }
    }
}

/// Icon plus the size it is drawn at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRef {
    pub icon: LibraryIcon,
    pub size: i32,
}

impl IconRef {
    pub fn new(icon: LibraryIcon, size: i32) -> Self {
        Self { icon, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_icon() {
        assert_eq!(
            LibraryIcon::for_entry(&Entry::directory("Textures")),
            LibraryIcon::Folder
        );
    }

    #[test]
    fn test_shader_include_shares_shader_icon() {
        assert_eq!(
            LibraryIcon::for_resource(ResourceType::ShaderInclude),
            LibraryIcon::Shader
        );
    }

    #[test]
    fn test_unmapped_types() {
        assert_eq!(
            LibraryIcon::for_resource(ResourceType::StringTable),
            LibraryIcon::Unknown
        );
        assert_eq!(
            LibraryIcon::for_entry(&Entry::file("notes.unknownext")),
            LibraryIcon::Unknown
        );
    }

    #[test]
    fn test_every_icon_has_glyph() {
        for (_, icon) in RESOURCE_ICONS {
            assert!(!icon.glyph().is_empty());
        }
    }
}

//! View type and window mode definitions

use std::path::PathBuf;
use std::str::FromStr;

/// How resource tiles are displayed in the content area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewType {
    Grid64,
    Grid48,
    #[default]
    Grid32,
    List16,
}

impl ViewType {
    /// Tile size in pixels
    pub fn tile_size(self) -> i32 {
        match self {
            ViewType::Grid64 => 64,
            ViewType::Grid48 => 48,
            ViewType::Grid32 => 32,
            ViewType::List16 => 16,
        }
    }

    pub fn is_grid(self) -> bool {
        !matches!(self, ViewType::List16)
    }

    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewType::Grid64 => "grid64",
            ViewType::Grid48 => "grid48",
            ViewType::Grid32 => "grid32",
            ViewType::List16 => "list16",
        }
    }
}

impl FromStr for ViewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid64" | "large" => Ok(ViewType::Grid64),
            "grid48" | "medium" => Ok(ViewType::Grid48),
            "grid32" | "small" | "grid" => Ok(ViewType::Grid32),
            "list16" | "list" => Ok(ViewType::List16),
            other => Err(format!(
                "unknown view '{}', expected list16, grid32, grid48 or grid64",
                other
            )),
        }
    }
}

/// Directions the selection cursor can move in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Modifier keys held while a selection gesture happens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        shift: true,
    };
}

/// Current window mode with embedded state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WindowMode {
    /// Normal browsing mode
    #[default]
    Browse,
    /// An entry is being renamed in place
    Rename { original: PathBuf },
    /// Confirmation dialog
    Confirm { action: PendingAction },
    /// Modal message the user has to dismiss
    Alert { title: String, message: String },
}

/// Action pending confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Delete files/directories
    Delete { targets: Vec<PathBuf> },
}

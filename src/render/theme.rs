//! Theme configuration and color management
//!
//! Loads theme from `~/.config/libview/theme.toml`

use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::app::ConfigFile;
use crate::content::{Tint, UnderlayState};

/// Global theme instance
static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the global theme instance
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

/// Theme configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeFile {
    /// Base colors
    pub colors: BaseColors,
    /// Tile colors
    pub tiles: TileColors,
}

/// Base UI colors
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BaseColors {
    /// Foreground (text) color
    pub foreground: String,
    /// Border color
    pub border: String,
    /// Active border color (focused panel)
    pub border_active: String,
    /// Status bar foreground
    pub status_fg: String,
    /// Error message color
    pub error: String,
    /// Info message color
    pub info: String,
}

impl Default for BaseColors {
    fn default() -> Self {
        Self {
            foreground: "white".to_string(),
            border: "default".to_string(),
            border_active: "cyan".to_string(),
            status_fg: "white".to_string(),
            error: "red".to_string(),
            info: "blue".to_string(),
        }
    }
}

/// Tile colors. Empty underlay colors use the built-in tints.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TileColors {
    /// Folder icon color
    pub directory: String,
    /// File icon color
    pub file: String,
    /// Icon color of entries on the cut clipboard
    pub cut: String,
    /// Selected entry underlay
    pub selection: String,
    /// Hovered entry underlay
    pub hover: String,
    /// Pinged entry underlay
    pub ping: String,
    /// Drag selection rectangle
    pub drag_rect: String,
}

impl Default for TileColors {
    fn default() -> Self {
        Self {
            directory: "blue".to_string(),
            file: "white".to_string(),
            cut: "darkgray".to_string(),
            selection: String::new(),
            hover: String::new(),
            ping: String::new(),
            drag_rect: "cyan".to_string(),
        }
    }
}

impl ThemeFile {
    /// Get the theme file path (~/.config/libview/theme.toml)
    pub fn theme_path() -> Option<PathBuf> {
        ConfigFile::config_dir().map(|p| p.join("theme.toml"))
    }

    /// Load theme from file
    pub fn load() -> Self {
        Self::theme_path()
            .filter(|path| path.exists())
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|content| match toml::from_str(&content) {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!("ignoring invalid theme file: {}", e);
                    None
                }
            })
            .unwrap_or_default()
    }
}

/// Parsed theme with ratatui Color values
#[derive(Debug)]
pub struct Theme {
    pub foreground: Color,
    pub border: Color,
    pub border_active: Color,
    pub status_fg: Color,
    pub error: Color,
    pub info: Color,

    pub directory: Color,
    pub file: Color,
    pub cut: Color,
    pub drag_rect: Color,

    // Underlay overrides
    selection: Option<Color>,
    hover: Option<Color>,
    ping: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_file(&ThemeFile::default())
    }
}

impl Theme {
    /// Load theme from config file
    pub fn load() -> Self {
        let file = ThemeFile::load();
        Self::from_file(&file)
    }

    /// Create theme from ThemeFile
    fn from_file(file: &ThemeFile) -> Self {
        let optional = |s: &str| (!s.trim().is_empty()).then(|| parse_color(s));

        Self {
            foreground: parse_color(&file.colors.foreground),
            border: parse_color(&file.colors.border),
            border_active: parse_color(&file.colors.border_active),
            status_fg: parse_color(&file.colors.status_fg),
            error: parse_color(&file.colors.error),
            info: parse_color(&file.colors.info),

            directory: parse_color(&file.tiles.directory),
            file: parse_color(&file.tiles.file),
            cut: parse_color(&file.tiles.cut),
            drag_rect: parse_color(&file.tiles.drag_rect),

            selection: optional(&file.tiles.selection),
            hover: optional(&file.tiles.hover),
            ping: optional(&file.tiles.ping),
        }
    }

    /// Background color of an underlay
    pub fn underlay_color(&self, state: UnderlayState, tint: Tint) -> Color {
        let custom = match state {
            UnderlayState::None => None,
            UnderlayState::Hovered => self.hover,
            UnderlayState::Selected => self.selection,
            UnderlayState::Pinged => self.ping,
        };
        custom.unwrap_or_else(|| tint_color(tint))
    }
}

/// Convert a tint to a terminal color, premultiplying alpha over black
pub fn tint_color(tint: Tint) -> Color {
    let channel = |c: f32| (c * tint.a).clamp(0.0, 1.0) * 255.0;
    Color::Rgb(
        channel(tint.r).round() as u8,
        channel(tint.g).round() as u8,
        channel(tint.b).round() as u8,
    )
}

/// Parse color string to ratatui Color
///
/// Supported formats:
/// - Named colors: "red", "blue", "green", etc.
/// - Hex colors: "#ff0000", "#f00"
/// - 256 colors: "color123" or "123"
pub fn parse_color(s: &str) -> Color {
    let s = s.trim().to_lowercase();

    if s == "default" || s == "reset" || s.is_empty() {
        return Color::Reset;
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    if let Some(n) = s.strip_prefix("color") {
        if let Ok(n) = n.parse::<u8>() {
            return Color::Indexed(n);
        }
    }
    if let Ok(n) = s.parse::<u8>() {
        return Color::Indexed(n);
    }

    match s.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightblue" => Color::LightBlue,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

/// Parse hex color (#rgb or #rrggbb)
fn parse_hex_color(hex: &str) -> Color {
    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

    match hex.len() {
        3 => Color::Rgb(
            channel(&hex[0..1].repeat(2)),
            channel(&hex[1..2].repeat(2)),
            channel(&hex[2..3].repeat(2)),
        ),
        6 => Color::Rgb(channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])),
        _ => Color::Reset,
    }
}

//! Render module - UI rendering

pub mod content;
pub mod status;
pub mod theme;

pub use content::{render_content, wrap_label, CellMapper};
pub use status::{render_folder_bar, render_popups, render_status_bar};
pub use theme::{parse_color, theme, Theme};

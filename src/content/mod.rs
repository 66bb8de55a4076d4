//! Content module - Tile layout, entry views and the content panel

pub mod entry_view;
pub mod icons;
pub mod layout;
pub mod panel;

pub use entry_view::{compute_bounds, EntryView, RenameField, Tint, Underlay, UnderlayState};
pub use icons::{IconRef, LibraryIcon};
pub use layout::{LayoutMetrics, TileLayout, Viewport};
pub use panel::ContentPanel;

//! Selection module - Selection controller and clipboard

pub mod clipboard;
pub mod controller;

pub use clipboard::{Clipboard, ClipboardContent};
pub use controller::{DragSelection, SelectionContext, SelectionController};

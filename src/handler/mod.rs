//! Handler module - Input event handling

pub mod action;
pub mod key;
pub mod mouse;

pub use action::{
    handle_action, handle_mouse_action, handle_paste, ActionResult, PointerState, UiState,
};
pub use key::{handle_key_event, KeyAction, TextEdit};
pub use mouse::{handle_mouse_event, parse_dropped_paths, ClickDetector, MouseAction};

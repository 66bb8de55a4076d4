//! Application module
//!
//! This module contains the configuration, logging setup and event loop
//! of the `lv` binary.

mod config;
mod config_file;
mod event_loop;
mod logging;
mod render;

pub use config::{exit_code, Command, Config};
pub use config_file::{ConfigFile, GeneralConfig, LayoutConfig};
pub use event_loop::{open_library, run_app};
pub use logging::{init_logging, LOG_ENV};
pub use render::{frame_areas, render_frame, FrameAreas};

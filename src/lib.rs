//! libview - Tile layout and selection engine for an asset library window
//!
//! This crate lays out library entries as a list or a grid of tiles, tracks
//! the selection with keyboard, click and rectangle gestures, and drives
//! folder navigation, search and clipboard operations on top of an
//! [`library::AssetLibraryProvider`]. The `lv` binary renders it in a
//! terminal.

pub mod app;
pub mod content;
pub mod core;
pub mod error;
pub mod handler;
pub mod library;
pub mod render;
pub mod selection;
pub mod window;

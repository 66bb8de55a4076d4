//! Core module - Geometry, view types and window modes

pub mod geometry;
pub mod mode;

pub use geometry::{Point, Rect};
pub use mode::{Modifiers, MoveDirection, PendingAction, ViewType, WindowMode};

//! Per-entry visual state: bounds, underlay highlight, cut tint and the
//! in-place rename field

use std::path::{Path, PathBuf};

use super::icons::IconRef;
use crate::core::Rect;
use crate::library::paths::name_without_extension;

/// Extra width added to the left and right of the selection underlay
pub const SELECTION_EXTRA_WIDTH: i32 = 3;
/// Padding above the icon covered by the selection underlay
pub const SELECTION_TOP_PADDING: i32 = 5;

/// RGBA color, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Tint {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Tint = Tint::rgba(1.0, 1.0, 1.0, 1.0);
    /// Underlay of a pinged entry
    pub const PING: Tint = Tint::rgba(1.0, 0.43, 0.0, 1.0);
    /// Underlay of a selected entry
    pub const SELECTION: Tint = Tint::rgba(0.0, 0.55, 0.55, 1.0);
    /// Underlay of a hovered entry
    pub const HOVER: Tint = Tint::rgba(0.0, 0.55, 0.55, 0.5);
    /// Icon tint of an entry on the cut clipboard
    pub const CUT: Tint = Tint::rgba(1.0, 1.0, 1.0, 0.5);
}

/// Highlight state of an entry. Later variants take precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnderlayState {
    #[default]
    None,
    Hovered,
    Selected,
    Pinged,
}

impl UnderlayState {
    fn tint(self) -> Option<Tint> {
        match self {
            UnderlayState::None => None,
            UnderlayState::Hovered => Some(Tint::HOVER),
            UnderlayState::Selected => Some(Tint::SELECTION),
            UnderlayState::Pinged => Some(Tint::PING),
        }
    }
}

/// Colored rectangle drawn beneath an entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Underlay {
    pub bounds: Rect,
    pub tint: Tint,
}

/// Single-line text field used to rename an entry in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameField {
    text: String,
    /// Cursor position in characters
    cursor: usize,
    pub bounds: Rect,
}

impl RenameField {
    /// Field seeded with `text`, cursor at the end
    pub fn new(text: impl Into<String>, bounds: Rect) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            bounds,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }
}

/// One displayed tile or row in the content area
#[derive(Debug, Clone)]
pub struct EntryView {
    /// Position in the current display list
    pub index: usize,
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub icon: IconRef,
    pub icon_bounds: Rect,
    pub label_bounds: Rect,
    /// Hit-test and underlay area
    pub bounds: Rect,
    underlay_state: UnderlayState,
    underlay: Option<Underlay>,
    icon_tint: Tint,
    rename: Option<RenameField>,
}

impl EntryView {
    pub fn new(
        index: usize,
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        is_dir: bool,
        icon: IconRef,
        icon_bounds: Rect,
        label_bounds: Rect,
    ) -> Self {
        Self {
            index,
            path: path.into(),
            name: name.into(),
            is_dir,
            icon,
            icon_bounds,
            label_bounds,
            bounds: compute_bounds(&icon_bounds, &label_bounds),
            underlay_state: UnderlayState::None,
            underlay: None,
            icon_tint: Tint::WHITE,
            rename: None,
        }
    }

    pub fn underlay_state(&self) -> UnderlayState {
        self.underlay_state
    }

    pub fn underlay(&self) -> Option<&Underlay> {
        self.underlay.as_ref()
    }

    pub fn icon_tint(&self) -> Tint {
        self.icon_tint
    }

    pub fn is_cut(&self) -> bool {
        self.icon_tint == Tint::CUT
    }

    /// Apply or clear a highlight.
    ///
    /// Ignored while a higher priority state is active. Clearing always
    /// resets to [`UnderlayState::None`].
    pub fn set_underlay(&mut self, state: UnderlayState, active: bool) {
        if self.underlay_state > state {
            return;
        }

        match (active, state.tint()) {
            (true, Some(tint)) => {
                let bounds = self.bounds;
                let underlay = self.underlay.get_or_insert(Underlay { bounds, tint });
                underlay.tint = tint;
                self.underlay_state = state;
            }
            _ => {
                self.underlay = None;
                self.underlay_state = UnderlayState::None;
            }
        }
    }

    pub fn mark_hovered(&mut self, active: bool) {
        self.set_underlay(UnderlayState::Hovered, active);
    }

    pub fn mark_selected(&mut self, active: bool) {
        self.set_underlay(UnderlayState::Selected, active);
    }

    pub fn mark_pinged(&mut self, active: bool) {
        self.set_underlay(UnderlayState::Pinged, active);
    }

    /// Tint the icon to show the entry is on the cut clipboard
    pub fn mark_cut(&mut self, active: bool) {
        self.icon_tint = if active { Tint::CUT } else { Tint::WHITE };
    }

    /// Swap the label for an edit field seeded with the name without its
    /// extension. No-op if already renaming.
    pub fn begin_rename(&mut self) {
        if self.rename.is_some() {
            return;
        }

        let label = self.label_bounds;
        let bounds = Rect::new(label.x - 4, label.y, label.width + 8, label.height + 8);
        let seed = name_without_extension(Path::new(&self.name));
        self.rename = Some(RenameField::new(seed, bounds));
    }

    pub fn end_rename(&mut self) {
        self.rename = None;
    }

    /// Continue an edit started on an earlier view of the same entry. The
    /// field keeps its text and cursor and moves to this view's label.
    pub fn resume_rename(&mut self, mut field: RenameField) {
        self.end_rename();
        self.begin_rename();
        if let Some(current) = &self.rename {
            field.bounds = current.bounds;
        }
        self.rename = Some(field);
    }

    /// Stop renaming and hand back the field
    pub fn take_rename(&mut self) -> Option<RenameField> {
        self.rename.take()
    }

    pub fn is_renaming(&self) -> bool {
        self.rename.is_some()
    }

    /// Current contents of the rename field, empty when not renaming
    pub fn rename_text(&self) -> &str {
        self.rename.as_ref().map(RenameField::text).unwrap_or("")
    }

    pub fn rename_field(&self) -> Option<&RenameField> {
        self.rename.as_ref()
    }

    pub fn rename_field_mut(&mut self) -> Option<&mut RenameField> {
        self.rename.as_mut()
    }
}

/// Union of icon and label, widened by [`SELECTION_EXTRA_WIDTH`] on both
/// sides of the label and raised by [`SELECTION_TOP_PADDING`]
pub fn compute_bounds(icon: &Rect, label: &Rect) -> Rect {
    let x = icon.x.min(label.x - SELECTION_EXTRA_WIDTH);
    let y = icon.y.min(label.y) - SELECTION_TOP_PADDING;
    let right = icon.right().max(label.right()) + SELECTION_EXTRA_WIDTH;
    let bottom = icon.bottom().max(label.bottom());
    Rect::new(x, y, right - x, bottom - y)
}

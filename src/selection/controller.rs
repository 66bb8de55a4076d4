//! Anchor-based selection over the content panel
//!
//! Selection indices refer to the display list of the last refresh.
//! Anchors also remember their path so they can be remapped when the
//! listing is rebuilt.

use std::path::{Path, PathBuf};

use super::clipboard::Clipboard;
use crate::content::ContentPanel;
use crate::core::{Modifiers, MoveDirection, Point, Rect};
use crate::library::SelectionSink;

/// Collaborators a selection change touches
pub struct SelectionContext<'a> {
    pub content: &'a mut ContentPanel,
    pub sink: &'a mut dyn SelectionSink,
}

impl<'a> SelectionContext<'a> {
    pub fn new(content: &'a mut ContentPanel, sink: &'a mut dyn SelectionSink) -> Self {
        Self { content, sink }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Anchor {
    index: usize,
    path: PathBuf,
}

impl Anchor {
    fn at(content: &ContentPanel, index: usize) -> Option<Anchor> {
        content.path_at(index).map(|path| Anchor {
            index,
            path: path.to_path_buf(),
        })
    }

    fn of(content: &ContentPanel, path: &Path) -> Option<Anchor> {
        content.index_of(path).map(|index| Anchor {
            index,
            path: path.to_path_buf(),
        })
    }
}

/// In-progress rectangle selection, in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSelection {
    pub start: Point,
    pub end: Point,
    /// Rectangle drawn over the content, set once the pointer moved
    pub rect: Option<Rect>,
}

impl DragSelection {
    /// Rectangle between start and end, clipped to `bounds`
    fn area(&self, bounds: &Rect) -> Rect {
        let max_bounds = Rect::new(0, 0, bounds.width, bounds.height);
        Rect::from_corners(self.start, self.end).clip(&max_bounds)
    }
}

/// Selection, clipboard, hover and ping state of the library window
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Vec<PathBuf>,
    anchor_start: Option<Anchor>,
    anchor_end: Option<Anchor>,
    clipboard: Clipboard,
    pinged: Option<PathBuf>,
    hovered: Option<PathBuf>,
    drag: Option<DragSelection>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected paths in the order the producing action visited them
    pub fn selected_paths(&self) -> &[PathBuf] {
        &self.selected
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.selected.iter().any(|p| p == path)
    }

    pub fn anchor_start(&self) -> Option<usize> {
        self.anchor_start.as_ref().map(|a| a.index)
    }

    pub fn anchor_end(&self) -> Option<usize> {
        self.anchor_end.as_ref().map(|a| a.index)
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn pinged(&self) -> Option<&Path> {
        self.pinged.as_deref()
    }

    pub fn hovered(&self) -> Option<&Path> {
        self.hovered.as_deref()
    }

    /// Select `path` according to the held modifiers. Paths not displayed
    /// are ignored.
    pub fn select(&mut self, ctx: &mut SelectionContext<'_>, path: &Path, modifiers: Modifiers) {
        let Some(index) = ctx.content.index_of(path) else {
            return;
        };

        if modifiers.shift {
            let anchor = self
                .anchor_start
                .as_ref()
                .map(|a| a.index)
                .filter(|&i| i < ctx.content.len());

            match anchor {
                Some(anchor) => {
                    let (start, end) = (anchor.min(index), anchor.max(index));
                    let range: Vec<PathBuf> = (start..=end)
                        .filter_map(|i| ctx.content.path_at(i).map(Path::to_path_buf))
                        .collect();
                    self.set_selection(ctx, range, false);
                    self.anchor_end = Anchor::at(ctx.content, index);
                }
                None => self.select_single(ctx, index),
            }
        } else if modifiers.ctrl {
            self.toggle(ctx, path, index);
        } else {
            self.select_single(ctx, index);
        }
    }

    fn select_single(&mut self, ctx: &mut SelectionContext<'_>, index: usize) {
        let Some(anchor) = Anchor::at(ctx.content, index) else {
            return;
        };
        self.set_selection(ctx, vec![anchor.path.clone()], false);
        self.anchor_start = Some(anchor.clone());
        self.anchor_end = Some(anchor);
    }

    fn toggle(&mut self, ctx: &mut SelectionContext<'_>, path: &Path, index: usize) {
        let mut new_selection = self.selected.clone();

        match new_selection.iter().position(|p| p == path) {
            Some(pos) => {
                new_selection.remove(pos);
                if new_selection.is_empty() {
                    self.deselect_all(ctx, false);
                    return;
                }

                if self.anchor_start() == Some(index) {
                    self.anchor_start = Anchor::of(ctx.content, &new_selection[0]);
                }
                if self.anchor_end() == Some(index) {
                    let last = &new_selection[new_selection.len() - 1];
                    self.anchor_end = Anchor::of(ctx.content, last);
                }
                self.set_selection(ctx, new_selection, false);
            }
            None => {
                new_selection.push(path.to_path_buf());
                self.set_selection(ctx, new_selection, false);
                self.anchor_end = Anchor::at(ctx.content, index);
            }
        }
    }

    /// Move the selection one step. Returns the newly selected path so the
    /// caller can scroll it into view.
    pub fn move_selection(
        &mut self,
        ctx: &mut SelectionContext<'_>,
        dir: MoveDirection,
    ) -> Option<PathBuf> {
        let count = ctx.content.len();
        if count == 0 {
            return None;
        }

        let target = match self.anchor_end() {
            Some(end) if !self.selected.is_empty() => {
                let columns = ctx.content.layout().columns_per_row.max(1) as usize;
                let candidate = match dir {
                    MoveDirection::Left => end.checked_sub(1),
                    MoveDirection::Up => end.checked_sub(columns),
                    MoveDirection::Right => Some(end + 1),
                    MoveDirection::Down => Some(end + columns),
                };
                candidate.filter(|&i| i < count)
            }
            _ => match dir {
                MoveDirection::Left | MoveDirection::Up => Some(count - 1),
                MoveDirection::Right | MoveDirection::Down => Some(0),
            },
        }?;

        let path = ctx.content.path_at(target)?.to_path_buf();
        self.select(ctx, &path, Modifiers::NONE);
        Some(path)
    }

    /// Replace the selection. Clears the ping and any rename in progress,
    /// and publishes to the sink unless `only_internal`.
    pub fn set_selection(
        &mut self,
        ctx: &mut SelectionContext<'_>,
        paths: Vec<PathBuf>,
        only_internal: bool,
    ) {
        self.clear_ping(ctx.content);

        for path in &self.selected {
            ctx.content.mark_selected(path, false);
        }
        self.selected.clear();
        for path in paths {
            if !self.selected.contains(&path) {
                self.selected.push(path);
            }
        }
        for path in &self.selected {
            ctx.content.mark_selected(path, true);
        }

        ctx.content.stop_rename();

        if !only_internal {
            ctx.sink.publish(&self.selected);
        }
    }

    /// Clear the selection and both anchors
    pub fn deselect_all(&mut self, ctx: &mut SelectionContext<'_>, only_internal: bool) {
        self.set_selection(ctx, Vec::new(), only_internal);
        self.anchor_start = None;
        self.anchor_end = None;
    }

    /// Select exactly the entries overlapping `area`
    pub fn select_in_area(&mut self, ctx: &mut SelectionContext<'_>, area: &Rect) {
        let found: Vec<(usize, PathBuf)> = ctx
            .content
            .find_entries_overlapping(area)
            .into_iter()
            .map(|v| (v.index, v.path.clone()))
            .collect();

        let anchor = |(index, path): &(usize, PathBuf)| Anchor {
            index: *index,
            path: path.clone(),
        };
        self.anchor_start = found.first().map(anchor);
        self.anchor_end = found.last().map(anchor);

        let paths = found.into_iter().map(|(_, p)| p).collect();
        self.set_selection(ctx, paths, false);
    }

    pub fn start_drag(&mut self, point: Point) {
        self.drag = Some(DragSelection {
            start: point,
            end: point,
            rect: None,
        });
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<&DragSelection> {
        self.drag.as_ref()
    }

    /// Rectangle to draw for the current drag selection
    pub fn drag_rect(&self) -> Option<Rect> {
        self.drag.and_then(|d| d.rect)
    }

    /// Extend the drag rectangle to `point`. Returns false when no drag
    /// selection is in progress.
    pub fn update_drag(&mut self, ctx: &mut SelectionContext<'_>, point: Point) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        drag.end = point;
        self.refresh_drag(ctx)
    }

    /// Re-run the drag selection with the last pointer position, e.g. after
    /// the content was rebuilt
    pub fn refresh_drag(&mut self, ctx: &mut SelectionContext<'_>) -> bool {
        let Some(mut drag) = self.drag else {
            return false;
        };

        let area = drag.area(&ctx.content.bounds());
        self.select_in_area(ctx, &area);
        drag.rect = Some(area);
        self.drag = Some(drag);
        true
    }

    /// Finish the drag selection. Returns true if one was in progress.
    pub fn end_drag(&mut self, ctx: &mut SelectionContext<'_>) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };

        let area = drag.area(&ctx.content.bounds());
        self.select_in_area(ctx, &area);
        true
    }

    /// Highlight `path` as pinged, replacing any previous ping
    pub fn ping(&mut self, content: &mut ContentPanel, path: &Path) {
        self.clear_ping(content);
        if !path.as_os_str().is_empty() {
            content.mark_pinged(path, true);
            self.pinged = Some(path.to_path_buf());
        }
    }

    pub fn clear_ping(&mut self, content: &mut ContentPanel) {
        if let Some(path) = self.pinged.take() {
            content.mark_pinged(&path, false);
        }
    }

    /// Hover-highlight `path`, clearing the previous hover
    pub fn set_hover(&mut self, content: &mut ContentPanel, path: &Path) {
        if self.hovered.as_deref() == Some(path) {
            return;
        }
        self.clear_hover(content);
        content.mark_hovered(path, true);
        self.hovered = Some(path.to_path_buf());
    }

    pub fn clear_hover(&mut self, content: &mut ContentPanel) {
        if let Some(path) = self.hovered.take() {
            content.mark_hovered(&path, false);
        }
    }

    /// Put `paths` on the clipboard to be moved
    pub fn cut(&mut self, content: &mut ContentPanel, paths: Vec<PathBuf>) {
        self.clear_cut_marks(content);
        for path in &paths {
            content.mark_cut(path, true);
        }
        self.clipboard.cut(paths);
    }

    /// Put `paths` on the clipboard to be copied
    pub fn copy(&mut self, content: &mut ContentPanel, paths: Vec<PathBuf>) {
        self.clear_cut_marks(content);
        self.clipboard.copy(paths);
    }

    /// Empty the clipboard after its cut paths were moved
    pub fn clear_cut(&mut self, content: &mut ContentPanel) {
        if self.clipboard.is_cut() {
            self.clear_cut_marks(content);
            self.clipboard.clear();
        }
    }

    fn clear_cut_marks(&self, content: &mut ContentPanel) {
        for path in self.clipboard.cut_paths() {
            content.mark_cut(path, false);
        }
    }

    /// Reconcile with a freshly rebuilt panel: anchors move to the new
    /// index of their path, or are both cleared if either path is gone, and
    /// marks are re-applied.
    pub fn revalidate(&mut self, content: &mut ContentPanel) {
        let start = self
            .anchor_start
            .as_ref()
            .map(|a| Anchor::of(content, &a.path));
        let end = self
            .anchor_end
            .as_ref()
            .map(|a| Anchor::of(content, &a.path));

        if matches!(start, Some(None)) || matches!(end, Some(None)) {
            self.anchor_start = None;
            self.anchor_end = None;
        } else {
            self.anchor_start = start.flatten();
            self.anchor_end = end.flatten();
        }

        for path in self.clipboard.cut_paths() {
            content.mark_cut(path, true);
        }
        for path in &self.selected {
            content.mark_selected(path, true);
        }
        if let Some(path) = &self.pinged {
            content.mark_pinged(path, true);
        }
        if let Some(path) = &self.hovered {
            content.mark_hovered(path, true);
        }
    }
}

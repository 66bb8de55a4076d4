//! Content panel: the ordered set of entry views for one listing, their
//! placement and hit-testing

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::entry_view::{EntryView, RenameField};
use super::icons::{IconRef, LibraryIcon};
use super::layout::{
    LayoutMetrics, TileLayout, Viewport, GRID_ENTRY_SPACING, LIST_ENTRY_SPACING,
};
use crate::core::{Point, Rect, ViewType};
use crate::library::Entry;

/// Entry views of the current listing
#[derive(Debug)]
pub struct ContentPanel {
    metrics: LayoutMetrics,
    /// The host viewport width already excludes a vertical scrollbar
    scrollbar_reserved: bool,
    view_type: ViewType,
    viewport: Viewport,
    layout: TileLayout,
    views: Vec<EntryView>,
    lookup: HashMap<PathBuf, usize>,
    content_height: i32,
    padding_slots: usize,
}

impl ContentPanel {
    pub fn new(metrics: LayoutMetrics) -> Self {
        let view_type = ViewType::default();
        let viewport = Viewport::default();
        Self {
            metrics,
            scrollbar_reserved: false,
            view_type,
            viewport,
            layout: TileLayout::compute(view_type, 0, viewport, false, &metrics),
            views: Vec::new(),
            lookup: HashMap::new(),
            content_height: 0,
            padding_slots: 0,
        }
    }

    pub fn set_scrollbar_reserved(&mut self, reserved: bool) {
        self.scrollbar_reserved = reserved;
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Rebuild all views for `entries`, in order
    pub fn refresh(&mut self, view_type: ViewType, entries: &[Entry], viewport: Viewport) {
        self.views.clear();
        self.lookup.clear();
        self.view_type = view_type;
        self.viewport = viewport;
        self.layout = TileLayout::compute(
            view_type,
            entries.len(),
            viewport,
            self.scrollbar_reserved,
            &self.metrics,
        );

        let used_height = if self.layout.is_grid {
            self.place_grid(entries)
        } else {
            self.place_list(entries)
        };
        self.content_height = used_height.max(viewport.height);

        for (index, view) in self.views.iter().enumerate() {
            self.lookup.insert(view.path.clone(), index);
        }
    }

    /// Lay out grid rows. Returns the height used.
    fn place_grid(&mut self, entries: &[Entry]) -> i32 {
        let tile = self.layout.tile_size;
        let columns = self.layout.columns_per_row.max(1) as usize;
        let label_width = self.layout.label_width;
        let slot_width = label_width.max(tile);
        let free = (self.layout.content_width - columns as i32 * slot_width).max(0);
        let gap = free / (columns as i32 + 1);

        let mut y = GRID_ENTRY_SPACING / 2;
        for (row_index, row) in entries.chunks(columns).enumerate() {
            let mut max_label_height = 0;
            for (col, entry) in row.iter().enumerate() {
                let slot_x = gap + col as i32 * (slot_width + gap);
                let icon_bounds = Rect::new(slot_x + (slot_width - tile) / 2, y, tile, tile);
                let label_height = self.metrics.label_height(&entry.name, label_width);
                let label_bounds = Rect::new(
                    slot_x + (slot_width - label_width) / 2,
                    y + tile,
                    label_width,
                    label_height,
                );
                max_label_height = max_label_height.max(label_height);

                let index = row_index * columns + col;
                self.views
                    .push(self.make_view(index, entry, icon_bounds, label_bounds));
            }
            y += tile + max_label_height + GRID_ENTRY_SPACING;
        }

        self.padding_slots = match entries.len() % columns {
            0 => 0,
            filled => columns - filled,
        };

        if entries.is_empty() {
            y += GRID_ENTRY_SPACING;
        }
        y
    }

    /// Lay out list rows. Returns the height used.
    fn place_list(&mut self, entries: &[Entry]) -> i32 {
        let tile = self.layout.tile_size;
        let row_height = tile.max(self.metrics.line_height);
        self.padding_slots = 0;

        let mut y = 0;
        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                y += LIST_ENTRY_SPACING;
            }
            let icon_bounds = Rect::new(0, y, tile, tile);
            let label_bounds = Rect::new(
                tile,
                y,
                self.metrics.text_width(&entry.name),
                self.metrics.line_height,
            );
            self.views
                .push(self.make_view(index, entry, icon_bounds, label_bounds));
            y += row_height;
        }
        y
    }

    fn make_view(&self, index: usize, entry: &Entry, icon: Rect, label: Rect) -> EntryView {
        EntryView::new(
            index,
            entry.path.clone(),
            entry.name.clone(),
            entry.is_dir(),
            IconRef::new(LibraryIcon::for_entry(entry), self.layout.tile_size),
            icon,
            label,
        )
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Views in display order
    pub fn entries(&self) -> &[EntryView] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&EntryView> {
        self.views.get(index)
    }

    /// Path of the view at `index`
    pub fn path_at(&self, index: usize) -> Option<&Path> {
        self.views.get(index).map(|v| v.path.as_path())
    }

    pub fn lookup(&self, path: &Path) -> Option<&EntryView> {
        self.lookup.get(path).and_then(|&i| self.views.get(i))
    }

    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.lookup.get(path).copied()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.lookup.contains_key(path)
    }

    fn lookup_mut(&mut self, path: &Path) -> Option<&mut EntryView> {
        if path.as_os_str().is_empty() {
            return None;
        }
        let index = *self.lookup.get(path)?;
        self.views.get_mut(index)
    }

    /// First view whose bounds contain `point`
    pub fn find_entry_at(&self, point: Point) -> Option<&EntryView> {
        self.views.iter().find(|v| v.bounds.contains(point))
    }

    /// All views whose bounds intersect `rect`, in display order
    pub fn find_entries_overlapping(&self, rect: &Rect) -> Vec<&EntryView> {
        self.views
            .iter()
            .filter(|v| v.bounds.overlaps(rect))
            .collect()
    }

    pub fn mark_hovered(&mut self, path: &Path, hovered: bool) {
        if let Some(view) = self.lookup_mut(path) {
            view.mark_hovered(hovered);
        }
    }

    pub fn mark_selected(&mut self, path: &Path, selected: bool) {
        if let Some(view) = self.lookup_mut(path) {
            view.mark_selected(selected);
        }
    }

    pub fn mark_pinged(&mut self, path: &Path, pinged: bool) {
        if let Some(view) = self.lookup_mut(path) {
            view.mark_pinged(pinged);
        }
    }

    pub fn mark_cut(&mut self, path: &Path, cut: bool) {
        if let Some(view) = self.lookup_mut(path) {
            view.mark_cut(cut);
        }
    }

    /// Content area size, at least as tall as the viewport
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.layout.content_width, self.content_height)
    }

    /// Spacer slots appended to the last grid row
    pub fn padding_slots(&self) -> usize {
        self.padding_slots
    }

    /// Start renaming `path`, ending any other rename. Returns false if the
    /// path is not displayed.
    pub fn begin_rename(&mut self, path: &Path) -> bool {
        self.stop_rename();
        match self.lookup_mut(path) {
            Some(view) => {
                view.begin_rename();
                true
            }
            None => false,
        }
    }

    /// View currently being renamed
    pub fn renaming(&self) -> Option<&EntryView> {
        self.views.iter().find(|v| v.is_renaming())
    }

    pub fn renaming_mut(&mut self) -> Option<&mut EntryView> {
        self.views.iter_mut().find(|v| v.is_renaming())
    }

    pub fn stop_rename(&mut self) {
        for view in self.views.iter_mut() {
            view.end_rename();
        }
    }

    /// Detach the rename in progress, if any
    pub fn take_rename(&mut self) -> Option<(PathBuf, RenameField)> {
        let view = self.views.iter_mut().find(|v| v.is_renaming())?;
        let field = view.take_rename()?;
        Some((view.path.clone(), field))
    }

    /// Reattach a rename detached by [`take_rename`](Self::take_rename).
    /// Returns false if `path` is no longer shown.
    pub fn resume_rename(&mut self, path: &Path, field: RenameField) -> bool {
        self.stop_rename();
        match self.lookup_mut(path) {
            Some(view) => {
                view.resume_rename(field);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::entry_view::UnderlayState;
    use crate::content::layout::MAX_LABEL_HEIGHT;

    fn entries(n: usize) -> Vec<Entry> {
        (0..n).map(|i| Entry::file(format!("e{:02}.png", i))).collect()
    }

    fn panel(view_type: ViewType, n: usize, w: i32, h: i32) -> ContentPanel {
        let mut p = ContentPanel::new(LayoutMetrics::default());
        p.refresh(view_type, &entries(n), Viewport::new(w, h));
        p
    }

    #[test]
    fn test_refresh_keeps_order_and_indices() {
        let p = panel(ViewType::Grid32, 10, 400, 400);
        assert_eq!(p.len(), 10);
        for (i, v) in p.entries().iter().enumerate() {
            assert_eq!(v.index, i);
            assert_eq!(v.path, PathBuf::from(format!("e{:02}.png", i)));
            assert_eq!(p.index_of(&v.path), Some(i));
        }
    }

    #[test]
    fn test_grid_rows_and_padding() {
        // 7 columns at 400px
        let p = panel(ViewType::Grid32, 10, 400, 400);
        assert_eq!(p.layout().columns_per_row, 7);
        assert_eq!(p.padding_slots(), 4);

        let first = p.entry(0).unwrap();
        let second_row = p.entry(7).unwrap();
        assert_eq!(first.icon_bounds.y, GRID_ENTRY_SPACING / 2);
        assert!(second_row.icon_bounds.y > first.label_bounds.bottom());
        // Columns stay aligned across rows
        assert_eq!(first.icon_bounds.x, second_row.icon_bounds.x);
        // Row members share a y
        assert_eq!(p.entry(6).unwrap().icon_bounds.y, first.icon_bounds.y);
    }

    #[test]
    fn test_grid_row_centered() {
        let p = panel(ViewType::Grid32, 7, 400, 400);
        let left = p.entry(0).unwrap().label_bounds.x;
        let right = 400 - p.entry(6).unwrap().label_bounds.right();
        assert!((left - right).abs() <= 7);
    }

    #[test]
    fn test_grid_label_height_capped() {
        let mut p = ContentPanel::new(LayoutMetrics::default());
        let long = Entry::file("x".repeat(200));
        p.refresh(ViewType::Grid32, &[long], Viewport::new(200, 400));
        assert_eq!(p.entry(0).unwrap().label_bounds.height, MAX_LABEL_HEIGHT);
    }

    #[test]
    fn test_list_placement() {
        let p = panel(ViewType::List16, 3, 300, 400);
        let a = p.entry(0).unwrap();
        let b = p.entry(1).unwrap();
        assert_eq!(a.icon_bounds, Rect::new(0, 0, 16, 16));
        assert_eq!(a.label_bounds.x, 16);
        assert_eq!(b.icon_bounds.y, 16 + LIST_ENTRY_SPACING);
        assert_eq!(p.padding_slots(), 0);
    }

    #[test]
    fn test_refresh_idempotent() {
        let mut p = ContentPanel::new(LayoutMetrics::default());
        let list = entries(23);
        p.refresh(ViewType::Grid48, &list, Viewport::new(500, 300));
        let first: Vec<Rect> = p.entries().iter().map(|v| v.bounds).collect();
        p.refresh(ViewType::Grid48, &list, Viewport::new(500, 300));
        let second: Vec<Rect> = p.entries().iter().map(|v| v.bounds).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_entry_at() {
        let p = panel(ViewType::Grid32, 10, 400, 400);
        let target = p.entry(3).unwrap();
        let center = Point::new(
            target.icon_bounds.x + target.icon_bounds.width / 2,
            target.icon_bounds.y + target.icon_bounds.height / 2,
        );
        assert_eq!(p.find_entry_at(center).map(|v| v.index), Some(3));
        assert!(p.find_entry_at(Point::new(-50, -50)).is_none());
    }

    #[test]
    fn test_find_entries_overlapping() {
        let p = panel(ViewType::List16, 5, 300, 400);
        let rect = Rect::new(0, 0, 300, 30);
        let hits: Vec<usize> = p
            .find_entries_overlapping(&rect)
            .iter()
            .map(|v| v.index)
            .collect();
        assert_eq!(hits, vec![0, 1]);
    }

    #[test]
    fn test_lookup_last_write_wins() {
        let mut p = ContentPanel::new(LayoutMetrics::default());
        let dup = vec![Entry::file("a.png"), Entry::file("a.png")];
        p.refresh(ViewType::List16, &dup, Viewport::new(300, 300));
        assert_eq!(p.lookup(Path::new("a.png")).map(|v| v.index), Some(1));
    }

    #[test]
    fn test_mark_unknown_path_ignored() {
        let mut p = panel(ViewType::Grid32, 3, 400, 400);
        p.mark_selected(Path::new("missing.png"), true);
        p.mark_selected(Path::new(""), true);
        assert!(p
            .entries()
            .iter()
            .all(|v| v.underlay_state() == UnderlayState::None));

        p.mark_selected(Path::new("e01.png"), true);
        assert_eq!(
            p.entry(1).unwrap().underlay_state(),
            UnderlayState::Selected
        );
    }

    #[test]
    fn test_single_rename() {
        let mut p = panel(ViewType::Grid32, 3, 400, 400);
        assert!(p.begin_rename(Path::new("e00.png")));
        assert!(p.begin_rename(Path::new("e02.png")));
        assert_eq!(p.renaming().map(|v| v.index), Some(2));
        assert_eq!(p.entries().iter().filter(|v| v.is_renaming()).count(), 1);
        p.stop_rename();
        assert!(p.renaming().is_none());
        assert!(!p.begin_rename(Path::new("missing.png")));
    }

    #[test]
    fn test_bounds_at_least_viewport() {
        let p = panel(ViewType::Grid32, 1, 400, 400);
        assert_eq!(p.bounds(), Rect::new(0, 0, 400, 400));
        let tall = panel(ViewType::List16, 100, 400, 100);
        assert!(tall.bounds().height > 100);
    }
}

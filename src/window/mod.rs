//! Library window - Folder navigation, search, clipboard operations,
//! rename/delete flows and drag handling on top of the content panel and
//! selection controller
//!
//! Pointer positions passed to the window are pixels relative to the top
//! left corner of the visible content area.

pub mod scroll;

pub use scroll::ScrollState;

use std::path::{Path, PathBuf};

use crate::content::{ContentPanel, LayoutMetrics, RenameField, Viewport};
use crate::core::{Modifiers, MoveDirection, PendingAction, Point, Rect, ViewType, WindowMode};
use crate::error::{LibraryError, Result};
use crate::library::paths::{is_part_of, trim_separators, trim_trailing_dots};
use crate::library::{
    is_valid_file_name, sort_entries, tail_name, unique_path, AssetLibraryProvider,
    ExternalSelection, ResourceType, SelectionSink,
};
use crate::selection::{SelectionContext, SelectionController};

/// Height of the band at the top and bottom of the viewport that scrolls
/// while dragging
pub const DRAG_SCROLL_HEIGHT: i32 = 20;
/// Auto-scroll speed in pixels per second
pub const DRAG_SCROLL_AMOUNT_PER_SECOND: f32 = 100.0;
/// Delay before a single click on a folder selects it
pub const DELAYED_SELECT_SECS: f32 = 0.5;

const NEW_FOLDER_NAME: &str = "New Folder";
const ROOT_CRUMB: &str = "Resources";

/// Notification for the host, drained once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryEvent {
    /// A file was double-clicked
    Open {
        path: PathBuf,
        resource_type: Option<ResourceType>,
    },
    /// Entries were dragged out of the content area
    DragStarted(Vec<PathBuf>),
}

/// One segment of the folder bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderCrumb {
    pub name: String,
    /// Folder to enter when clicked. `None` for the search crumb.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct DelayedSelect {
    path: PathBuf,
    modifiers: Modifiers,
    at: f32,
}

/// The library window
pub struct LibraryWindow {
    provider: Box<dyn AssetLibraryProvider>,
    sink: Box<dyn SelectionSink>,
    content: ContentPanel,
    selection: SelectionController,
    view_type: ViewType,
    current_folder: PathBuf,
    search_query: String,
    viewport: Viewport,
    scroll: ScrollState,
    mode: WindowMode,
    delayed_select: Option<DelayedSelect>,
    elapsed: f32,
    focused: bool,
    dirty: bool,
    events: Vec<LibraryEvent>,
    message: Option<String>,
}

impl LibraryWindow {
    pub fn new(
        provider: Box<dyn AssetLibraryProvider>,
        sink: Box<dyn SelectionSink>,
        metrics: LayoutMetrics,
    ) -> Self {
        Self {
            provider,
            sink,
            content: ContentPanel::new(metrics),
            selection: SelectionController::new(),
            view_type: ViewType::default(),
            current_folder: PathBuf::new(),
            search_query: String::new(),
            viewport: Viewport::default(),
            scroll: ScrollState::default(),
            mode: WindowMode::Browse,
            delayed_select: None,
            elapsed: 0.0,
            focused: true,
            dirty: true,
            events: Vec::new(),
            message: None,
        }
    }

    /// Run `f` with the selection controller and its collaborators
    fn with_selection<R>(
        &mut self,
        f: impl FnOnce(&mut SelectionController, &mut SelectionContext<'_>) -> R,
    ) -> R {
        let mut ctx = SelectionContext::new(&mut self.content, self.sink.as_mut());
        f(&mut self.selection, &mut ctx)
    }

    fn report(&mut self, action: &str, err: &LibraryError) {
        tracing::warn!("{} failed: {}", action, err);
        self.message = Some(format!("{} failed: {}", action, err));
    }

    fn alert(&mut self, title: &str, message: &str) {
        self.mode = WindowMode::Alert {
            title: title.to_string(),
            message: message.to_string(),
        };
    }

    // ---- Accessors ----

    pub fn content(&self) -> &ContentPanel {
        &self.content
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn mode(&self) -> &WindowMode {
        &self.mode
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn current_folder(&self) -> &Path {
        &self.current_folder
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_search_active(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Status message from the last operation
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Take the pending host notifications
    pub fn drain_events(&mut self) -> Vec<LibraryEvent> {
        std::mem::take(&mut self.events)
    }

    /// The single selected entry, or the current folder
    pub fn selected_entry(&self) -> PathBuf {
        match self.selection.selected_paths() {
            [only] if self.provider.exists(only) => only.clone(),
            _ => self.current_folder.clone(),
        }
    }

    /// The single selected folder, or the current folder
    pub fn selected_folder(&self) -> PathBuf {
        match self.selection.selected_paths() {
            [only] if self.provider.entry(only).is_some_and(|e| e.is_dir()) => only.clone(),
            _ => self.current_folder.clone(),
        }
    }

    /// Pixel offset of the viewport into the content
    pub fn scroll_offset(&self) -> i32 {
        self.scroll
            .offset(self.content.bounds().height, self.viewport.height)
    }

    pub fn scroll_percent(&self) -> f32 {
        self.scroll.percent()
    }

    pub fn set_scroll_percent(&mut self, percent: f32) {
        self.scroll.set_percent(percent);
    }

    /// Scroll by a pixel amount, e.g. from the mouse wheel
    pub fn scroll_by(&mut self, pixels: i32) {
        self.scroll
            .scroll_by(pixels, self.content.bounds().height, self.viewport.height);
    }

    /// Convert a viewport position to content coordinates
    pub fn to_content(&self, point: Point) -> Point {
        Point::new(point.x, point.y + self.scroll_offset())
    }

    /// Entry under a viewport position
    pub fn entry_at(&self, point: Point) -> Option<PathBuf> {
        self.content
            .find_entry_at(self.to_content(point))
            .map(|v| v.path.clone())
    }

    // ---- Listing ----

    /// Rebuild the content from the provider
    pub fn refresh(&mut self) {
        self.dirty = false;

        let listing = if self.is_search_active() {
            self.provider.search(&format!("*{}*", self.search_query))
        } else {
            let is_folder = self
                .provider
                .entry(&self.current_folder)
                .is_some_and(|e| e.is_dir());
            if !is_folder {
                tracing::debug!(
                    folder = %self.current_folder.display(),
                    "current folder vanished, returning to root"
                );
                self.current_folder = self.provider.root().path;
            }
            self.provider.list_entries(&self.current_folder)
        };

        let mut entries = match listing {
            Ok(entries) => entries,
            Err(e) => {
                self.report("Listing", &e);
                Vec::new()
            }
        };
        sort_entries(&mut entries);

        // A rename survives the rebuild while its entry is still listed
        let renaming = self.content.take_rename();
        self.content.refresh(self.view_type, &entries, self.viewport);
        let resumed = renaming
            .is_some_and(|(path, field)| self.content.resume_rename(&path, field));
        if !resumed && matches!(self.mode, WindowMode::Rename { .. }) {
            self.mode = WindowMode::Browse;
        }

        self.selection.revalidate(&mut self.content);
        self.with_selection(|s, ctx| s.refresh_drag(ctx));
        tracing::debug!(entries = entries.len(), "refreshed content");
    }

    /// Request a refresh on the next update
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_view_type(&mut self, view_type: ViewType) {
        self.view_type = view_type;
        self.refresh();
    }

    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.viewport = Viewport::new(width, height);
        self.refresh();
    }

    /// Show the contents of `folder`
    pub fn enter_directory(&mut self, folder: &Path) {
        tracing::info!(folder = %folder.display(), "entering folder");
        self.current_folder = folder.to_path_buf();
        self.search_query.clear();
        self.scroll.set_percent(0.0);
        self.with_selection(|s, ctx| s.deselect_all(ctx, false));
        self.refresh();
    }

    /// Go to the parent of the current folder
    pub fn go_up(&mut self) {
        let current = trim_separators(&self.current_folder);
        if current.as_os_str().is_empty() {
            return;
        }
        let parent = current.parent().map(Path::to_path_buf).unwrap_or_default();
        self.enter_directory(&parent);
    }

    /// Go to the library root
    pub fn go_home(&mut self) {
        let root = self.provider.root().path;
        self.enter_directory(&root);
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.scroll.set_percent(0.0);
        self.refresh();
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    /// Breadcrumbs for the folder bar, fitted into `max_width` characters.
    ///
    /// Leading crumbs are dropped when the bar is too wide, but at least two
    /// are always kept.
    pub fn folder_bar(&self, max_width: usize) -> Vec<FolderCrumb> {
        let all = if self.is_search_active() {
            vec![FolderCrumb {
                name: self.search_query.clone(),
                path: None,
            }]
        } else {
            let mut crumbs = vec![FolderCrumb {
                name: ROOT_CRUMB.to_string(),
                path: Some(PathBuf::new()),
            }];
            let mut full = PathBuf::new();
            for component in self.current_folder.components() {
                full.push(component);
                crumbs.push(FolderCrumb {
                    name: component.as_os_str().to_string_lossy().into_owned(),
                    path: Some(full.clone()),
                });
            }
            crumbs
        };

        let mut width = 0;
        let mut kept = 0;
        for crumb in all.iter().rev() {
            // Name plus separator
            width += crumb.name.chars().count() + 1;
            if width > max_width && kept >= 2 {
                break;
            }
            kept += 1;
        }

        let skip = all.len() - kept;
        all.into_iter().skip(skip).collect()
    }

    // ---- Selection ----

    pub fn select(&mut self, path: &Path, modifiers: Modifiers) {
        self.with_selection(|s, ctx| s.select(ctx, path, modifiers));
    }

    pub fn deselect_all(&mut self) {
        self.with_selection(|s, ctx| s.deselect_all(ctx, false));
    }

    /// Move the selection and scroll the new entry into view
    pub fn move_selection(&mut self, dir: MoveDirection) {
        if let Some(path) = self.with_selection(|s, ctx| s.move_selection(ctx, dir)) {
            self.scroll_to_entry(&path);
        }
    }

    /// Select the entries overlapping a rectangle in content coordinates
    pub fn select_in_area(&mut self, area: &Rect) {
        self.with_selection(|s, ctx| s.select_in_area(ctx, area));
    }

    /// Center an entry in the viewport unless it is fully visible
    pub fn scroll_to_entry(&mut self, path: &Path) {
        let Some(bounds) = self.content.lookup(path).map(|v| v.bounds) else {
            return;
        };
        let content_height = self.content.bounds().height;
        self.scroll
            .scroll_to(&bounds, content_height, self.viewport.height);
    }

    /// Single click on an entry. Folders select after a delay so a
    /// double-click can enter them without changing the selection.
    pub fn on_entry_clicked(&mut self, path: &Path, modifiers: Modifiers) {
        let is_dir = self.provider.entry(path).is_some_and(|e| e.is_dir());
        if is_dir {
            self.delayed_select = Some(DelayedSelect {
                path: path.to_path_buf(),
                modifiers,
                at: self.elapsed + DELAYED_SELECT_SECS,
            });
        } else {
            self.select(path, modifiers);
        }
    }

    pub fn on_entry_double_clicked(&mut self, path: &Path) {
        self.delayed_select = None;

        let Some(entry) = self.provider.entry(path) else {
            return;
        };
        if entry.is_dir() {
            self.enter_directory(&entry.path);
        } else {
            tracing::info!(path = %entry.path.display(), "opening entry");
            self.events.push(LibraryEvent::Open {
                path: entry.path,
                resource_type: entry.resource_type,
            });
        }
    }

    /// Click on empty space in the content area
    pub fn on_background_clicked(&mut self) {
        self.deselect_all();
    }

    /// Draw attention to an entry
    pub fn ping(&mut self, path: &Path) {
        self.selection.ping(&mut self.content, path);
    }

    /// Selection changed somewhere else in the editor
    pub fn on_external_selection(&mut self, change: &ExternalSelection) {
        if change.scene_objects > 0 {
            self.with_selection(|s, ctx| s.deselect_all(ctx, true));
        }
    }

    // ---- Clipboard ----

    pub fn cut_selection(&mut self) {
        let paths = self.selection.selected_paths().to_vec();
        if !paths.is_empty() {
            self.message = Some(format!("Cut {} item(s)", paths.len()));
            self.selection.cut(&mut self.content, paths);
        }
    }

    pub fn copy_selection(&mut self) {
        let paths = self.selection.selected_paths().to_vec();
        if !paths.is_empty() {
            self.message = Some(format!("Copied {} item(s)", paths.len()));
            self.selection.copy(&mut self.content, paths);
        }
    }

    /// Copy each selected entry next to itself under a unique name
    pub fn duplicate_selection(&mut self) {
        let paths = self.selection.selected_paths().to_vec();
        if paths.is_empty() {
            return;
        }

        for source in &paths {
            if let Err(e) = self.duplicate(source) {
                self.report("Duplicate", &e);
            }
        }
        self.refresh();
    }

    fn duplicate(&mut self, source: &Path) -> Result<()> {
        let provider = &self.provider;
        let destination = unique_path(source, |p| provider.exists(p))?;
        self.provider.copy(source, &destination)?;
        tracing::info!(from = %source.display(), to = %destination.display(), "duplicated");
        Ok(())
    }

    /// Paste into the selected folder
    pub fn paste_to_selection(&mut self) {
        let destination = self.selected_folder();
        self.paste(&destination);
    }

    /// Paste the clipboard into `destination_folder`: copied paths are
    /// copied, cut paths are moved and the cut set is cleared.
    pub fn paste(&mut self, destination_folder: &Path) {
        let clipboard = self.selection.clipboard();
        let (sources, is_cut) = if !clipboard.copy_paths().is_empty() {
            (clipboard.copy_paths().to_vec(), false)
        } else if !clipboard.cut_paths().is_empty() {
            (clipboard.cut_paths().to_vec(), true)
        } else {
            return;
        };

        let mut pasted = 0;
        for source in &sources {
            if is_part_of(destination_folder, source) {
                tracing::warn!(
                    source = %source.display(),
                    "cannot paste a folder into itself"
                );
                continue;
            }
            match self.paste_one(source, destination_folder, is_cut) {
                Ok(()) => pasted += 1,
                Err(e) => self.report("Paste", &e),
            }
        }

        if is_cut {
            self.selection.clear_cut(&mut self.content);
        }
        if self.message.is_none() || pasted > 0 {
            self.message = Some(format!("Pasted {} item(s)", pasted));
        }
        self.refresh();
    }

    fn paste_one(&mut self, source: &Path, destination_folder: &Path, is_cut: bool) -> Result<()> {
        let candidate = destination_folder.join(tail_name(source));
        let provider = &self.provider;
        let destination = unique_path(&candidate, |p| provider.exists(p))?;
        if is_cut {
            self.provider.move_entry(source, &destination)
        } else {
            self.provider.copy(source, &destination)
        }
    }

    /// Create a uniquely named folder in the selected folder and start
    /// renaming it
    pub fn create_folder(&mut self) {
        let parent = self.selected_folder();
        let provider = &self.provider;
        let created = unique_path(&parent.join(NEW_FOLDER_NAME), |p| provider.exists(p))
            .and_then(|path| self.provider.create_folder(&path).map(|()| path));

        match created {
            Ok(path) => {
                if parent != self.current_folder && !self.is_search_active() {
                    self.current_folder = parent;
                    self.with_selection(|s, ctx| s.deselect_all(ctx, false));
                }
                self.refresh();
                self.select(&path, Modifiers::NONE);
                self.scroll_to_entry(&path);
                self.start_rename();
            }
            Err(e) => self.report("Create folder", &e),
        }
    }

    // ---- Rename ----

    /// Start renaming the first selected entry. A multi-selection collapses
    /// to that entry.
    pub fn start_rename(&mut self) {
        let Some(first) = self.selection.selected_paths().first().cloned() else {
            return;
        };

        if self.selection.selected_paths().len() > 1 {
            self.deselect_all();
            self.select(&first, Modifiers::NONE);
        }

        if self.content.begin_rename(&first) {
            self.mode = WindowMode::Rename { original: first };
        }
    }

    /// Rename field of the entry being renamed
    pub fn rename_field_mut(&mut self) -> Option<&mut RenameField> {
        self.content
            .renaming_mut()
            .and_then(|v| v.rename_field_mut())
    }

    /// Apply the rename. Invalid or colliding names raise an alert and keep
    /// the field open. Returns true if the rename finished.
    pub fn commit_rename(&mut self) -> bool {
        let WindowMode::Rename { original } = &self.mode else {
            return false;
        };
        let original = trim_separators(original);
        let new_name = self
            .content
            .renaming()
            .map(|v| v.rename_text().to_string())
            .unwrap_or_default();

        if !is_valid_file_name(&new_name) {
            self.alert(
                "Error",
                "The name you specified is not a valid file name. Try another.",
            );
            return false;
        }

        let extension = original
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let parent = original.parent().map(Path::to_path_buf).unwrap_or_default();
        let new_path = parent.join(format!("{}{}", new_name, extension));

        let trimmed = trim_trailing_dots(&new_path);
        if original != trimmed && self.provider.exists(&trimmed) {
            self.alert(
                "Error",
                "File/folder with that name already exists in this folder.",
            );
            return false;
        }

        if original != new_path {
            if let Err(e) = self.provider.rename(&original, &new_path) {
                self.report("Rename", &e);
                self.alert("Error", &e.to_string());
                return false;
            }
            tracing::info!(from = %original.display(), to = %new_path.display(), "renamed");
        }

        self.cancel_rename();
        self.refresh();
        self.select(&new_path, Modifiers::NONE);
        true
    }

    pub fn cancel_rename(&mut self) {
        self.content.stop_rename();
        if matches!(self.mode, WindowMode::Rename { .. }) {
            self.mode = WindowMode::Browse;
        }
    }

    pub fn is_renaming(&self) -> bool {
        self.content.renaming().is_some()
    }

    // ---- Delete / dialogs ----

    /// Ask for confirmation before deleting the selection
    pub fn request_delete(&mut self) {
        let targets = self.selection.selected_paths().to_vec();
        if targets.is_empty() {
            return;
        }
        self.mode = WindowMode::Confirm {
            action: PendingAction::Delete { targets },
        };
    }

    /// Answer the confirmation dialog. Declining leaves everything as is.
    pub fn resolve_confirm(&mut self, yes: bool) {
        let mode = std::mem::take(&mut self.mode);
        let WindowMode::Confirm { action } = mode else {
            self.mode = mode;
            return;
        };
        if !yes {
            return;
        }

        match action {
            PendingAction::Delete { targets } => {
                let mut deleted = 0;
                for path in &targets {
                    match self.provider.delete(path) {
                        Ok(()) => deleted += 1,
                        Err(e) => self.report("Delete", &e),
                    }
                }
                self.message = Some(format!("Deleted {} item(s)", deleted));
                self.deselect_all();
                self.refresh();
            }
        }
    }

    /// Close an alert, returning to the rename field if one is open
    pub fn dismiss_alert(&mut self) {
        if !matches!(self.mode, WindowMode::Alert { .. }) {
            return;
        }
        self.mode = match self.content.renaming() {
            Some(view) => WindowMode::Rename {
                original: view.path.clone(),
            },
            None => WindowMode::Browse,
        };
    }

    /// Losing focus cancels a rename in progress
    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        if !focused && self.is_renaming() {
            self.cancel_rename();
        }
    }

    // ---- Drag and drop ----

    /// Pointer pressed and moved. Dragging an entry starts a drag of the
    /// selection (or just that entry), dragging empty space starts a
    /// rectangle selection.
    pub fn on_drag_start(&mut self, point: Point) {
        if self.is_renaming() {
            return;
        }

        let content_point = self.to_content(point);
        let Some(path) = self
            .content
            .find_entry_at(content_point)
            .map(|v| v.path.clone())
        else {
            self.selection.start_drag(content_point);
            return;
        };

        let paths = if self.selection.is_selected(&path) {
            self.selection.selected_paths().to_vec()
        } else {
            vec![path]
        };
        tracing::debug!(count = paths.len(), "drag started");
        self.events.push(LibraryEvent::DragStarted(paths));
    }

    /// Pointer moved during a drag
    pub fn on_drag_move(&mut self, point: Point) {
        let height = self.viewport.height;
        let amount = if point.y > 0 && point.y <= DRAG_SCROLL_HEIGHT {
            -DRAG_SCROLL_AMOUNT_PER_SECOND
        } else if point.y >= height - DRAG_SCROLL_HEIGHT && point.y < height {
            DRAG_SCROLL_AMOUNT_PER_SECOND
        } else {
            0.0
        };
        self.scroll.set_auto_scroll(amount);

        let content_point = self.to_content(point);
        if self.with_selection(|s, ctx| s.update_drag(ctx, content_point)) {
            return;
        }

        match self.entry_at(point) {
            Some(path) => self.selection.set_hover(&mut self.content, &path),
            None => self.selection.clear_hover(&mut self.content),
        }
    }

    /// Pointer left the content area during a drag
    pub fn on_drag_leave(&mut self) {
        self.selection.clear_hover(&mut self.content);
        self.scroll.set_auto_scroll(0.0);
    }

    /// Paths dropped on the content area. Library paths are moved, paths
    /// from outside the library are copied, into the folder under the
    /// pointer or the current folder. Returns true if the drop ended a
    /// rectangle selection instead.
    pub fn on_drop(&mut self, point: Point, paths: &[PathBuf]) -> bool {
        self.selection.clear_hover(&mut self.content);
        self.scroll.set_auto_scroll(0.0);

        if self.with_selection(|s, ctx| s.end_drag(ctx)) {
            return true;
        }

        let destination_folder = self
            .entry_at(point)
            .and_then(|p| self.provider.entry(&p))
            .filter(|e| e.is_dir())
            .map(|e| e.path)
            .unwrap_or_else(|| self.current_folder.clone());

        for path in paths {
            if path.as_os_str().is_empty() || is_part_of(&destination_folder, path) {
                continue;
            }
            let candidate = destination_folder.join(tail_name(path));
            if candidate == *path {
                continue;
            }

            let in_library = self.provider.exists(path);
            if !in_library && path.is_relative() {
                tracing::warn!(path = %path.display(), "dropped path does not exist");
                continue;
            }

            let provider = &self.provider;
            let result = unique_path(&candidate, |p| provider.exists(p)).and_then(|dest| {
                if in_library {
                    self.provider.move_entry(path, &dest)
                } else {
                    self.provider.copy(path, &dest)
                }
            });
            if let Err(e) = result {
                self.report("Drop", &e);
            }
        }

        self.refresh();
        false
    }

    /// Drag finished anywhere
    pub fn on_drag_end(&mut self, _point: Point) {
        self.selection.clear_hover(&mut self.content);
        self.with_selection(|s, ctx| s.end_drag(ctx));
        self.scroll.set_auto_scroll(0.0);
    }

    // ---- Frame tick ----

    /// Per-frame update: delayed selects, change notifications, auto-scroll
    /// and pending refreshes
    pub fn update(&mut self, frame_delta: f32) {
        self.elapsed += frame_delta;

        if self
            .delayed_select
            .as_ref()
            .is_some_and(|d| self.elapsed > d.at)
        {
            if let Some(delayed) = self.delayed_select.take() {
                self.select(&delayed.path, delayed.modifiers);
            }
        }

        let changed = self.provider.poll_changes();
        if !changed.is_empty() {
            tracing::debug!(count = changed.len(), "library changed");
            self.dirty = true;
        }

        self.scroll
            .apply_auto_scroll(frame_delta, self.content.bounds().height);

        if self.dirty {
            self.refresh();
        }
    }
}

//! Action execution handler
//!
//! Translates key and mouse actions into library window operations.

use std::path::PathBuf;

use crate::content::RenameField;
use crate::core::{Modifiers, Point, Rect};
use crate::handler::key::KeyAction;
use crate::handler::mouse::{parse_dropped_paths, ClickDetector, MouseAction};
use crate::window::{LibraryEvent, LibraryWindow};

/// Result of action execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue the event loop
    Continue,
    /// Leave the event loop
    Quit,
}

/// Pointer gesture in progress
#[derive(Debug, Default)]
pub struct PointerState {
    press: Option<(Point, Modifiers)>,
    dragging: bool,
    /// Entries carried by the current drag
    dragged: Vec<PathBuf>,
}

impl PointerState {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn dragged(&self) -> &[PathBuf] {
        &self.dragged
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Front-end state that lives outside the library window
#[derive(Default)]
pub struct UiState {
    /// Search prompt, open while typing a query
    pub search: Option<RenameField>,
    pub pointer: PointerState,
    pub clicks: ClickDetector,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_search_open(&self) -> bool {
        self.search.is_some()
    }

    /// Route window notifications the front-end reacts to. Returns opened
    /// paths for the caller to report.
    pub fn absorb_events(&mut self, events: Vec<LibraryEvent>) -> Vec<PathBuf> {
        let mut opened = Vec::new();
        for event in events {
            match event {
                LibraryEvent::DragStarted(paths) => self.pointer.dragged = paths,
                LibraryEvent::Open { path, .. } => opened.push(path),
            }
        }
        opened
    }
}

/// Handle a KeyAction and update the window accordingly
pub fn handle_action(action: KeyAction, window: &mut LibraryWindow, ui: &mut UiState) -> ActionResult {
    match action {
        KeyAction::None => {}
        KeyAction::Quit => return ActionResult::Quit,
        KeyAction::Move(dir) => window.move_selection(dir),
        KeyAction::Activate => {
            if let [only] = window.selection().selected_paths() {
                let path = only.clone();
                window.on_entry_double_clicked(&path);
            }
        }
        KeyAction::GoUp => window.go_up(),
        KeyAction::GoHome => window.go_home(),
        KeyAction::ScrollPage(pages) => {
            let height = window.viewport().height;
            window.scroll_by(pages * height);
        }
        KeyAction::Deselect => {
            if !window.selection().selected_paths().is_empty() {
                window.deselect_all();
            } else if window.is_search_active() {
                window.clear_search();
            }
        }
        KeyAction::Copy => window.copy_selection(),
        KeyAction::Cut => window.cut_selection(),
        KeyAction::Paste => window.paste_to_selection(),
        KeyAction::Duplicate => window.duplicate_selection(),
        KeyAction::NewFolder => window.create_folder(),
        KeyAction::StartRename => window.start_rename(),
        KeyAction::CommitRename => {
            window.commit_rename();
        }
        KeyAction::CancelRename => window.cancel_rename(),
        KeyAction::Edit(edit) => {
            if let Some(field) = ui.search.as_mut() {
                edit.apply(field);
                let query = field.text().to_string();
                window.set_search(&query);
            } else if let Some(field) = window.rename_field_mut() {
                edit.apply(field);
            }
        }
        KeyAction::RequestDelete => window.request_delete(),
        KeyAction::Confirm(yes) => window.resolve_confirm(yes),
        KeyAction::DismissAlert => window.dismiss_alert(),
        KeyAction::StartSearch => {
            ui.search = Some(RenameField::new(window.search_query(), Rect::default()));
        }
        KeyAction::ConfirmSearch => ui.search = None,
        KeyAction::CancelSearch => {
            ui.search = None;
            window.clear_search();
        }
        KeyAction::SetView(view_type) => window.set_view_type(view_type),
        KeyAction::Refresh => window.refresh(),
    }
    ActionResult::Continue
}

/// Handle a mouse action over the content area
pub fn handle_mouse_action(action: MouseAction, window: &mut LibraryWindow, ui: &mut UiState) {
    match action {
        MouseAction::None => {}
        MouseAction::Press { point, modifiers } => {
            if window.is_renaming() {
                window.cancel_rename();
            }
            ui.pointer.reset();
            ui.pointer.press = Some((point, modifiers));
        }
        MouseAction::Drag { point } => {
            let Some((start, _)) = ui.pointer.press else {
                return;
            };
            if !ui.pointer.dragging {
                ui.pointer.dragging = true;
                window.on_drag_start(start);
                let events = window.drain_events();
                ui.absorb_events(events);
            }
            match point {
                Some(point) => window.on_drag_move(point),
                None => window.on_drag_leave(),
            }
        }
        MouseAction::Release { point } => {
            let Some((start, modifiers)) = ui.pointer.press else {
                return;
            };

            if ui.pointer.dragging {
                match point {
                    Some(point) => {
                        let dragged = std::mem::take(&mut ui.pointer.dragged);
                        window.on_drop(point, &dragged);
                    }
                    None => window.on_drag_end(start),
                }
                ui.clicks.reset();
            } else {
                match window.entry_at(start) {
                    Some(path) => {
                        if ui.clicks.click(&path) {
                            window.on_entry_double_clicked(&path);
                        } else {
                            window.on_entry_clicked(&path, modifiers);
                        }
                    }
                    None => {
                        ui.clicks.reset();
                        window.on_background_clicked();
                    }
                }
            }
            ui.pointer.reset();
        }
        MouseAction::Scroll(pixels) => window.scroll_by(pixels),
    }
}

/// Handle text pasted into the terminal. Dropping files onto most terminals
/// pastes their paths, which are imported into the current folder.
pub fn handle_paste(text: &str, window: &mut LibraryWindow) {
    let paths = parse_dropped_paths(text);
    if paths.is_empty() {
        return;
    }

    tracing::info!(count = paths.len(), "importing dropped files");
    window.on_drop(Point::new(-1, -1), &paths);
    window.set_message(format!("Dropped {} file(s)", paths.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LayoutMetrics;
    use crate::core::{MoveDirection, ViewType, WindowMode};
    use crate::handler::key::TextEdit;
    use crate::library::{FsLibrary, SharedSelection};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn setup() -> (TempDir, LibraryWindow) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Textures")).unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::write(dir.path().join("b.png"), b"b").unwrap();

        let library = FsLibrary::new(dir.path()).unwrap();
        let mut window = LibraryWindow::new(
            Box::new(library),
            Box::new(SharedSelection::new()),
            LayoutMetrics::default(),
        );
        window.set_view_type(ViewType::List16);
        window.set_viewport(400, 200);
        (dir, window)
    }

    fn center(window: &LibraryWindow, path: &str) -> Point {
        let b = window.content().lookup(Path::new(path)).unwrap().icon_bounds;
        Point::new(b.x + b.width / 2, b.y + b.height / 2)
    }

    fn click(window: &mut LibraryWindow, ui: &mut UiState, point: Point, modifiers: Modifiers) {
        handle_mouse_action(MouseAction::Press { point, modifiers }, window, ui);
        handle_mouse_action(MouseAction::Release { point: Some(point) }, window, ui);
    }

    #[test]
    fn test_quit() {
        let (_dir, mut window) = setup();
        let mut ui = UiState::new();
        assert_eq!(
            handle_action(KeyAction::Quit, &mut window, &mut ui),
            ActionResult::Quit
        );
    }

    #[test]
    fn test_activate_enters_folder() {
        let (_dir, mut window) = setup();
        let mut ui = UiState::new();
        handle_action(KeyAction::Move(MoveDirection::Down), &mut window, &mut ui);
        assert_eq!(
            window.selection().selected_paths(),
            &[PathBuf::from("Textures")]
        );
        handle_action(KeyAction::Activate, &mut window, &mut ui);
        assert_eq!(window.current_folder(), Path::new("Textures"));
        handle_action(KeyAction::GoUp, &mut window, &mut ui);
        assert_eq!(window.current_folder(), Path::new(""));
    }

    #[test]
    fn test_search_prompt_filters_live() {
        let (_dir, mut window) = setup();
        let mut ui = UiState::new();
        handle_action(KeyAction::StartSearch, &mut window, &mut ui);
        assert!(ui.is_search_open());
        handle_action(KeyAction::Edit(TextEdit::Insert('b')), &mut window, &mut ui);
        assert_eq!(window.search_query(), "b");
        assert_eq!(window.content().len(), 1);

        handle_action(KeyAction::CancelSearch, &mut window, &mut ui);
        assert!(!ui.is_search_open());
        assert!(!window.is_search_active());
        assert_eq!(window.content().len(), 3);
    }

    #[test]
    fn test_rename_through_keys() {
        let (dir, mut window) = setup();
        let mut ui = UiState::new();
        window.select(Path::new("a.png"), Modifiers::NONE);
        handle_action(KeyAction::StartRename, &mut window, &mut ui);
        assert!(matches!(window.mode(), WindowMode::Rename { .. }));
        handle_action(KeyAction::Edit(TextEdit::Insert('z')), &mut window, &mut ui);
        handle_action(KeyAction::CommitRename, &mut window, &mut ui);
        assert!(dir.path().join("az.png").exists());
        assert!(!dir.path().join("a.png").exists());
    }

    #[test]
    fn test_click_selects_and_ctrl_click_extends() {
        let (_dir, mut window) = setup();
        let mut ui = UiState::new();
        let a = center(&window, "a.png");
        let b = center(&window, "b.png");
        click(&mut window, &mut ui, a, Modifiers::NONE);
        click(&mut window, &mut ui, b, Modifiers::CTRL);
        assert_eq!(
            window.selection().selected_paths(),
            &[PathBuf::from("a.png"), PathBuf::from("b.png")]
        );

        click(&mut window, &mut ui, Point::new(390, 190), Modifiers::NONE);
        assert!(window.selection().selected_paths().is_empty());
    }

    #[test]
    fn test_double_click_folder_enters() {
        let (_dir, mut window) = setup();
        let mut ui = UiState::new();
        let folder = center(&window, "Textures");
        click(&mut window, &mut ui, folder, Modifiers::NONE);
        click(&mut window, &mut ui, folder, Modifiers::NONE);
        assert_eq!(window.current_folder(), Path::new("Textures"));
    }

    #[test]
    fn test_drag_entry_onto_folder_moves_it() {
        let (dir, mut window) = setup();
        let mut ui = UiState::new();
        let a = center(&window, "a.png");
        let folder = center(&window, "Textures");

        handle_mouse_action(
            MouseAction::Press {
                point: a,
                modifiers: Modifiers::NONE,
            },
            &mut window,
            &mut ui,
        );
        handle_mouse_action(MouseAction::Drag { point: Some(folder) }, &mut window, &mut ui);
        assert!(ui.pointer.is_dragging());
        assert_eq!(ui.pointer.dragged(), &[PathBuf::from("a.png")]);

        handle_mouse_action(
            MouseAction::Release {
                point: Some(folder),
            },
            &mut window,
            &mut ui,
        );
        assert!(dir.path().join("Textures/a.png").exists());
        assert!(!ui.pointer.is_dragging());
    }

    #[test]
    fn test_rectangle_drag_selects() {
        let (_dir, mut window) = setup();
        let mut ui = UiState::new();
        handle_mouse_action(
            MouseAction::Press {
                point: Point::new(300, 5),
                modifiers: Modifiers::NONE,
            },
            &mut window,
            &mut ui,
        );
        handle_mouse_action(
            MouseAction::Drag {
                point: Some(Point::new(2, 30)),
            },
            &mut window,
            &mut ui,
        );
        assert_eq!(window.selection().selected_paths().len(), 2);
        handle_mouse_action(
            MouseAction::Release {
                point: Some(Point::new(2, 30)),
            },
            &mut window,
            &mut ui,
        );
        assert!(window.selection().drag_rect().is_none());
        assert_eq!(window.selection().selected_paths().len(), 2);
    }

    #[test]
    fn test_paste_imports_files() {
        let (dir, mut window) = setup();
        let outside = tempfile::tempdir().unwrap();
        let rock = outside.path().join("rock.fbx");
        fs::write(&rock, b"mesh").unwrap();

        handle_paste(&rock.display().to_string(), &mut window);
        assert!(dir.path().join("rock.fbx").exists());
        assert!(rock.exists());
        assert!(window.content().contains(Path::new("rock.fbx")));
    }
}

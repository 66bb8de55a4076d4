//! Main event loop for the application

use std::io::Stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::app::Config;
use crate::content::Viewport;
use crate::handler::{
    handle_action, handle_key_event, handle_mouse_action, handle_mouse_event, handle_paste,
    ActionResult, UiState,
};
use crate::library::{FsLibrary, SharedSelection};
use crate::render::theme;
use crate::window::LibraryWindow;

use super::render::{frame_areas, render_frame};

/// Build the library window for `config`
pub fn open_library(config: &Config) -> anyhow::Result<(LibraryWindow, SharedSelection)> {
    let mut library = FsLibrary::new(&config.root)?
        .with_show_hidden(config.show_hidden)
        .with_trash(config.use_trash);

    if config.watch {
        // Keep running without live updates
        if let Err(e) = library.watch() {
            tracing::warn!("file watching disabled: {}", e);
        }
    }

    let selection = SharedSelection::new();
    let mut window = LibraryWindow::new(
        Box::new(library),
        Box::new(selection.clone()),
        config.metrics,
    );
    window.set_view_type(config.view_type);
    Ok((window, selection))
}

/// Report files opened by double-click or Enter
fn report_opened(window: &mut LibraryWindow, opened: Vec<PathBuf>) {
    if let Some(last) = opened.last() {
        tracing::info!(path = %last.display(), "opened");
        window.set_message(format!("Opened {}", last.display()));
    }
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<()> {
    let (mut window, _selection) = open_library(&config)?;
    let mut ui = UiState::new();
    let theme = theme();
    let metrics = config.metrics;
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let frame_delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        // Track terminal size in layout pixels
        let size = terminal.size()?;
        let areas = frame_areas(Rect::new(0, 0, size.width, size.height));
        let viewport = Viewport::new(
            areas.content.width as i32 * metrics.char_width,
            areas.content.height as i32 * metrics.line_height,
        );
        if window.viewport() != viewport {
            window.set_viewport(viewport.width, viewport.height);
        }

        window.update(frame_delta);
        let opened = ui.absorb_events(window.drain_events());
        report_opened(&mut window, opened);

        terminal.draw(|frame| render_frame(frame, &window, &ui, theme))?;

        if !event::poll(Duration::from_millis(60))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = handle_key_event(window.mode(), ui.is_search_open(), key);
                if handle_action(action, &mut window, &mut ui) == ActionResult::Quit {
                    break;
                }
            }
            Event::Mouse(mouse) if config.mouse_enabled => {
                let action = handle_mouse_event(mouse, areas.content, &metrics);
                handle_mouse_action(action, &mut window, &mut ui);
            }
            Event::Paste(text) => handle_paste(&text, &mut window),
            Event::FocusGained => window.set_focus(true),
            Event::FocusLost => window.set_focus(false),
            _ => {}
        }

        let opened = ui.absorb_events(window.drain_events());
        report_opened(&mut window, opened);
    }

    tracing::info!("lv exiting");
    Ok(())
}

//! Rendering helpers for the event loop

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::handler::UiState;
use crate::render::{render_content, render_folder_bar, render_popups, render_status_bar, Theme};
use crate::window::LibraryWindow;

/// Screen regions of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    pub folder_bar: Rect,
    /// Bordered frame around the tiles
    pub content_block: Rect,
    /// Cells the tiles are drawn into
    pub content: Rect,
    pub status: Rect,
}

fn content_block(focused: bool, theme: &Theme) -> Block<'static> {
    let border = if focused {
        theme.border_active
    } else {
        theme.border
    };
    Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(border))
}

/// Split the screen into folder bar, content and status bar
pub fn frame_areas(area: Rect) -> FrameAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let content_block_area = chunks[1];
    let content = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .inner(content_block_area);

    FrameAreas {
        folder_bar: chunks[0],
        content_block: content_block_area,
        content,
        status: chunks[2],
    }
}

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, window: &LibraryWindow, ui: &UiState, theme: &Theme) {
    let areas = frame_areas(frame.area());

    render_folder_bar(frame, window, areas.folder_bar, theme);
    frame.render_widget(
        content_block(window.is_focused(), theme),
        areas.content_block,
    );
    render_content(frame, window, areas.content, theme);
    render_status_bar(frame, window, areas.status, theme);
    render_popups(frame, window, ui.search.as_ref(), theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_areas() {
        let areas = frame_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.folder_bar, Rect::new(0, 0, 80, 3));
        assert_eq!(areas.status, Rect::new(0, 21, 80, 3));
        assert_eq!(areas.content, Rect::new(1, 3, 78, 18));
    }
}

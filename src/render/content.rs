//! Content area rendering
//!
//! Entry geometry is laid out in pixels; each terminal cell covers
//! `char_width` x `line_height` pixels of the visible content.

use ratatui::{
    buffer::Buffer,
    layout::Rect as CellRect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::content::{EntryView, LayoutMetrics, RenameField, UnderlayState};
use crate::core::Rect;
use crate::render::theme::Theme;
use crate::window::LibraryWindow;

/// Maps content pixels onto the cells of a terminal area
#[derive(Debug, Clone, Copy)]
pub struct CellMapper {
    area: CellRect,
    char_width: i32,
    line_height: i32,
    scroll_offset: i32,
}

/// Round a pixel span to a cell span, keeping at least one cell for
/// non-empty spans
fn cell_span(start: i32, len: i32, unit: i32) -> (i32, i32) {
    let first = (start + unit / 2).div_euclid(unit);
    let last = (start + len + unit / 2).div_euclid(unit);
    if len > 0 && last <= first {
        (first, first + 1)
    } else {
        (first, last)
    }
}

impl CellMapper {
    pub fn new(area: CellRect, metrics: &LayoutMetrics, scroll_offset: i32) -> Self {
        Self {
            area,
            char_width: metrics.char_width.max(1),
            line_height: metrics.line_height.max(1),
            scroll_offset,
        }
    }

    /// Cells covered by a content rectangle, clipped to the area
    pub fn to_cells(&self, rect: &Rect) -> Option<CellRect> {
        let (x0, x1) = cell_span(rect.x, rect.width, self.char_width);
        let (y0, y1) = cell_span(rect.y - self.scroll_offset, rect.height, self.line_height);

        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.area.width as i32);
        let y1 = y1.min(self.area.height as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(CellRect::new(
            self.area.x + x0 as u16,
            self.area.y + y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ))
    }
}

/// Render the library content into `area`
pub fn render_content(frame: &mut Frame, window: &LibraryWindow, area: CellRect, theme: &Theme) {
    let content = window.content();
    let mapper = CellMapper::new(area, content.metrics(), window.scroll_offset());

    let buf = frame.buffer_mut();
    for view in content.entries() {
        // Entries entirely outside the viewport map to no cells
        if mapper.to_cells(&view.bounds).is_none() {
            continue;
        }
        render_entry(buf, view, &mapper, content.view_type().is_grid(), theme);
    }

    if let Some(cells) = window
        .selection()
        .drag_rect()
        .and_then(|r| mapper.to_cells(&r))
    {
        if cells.width >= 2 && cells.height >= 2 {
            let outline = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.drag_rect));
            frame.render_widget(outline, cells);
        }
    }

    let content_height = content.bounds().height;
    let view_height = window.viewport().height;
    if content_height > view_height {
        let mut state = ScrollbarState::new(content_height.max(0) as usize)
            .viewport_content_length(view_height.max(0) as usize)
            .position(window.scroll_offset().max(0) as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(theme.border)),
            area,
            &mut state,
        );
    }
}

fn render_entry(buf: &mut Buffer, view: &EntryView, mapper: &CellMapper, grid: bool, theme: &Theme) {
    if let Some(underlay) = view.underlay() {
        if view.underlay_state() != UnderlayState::None {
            if let Some(cells) = mapper.to_cells(&underlay.bounds) {
                let bg = theme.underlay_color(view.underlay_state(), underlay.tint);
                buf.set_style(cells, Style::default().bg(bg));
            }
        }
    }

    if let Some(cells) = mapper.to_cells(&view.icon_bounds) {
        let fg = if view.is_cut() {
            theme.cut
        } else if view.is_dir {
            theme.directory
        } else {
            theme.file
        };
        let x = if grid {
            cells.x + cells.width.saturating_sub(1) / 2
        } else {
            cells.x
        };
        let y = cells.y + cells.height.saturating_sub(1) / 2;
        buf.set_string(x, y, view.icon.icon.glyph(), Style::default().fg(fg));
    }

    let Some(cells) = mapper.to_cells(&view.label_bounds) else {
        return;
    };

    match view.rename_field() {
        Some(field) => render_rename_field(buf, field, cells, theme),
        None => {
            let style = if view.is_cut() {
                Style::default().fg(theme.cut)
            } else {
                Style::default().fg(theme.foreground)
            };
            let lines = wrap_label(&view.name, cells.width as usize, cells.height as usize);
            for (row, line) in lines.iter().enumerate() {
                let len = line.chars().count() as u16;
                let x = if grid {
                    cells.x + cells.width.saturating_sub(len) / 2
                } else {
                    cells.x
                };
                buf.set_string(x, cells.y + row as u16, line, style);
            }
        }
    }
}

/// Draw the inline editor with a block cursor, scrolled to keep the cursor
/// visible
fn render_rename_field(buf: &mut Buffer, field: &RenameField, cells: CellRect, theme: &Theme) {
    let width = cells.width as usize;
    let chars: Vec<char> = field.text().chars().collect();
    let cursor = field.cursor().min(chars.len());
    let start = (cursor + 1).saturating_sub(width);

    let field_style = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::UNDERLINED);
    buf.set_style(CellRect::new(cells.x, cells.y, cells.width, 1), field_style);

    for (i, c) in chars.iter().skip(start).take(width).enumerate() {
        let mut style = field_style;
        if start + i == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        buf.set_string(cells.x + i as u16, cells.y, c.to_string(), style);
    }

    if cursor - start < width && cursor == chars.len() {
        buf.set_string(
            cells.x + (cursor - start) as u16,
            cells.y,
            " ",
            field_style.add_modifier(Modifier::REVERSED),
        );
    }
}

/// Break a label into at most `max_lines` lines of `width` characters. A
/// label that does not fit ends with an ellipsis.
pub fn wrap_label(name: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = name.chars().collect();
    let mut lines: Vec<String> = chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect();

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let mut kept: Vec<char> = last.chars().collect();
            kept.truncate(width.saturating_sub(1));
            kept.push('…');
            *last = kept.into_iter().collect();
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LayoutMetrics;
    use crate::core::{Modifiers, ViewType};
    use crate::library::{FsLibrary, SharedSelection};
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use std::path::Path;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_cell_span_rounds_and_keeps_one_cell() {
        assert_eq!(cell_span(0, 16, 16), (0, 1));
        assert_eq!(cell_span(23, 16, 16), (1, 2));
        assert_eq!(cell_span(46, 16, 16), (3, 4));
        assert_eq!(cell_span(4, 2, 8), (1, 2));
        assert_eq!(cell_span(0, 0, 8), (0, 0));
    }

    #[test]
    fn test_mapper_applies_scroll_and_clips() {
        let metrics = LayoutMetrics::default();
        let mapper = CellMapper::new(CellRect::new(1, 1, 10, 4), &metrics, 32);

        assert_eq!(
            mapper.to_cells(&Rect::new(0, 32, 16, 16)),
            Some(CellRect::new(1, 1, 2, 1))
        );
        assert_eq!(
            mapper.to_cells(&Rect::new(72, 32, 40, 16)),
            Some(CellRect::new(10, 1, 1, 1))
        );
        // Scrolled out above
        assert_eq!(mapper.to_cells(&Rect::new(0, 0, 16, 16)), None);
    }

    #[test]
    fn test_wrap_label() {
        assert_eq!(wrap_label("stone.png", 4, 3), vec!["ston", "e.pn", "g"]);
        assert_eq!(wrap_label("stone.png", 4, 2), vec!["ston", "e.p…"]);
        assert!(wrap_label("stone.png", 0, 2).is_empty());
    }

    #[test]
    fn test_render_list_shows_names_and_selection() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Textures")).unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();

        let library = FsLibrary::new(dir.path()).unwrap();
        let mut window = LibraryWindow::new(
            Box::new(library),
            Box::new(SharedSelection::new()),
            LayoutMetrics::default(),
        );
        window.set_view_type(ViewType::List16);
        window.set_viewport(320, 160);
        window.select(Path::new("a.png"), Modifiers::NONE);

        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_content(frame, &window, area, &theme)
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let text = buffer_text(buf);
        assert!(text.contains("Textures"));
        assert!(text.contains("a.png"));

        let label = window.content().lookup(Path::new("a.png")).unwrap().label_bounds;
        let mapper = CellMapper::new(buf.area, &LayoutMetrics::default(), 0);
        let cells = mapper.to_cells(&label).unwrap();
        assert_eq!(
            buf[(cells.x, cells.y)].bg,
            theme.underlay_color(
                UnderlayState::Selected,
                crate::content::Tint::SELECTION
            )
        );
    }
}

//! Folder bar, status bar and popup rendering

use std::path::PathBuf;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::content::RenameField;
use crate::core::{PendingAction, WindowMode};
use crate::render::theme::Theme;
use crate::window::LibraryWindow;

const CRUMB_SEPARATOR: &str = "/";

/// Render the breadcrumbs of the current folder, or the search query
pub fn render_folder_bar(frame: &mut Frame, window: &LibraryWindow, area: Rect, theme: &Theme) {
    let max_width = area.width.saturating_sub(4) as usize;
    let crumbs = window.folder_bar(max_width);

    let mut spans = vec![Span::raw(" ")];
    if window.is_search_active() {
        spans.push(Span::styled(
            "\u{f002} ", // Search icon
            Style::default().fg(theme.info),
        ));
    }
    let last = crumbs.len().saturating_sub(1);
    for (i, crumb) in crumbs.iter().enumerate() {
        let style = if i == last {
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.directory)
        };
        spans.push(Span::styled(crumb.name.clone(), style));
        if i != last {
            spans.push(Span::raw(CRUMB_SEPARATOR));
        }
    }

    let border = if window.is_focused() {
        theme.border_active
    } else {
        theme.border
    };
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", window.view_type().display_name())),
    );
    frame.render_widget(bar, area);
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, window: &LibraryWindow, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left: message or the focused entry
    let (text, color) = match window.message() {
        Some(msg) => (msg.to_string(), theme.status_fg),
        None => match window.selection().selected_paths() {
            [only] => (only.display().to_string(), theme.status_fg),
            _ => ("/ search  F2 rename  q quit".to_string(), theme.border),
        },
    };
    let msg_widget = Paragraph::new(Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(color),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[0]);

    // Right: counts
    let selection = window.selection();
    let selected_count = selection.selected_paths().len();
    let clipboard = selection.clipboard();
    let clipboard_info = if clipboard.is_empty() {
        String::new()
    } else if clipboard.is_cut() {
        format!(" | Cut: {}", clipboard.cut_paths().len())
    } else {
        format!(" | Copied: {}", clipboard.copy_paths().len())
    };

    let stats = format!(
        "Items: {}{}{}",
        window.content().len(),
        if selected_count > 0 {
            format!(" | Selected: {}", selected_count)
        } else {
            String::new()
        },
        clipboard_info
    );
    let stats_widget = Paragraph::new(stats).block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats_widget, chunks[1]);
}

/// Render the popup for the current window mode and the search prompt
pub fn render_popups(
    frame: &mut Frame,
    window: &LibraryWindow,
    search: Option<&RenameField>,
    theme: &Theme,
) {
    match window.mode() {
        WindowMode::Confirm { action } => draw_confirm_popup(frame, window, action, theme),
        WindowMode::Alert { title, message } => draw_alert_popup(frame, title, message, theme),
        WindowMode::Browse | WindowMode::Rename { .. } => {}
    }

    if let Some(field) = search {
        draw_input_popup(frame, "Search", field, theme);
    }
}

/// Draw a single-line input popup with a cursor
fn draw_input_popup(frame: &mut Frame, title: &str, field: &RenameField, theme: &Theme) {
    let area = centered_rect(60, 3, frame.area());

    let text = field.text();
    let split = text
        .char_indices()
        .nth(field.cursor())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (before, after) = text.split_at(split);
    let mut rest = after.chars();
    let at_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());

    let line = Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(at_cursor, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(rest.as_str().to_string()),
    ]);
    let input = Paragraph::new(line)
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_active))
                .title(format!(" {} ", title)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(input, area);
}

/// Draw an alert with a title and a dismiss hint
fn draw_alert_popup(frame: &mut Frame, title: &str, message: &str, theme: &Theme) {
    let width = (message.chars().count() + 4).clamp(30, 70) as u16;
    let percent = (width * 100 / frame.area().width.max(1)).clamp(20, 90);
    let area = centered_rect(percent, 5, frame.area());

    let content = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to dismiss",
            Style::default().fg(theme.border),
        )),
    ];
    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Draw confirmation popup
fn draw_confirm_popup(
    frame: &mut Frame,
    window: &LibraryWindow,
    action: &PendingAction,
    theme: &Theme,
) {
    match action {
        PendingAction::Delete { targets } => {
            draw_delete_confirm_popup(frame, window, targets, theme);
        }
    }
}

/// Draw delete confirmation popup
fn draw_delete_confirm_popup(
    frame: &mut Frame,
    window: &LibraryWindow,
    paths: &[PathBuf],
    theme: &Theme,
) {
    let max_items_to_show = 8;
    let items_count = paths.len().min(max_items_to_show);
    let has_more = paths.len() > max_items_to_show;
    let is_dir = |p: &PathBuf| window.content().lookup(p).is_some_and(|v| v.is_dir);
    let has_directories = paths.iter().any(is_dir);

    let warning_lines = if has_directories { 2 } else { 0 };
    let more_line = if has_more { 1 } else { 0 };
    let height = (3 + warning_lines + items_count + more_line + 2) as u16;

    let area = centered_rect(60, height, frame.area());

    let mut content = Vec::new();

    if has_directories {
        content.push(Line::from(vec![Span::styled(
            "Folders and all their contents will be deleted",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )]));
        content.push(Line::from(""));
    }

    content.push(Line::from(vec![Span::styled(
        format!("Delete {} item(s):", paths.len()),
        Style::default().add_modifier(Modifier::BOLD),
    )]));

    for path in paths.iter().take(max_items_to_show) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let style = if is_dir(path) {
            Style::default().fg(theme.directory).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };

        content.push(Line::from(vec![Span::raw("  "), Span::styled(name, style)]));
    }

    if has_more {
        content.push(Line::from(vec![Span::styled(
            format!("  ... and {} more", paths.len() - max_items_to_show),
            Style::default().fg(theme.border),
        )]));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("y", Style::default().fg(theme.info).add_modifier(Modifier::BOLD)),
        Span::raw(" to confirm, "),
        Span::styled("n", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
        Span::raw(" to cancel"),
    ]));

    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if has_directories {
                Style::default().fg(theme.error)
            } else {
                Style::default().fg(theme.border_active)
            })
            .title(" Confirm Delete "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 20);
        let popup = centered_rect(60, 3, area);
        assert_eq!(popup.height, 3);
        assert_eq!(popup.y, 8);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.x, 20);
    }
}

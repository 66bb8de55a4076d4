//! Mouse input and dropped path handling

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect as CellRect;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::content::LayoutMetrics;
use crate::core::{Modifiers, Point};

/// Lines scrolled per wheel step
const WHEEL_LINES: i32 = 3;

/// Actions triggered by mouse events. Points are content-area pixels;
/// `None` means the pointer is outside the content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseAction {
    None,
    Press { point: Point, modifiers: Modifiers },
    Drag { point: Option<Point> },
    Release { point: Option<Point> },
    /// Scroll by pixels, negative scrolls up
    Scroll(i32),
}

/// Detects double-clicks by tracking click timing
pub struct ClickDetector {
    last_click: Option<(Instant, PathBuf)>,
    threshold: Duration,
}

impl Default for ClickDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickDetector {
    pub fn new() -> Self {
        Self {
            last_click: None,
            threshold: Duration::from_millis(500),
        }
    }

    /// Returns true if this click on `path` forms a double-click
    pub fn click(&mut self, path: &Path) -> bool {
        let now = Instant::now();
        let is_double = self
            .last_click
            .as_ref()
            .is_some_and(|(t, p)| p == path && now.duration_since(*t) < self.threshold);

        self.last_click = if is_double {
            None
        } else {
            Some((now, path.to_path_buf()))
        };
        is_double
    }

    pub fn reset(&mut self) {
        self.last_click = None;
    }
}

/// Pixel at the center of a terminal cell, relative to `area`
pub fn cell_to_point(column: u16, row: u16, area: CellRect, metrics: &LayoutMetrics) -> Option<Point> {
    let inside = column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height;
    inside.then(|| {
        Point::new(
            (column - area.x) as i32 * metrics.char_width + metrics.char_width / 2,
            (row - area.y) as i32 * metrics.line_height + metrics.line_height / 2,
        )
    })
}

fn modifiers_of(event: &MouseEvent) -> Modifiers {
    Modifiers {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
    }
}

/// Process a mouse event over the content area
pub fn handle_mouse_event(
    event: MouseEvent,
    content_area: CellRect,
    metrics: &LayoutMetrics,
) -> MouseAction {
    let point = cell_to_point(event.column, event.row, content_area, metrics);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => match point {
            Some(point) => MouseAction::Press {
                point,
                modifiers: modifiers_of(&event),
            },
            None => MouseAction::None,
        },
        MouseEventKind::Drag(MouseButton::Left) => MouseAction::Drag { point },
        MouseEventKind::Up(MouseButton::Left) => MouseAction::Release { point },
        MouseEventKind::ScrollUp => MouseAction::Scroll(-WHEEL_LINES * metrics.line_height),
        MouseEventKind::ScrollDown => MouseAction::Scroll(WHEEL_LINES * metrics.line_height),
        _ => MouseAction::None,
    }
}

/// Normalize a shell-style path by handling quotes and escape sequences
fn normalize_shell_path(input: &str) -> String {
    let s = input.trim();

    let s = match (s.chars().next(), s.chars().last()) {
        (Some(q @ ('"' | '\'')), Some(end)) if q == end && s.len() > 1 => &s[1..s.len() - 1],
        _ => s,
    };

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next_if(|n| " '\"\\()[]&;!$`".contains(*n)) {
                result.push(next);
                continue;
            }
        }
        result.push(c);
    }

    result
        .replace("%20", " ")
        .replace("%23", "#")
        .replace("%25", "%")
}

/// Parse pasted text (terminal drag and drop) into existing absolute paths
pub fn parse_dropped_paths(content: &str) -> Vec<PathBuf> {
    let content = content.trim();
    if content.is_empty() {
        return Vec::new();
    }

    if content.contains('\n') {
        return content.lines().filter_map(to_path).collect();
    }

    // Space separated, honoring quotes and backslash escapes
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' if quote.is_none() => quote = Some(c),
            c if quote == Some(c) => quote = None,
            '\\' if quote.is_none() => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ' ' if quote.is_none() => {
                paths.extend(to_path(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }
    paths.extend(to_path(&current));

    paths
}

fn to_path(s: &str) -> Option<PathBuf> {
    let normalized = normalize_shell_path(s);
    let path_str = normalized.strip_prefix("file://").unwrap_or(&normalized);
    if path_str.is_empty() {
        return None;
    }

    let path = PathBuf::from(path_str);
    (path.is_absolute() && path.exists()).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }
    }

    #[test]
    fn click_detector_double() {
        let mut d = ClickDetector::new();
        assert!(!d.click(Path::new("a.png")));
        assert!(d.click(Path::new("a.png")));
        assert!(!d.click(Path::new("a.png")));
    }

    #[test]
    fn click_detector_different_entries() {
        let mut d = ClickDetector::new();
        assert!(!d.click(Path::new("a.png")));
        assert!(!d.click(Path::new("b.png")));
    }

    #[test]
    fn cell_mapping() {
        let area = CellRect::new(2, 1, 10, 5);
        let metrics = LayoutMetrics::default();
        assert_eq!(
            cell_to_point(2, 1, area, &metrics),
            Some(Point::new(4, 8))
        );
        assert_eq!(
            cell_to_point(5, 3, area, &metrics),
            Some(Point::new(28, 40))
        );
        assert_eq!(cell_to_point(1, 1, area, &metrics), None);
        assert_eq!(cell_to_point(2, 6, area, &metrics), None);
    }

    #[test]
    fn press_carries_modifiers() {
        let area = CellRect::new(0, 0, 10, 10);
        let event = mouse(
            MouseEventKind::Down(MouseButton::Left),
            1,
            0,
            KeyModifiers::CONTROL,
        );
        assert_eq!(
            handle_mouse_event(event, area, &LayoutMetrics::default()),
            MouseAction::Press {
                point: Point::new(12, 8),
                modifiers: Modifiers::CTRL
            }
        );
    }

    #[test]
    fn press_outside_ignored_drag_outside_reported() {
        let area = CellRect::new(0, 2, 10, 10);
        let metrics = LayoutMetrics::default();
        let down = mouse(
            MouseEventKind::Down(MouseButton::Left),
            0,
            0,
            KeyModifiers::NONE,
        );
        assert_eq!(handle_mouse_event(down, area, &metrics), MouseAction::None);

        let drag = mouse(
            MouseEventKind::Drag(MouseButton::Left),
            0,
            0,
            KeyModifiers::NONE,
        );
        assert_eq!(
            handle_mouse_event(drag, area, &metrics),
            MouseAction::Drag { point: None }
        );
    }

    #[test]
    fn wheel_scrolls_by_lines() {
        let area = CellRect::new(0, 0, 10, 10);
        let event = mouse(MouseEventKind::ScrollDown, 0, 0, KeyModifiers::NONE);
        assert_eq!(
            handle_mouse_event(event, area, &LayoutMetrics::default()),
            MouseAction::Scroll(48)
        );
    }

    #[test]
    fn normalize_quoted_and_escaped() {
        assert_eq!(normalize_shell_path("\"hello\""), "hello");
        assert_eq!(normalize_shell_path("hello\\ world"), "hello world");
        assert_eq!(normalize_shell_path("hello%20world"), "hello world");
    }

    #[test]
    fn parse_existing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a b.png");
        std::fs::write(&a, b"").unwrap();

        let quoted = format!("'{}'", a.display());
        assert_eq!(parse_dropped_paths(&quoted), vec![a.clone()]);

        let url = format!("file://{}", a.display()).replace(' ', "%20");
        assert_eq!(parse_dropped_paths(&url), vec![a]);
    }

    #[test]
    fn parse_nonexistent_filtered() {
        assert!(parse_dropped_paths("/nonexistent/path/xyz").is_empty());
        assert!(parse_dropped_paths("relative.png").is_empty());
    }
}

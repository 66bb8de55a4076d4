//! Vertical scroll state of the content area
//!
//! The position is stored as a fraction of the scrollable height so it
//! survives content height changes.

use crate::core::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Scroll position in [0, 1]
    percent: f32,
    /// Auto-scroll speed in pixels per second, negative scrolls up
    auto_scroll: f32,
}

impl ScrollState {
    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn set_percent(&mut self, percent: f32) {
        self.percent = percent.clamp(0.0, 1.0);
    }

    pub fn auto_scroll(&self) -> f32 {
        self.auto_scroll
    }

    pub fn set_auto_scroll(&mut self, amount: f32) {
        self.auto_scroll = amount;
    }

    /// Pixel offset of the viewport top into the content
    pub fn offset(&self, content_height: i32, view_height: i32) -> i32 {
        let scrollable = (content_height - view_height).max(0);
        (scrollable as f32 * self.percent).round() as i32
    }

    /// Scroll by a pixel amount
    pub fn scroll_by(&mut self, pixels: i32, content_height: i32, view_height: i32) {
        let scrollable = content_height - view_height;
        if scrollable <= 0 {
            self.percent = 0.0;
            return;
        }
        self.set_percent(self.percent + pixels as f32 / scrollable as f32);
    }

    /// Advance auto-scroll by one frame
    pub fn apply_auto_scroll(&mut self, frame_delta: f32, content_height: i32) {
        if self.auto_scroll == 0.0 || content_height <= 0 {
            return;
        }
        let step = self.auto_scroll / content_height as f32;
        self.set_percent(self.percent + step * frame_delta);
    }

    /// Center `bounds` in the viewport unless it is already fully visible.
    /// Returns true if the position changed.
    pub fn scroll_to(&mut self, bounds: &Rect, content_height: i32, view_height: i32) -> bool {
        let offset = self.offset(content_height, view_height);
        let visible = bounds.y >= offset && bounds.bottom() <= offset + view_height;
        if visible {
            return false;
        }

        let scrollable = content_height - view_height;
        if scrollable <= 0 {
            return false;
        }

        let center = bounds.y as f32 + bounds.height as f32 * 0.5;
        let percent = (center - view_height as f32 * 0.5) / scrollable as f32;
        self.set_percent(percent);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let mut scroll = ScrollState::default();
        scroll.set_percent(0.5);
        assert_eq!(scroll.offset(1000, 200), 400);
        assert_eq!(scroll.offset(100, 200), 0);
    }

    #[test]
    fn test_scroll_to_visible_entry_noop() {
        let mut scroll = ScrollState::default();
        assert!(!scroll.scroll_to(&Rect::new(0, 10, 50, 50), 1000, 200));
        assert_eq!(scroll.percent(), 0.0);
    }

    #[test]
    fn test_scroll_to_centers_entry() {
        let mut scroll = ScrollState::default();
        // center at 525, minus half the view (100), over 800 scrollable
        assert!(scroll.scroll_to(&Rect::new(0, 500, 50, 50), 1000, 200));
        assert!((scroll.percent() - 425.0 / 800.0).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_to_clamped() {
        let mut scroll = ScrollState::default();
        scroll.set_percent(1.0);
        assert!(scroll.scroll_to(&Rect::new(0, -5, 50, 20), 1000, 200));
        assert_eq!(scroll.percent(), 0.0);
    }

    #[test]
    fn test_auto_scroll() {
        let mut scroll = ScrollState::default();
        scroll.set_auto_scroll(100.0);
        scroll.apply_auto_scroll(0.5, 1000);
        assert!((scroll.percent() - 0.05).abs() < 1e-6);

        scroll.set_auto_scroll(-100.0);
        scroll.apply_auto_scroll(10.0, 1000);
        assert_eq!(scroll.percent(), 0.0);
    }

    #[test]
    fn test_scroll_by() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(80, 1000, 200);
        assert!((scroll.percent() - 0.1).abs() < 1e-6);
        scroll.scroll_by(10_000, 1000, 200);
        assert_eq!(scroll.percent(), 1.0);
    }
}

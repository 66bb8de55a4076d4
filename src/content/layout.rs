//! Tile layout engine
//!
//! Computes grid/list geometry for the content area from the view type,
//! the number of entries and the viewport size. All values are pixels.

use crate::core::ViewType;

/// Gap between grid rows and the outer horizontal margin of a grid row
pub const GRID_ENTRY_SPACING: i32 = 15;
/// Minimum gap between grid labels
pub const MIN_HORZ_SPACING: i32 = 8;
/// Vertical gap between consecutive list rows
pub const LIST_ENTRY_SPACING: i32 = 7;
/// Wrapped grid labels are cut off at this height
pub const MAX_LABEL_HEIGHT: i32 = 50;
/// Icon size used by the list view
pub const LIST_TILE_SIZE: i32 = 16;

/// Text measurement and chrome sizes used by the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Width of one label character
    pub char_width: i32,
    /// Height of one label line
    pub line_height: i32,
    /// Width taken away from the content by a vertical scrollbar
    pub scrollbar_width: i32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            char_width: 8,
            line_height: 16,
            scrollbar_width: 16,
        }
    }
}

impl LayoutMetrics {
    /// Width of a single unwrapped line of text
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }

    /// Number of lines `text` wraps to inside `width`
    pub fn wrapped_lines(&self, text: &str, width: i32) -> i32 {
        let chars = text.chars().count() as i32;
        if chars == 0 {
            return 1;
        }
        let per_line = (width / self.char_width.max(1)).max(1);
        (chars + per_line - 1) / per_line
    }

    /// Height of a grid label, wrapped to `width` and capped
    pub fn label_height(&self, text: &str, width: i32) -> i32 {
        (self.wrapped_lines(text, width) * self.line_height).min(MAX_LABEL_HEIGHT)
    }
}

/// Size of the scrollable display area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Layout parameters for one refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub tile_size: i32,
    pub is_grid: bool,
    /// Entries per row, at least 1
    pub columns_per_row: i32,
    /// Label width in grid mode, 0 in list mode
    pub label_width: i32,
    /// Width of one grid slot including margins, 0 in list mode
    pub element_width: i32,
    /// Width left for content after the scrollbar was accounted for
    pub content_width: i32,
    /// Whether the content is taller than the viewport
    pub requires_scrollbar: bool,
}

impl TileLayout {
    /// Compute the layout for `entry_count` entries.
    ///
    /// When the grid does not fit vertically the scrollbar width is
    /// subtracted and the column count recomputed once. The second pass
    /// does not re-check the height, so a narrower grid that now needs
    /// more rows keeps its column count.
    pub fn compute(
        view_type: ViewType,
        entry_count: usize,
        viewport: Viewport,
        has_scrollbar_already: bool,
        metrics: &LayoutMetrics,
    ) -> Self {
        if !view_type.is_grid() {
            let rows = entry_count as i32;
            let row_height = LIST_TILE_SIZE.max(metrics.line_height);
            let needed = rows * row_height + (rows - 1).max(0) * LIST_ENTRY_SPACING;
            return Self {
                tile_size: LIST_TILE_SIZE,
                is_grid: false,
                columns_per_row: 1,
                label_width: 0,
                element_width: 0,
                content_width: viewport.width,
                requires_scrollbar: needed > viewport.height,
            };
        }

        let tile_size = view_type.tile_size();
        let elem_size = tile_size + GRID_ENTRY_SPACING;
        let mut width = viewport.width;
        let mut columns = columns_for_width(width, elem_size);

        let rows = rows_for(entry_count, columns);
        let needed_height = rows * elem_size;
        let requires_scrollbar = needed_height > viewport.height;
        if requires_scrollbar && !has_scrollbar_already {
            width -= metrics.scrollbar_width;
            columns = columns_for_width(width, elem_size);
        }

        let label_width = ((width - (columns + 1) * MIN_HORZ_SPACING) / columns).max(0);
        let element_width = (width / columns).max(0);

        Self {
            tile_size,
            is_grid: true,
            columns_per_row: columns,
            label_width,
            element_width,
            content_width: width,
            requires_scrollbar,
        }
    }

    /// Number of rows needed for `entry_count` entries
    pub fn rows(&self, entry_count: usize) -> i32 {
        rows_for(entry_count, self.columns_per_row)
    }
}

fn columns_for_width(width: i32, elem_size: i32) -> i32 {
    ((width - GRID_ENTRY_SPACING * 2) / elem_size).max(1)
}

fn rows_for(entry_count: usize, columns: i32) -> i32 {
    let columns = columns.max(1) as usize;
    entry_count.div_ceil(columns) as i32
}

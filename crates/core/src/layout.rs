//! Pixel arithmetic shared by the template extractors.
//!
//! All layouts are computed against the 1200x675 reference canvas with a
//! 60px side margin.

use crate::types::{Rect, CANVAS_WIDTH};

/// Left inset used by every template.
pub const MARGIN: i32 = 60;

/// Usable width between the side margins.
pub const CONTENT_WIDTH: i32 = CANVAS_WIDTH - 2 * MARGIN;

/// Vertical cursor value before anything is placed.
pub const TOP: i32 = 40;

/// Height of the standard title band.
pub const TITLE_HEIGHT: i32 = 80;

/// Space below the title band.
pub const TITLE_GAP: i32 = 20;

/// Height reserved per bullet.
pub const BULLET_HEIGHT: i32 = 50;

/// Width of each of `count` columns sharing `total` with `gap` between them.
///
/// Floors the division, so the remainder is left unused. Degenerate
/// counts that would not leave a pixel per column clamp to 1.
pub fn even_split(total: i32, count: usize, gap: i32) -> i32 {
    let count = count.max(1) as i32;
    let width = (total - (count - 1) * gap) / count;
    if width < 1 {
        log::debug!(
            "{} columns do not fit in {}px with {}px gaps; clamping width",
            count,
            total,
            gap
        );
        1
    } else {
        width
    }
}

/// Height of a bullet list with `count` entries.
pub fn bullet_list_height(count: usize) -> i32 {
    (count as i32 * BULLET_HEIGHT).max(BULLET_HEIGHT)
}

/// A fixed-size cell grid that wraps after `per_row` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub x: i32,
    pub y: i32,
    pub per_row: usize,
    pub cell_width: i32,
    pub cell_height: i32,
    pub column_gap: i32,
    pub row_gap: i32,
}

impl Grid {
    /// Grid anchored at the left margin whose rows fill the content width.
    pub fn across_content(
        y: i32,
        per_row: usize,
        cell_height: i32,
        column_gap: i32,
        row_gap: i32,
    ) -> Self {
        Self {
            x: MARGIN,
            y,
            per_row: per_row.max(1),
            cell_width: even_split(CONTENT_WIDTH, per_row, column_gap),
            cell_height,
            column_gap,
            row_gap,
        }
    }

    /// Box of the cell at `index`, filling rows left to right.
    pub fn cell(&self, index: usize) -> Rect {
        let row = (index / self.per_row) as i32;
        let col = (index % self.per_row) as i32;
        Rect::new(
            self.x + col * (self.cell_width + self.column_gap),
            self.y + row * (self.cell_height + self.row_gap),
            self.cell_width,
            self.cell_height,
        )
    }
}

/// A single row of `count` evenly split columns across the content width.
pub fn row_cell(index: usize, count: usize, gap: i32, y: i32, height: i32) -> Rect {
    let width = even_split(CONTENT_WIDTH, count, gap);
    Rect::new(MARGIN + index as i32 * (width + gap), y, width, height)
}

//! Page/offset mapping — converts raster-space coordinates into physical
//! book space.
//!
//! Three orthogonal mappings:
//! - column → even page ([`ColumnPageMap`]), used by the segment strategy
//!   and templates;
//! - row → millimeter range ([`RowHeightMap`]), shared by both column
//!   mappings;
//! - letter → contiguous block of even pages ([`LetterLayout`]), used by the
//!   corner strategy.

use crate::folding::{round_mm, BookSpec};

/// Floor on the even pages a single letter occupies in the corner strategy.
pub const MIN_PAGES_PER_LETTER: u32 = 8;

// ────────────────────────────────────────────────────────────────────────────
// Column → page
// ────────────────────────────────────────────────────────────────────────────

/// Maps raster columns onto even physical pages.
///
/// `pages_per_column = max(1, usable_pages / raster_width)`; column `c` lands
/// on page `(floor(c / pages_per_column) + 1) · 2`. Columns mapping past the
/// last page are reported as `None` — truncation, not an error.
#[derive(Debug, Clone)]
pub struct ColumnPageMap {
    pages_per_column: f64,
    page_count: u32,
}

impl ColumnPageMap {
    pub fn new(spec: &BookSpec, raster_width: usize) -> ColumnPageMap {
        let pages_per_column = if raster_width > 0 {
            (spec.usable_pages() as f64 / raster_width as f64).max(1.0)
        } else {
            1.0
        };
        ColumnPageMap {
            pages_per_column,
            page_count: spec.page_count,
        }
    }

    pub fn page_for_column(&self, col: usize) -> Option<u32> {
        let page_index = (col as f64 / self.pages_per_column).floor() as u32;
        let page = (page_index + 1) * 2;
        (page <= self.page_count).then_some(page)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Row → millimeters
// ────────────────────────────────────────────────────────────────────────────

/// Maps raster rows onto millimeter positions down the page.
#[derive(Debug, Clone)]
pub struct RowHeightMap {
    height_per_row: f64,
    page_height_mm: f64,
}

impl RowHeightMap {
    pub fn new(spec: &BookSpec, raster_height: usize) -> RowHeightMap {
        let height_per_row = if raster_height > 0 {
            spec.page_height_mm / raster_height as f64
        } else {
            spec.page_height_mm
        };
        RowHeightMap {
            height_per_row,
            page_height_mm: spec.page_height_mm,
        }
    }

    /// Converts an inclusive row run to a clamped `(start_mm, end_mm)` range.
    /// Returns `None` when clamping collapses the run to zero extent; such
    /// runs are dropped rather than reported.
    pub fn run_to_mm(&self, start_row: usize, end_row: usize) -> Option<(f64, f64)> {
        let start_mm = round_mm(start_row as f64 * self.height_per_row);
        let end_mm = round_mm((end_row as f64 + 1.0) * self.height_per_row);

        let start_mm = start_mm.clamp(0.0, self.page_height_mm);
        let end_mm = end_mm.min(self.page_height_mm).max(start_mm);

        (end_mm > start_mm).then_some((start_mm, end_mm))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Letter → page block
// ────────────────────────────────────────────────────────────────────────────

/// Divides the usable (even) pages evenly across the non-space letters of a
/// corner-strategy text.
#[derive(Debug, Clone, Copy)]
pub struct LetterLayout {
    /// Even pages each letter occupies.
    pub pages_per_letter: u32,
    /// Physical pages a space advances the cursor by, without folds.
    pub space_skip: u32,
}

impl LetterLayout {
    pub fn new(spec: &BookSpec, letter_count: u32) -> LetterLayout {
        let pages_per_letter = if letter_count > 0 {
            MIN_PAGES_PER_LETTER.max(spec.usable_pages() / letter_count)
        } else {
            MIN_PAGES_PER_LETTER
        };
        // Rounded up to even so the page cursor never leaves even pages.
        let space_skip = 2.max(pages_per_letter / 4);
        LetterLayout {
            pages_per_letter,
            space_skip: space_skip + space_skip % 2,
        }
    }

    /// Physical pages one letter block spans (its even pages plus the odd
    /// pages between them).
    pub fn block_advance(&self) -> u32 {
        self.pages_per_letter * 2
    }
}

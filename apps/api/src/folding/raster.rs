//! Raster composition — lays glyph bitmaps side by side into one boolean
//! grid for the whole input string.
//!
//! Two composers exist, one per bitmap alphabet:
//! - [`Raster::compose_matrix`] (segment strategy): fixed 7-row raster, each
//!   character advances by glyph width 5 + spacing 1.
//! - [`Raster::compose_compact`] (dual strategy): fixed 60-column raster
//!   whose height grows with the text, cursor starts at a small left margin.
//!
//! Unknown characters never fault composition: they advance the cursor by
//! the alphabet's fixed blank step and render nothing. Composition is
//! deterministic — the same string always yields an identical raster.

use crate::folding::glyphs::{
    Glyph, GlyphTable, MATRIX_GLYPH_HEIGHT, MATRIX_GLYPH_SPACING, MATRIX_GLYPH_WIDTH,
};

/// Fixed width of the compact (dual-strategy) raster, in columns.
const COMPACT_WIDTH: usize = 60;
/// Left margin the compact cursor starts at.
const COMPACT_LEFT_MARGIN: usize = 5;
/// Cursor advance for a space in the compact alphabet.
const COMPACT_SPACE_ADVANCE: usize = 8;
/// Blank columns between adjacent compact glyphs.
const COMPACT_GLYPH_SPACING: usize = 2;
/// Cursor advance for a character with no compact glyph (3-wide blank + spacing).
const COMPACT_BLANK_ADVANCE: usize = 5;
/// Raster rows contributed per character of input (compact raster height).
const COMPACT_ROWS_PER_CHAR: usize = 8;
/// Minimum compact raster height, rows.
const COMPACT_MIN_HEIGHT: usize = 20;

/// A 2-D boolean grid for an entire rendered string. Built once per request
/// and discarded with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Raster {
        Raster {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Builds a raster from `#`/`.` rows. Used for predefined templates and
    /// tests.
    pub fn from_rows(rows: &[&str]) -> Raster {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut raster = Raster::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if c == '#' {
                    raster.set(row, col);
                }
            }
        }
        raster
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the cell at (row, col) is material. Out-of-range is blank.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = true;
        }
    }

    /// Copies a glyph's cells into the raster at (row0, col0), clipping at
    /// the raster edges.
    fn blit(&mut self, glyph: &Glyph, row0: usize, col0: usize) {
        for row in 0..glyph.height() {
            for col in 0..glyph.width() {
                if glyph.is_set(row, col) {
                    self.set(row0 + row, col0 + col);
                }
            }
        }
    }

    /// Composes the matrix-alphabet raster for `text`: height 7, width
    /// `n·6 − 1` (the last glyph carries no trailing spacing). Empty text
    /// yields a width-0 raster.
    pub fn compose_matrix(glyphs: &GlyphTable, text: &str) -> Raster {
        let advance = MATRIX_GLYPH_WIDTH + MATRIX_GLYPH_SPACING;
        let count = text.chars().count();
        let width = if count == 0 {
            0
        } else {
            count * advance - MATRIX_GLYPH_SPACING
        };
        let mut raster = Raster::new(width, MATRIX_GLYPH_HEIGHT);

        let mut cursor = 0;
        for c in text.chars() {
            if let Some(glyph) = glyphs.matrix_glyph(c) {
                raster.blit(glyph, 0, cursor);
            }
            cursor += advance;
        }
        raster
    }

    /// Composes the compact-alphabet raster for `text`: width 60, height
    /// `max(20, 8·n)`. Spaces advance by a fixed step; glyphs advance by
    /// their own width plus spacing; unknown characters advance blank.
    pub fn compose_compact(glyphs: &GlyphTable, text: &str) -> Raster {
        let count = text.chars().count();
        let height = COMPACT_MIN_HEIGHT.max(count * COMPACT_ROWS_PER_CHAR);
        let mut raster = Raster::new(COMPACT_WIDTH, height);

        let mut cursor = COMPACT_LEFT_MARGIN;
        for c in text.chars() {
            if c == ' ' {
                cursor += COMPACT_SPACE_ADVANCE;
                continue;
            }
            match glyphs.compact_glyph(c) {
                Some(glyph) => {
                    raster.blit(glyph, 0, cursor);
                    cursor += glyph.width() + COMPACT_GLYPH_SPACING;
                }
                None => cursor += COMPACT_BLANK_ADVANCE,
            }
        }
        raster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_is_blank(raster: &Raster, col: usize) -> bool {
        (0..raster.height()).all(|row| !raster.get(row, col))
    }

    // ── matrix composition ──────────────────────────────────────────────────

    #[test]
    fn test_matrix_width_formula() {
        let glyphs = GlyphTable::new();
        assert_eq!(Raster::compose_matrix(&glyphs, "").width(), 0);
        assert_eq!(Raster::compose_matrix(&glyphs, "A").width(), 5);
        assert_eq!(Raster::compose_matrix(&glyphs, "AB").width(), 11);
        let twenty: String = "A".repeat(20);
        assert_eq!(Raster::compose_matrix(&glyphs, &twenty).width(), 119);
    }

    #[test]
    fn test_matrix_spacing_columns_stay_blank() {
        let glyphs = GlyphTable::new();
        let raster = Raster::compose_matrix(&glyphs, "HH");
        assert_eq!(raster.height(), 7);
        // Column 5 separates the two glyphs.
        assert!(column_is_blank(&raster, 5));
        assert!(raster.get(0, 0));
        assert!(raster.get(0, 6));
    }

    #[test]
    fn test_matrix_unknown_character_renders_blank() {
        let glyphs = GlyphTable::new();
        let raster = Raster::compose_matrix(&glyphs, "A?A");
        // Columns 6..=10 belong to the unsupported '?'.
        for col in 6..=10 {
            assert!(column_is_blank(&raster, col), "column {col} not blank");
        }
        // Both 'A' glyphs landed.
        assert!(raster.get(3, 0));
        assert!(raster.get(3, 12));
    }

    #[test]
    fn test_matrix_composition_is_referentially_transparent() {
        let glyphs = GlyphTable::new();
        assert_eq!(
            Raster::compose_matrix(&glyphs, "WORD"),
            Raster::compose_matrix(&glyphs, "WORD")
        );
    }

    // ── compact composition ─────────────────────────────────────────────────

    #[test]
    fn test_compact_dimensions() {
        let glyphs = GlyphTable::new();
        let short = Raster::compose_compact(&glyphs, "AB");
        assert_eq!(short.width(), 60);
        assert_eq!(short.height(), 20); // floor of 20 rows

        let longer = Raster::compose_compact(&glyphs, "AAAA");
        assert_eq!(longer.height(), 32);
    }

    #[test]
    fn test_compact_left_margin_and_advance() {
        let glyphs = GlyphTable::new();
        let raster = Raster::compose_compact(&glyphs, "LO");
        // 'L' bottom row starts at the margin column.
        for col in 0..5 {
            assert!(column_is_blank(&raster, col), "margin column {col}");
        }
        assert!(raster.get(4, 5));
        // 'O' starts at 5 + 4 + 2 = 11.
        assert!(raster.get(0, 12));
    }

    #[test]
    fn test_compact_space_and_unknown_advance_blank() {
        let glyphs = GlyphTable::new();
        let spaced = Raster::compose_compact(&glyphs, "I I");
        // Second 'I' starts at 5 + 3 + 2 + 8 = 18.
        assert!(spaced.get(0, 18));

        // 'Z' has no compact glyph: advances 5 columns, renders nothing.
        let skipped = Raster::compose_compact(&glyphs, "ZI");
        assert!(skipped.get(0, 10));
        for col in 5..10 {
            assert!(column_is_blank(&skipped, col));
        }
    }

    // ── from_rows ───────────────────────────────────────────────────────────

    #[test]
    fn test_from_rows_round_trip() {
        let raster = Raster::from_rows(&["#.#", ".#.", "#.#"]);
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 3);
        assert!(raster.get(0, 0));
        assert!(!raster.get(0, 1));
        assert!(raster.get(1, 1));
    }
}

//! Segment strategy — maximal vertical runs of material per raster column,
//! one full-edge fold range per run.
//!
//! Runs are found per column by a single top-to-bottom scan; no cross-column
//! merging is performed (adjacency is 4-neighbor-independent per column).

use crate::folding::assemble::sort_by_page;
use crate::folding::glyphs::GlyphTable;
use crate::folding::mapper::{ColumnPageMap, RowHeightMap};
use crate::folding::raster::Raster;
use crate::folding::{round_mm, BookSpec, FoldError, FoldInstruction, Pattern};

/// Fraction of the page width a segment fold reaches in from the edge.
const FOLD_DEPTH_RATIO: f64 = 0.7;

/// Compiles text through the segment pipeline. Fails fast when the rendered
/// raster is wider than the book's usable pages; wider books simply spread
/// each column across more pages.
pub fn compile(glyphs: &GlyphTable, text: &str, spec: &BookSpec) -> Result<Pattern, FoldError> {
    let raster = Raster::compose_matrix(glyphs, text);

    let usable = spec.usable_pages();
    if raster.width() as u32 > usable {
        return Err(FoldError::Capacity {
            required: raster.width() as u32,
            available: usable,
        });
    }

    Ok(compile_raster(&raster, spec))
}

/// Converts a raster to segment instructions. Also the entry point for
/// predefined templates, which supply their raster directly.
pub fn compile_raster(raster: &Raster, spec: &BookSpec) -> Pattern {
    let pages = ColumnPageMap::new(spec, raster.width());
    let heights = RowHeightMap::new(spec, raster.height());
    let depth_mm = round_mm(
        spec.page_width_mm
            .unwrap_or(crate::folding::DEFAULT_PAGE_WIDTH_MM)
            * FOLD_DEPTH_RATIO,
    );

    let mut folds = Vec::new();
    for col in 0..raster.width() {
        let Some(page) = pages.page_for_column(col) else {
            // Remaining columns fall past the last page.
            break;
        };
        for (start_row, end_row) in column_runs(raster, col) {
            if let Some((start_mm, end_mm)) = heights.run_to_mm(start_row, end_row) {
                folds.push(FoldInstruction::Segment {
                    page,
                    start_mm,
                    end_mm,
                    depth_mm,
                });
            }
        }
    }

    sort_by_page(&mut folds);
    Pattern { folds }
}

/// Finds the maximal inclusive `(start_row, end_row)` runs of material cells
/// in one column, in top-to-bottom order.
pub fn column_runs(raster: &Raster, col: usize) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;

    for row in 0..raster.height() {
        if raster.get(row, col) {
            open.get_or_insert(row);
        } else if let Some(start) = open.take() {
            runs.push((start, row - 1));
        }
    }
    if let Some(start) = open {
        runs.push((start, raster.height() - 1));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_spec() -> BookSpec {
        BookSpec {
            page_count: 400,
            page_height_mm: 200.0,
            page_width_mm: Some(15.0),
        }
    }

    // ── run detection ───────────────────────────────────────────────────────

    #[test]
    fn test_column_runs_finds_disjoint_runs() {
        let raster = Raster::from_rows(&["#", ".", "#", "#", ".", "#", "#"]);
        assert_eq!(column_runs(&raster, 0), vec![(0, 0), (2, 3), (5, 6)]);
    }

    #[test]
    fn test_column_runs_open_at_raster_end() {
        let raster = Raster::from_rows(&[".", "#", "#"]);
        assert_eq!(column_runs(&raster, 0), vec![(1, 2)]);
    }

    #[test]
    fn test_column_runs_blank_column() {
        let raster = Raster::from_rows(&[".", ".", "."]);
        assert!(column_runs(&raster, 0).is_empty());
    }

    #[test]
    fn test_columns_are_independent() {
        let raster = Raster::from_rows(&["#.", "##", "#."]);
        assert_eq!(column_runs(&raster, 0), vec![(0, 2)]);
        assert_eq!(column_runs(&raster, 1), vec![(1, 1)]);
    }

    // ── compilation ─────────────────────────────────────────────────────────

    /// Full geometry for the letter 'A' in a 400-page, 200 mm book: the 5
    /// glyph columns all map to page 2 (40 pages per column), and the run
    /// analysis of the 'A' bitmap yields 8 folds.
    #[test]
    fn test_single_a_exact_geometry() {
        let glyphs = GlyphTable::new();
        let pattern = compile(&glyphs, "A", &make_spec()).unwrap();

        let expected = [
            // col 0: left leg, rows 1..=5
            (2, 28.6, 171.4),
            // cols 1-3: top bar row 0, crossbar row 3
            (2, 0.0, 28.6),
            (2, 85.7, 114.3),
            (2, 0.0, 28.6),
            (2, 85.7, 114.3),
            (2, 0.0, 28.6),
            (2, 85.7, 114.3),
            // col 4: right leg
            (2, 28.6, 171.4),
        ];
        assert_eq!(pattern.len(), expected.len());
        for (fold, (page, start, end)) in pattern.folds.iter().zip(expected) {
            match fold {
                FoldInstruction::Segment {
                    page: p,
                    start_mm,
                    end_mm,
                    depth_mm,
                } => {
                    assert_eq!(*p, page);
                    assert_eq!(*start_mm, start);
                    assert_eq!(*end_mm, end);
                    assert_eq!(*depth_mm, 10.5); // round(15 × 0.7, 1)
                }
                other => panic!("unexpected instruction {other:?}"),
            }
        }
    }

    #[test]
    fn test_segment_invariants_hold_for_text() {
        let glyphs = GlyphTable::new();
        let spec = make_spec();
        let pattern = compile(&glyphs, "FOLD ART", &spec).unwrap();
        assert!(!pattern.is_empty());

        let mut last_page = 0;
        for fold in &pattern.folds {
            let FoldInstruction::Segment {
                page,
                start_mm,
                end_mm,
                ..
            } = fold
            else {
                panic!("unexpected instruction {fold:?}");
            };
            assert_eq!(page % 2, 0);
            assert!(*page <= spec.page_count);
            assert!(*page >= last_page, "pages must be non-decreasing");
            assert!(*start_mm >= 0.0);
            assert!(start_mm < end_mm);
            assert!(*end_mm <= spec.page_height_mm);
            last_page = *page;
        }
    }

    #[test]
    fn test_capacity_exceeded_fails_fast() {
        let glyphs = GlyphTable::new();
        let spec = BookSpec {
            page_count: 200,
            page_height_mm: 200.0,
            page_width_mm: Some(15.0),
        };
        // 20 characters render 119 columns; usable pages = 100.
        let text = "ABCDEFGHIJKLMNOPQRST";
        let err = compile(&glyphs, text, &spec).unwrap_err();
        assert_eq!(
            err,
            FoldError::Capacity {
                required: 119,
                available: 100,
            }
        );
    }

    #[test]
    fn test_default_depth_when_width_missing() {
        let glyphs = GlyphTable::new();
        let spec = BookSpec {
            page_width_mm: None,
            ..make_spec()
        };
        let pattern = compile(&glyphs, "I", &spec).unwrap();
        let FoldInstruction::Segment { depth_mm, .. } = pattern.folds[0] else {
            panic!("unexpected instruction");
        };
        assert_eq!(depth_mm, 10.5);
    }
}

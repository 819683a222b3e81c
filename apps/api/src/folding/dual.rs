//! Dual-offset strategy — two corner folds per page, one measured from the
//! bottom and one from the top edge.
//!
//! Each non-blank raster row becomes a block of consecutive pages sharing
//! the same pair of offsets: the bottom offset tracks the row's first
//! material column, the top offset its last, both scaled onto a band of the
//! page and clamped into a fixed offset window.

use crate::folding::assemble::sort_by_page;
use crate::folding::glyphs::GlyphTable;
use crate::folding::raster::Raster;
use crate::folding::{round_mm, BookSpec, FoldError, FoldInstruction, Pattern};

/// Smallest fold offset a hand can reliably crease, mm.
const MIN_OFFSET_MM: f64 = 5.0;
/// Largest fold offset for this strategy, mm.
const MAX_OFFSET_MM: f64 = 50.0;
/// Base offset added before clamping, mm.
const EDGE_BASE_MM: f64 = 10.0;
/// Fraction of the page height the raster band is scaled onto.
const EDGE_SPAN_RATIO: f64 = 0.8;

pub fn compile(glyphs: &GlyphTable, text: &str, spec: &BookSpec) -> Result<Pattern, FoldError> {
    let raster = Raster::compose_compact(glyphs, text);

    if raster.height() as u32 > spec.page_count {
        return Err(FoldError::Capacity {
            required: raster.height() as u32,
            available: spec.page_count,
        });
    }

    let pages_per_row = (spec.page_count / raster.height() as u32).max(1);
    let width = raster.width() as f64;

    let mut folds = Vec::new();
    for row in 0..raster.height() {
        let Some((first, last)) = row_extent(&raster, row) else {
            continue;
        };

        let bottom_mm = offset_for(first as f64 / width, spec.page_height_mm);
        let top_mm = offset_for((width - last as f64 - 1.0) / width, spec.page_height_mm);

        let page_start = row as u32 * pages_per_row + 1;
        let page_end = ((row as u32 + 1) * pages_per_row).min(spec.page_count);
        for page in page_start..=page_end {
            folds.push(FoldInstruction::Dual {
                page,
                bottom_mm,
                top_mm,
            });
        }
    }

    sort_by_page(&mut folds);
    Ok(Pattern { folds })
}

/// First and last material column of a row, or `None` for a blank row.
fn row_extent(raster: &Raster, row: usize) -> Option<(usize, usize)> {
    let first = (0..raster.width()).find(|&col| raster.get(row, col))?;
    let last = (0..raster.width()).rfind(|&col| raster.get(row, col))?;
    Some((first, last))
}

fn offset_for(edge_fraction: f64, page_height_mm: f64) -> f64 {
    let raw = edge_fraction * page_height_mm * EDGE_SPAN_RATIO + EDGE_BASE_MM;
    round_mm(raw.clamp(MIN_OFFSET_MM, MAX_OFFSET_MM))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_spec(page_count: u32) -> BookSpec {
        BookSpec {
            page_count,
            page_height_mm: 200.0,
            page_width_mm: None,
        }
    }

    #[test]
    fn test_offsets_stay_in_window() {
        let glyphs = GlyphTable::new();
        let pattern = compile(&glyphs, "LOCO", &make_spec(400)).unwrap();
        assert!(!pattern.is_empty());
        for fold in &pattern.folds {
            let FoldInstruction::Dual {
                page,
                bottom_mm,
                top_mm,
            } = fold
            else {
                panic!("unexpected instruction {fold:?}");
            };
            assert!((1..=400).contains(page));
            assert!((MIN_OFFSET_MM..=MAX_OFFSET_MM).contains(bottom_mm));
            assert!((MIN_OFFSET_MM..=MAX_OFFSET_MM).contains(top_mm));
        }
    }

    #[test]
    fn test_rows_fan_out_over_page_blocks() {
        // "LO" renders into rows 0..5 of a 20-row raster; 200 pages / 20
        // rows = 10 pages per row → 5 × 10 dual folds on pages 1..=50.
        let glyphs = GlyphTable::new();
        let pattern = compile(&glyphs, "LO", &make_spec(200)).unwrap();
        assert_eq!(pattern.len(), 50);

        let pages: Vec<u32> = pattern.folds.iter().map(|f| f.page()).collect();
        assert_eq!(pages.first(), Some(&1));
        assert_eq!(pages.last(), Some(&50));
        assert!(pages.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_blank_rows_emit_nothing() {
        let glyphs = GlyphTable::new();
        // A lone unknown character renders a fully blank raster.
        let pattern = compile(&glyphs, "Z", &make_spec(200)).unwrap();
        assert!(pattern.is_empty());
    }

    #[test]
    fn test_shared_row_offsets_match_row_extent() {
        // Row 0 of "LO": 'L' sets column 5, 'O' ends at column 14.
        // bottom = (5/60)·160 + 10 = 23.3; top = (45/60)·160 + 10 → clamp 50.
        let glyphs = GlyphTable::new();
        let pattern = compile(&glyphs, "LO", &make_spec(200)).unwrap();
        let FoldInstruction::Dual {
            bottom_mm, top_mm, ..
        } = pattern.folds[0]
        else {
            panic!("unexpected instruction");
        };
        assert_eq!(bottom_mm, 23.3);
        assert_eq!(top_mm, 50.0);
    }

    #[test]
    fn test_capacity_exceeded_fails_fast() {
        let glyphs = GlyphTable::new();
        // 30 characters → 240-row raster; a 200-page book cannot hold it.
        let text = "O".repeat(30);
        let err = compile(&glyphs, &text, &make_spec(200)).unwrap_err();
        assert_eq!(
            err,
            FoldError::Capacity {
                required: 240,
                available: 200,
            }
        );
    }
}

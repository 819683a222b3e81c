//! Book-folding pattern compiler.
//!
//! Turns a short text string (or a predefined template raster) into a list of
//! physical fold instructions: page numbers paired with millimeter offsets,
//! such that the folded page edges of a closed book trace the glyph shapes of
//! the input in three dimensions.
//!
//! # Architecture
//! The pipeline is: glyph table → raster composer → page/offset mapper →
//! strategy-specific extractor → pattern assembler. Three output encodings
//! exist as interchangeable strategies behind one `compile_text` contract:
//! - [`Strategy::Segment`] — contiguous vertical fold ranges per even page.
//! - [`Strategy::Dual`] — one bottom and one top corner offset per page.
//! - [`Strategy::Corner`] — discrete corner-fold events per even page.
//!
//! Compilation is pure and deterministic: the same (text, book, strategy)
//! triple always yields an identical pattern. The glyph table is built once
//! at startup and shared read-only across requests.

pub mod assemble;
pub mod corner;
pub mod dual;
pub mod export;
pub mod glyphs;
pub mod handlers;
pub mod mapper;
pub mod raster;
pub mod segments;
pub mod templates;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::folding::glyphs::GlyphTable;

pub use assemble::{statistics, PatternStats};
pub use raster::Raster;

// ────────────────────────────────────────────────────────────────────────────
// Book geometry
// ────────────────────────────────────────────────────────────────────────────

/// Page width assumed for segment fold depth when the caller omits it.
pub const DEFAULT_PAGE_WIDTH_MM: f64 = 15.0;

/// Physical dimensions of the book a pattern is compiled for.
///
/// Read-only to the compiler; validated (page count minimum, positive
/// dimensions) at the request boundary before it gets here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSpec {
    pub page_count: u32,
    pub page_height_mm: f64,
    /// Only consulted by the segment strategy, for fold depth.
    pub page_width_mm: Option<f64>,
}

impl BookSpec {
    /// Even-numbered pages available for folding. Odd pages carry the fold of
    /// the sheet's even side, so only every second page holds a fold.
    pub fn usable_pages(&self) -> u32 {
        self.page_count / 2
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Which fold-instruction encoding to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Full-edge folds: a start/end millimeter range per even page.
    #[default]
    Segment,
    /// Two corner offsets (bottom and top) per page, pages 1..=page_count.
    Dual,
    /// Corner-fold events interpolated letter by letter across even pages.
    Corner,
}

/// Corner to fold for a [`FoldInstruction::Corner`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldType {
    Top,
    Bottom,
    Both,
}

/// One fold instruction. The shape depends on the strategy that produced it;
/// serialization is untagged so each shape matches its wire format directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FoldInstruction {
    Segment {
        page: u32,
        start_mm: f64,
        end_mm: f64,
        depth_mm: f64,
    },
    Corner {
        page: u32,
        fold_type: FoldType,
        offset_mm: f64,
    },
    Dual {
        page: u32,
        bottom_mm: f64,
        top_mm: f64,
    },
}

impl FoldInstruction {
    /// Physical page this instruction applies to.
    pub fn page(&self) -> u32 {
        match self {
            FoldInstruction::Segment { page, .. }
            | FoldInstruction::Corner { page, .. }
            | FoldInstruction::Dual { page, .. } => *page,
        }
    }
}

/// Ordered fold instructions for one request, ascending by page number
/// (stable within a page). Immutable once assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    pub folds: Vec<FoldInstruction>,
}

impl Pattern {
    pub fn len(&self) -> usize {
        self.folds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Compiler-boundary failures. Everything else (unsupported characters,
/// degenerate geometry) is dropped silently and a best-effort pattern is
/// returned instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FoldError {
    #[error("text is empty after normalization")]
    EmptyText,

    #[error("pattern needs {required} fold positions but the book offers only {available}")]
    Capacity { required: u32, available: u32 },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Compiles normalized text into a fold pattern with the given strategy.
///
/// Normalization (trim + uppercase) is applied defensively even though the
/// request layer already does it. Fails fast with [`FoldError::EmptyText`] or
/// [`FoldError::Capacity`]; never fails mid-computation.
pub fn compile_text(
    glyphs: &GlyphTable,
    text: &str,
    spec: &BookSpec,
    strategy: Strategy,
) -> Result<Pattern, FoldError> {
    let text = normalize(text);
    if text.is_empty() {
        return Err(FoldError::EmptyText);
    }

    match strategy {
        Strategy::Segment => segments::compile(glyphs, &text, spec),
        Strategy::Dual => dual::compile(glyphs, &text, spec),
        Strategy::Corner => corner::compile(glyphs, &text, spec),
    }
}

/// Compiles a fixed raster (a predefined template) through the segment
/// pipeline, bypassing the raster composer.
pub fn compile_raster(raster: &Raster, spec: &BookSpec) -> Pattern {
    segments::compile_raster(raster, spec)
}

fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Rounds a millimeter value to one decimal, the precision a ruler can hold.
pub(crate) fn round_mm(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
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

    // ── boundary errors ─────────────────────────────────────────────────────

    #[test]
    fn test_empty_text_is_rejected() {
        let glyphs = GlyphTable::new();
        for strategy in [Strategy::Segment, Strategy::Dual, Strategy::Corner] {
            let err = compile_text(&glyphs, "   ", &make_spec(), strategy).unwrap_err();
            assert_eq!(err, FoldError::EmptyText);
        }
    }

    // ── determinism ─────────────────────────────────────────────────────────

    #[test]
    fn test_compilation_is_deterministic() {
        let glyphs = GlyphTable::new();
        let spec = make_spec();
        for strategy in [Strategy::Segment, Strategy::Dual, Strategy::Corner] {
            let first = compile_text(&glyphs, "HELLO", &spec, strategy).unwrap();
            let second = compile_text(&glyphs, "HELLO", &spec, strategy).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_normalization_folds_case_and_whitespace() {
        let glyphs = GlyphTable::new();
        let spec = make_spec();
        let upper = compile_text(&glyphs, "HI", &spec, Strategy::Segment).unwrap();
        let messy = compile_text(&glyphs, "  hi ", &spec, Strategy::Segment).unwrap();
        assert_eq!(upper, messy);
    }

    // ── serialization shapes ────────────────────────────────────────────────

    #[test]
    fn test_fold_instruction_wire_shapes() {
        let segment = FoldInstruction::Segment {
            page: 2,
            start_mm: 28.6,
            end_mm: 171.4,
            depth_mm: 10.5,
        };
        let json = serde_json::to_value(&segment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 2, "start_mm": 28.6, "end_mm": 171.4, "depth_mm": 10.5})
        );

        let corner = FoldInstruction::Corner {
            page: 4,
            fold_type: FoldType::Both,
            offset_mm: 100.0,
        };
        let json = serde_json::to_value(&corner).unwrap();
        assert_eq!(json["fold_type"], "both");

        let dual = FoldInstruction::Dual {
            page: 1,
            bottom_mm: 26.0,
            top_mm: 50.0,
        };
        let back: FoldInstruction =
            serde_json::from_value(serde_json::to_value(&dual).unwrap()).unwrap();
        assert_eq!(back, dual);
    }

    #[test]
    fn test_round_mm_to_one_decimal() {
        assert_eq!(round_mm(28.571_428), 28.6);
        assert_eq!(round_mm(171.428_57), 171.4);
        assert_eq!(round_mm(0.0), 0.0);
    }
}

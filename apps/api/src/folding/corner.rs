//! Corner-fold strategy — letter-by-letter corner folds interpolated across
//! each letter's block of even pages.
//!
//! Every supported letter carries a small symbolic pattern of
//! `(fold type, position)` pairs. Walking a letter's pages, the positions are
//! perturbed by a bounded sinusoid so the folded edge does not jump abruptly
//! between adjacent pages; the perturbation is damped toward the page edges
//! (the `1 − |position − 0.5|` factor) so folds never run off the page. The
//! perturbation is a pure function of page progress — no randomness.
//!
//! The amplitude and frequency are tunables, not invariants.

use std::f64::consts::PI;

use crate::folding::assemble::sort_by_page;
use crate::folding::glyphs::{is_corner_supported, GlyphTable};
use crate::folding::mapper::{LetterLayout, MIN_PAGES_PER_LETTER};
use crate::folding::{round_mm, BookSpec, FoldError, FoldInstruction, Pattern};

/// Smallest fold offset from the page top, mm.
const MIN_OFFSET_MM: f64 = 5.0;
/// Margin kept below the largest offset, mm (`max = page_height − 5`).
const EDGE_MARGIN_MM: f64 = 5.0;
/// Peak positional perturbation, as a fraction of the page height.
const VARIATION_AMPLITUDE: f64 = 0.1;
/// Sinusoid cycles across one letter's page block.
const VARIATION_CYCLES: f64 = 3.0;

pub fn compile(glyphs: &GlyphTable, text: &str, spec: &BookSpec) -> Result<Pattern, FoldError> {
    let clean: String = text.chars().filter(|&c| is_corner_supported(c)).collect();
    let letter_count = clean.chars().filter(|&c| c != ' ').count() as u32;
    if letter_count == 0 {
        return Err(FoldError::EmptyText);
    }

    let usable = spec.usable_pages();
    if letter_count * MIN_PAGES_PER_LETTER > usable {
        return Err(FoldError::Capacity {
            required: letter_count * MIN_PAGES_PER_LETTER,
            available: usable,
        });
    }

    let layout = LetterLayout::new(spec, letter_count);
    let max_offset = spec.page_height_mm - EDGE_MARGIN_MM;

    let mut folds = Vec::new();
    let mut cursor = 2u32; // first even page
    for c in clean.chars() {
        if c == ' ' {
            cursor += layout.space_skip;
            continue;
        }

        let pattern = glyphs.corner_pattern(c);
        for i in 0..layout.pages_per_letter {
            let page = cursor + i * 2;
            if page > spec.page_count {
                break;
            }
            let progress = if layout.pages_per_letter > 1 {
                i as f64 / (layout.pages_per_letter - 1) as f64
            } else {
                0.5
            };

            for &(fold_type, position) in pattern {
                let offset_mm = perturbed_offset(position, progress, spec.page_height_mm, max_offset);
                if (MIN_OFFSET_MM..=max_offset).contains(&offset_mm) {
                    folds.push(FoldInstruction::Corner {
                        page,
                        fold_type,
                        offset_mm,
                    });
                }
            }
        }
        cursor += layout.block_advance();
    }

    sort_by_page(&mut folds);
    Ok(Pattern { folds })
}

/// Applies the sinusoidal perturbation to a normalized position and converts
/// it to a clamped millimeter offset.
fn perturbed_offset(position: f64, progress: f64, page_height_mm: f64, max_offset: f64) -> f64 {
    let variation = (progress * PI * VARIATION_CYCLES).sin() * VARIATION_AMPLITUDE;
    let adjusted = position + variation * (1.0 - (position - 0.5).abs());
    round_mm((adjusted * page_height_mm).clamp(MIN_OFFSET_MM, max_offset))
}

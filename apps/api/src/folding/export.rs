//! Plain-text instruction sheet formatting for pattern download.
//!
//! Presentation only: consumes a finished pattern plus the book parameters
//! and a title, and renders a numbered step list a crafter can follow with a
//! ruler. The compiler has no invariants to uphold here beyond field
//! presence.

use std::fmt::Write;

use crate::folding::{BookSpec, FoldInstruction, FoldType, Pattern};

/// Renders the human-readable instruction sheet.
pub fn format_instructions(pattern: &Pattern, spec: &BookSpec, title: &str) -> String {
    let mut out = String::new();

    if pattern.is_empty() {
        return "No instructions to generate.".to_string();
    }

    let _ = writeln!(out, "BOOK FOLDING INSTRUCTIONS");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "Text/template: {title}");
    let _ = writeln!(out, "Book parameters:");
    let _ = writeln!(out, "  - Pages: {}", spec.page_count);
    let _ = writeln!(out, "  - Page height: {} mm", spec.page_height_mm);
    match spec.page_width_mm {
        Some(width) => {
            let _ = writeln!(out, "  - Page width: {width} mm");
        }
        None => {
            let _ = writeln!(out, "  - Page width: n/a");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "STEP-BY-STEP INSTRUCTIONS:");
    let _ = writeln!(out, "{}", "-".repeat(30));

    for (step, fold) in pattern.folds.iter().enumerate() {
        let _ = writeln!(out, "Step {}:", step + 1);
        match fold {
            FoldInstruction::Segment {
                page,
                start_mm,
                end_mm,
                depth_mm,
            } => {
                let _ = writeln!(out, "  Page: {page}");
                let _ = writeln!(out, "  Measure from the top of the page: {start_mm} mm");
                let _ = writeln!(out, "  Measure down to: {end_mm} mm");
                let _ = writeln!(out, "  Fold the edge in to a depth of: {depth_mm} mm");
            }
            FoldInstruction::Dual {
                page,
                bottom_mm,
                top_mm,
            } => {
                let _ = writeln!(out, "  Page: {page}");
                let _ = writeln!(out, "  Fold the bottom corner up at: {bottom_mm} mm");
                let _ = writeln!(out, "  Fold the top corner down at: {top_mm} mm");
            }
            FoldInstruction::Corner {
                page,
                fold_type,
                offset_mm,
            } => {
                let corner = match fold_type {
                    FoldType::Top => "top corner",
                    FoldType::Bottom => "bottom corner",
                    FoldType::Both => "both corners",
                };
                let _ = writeln!(out, "  Page: {page}");
                let _ = writeln!(
                    out,
                    "  Fold the {corner} at {offset_mm} mm from the top edge"
                );
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "TIPS:");
    let _ = writeln!(out, "- Use a metal ruler for precise measurements");
    let _ = writeln!(out, "- Crease pages gently so they do not tear");
    let _ = writeln!(out, "- Work slowly and patiently");
    let _ = writeln!(out, "- Check the result every 10-20 folds");

    out
}

/// Download filename derived from the pattern title.
pub fn export_filename(title: &str) -> String {
    let slug: String = title
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    let slug = if slug.is_empty() {
        "pattern".to_string()
    } else {
        slug
    };
    format!("book_folding_{slug}.txt")
}

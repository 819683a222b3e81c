//! Predefined template catalog — named shapes that bypass the raster
//! composer and feed a fixed 7×5 raster straight into the segment pipeline.

use std::collections::HashMap;

use serde::Serialize;

use crate::folding::raster::Raster;
use crate::folding::{BookSpec, FoldError, Pattern};

/// One catalog entry, as listed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog listing grouped the way the UI presents it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    pub logos: Vec<TemplateInfo>,
    pub symbols: Vec<TemplateInfo>,
    pub emojis: Vec<TemplateInfo>,
}

/// Immutable template catalog, built once at startup. Every listed id has a
/// raster — the listing and the compiler never disagree.
#[derive(Debug)]
pub struct TemplateCatalog {
    rasters: HashMap<&'static str, Raster>,
}

impl TemplateCatalog {
    pub fn new() -> TemplateCatalog {
        let rasters = TEMPLATE_RASTERS
            .iter()
            .map(|(id, rows)| (*id, Raster::from_rows(rows)))
            .collect();
        TemplateCatalog { rasters }
    }

    pub fn listing(&self) -> CatalogListing {
        CatalogListing {
            logos: vec![
                info("apple", "Apple Logo", "The famous Apple logo"),
                info("nike", "Nike Swoosh", "The Nike swoosh mark"),
                info("batman", "Batman Logo", "The bat symbol"),
                info("superman", "Superman Logo", "The Superman shield"),
            ],
            symbols: vec![
                info("heart", "Heart ❤", "A heart symbol"),
                info("star", "Star ⭐", "A five-pointed star"),
                info("peace", "Peace ☮", "The peace sign"),
                info("infinity", "Infinity ∞", "The infinity symbol"),
            ],
            emojis: vec![
                info("smile", "Smile 😊", "A smiling face"),
                info("love", "Love 😍", "A face with heart eyes"),
                info("thumbs_up", "Thumbs up 👍", "A thumbs-up hand"),
                info("fire", "Fire 🔥", "A flame"),
            ],
        }
    }

    /// Compiles a template's fixed raster through the segment pipeline.
    pub fn compile(&self, template_id: &str, spec: &BookSpec) -> Result<Pattern, FoldError> {
        let raster = self
            .rasters
            .get(template_id)
            .ok_or_else(|| FoldError::UnknownTemplate(template_id.to_string()))?;
        Ok(crate::folding::compile_raster(raster, spec))
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        TemplateCatalog::new()
    }
}

fn info(id: &'static str, name: &'static str, description: &'static str) -> TemplateInfo {
    TemplateInfo {
        id,
        name,
        description,
    }
}

#[rustfmt::skip]
const TEMPLATE_RASTERS: &[(&str, [&str; 7])] = &[
    ("apple",     ["..#..",
                   ".###.",
                   "#####",
                   "#####",
                   "#####",
                   ".###.",
                   "..#.."]),
    ("nike",      [".....",
                   "....#",
                   "...##",
                   "#..#.",
                   "##.#.",
                   ".###.",
                   "....."]),
    ("batman",    ["#...#",
                   "##.##",
                   "#####",
                   "#####",
                   "#####",
                   ".#.#.",
                   "....."]),
    ("superman",  [".###.",
                   "#####",
                   "##.##",
                   "#####",
                   ".###.",
                   "..#..",
                   "....."]),
    ("heart",     [".###.",
                   "#.#.#",
                   "#...#",
                   "#...#",
                   ".#.#.",
                   "..#..",
                   "....."]),
    ("star",      ["..#..",
                   ".###.",
                   "#####",
                   ".###.",
                   "#.#.#",
                   ".....",
                   "....."]),
    ("peace",     [".###.",
                   "#.#.#",
                   "#.#.#",
                   "##.##",
                   "#...#",
                   ".###.",
                   "....."]),
    ("infinity",  [".....",
                   "##.##",
                   "#.#.#",
                   "##.##",
                   ".....",
                   ".....",
                   "....."]),
    ("smile",     [".....",
                   ".#.#.",
                   ".....",
                   "#...#",
                   ".###.",
                   ".....",
                   "....."]),
    ("love",      [".#.#.",
                   ".#.#.",
                   ".....",
                   "#...#",
                   ".###.",
                   ".....",
                   "....."]),
    ("thumbs_up", ["..#..",
                   "..##.",
                   "####.",
                   "####.",
                   "####.",
                   ".....",
                   "....."]),
    ("fire",      ["..#..",
                   ".##..",
                   ".###.",
                   "#####",
                   "#####",
                   ".###.",
                   "....."]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folding::FoldInstruction;

    fn make_spec() -> BookSpec {
        BookSpec {
            page_count: 400,
            page_height_mm: 200.0,
            page_width_mm: Some(15.0),
        }
    }

    #[test]
    fn test_every_listed_template_compiles() {
        let catalog = TemplateCatalog::new();
        let listing = catalog.listing();
        let all = listing
            .logos
            .iter()
            .chain(&listing.symbols)
            .chain(&listing.emojis);
        for template in all {
            let pattern = catalog.compile(template.id, &make_spec()).unwrap();
            assert!(!pattern.is_empty(), "{} produced no folds", template.id);
        }
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let catalog = TemplateCatalog::new();
        let err = catalog.compile("unknown_xyz", &make_spec()).unwrap_err();
        assert_eq!(err, FoldError::UnknownTemplate("unknown_xyz".to_string()));
    }

    #[test]
    fn test_template_rasters_are_7x5() {
        for (id, rows) in TEMPLATE_RASTERS {
            let raster = Raster::from_rows(rows);
            assert_eq!(raster.height(), 7, "{id}");
            assert_eq!(raster.width(), 5, "{id}");
        }
    }

    #[test]
    fn test_template_pattern_uses_segment_instructions() {
        let catalog = TemplateCatalog::new();
        let spec = make_spec();
        let pattern = catalog.compile("heart", &spec).unwrap();
        for fold in &pattern.folds {
            let FoldInstruction::Segment { page, .. } = fold else {
                panic!("unexpected instruction {fold:?}");
            };
            assert_eq!(page % 2, 0);
            assert!(*page <= spec.page_count);
        }
    }
}

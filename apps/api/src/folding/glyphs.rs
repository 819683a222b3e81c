//! Static glyph tables for the three fold strategies.
//!
//! One process-wide [`GlyphTable`] holds three alphabets keyed by character:
//! - **matrix**: 7×5 bitmaps for the segment strategy and templates.
//! - **compact**: small variable-size bitmaps for the dual strategy.
//! - **corner**: symbolic `(fold type, position)` lists for the corner strategy.
//!
//! Bitmaps are authored as `#`/`.` string rows and parsed once at startup.
//! Cyrillic letters whose capital shape coincides with a Latin one (А, В, Е,
//! К, М, Н, О, Р, С, Т, У, Х) alias the Latin bitmap instead of duplicating
//! it; the corner alphabet keeps its own Cyrillic entries because fold
//! positions there were tuned per letter, not per shape.
//!
//! Absent lookups are not errors: the raster composer advances by a fixed
//! blank step, and the corner synthesizer falls back to a single centered
//! fold.

use std::collections::HashMap;

use crate::folding::FoldType;

/// Height of every matrix-alphabet glyph, in raster rows.
pub const MATRIX_GLYPH_HEIGHT: usize = 7;
/// Width of every matrix-alphabet glyph, in raster columns.
pub const MATRIX_GLYPH_WIDTH: usize = 5;
/// Blank columns between adjacent matrix glyphs.
pub const MATRIX_GLYPH_SPACING: usize = 1;

/// A fixed-size binary bitmap for one character. `true` = material present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Glyph {
    fn parse(rows: &[&str]) -> Glyph {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        debug_assert!(rows.iter().all(|r| r.len() == width));

        let cells = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c == '#'))
            .collect();
        Glyph {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the cell at (row, col) is material. Out-of-range is blank.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }
}

/// Process-wide immutable glyph tables, built once in `main` and shared
/// read-only across request handlers.
#[derive(Debug)]
pub struct GlyphTable {
    matrix: HashMap<char, Glyph>,
    compact: HashMap<char, Glyph>,
    corner: HashMap<char, &'static [(FoldType, f64)]>,
}

impl GlyphTable {
    pub fn new() -> GlyphTable {
        let mut matrix: HashMap<char, Glyph> = MATRIX_GLYPHS
            .iter()
            .map(|(c, rows)| (*c, Glyph::parse(rows)))
            .collect();
        for (alias, target) in MATRIX_ALIASES {
            let glyph = matrix[target].clone();
            matrix.insert(*alias, glyph);
        }

        let mut compact: HashMap<char, Glyph> = COMPACT_GLYPHS
            .iter()
            .map(|(c, rows)| (*c, Glyph::parse(rows)))
            .collect();
        for (alias, target) in COMPACT_ALIASES {
            let glyph = compact[target].clone();
            compact.insert(*alias, glyph);
        }

        let corner = CORNER_PATTERNS.iter().copied().collect();

        GlyphTable {
            matrix,
            compact,
            corner,
        }
    }

    /// 7×5 bitmap for the segment strategy, or `None` for an unsupported
    /// character (rendered as a blank advance).
    pub fn matrix_glyph(&self, c: char) -> Option<&Glyph> {
        self.matrix.get(&c)
    }

    /// Variable-size bitmap for the dual strategy.
    pub fn compact_glyph(&self, c: char) -> Option<&Glyph> {
        self.compact.get(&c)
    }

    /// Symbolic corner-fold pattern: `(fold type, position in [0, 1])` pairs,
    /// top of the page at 0. Unmapped characters get a single centered fold.
    pub fn corner_pattern(&self, c: char) -> &'static [(FoldType, f64)] {
        self.corner
            .get(&c)
            .copied()
            .unwrap_or(DEFAULT_CORNER_PATTERN)
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        GlyphTable::new()
    }
}

/// Characters the corner strategy accepts; everything else is stripped
/// before layout.
pub fn is_corner_supported(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'А'..='Я' | 'Ё' | '0'..='9' | ' ')
}

// ────────────────────────────────────────────────────────────────────────────
// Matrix alphabet (7×5): Latin, digits, space, symbols, Cyrillic
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
const MATRIX_GLYPHS: &[(char, [&str; MATRIX_GLYPH_HEIGHT])] = &[
    ('A', [".###.",
           "#...#",
           "#...#",
           "#####",
           "#...#",
           "#...#",
           "....."]),
    ('B', ["####.",
           "#...#",
           "#...#",
           "####.",
           "#...#",
           "#...#",
           "####."]),
    ('C', [".###.",
           "#...#",
           "#....",
           "#....",
           "#....",
           "#...#",
           ".###."]),
    ('D', ["####.",
           "#...#",
           "#...#",
           "#...#",
           "#...#",
           "#...#",
           "####."]),
    ('E', ["#####",
           "#....",
           "#....",
           "####.",
           "#....",
           "#....",
           "#####"]),
    ('F', ["#####",
           "#....",
           "#....",
           "####.",
           "#....",
           "#....",
           "#...."]),
    ('G', [".###.",
           "#...#",
           "#....",
           "#.###",
           "#...#",
           "#...#",
           ".###."]),
    ('H', ["#...#",
           "#...#",
           "#...#",
           "#####",
           "#...#",
           "#...#",
           "#...#"]),
    ('I', ["#####",
           "..#..",
           "..#..",
           "..#..",
           "..#..",
           "..#..",
           "#####"]),
    ('J', ["....#",
           "....#",
           "....#",
           "....#",
           "#...#",
           "#...#",
           ".###."]),
    ('K', ["#...#",
           "#..#.",
           "#.#..",
           "##...",
           "#.#..",
           "#..#.",
           "#...#"]),
    ('L', ["#....",
           "#....",
           "#....",
           "#....",
           "#....",
           "#....",
           "#####"]),
    ('M', ["#...#",
           "##.##",
           "#.#.#",
           "#...#",
           "#...#",
           "#...#",
           "#...#"]),
    ('N', ["#...#",
           "##..#",
           "#.#.#",
           "#.#.#",
           "#..##",
           "#...#",
           "#...#"]),
    ('O', [".###.",
           "#...#",
           "#...#",
           "#...#",
           "#...#",
           "#...#",
           ".###."]),
    ('P', ["####.",
           "#...#",
           "#...#",
           "####.",
           "#....",
           "#....",
           "#...."]),
    ('Q', [".###.",
           "#...#",
           "#...#",
           "#...#",
           "#.#.#",
           "#..#.",
           ".##.#"]),
    ('R', ["####.",
           "#...#",
           "#...#",
           "####.",
           "#.#..",
           "#..#.",
           "#...#"]),
    ('S', [".####",
           "#....",
           "#....",
           ".###.",
           "....#",
           "....#",
           "####."]),
    ('T', ["#####",
           "..#..",
           "..#..",
           "..#..",
           "..#..",
           "..#..",
           "..#.."]),
    ('U', ["#...#",
           "#...#",
           "#...#",
           "#...#",
           "#...#",
           "#...#",
           ".###."]),
    ('V', ["#...#",
           "#...#",
           "#...#",
           "#...#",
           ".#.#.",
           ".#.#.",
           "..#.."]),
    ('W', ["#...#",
           "#...#",
           "#...#",
           "#.#.#",
           "#.#.#",
           "##.##",
           "#...#"]),
    ('X', ["#...#",
           ".#.#.",
           "..#..",
           "..#..",
           "..#..",
           ".#.#.",
           "#...#"]),
    ('Y', ["#...#",
           ".#.#.",
           "..#..",
           "..#..",
           "..#..",
           "..#..",
           "..#.."]),
    ('Z', ["#####",
           "...#.",
           "..#..",
           ".#...",
           ".#...",
           "#....",
           "#####"]),
    (' ', [".....",
           ".....",
           ".....",
           ".....",
           ".....",
           ".....",
           "....."]),
    ('0', [".###.",
           "#...#",
           "#..##",
           "#.#.#",
           "##..#",
           "#...#",
           ".###."]),
    ('1', ["..#..",
           ".##..",
           "..#..",
           "..#..",
           "..#..",
           "..#..",
           ".###."]),
    ('2', [".###.",
           "#...#",
           "....#",
           "..##.",
           ".#...",
           "#....",
           "#####"]),
    ('3', ["#####",
           "...#.",
           "..#..",
           "...#.",
           "....#",
           "#...#",
           ".###."]),
    ('4', ["...#.",
           "..##.",
           ".#.#.",
           "#..#.",
           "#####",
           "...#.",
           "...#."]),
    ('5', ["#####",
           "#....",
           "####.",
           "....#",
           "....#",
           "#...#",
           ".###."]),
    ('6', ["..##.",
           ".#...",
           "#....",
           "####.",
           "#...#",
           "#...#",
           ".###."]),
    ('7', ["#####",
           "....#",
           "...#.",
           "..#..",
           ".#...",
           ".#...",
           ".#..."]),
    ('8', [".###.",
           "#...#",
           "#...#",
           ".###.",
           "#...#",
           "#...#",
           ".###."]),
    ('9', [".###.",
           "#...#",
           "#...#",
           ".####",
           "....#",
           "...#.",
           ".##.."]),
    ('❤', [".###.",
           "#.#.#",
           "#...#",
           "#...#",
           ".#.#.",
           "..#..",
           "....."]),
    ('★', ["..#..",
           ".###.",
           "#####",
           ".###.",
           "#.#.#",
           ".....",
           "....."]),
    ('Б', ["#####",
           "#....",
           "#....",
           "####.",
           "#...#",
           "#...#",
           "####."]),
    ('Г', ["#####",
           "#....",
           "#....",
           "#....",
           "#....",
           "#....",
           "#...."]),
    ('Д', ["..##.",
           ".#.#.",
           ".#.#.",
           ".#.#.",
           ".#.#.",
           "#####",
           "#...#"]),
    ('Ж', ["#.#.#",
           "#.#.#",
           ".###.",
           "..#..",
           ".###.",
           "#.#.#",
           "#.#.#"]),
    ('З', [".###.",
           "#...#",
           "....#",
           "..##.",
           "....#",
           "#...#",
           ".###."]),
    ('И', ["#...#",
           "#...#",
           "#..##",
           "#.#.#",
           "##..#",
           "#...#",
           "#...#"]),
    ('Й', [".#.#.",
           "#...#",
           "#..##",
           "#.#.#",
           "##..#",
           "#...#",
           "#...#"]),
    ('Л', ["..###",
           ".#..#",
           ".#..#",
           ".#..#",
           ".#..#",
           ".#..#",
           "#...#"]),
    ('П', ["#####",
           "#...#",
           "#...#",
           "#...#",
           "#...#",
           "#...#",
           "#...#"]),
    ('Ф', ["..#..",
           ".###.",
           "#.#.#",
           "#.#.#",
           ".###.",
           "..#..",
           "..#.."]),
    ('Ц', ["#..#.",
           "#..#.",
           "#..#.",
           "#..#.",
           "#..#.",
           "#####",
           "....#"]),
    ('Ч', ["#...#",
           "#...#",
           "#...#",
           ".####",
           "....#",
           "....#",
           "....#"]),
    ('Ш', ["#.#.#",
           "#.#.#",
           "#.#.#",
           "#.#.#",
           "#.#.#",
           "#.#.#",
           "#####"]),
    ('Щ', ["#.#.#",
           "#.#.#",
           "#.#.#",
           "#.#.#",
           "#.#.#",
           "#####",
           "....#"]),
    ('Ъ', ["##...",
           ".#...",
           ".#...",
           ".###.",
           ".#..#",
           ".#..#",
           ".###."]),
    ('Ы', ["#...#",
           "#...#",
           "#...#",
           "##..#",
           "#.#.#",
           "#.#.#",
           "##..#"]),
    ('Ь', ["#....",
           "#....",
           "#....",
           "####.",
           "#...#",
           "#...#",
           "####."]),
    ('Э', [".###.",
           "#...#",
           "....#",
           "..###",
           "....#",
           "#...#",
           ".###."]),
    ('Ю', ["#.##.",
           "#.#.#",
           "#.#.#",
           "###.#",
           "#.#.#",
           "#.#.#",
           "#.##."]),
    ('Я', [".####",
           "#...#",
           "#...#",
           ".####",
           "..#.#",
           ".#..#",
           "#...#"]),
];

/// Cyrillic capitals whose shape coincides with a Latin (or already defined
/// Cyrillic) bitmap.
const MATRIX_ALIASES: &[(char, char)] = &[
    ('А', 'A'),
    ('В', 'B'),
    ('Е', 'E'),
    ('Ё', 'E'),
    ('К', 'K'),
    ('М', 'M'),
    ('Н', 'H'),
    ('О', 'O'),
    ('Р', 'P'),
    ('С', 'C'),
    ('Т', 'T'),
    ('У', 'Y'),
    ('Х', 'X'),
];

// ────────────────────────────────────────────────────────────────────────────
// Compact alphabet (variable size, dual strategy)
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
const COMPACT_GLYPHS: &[(char, &[&str])] = &[
    ('A', &[".###.",
            "#...#",
            "#####",
            "#...#",
            "#...#"]),
    ('B', &["####.",
            "#...#",
            "####.",
            "#...#",
            "####."]),
    ('C', &[".###.",
            "#...#",
            "#....",
            "#...#",
            ".###."]),
    ('H', &["#...#",
            "#...#",
            "#####",
            "#...#",
            "#...#"]),
    ('I', &["###",
            ".#.",
            ".#.",
            ".#.",
            "###"]),
    ('L', &["#...",
            "#...",
            "#...",
            "#...",
            "####"]),
    ('O', &[".###.",
            "#...#",
            "#...#",
            "#...#",
            ".###."]),
];

const COMPACT_ALIASES: &[(char, char)] = &[
    ('А', 'A'),
    ('В', 'B'),
    ('Н', 'H'),
    ('О', 'O'),
    ('С', 'C'),
];

// ────────────────────────────────────────────────────────────────────────────
// Corner alphabet: (fold type, normalized position) per letter
// ────────────────────────────────────────────────────────────────────────────

const DEFAULT_CORNER_PATTERN: &[(FoldType, f64)] = &[(FoldType::Both, 0.5)];

use FoldType::{Both, Bottom, Top};

#[rustfmt::skip]
const CORNER_PATTERNS: &[(char, &[(FoldType, f64)])] = &[
    // Latin
    ('A', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('B', &[(Top, 0.1), (Both, 0.3), (Both, 0.7), (Bottom, 0.9)]),
    ('C', &[(Top, 0.2), (Top, 0.8)]),
    ('D', &[(Top, 0.1), (Both, 0.5), (Bottom, 0.9)]),
    ('E', &[(Top, 0.1), (Both, 0.5), (Bottom, 0.9)]),
    ('F', &[(Top, 0.1), (Both, 0.5)]),
    ('G', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('H', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('I', &[(Both, 0.5)]),
    ('J', &[(Top, 0.1), (Bottom, 0.7)]),
    ('K', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('L', &[(Both, 0.3), (Bottom, 0.9)]),
    ('M', &[(Both, 0.1), (Both, 0.3), (Both, 0.7), (Both, 0.9)]),
    ('N', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('O', &[(Top, 0.2), (Both, 0.4), (Both, 0.6), (Bottom, 0.8)]),
    ('P', &[(Top, 0.1), (Both, 0.4), (Both, 0.6)]),
    ('Q', &[(Top, 0.2), (Both, 0.4), (Both, 0.6), (Bottom, 0.8)]),
    ('R', &[(Top, 0.1), (Both, 0.4), (Both, 0.6), (Bottom, 0.9)]),
    ('S', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('T', &[(Top, 0.1), (Both, 0.5)]),
    ('U', &[(Both, 0.3), (Both, 0.6), (Bottom, 0.9)]),
    ('V', &[(Both, 0.2), (Bottom, 0.8)]),
    ('W', &[(Both, 0.2), (Both, 0.4), (Both, 0.6), (Bottom, 0.8)]),
    ('X', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('Y', &[(Both, 0.3), (Both, 0.6)]),
    ('Z', &[(Top, 0.1), (Both, 0.5), (Bottom, 0.9)]),
    // Cyrillic — positions tuned per letter, not aliased by shape
    ('А', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('Б', &[(Top, 0.1), (Both, 0.5), (Bottom, 0.9)]),
    ('В', &[(Top, 0.1), (Both, 0.3), (Both, 0.7), (Bottom, 0.9)]),
    ('Г', &[(Top, 0.1), (Both, 0.5)]),
    ('Д', &[(Top, 0.1), (Both, 0.5), (Bottom, 0.9)]),
    ('Е', &[(Top, 0.1), (Both, 0.5), (Bottom, 0.9)]),
    ('Ё', &[(Top, 0.1), (Both, 0.5), (Bottom, 0.9)]),
    ('Ж', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('З', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('И', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('Й', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('К', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('Л', &[(Both, 0.3), (Both, 0.6), (Bottom, 0.9)]),
    ('М', &[(Both, 0.1), (Both, 0.3), (Both, 0.7), (Both, 0.9)]),
    ('Н', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('О', &[(Top, 0.2), (Both, 0.4), (Both, 0.6), (Bottom, 0.8)]),
    ('П', &[(Top, 0.1), (Both, 0.5), (Both, 0.8)]),
    ('Р', &[(Top, 0.1), (Both, 0.4), (Both, 0.6)]),
    ('С', &[(Top, 0.2), (Bottom, 0.8)]),
    ('Т', &[(Top, 0.1), (Both, 0.5)]),
    ('У', &[(Both, 0.3), (Bottom, 0.7)]),
    ('Ф', &[(Top, 0.2), (Both, 0.4), (Both, 0.6), (Bottom, 0.8)]),
    ('Х', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('Ц', &[(Both, 0.3), (Both, 0.6), (Bottom, 0.9)]),
    ('Ч', &[(Both, 0.2), (Both, 0.6)]),
    ('Ш', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('Щ', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('Ъ', &[(Top, 0.2), (Both, 0.6)]),
    ('Ы', &[(Both, 0.2), (Both, 0.5), (Both, 0.8)]),
    ('Ь', &[(Both, 0.3), (Both, 0.6)]),
    ('Э', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('Ю', &[(Both, 0.2), (Both, 0.4), (Both, 0.6), (Both, 0.8)]),
    ('Я', &[(Top, 0.1), (Both, 0.4), (Both, 0.7), (Bottom, 0.9)]),
    // Digits
    ('0', &[(Top, 0.2), (Both, 0.4), (Both, 0.6), (Bottom, 0.8)]),
    ('1', &[(Both, 0.5)]),
    ('2', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('3', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('4', &[(Both, 0.3), (Both, 0.6)]),
    ('5', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('6', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
    ('7', &[(Top, 0.1), (Bottom, 0.7)]),
    ('8', &[(Top, 0.2), (Both, 0.4), (Both, 0.6), (Bottom, 0.8)]),
    ('9', &[(Top, 0.2), (Both, 0.5), (Bottom, 0.8)]),
];

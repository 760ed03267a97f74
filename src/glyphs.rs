//! The glyph pattern table.
//!
//! Each pattern is an ordered list of `(dx, dy)` offsets, relative to the
//! top-left corner of an 8x8 cell, that get set to white. Patterns are plain
//! data so the drawing loop in `sheet` stays free of per-character logic.
//!
//! Only a handful of characters have real shapes; digits 1-9 share one
//! simplified double-bar pattern and every unmapped code point gets the
//! placeholder square. This is intentional: the sheet is a grid-alignment
//! fixture, not a usable font.

/// An ordered set of white-pixel offsets within one 8x8 cell.
pub type Pattern = &'static [(u8, u8)];

/// Space draws nothing; the cell stays black.
const BLANK: Pattern = &[];

/// Two full-height strokes at x=1 and x=6 with a crossbar at y=4.
const GLYPH_H: Pattern = &[
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7),
    (6, 0), (6, 1), (6, 2), (6, 3), (6, 4), (6, 5), (6, 6), (6, 7),
    (2, 4), (3, 4), (4, 4), (5, 4),
];

const GLYPH_E: Pattern = &[
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7),
    (2, 0), (3, 0), (4, 0), (5, 0), (6, 0),
    (2, 4), (3, 4), (4, 4), (5, 4), (6, 4),
    (2, 7), (3, 7), (4, 7), (5, 7), (6, 7),
];

const GLYPH_L: Pattern = &[
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7),
    (2, 7), (3, 7), (4, 7), (5, 7), (6, 7),
];

/// Hollow rectangle; also used for the digit zero.
const GLYPH_O: Pattern = &[
    (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
    (6, 1), (6, 2), (6, 3), (6, 4), (6, 5), (6, 6),
    (2, 1), (3, 1), (4, 1), (5, 1),
    (2, 6), (3, 6), (4, 6), (5, 6),
];

const GLYPH_W: Pattern = &[
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
    (6, 0), (6, 1), (6, 2), (6, 3), (6, 4), (6, 5), (6, 6),
    (3, 4), (3, 5), (3, 6), (3, 7),
    (4, 4), (4, 5), (4, 6), (4, 7),
];

const GLYPH_R: Pattern = &[
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7),
    (2, 0), (3, 0), (4, 0), (5, 0),
    (2, 4), (3, 4), (4, 4), (5, 4),
    (6, 1), (6, 2), (6, 3),
    (4, 5), (5, 6), (6, 7),
];

const GLYPH_D: Pattern = &[
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7),
    (2, 0), (3, 0), (4, 0), (5, 0),
    (2, 7), (3, 7), (4, 7), (5, 7),
    (6, 1), (6, 2), (6, 3), (6, 4), (6, 5), (6, 6),
];

/// Simplified double vertical bar shared by digits 1-9.
const GLYPH_DIGIT: Pattern = &[
    (3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5), (3, 6), (3, 7),
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6), (4, 7),
];

const GLYPH_BANG: Pattern = &[
    (3, 0), (3, 1), (3, 2), (3, 3), (3, 4),
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4),
    (3, 7), (4, 7),
];

const GLYPH_DOT: Pattern = &[(3, 7), (4, 7)];

/// Filled 3x3 square centered in the cell, drawn for every unmapped code.
const PLACEHOLDER: Pattern = &[
    (3, 3), (4, 3), (5, 3),
    (3, 4), (4, 4), (5, 4),
    (3, 5), (4, 5), (5, 5),
];

/// Look up the pattern for a code point.
///
/// `'O'` and `'0'` deliberately share one pattern, as do all of `'1'`-`'9'`.
pub fn glyph_pattern(code: u8) -> Pattern {
    match code {
        b' ' => BLANK,
        b'H' => GLYPH_H,
        b'E' => GLYPH_E,
        b'L' => GLYPH_L,
        b'O' | b'0' => GLYPH_O,
        b'W' => GLYPH_W,
        b'R' => GLYPH_R,
        b'D' => GLYPH_D,
        b'1'..=b'9' => GLYPH_DIGIT,
        b'!' => GLYPH_BANG,
        b'.' => GLYPH_DOT,
        _ => PLACEHOLDER,
    }
}

//! Static font metrics for the story card's typeface (Inter).
//!
//! Character widths are in em units (relative to font size). This is an
//! intentional approximation: the browser canvas measures exact glyph runs,
//! but a static table reproduces its wrap decisions to within a word at card
//! sizes, and keeps the layout core pure and testable without a rendering
//! surface. The table covers ASCII 0x20..=0x7E; anything else falls back to
//! an average width.

use serde::{Deserialize, Serialize};

/// The two type styles the card composition uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Regular,
    Bold,
}

/// Bold Inter runs a few percent wider than regular; one factor is close
/// enough at story-card sizes.
const BOLD_WIDTH_FACTOR: f32 = 1.04;

/// Static character-width table.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units, covering
/// 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback for non-ASCII codepoints.
    average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units. Non-ASCII
    /// characters fall back to `average_char_width`.
    pub fn measure_em(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a string in pixels at the given font size.
    pub fn measure_px(&self, s: &str, font_size_px: f32) -> f32 {
        self.measure_em(s) * font_size_px
    }
}

/// Inter — the humanist sans-serif the card is set in.
#[rustfmt::skip]
static INTER_TABLE: FontMetricTable = FontMetricTable {
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
};

/// Returns the card typeface's metric table.
pub fn inter_metrics() -> &'static FontMetricTable {
    &INTER_TABLE
}

/// Builds a pixel measurer closure for the wrap routine, fixed to one style
/// and size — the injectable stand-in for `ctx.measureText`.
pub fn measurer(style: FontStyle, font_size_px: f32) -> impl Fn(&str) -> f32 {
    let table = inter_metrics();
    let factor = match style {
        FontStyle::Regular => 1.0,
        FontStyle::Bold => BOLD_WIDTH_FACTOR,
    };
    move |s: &str| table.measure_px(s, font_size_px) * factor
}

//! Text measurement collaborator.
//!
//! The axis never rasterises text; it only needs the extent a label or title
//! will occupy. [`TextMeasure`] is the seam to whatever glyph system the
//! renderer uses. [`ProportionalText`] is a deterministic stand-in driven by
//! a proportional character-width table.

use crate::types::TextBox;

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VJustify {
    #[default]
    Bottom,
    Center,
    Top,
}

/// Font/style descriptor handed to the text collaborator.
///
/// `font_size` is in pixels for 2D text. For 3D vector text it is the height
/// of one em in world units before the label/title scale is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub justify: Justify,
    pub vjustify: VJustify,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 1.0,
            bold: false,
            italic: false,
            justify: Justify::Left,
            vjustify: VJustify::Bottom,
        }
    }
}

impl TextStyle {
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_justify(mut self, justify: Justify, vjustify: VJustify) -> Self {
        self.justify = justify;
        self.vjustify = vjustify;
        self
    }
}

/// Measures the bounding box of rendered text
pub trait TextMeasure {
    /// Extent of `text` drawn with `style`, as `[xmin, xmax, ymin, ymax]`.
    fn measure(&self, text: &str, style: &TextStyle) -> TextBox;
}

/// Proportional character widths in hundredths of an em, for ' '..='~'.
#[rustfmt::skip]
pub const CHAR_WIDTHS: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Width of a character outside the table.
const WIDE_CHAR: u32 = 100;

/// Average advance relative to the em height.
pub const CHAR_ASPECT: f64 = 0.571_428_571_428_571_4;

/// Bold text is drawn this much wider.
const BOLD_STRETCH: f64 = 1.1;

/// Sum of character widths in hundredths of an em.
pub fn text_length(text: &str) -> u32 {
    text.chars()
        .map(|c| {
            if (' '..='~').contains(&c) {
                CHAR_WIDTHS[(c as usize) - 0x20] as u32
            } else {
                WIDE_CHAR
            }
        })
        .sum()
}

/// Table-driven measurer: width from [`CHAR_WIDTHS`], height = one em.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionalText;

impl TextMeasure for ProportionalText {
    fn measure(&self, text: &str, style: &TextStyle) -> TextBox {
        if text.is_empty() {
            return TextBox::EMPTY;
        }
        let mut width = text_length(text) as f64 * 0.01 * CHAR_ASPECT * style.font_size;
        if style.bold {
            width *= BOLD_STRETCH;
        }
        TextBox::new(0.0, width, 0.0, style.font_size)
    }
}

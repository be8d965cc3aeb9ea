//! Colors and the palette configuration of a mapping pass.

use std::collections::HashMap;
use lazy_static::lazy_static;
use rgb::RGB8;
use serde::Deserialize;

use crate::{Error, ParseColorError};

pub(crate) mod ty;
pub use ty::{Mode, TextShade};

lazy_static! {
    /// CSS named colors accepted by [`parse_color`].
    static ref NAMED_COLORS: HashMap<&'static str, RGB8> = {
        [("black", [0, 0, 0]),
         ("white", [255, 255, 255]),
         ("gray", [128, 128, 128]),
         ("grey", [128, 128, 128]),
         ("silver", [192, 192, 192]),
         ("lightgray", [211, 211, 211]),
         ("lightgrey", [211, 211, 211]),
         ("red", [255, 0, 0]),
         ("maroon", [128, 0, 0]),
         ("orange", [255, 165, 0]),
         ("yellow", [255, 255, 0]),
         ("olive", [128, 128, 0]),
         ("lime", [0, 255, 0]),
         ("green", [0, 128, 0]),
         ("teal", [0, 128, 128]),
         ("aqua", [0, 255, 255]),
         ("cyan", [0, 255, 255]),
         ("blue", [0, 0, 255]),
         ("navy", [0, 0, 128]),
         ("purple", [128, 0, 128]),
         ("fuchsia", [255, 0, 255]),
         ("magenta", [255, 0, 255]),
         ("salmon", [250, 128, 114]),
         ("lightblue", [173, 216, 230]),
         ("lightgreen", [144, 238, 144]),
         ("pink", [255, 192, 203])]
            .into_iter()
            .map(|(name, [r, g, b])| (name, RGB8 { r, g, b }))
            .collect()
    };
}

/// Parse a CSS color: `#rgb`, `#rrggbb` (the `#` is optional) or a
/// basic named color such as `"white"`.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use table_compare::parse_color;
/// assert_eq!(parse_color("#c75"), Ok(RGB8::new(204, 119, 85)));
/// assert_eq!(parse_color("7AD"), Ok(RGB8::new(119, 170, 221)));
/// assert_eq!(parse_color("White"), Ok(RGB8::new(255, 255, 255)));
/// ```
pub fn parse_color(s: &str) -> Result<RGB8, ParseColorError> {
    let s = s.trim();
    if s.is_empty() { return Err(ParseColorError::Empty) }
    if let Some(&c) = NAMED_COLORS.get(s.to_ascii_lowercase().as_str()) {
        return Ok(c)
    }
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.is_empty() { return Err(ParseColorError::Empty) }
    let digits: Vec<u8> = hex.chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()
        .ok_or(ParseColorError::InvalidHex)?;
    match digits[..] {
        [r, g, b] => Ok(RGB8 { r: r * 17, g: g * 17, b: b * 17 }),
        [r1, r0, g1, g0, b1, b0] =>
            Ok(RGB8 { r: r1 * 16 + r0, g: g1 * 16 + g0, b: b1 * 16 + b0 }),
        _ => Err(ParseColorError::InvalidLength(digits.len())),
    }
}

/// Return the CSS string `#rrggbb` of the color.
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// The colors and comparison mode used for one mapping pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Color of cells above their baseline.
    pub high: RGB8,
    /// Color of cells at or below their baseline.
    pub low: RGB8,
    /// Color of cells whose baseline is null.
    pub null: RGB8,
    pub mode: Mode,
    /// Whether to also compute a legible text color for every cell.
    pub dynamic_text_color: bool,
}

const DEFAULT_HIGH: RGB8 = RGB8 { r: 0xcc, g: 0x77, b: 0x55 }; // #c75
const DEFAULT_LOW: RGB8 = RGB8 { r: 0x77, g: 0xaa, b: 0xdd }; // #7ad
const DEFAULT_NULL: RGB8 = RGB8 { r: 0xff, g: 0xff, b: 0xff };

impl Default for Palette {
    fn default() -> Self {
        Palette { high: DEFAULT_HIGH, low: DEFAULT_LOW, null: DEFAULT_NULL,
                  mode: Mode::Binary, dynamic_text_color: false }
    }
}

impl Palette {
    /// A palette with the given endpoint colors, white for null
    /// cells, in [`Mode::Binary`].
    pub fn new(high: RGB8, low: RGB8) -> Self {
        Palette { high, low, ..Palette::default() }
    }

    /// Same palette, comparing in `mode`.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Same palette with high color `c`.
    pub fn with_high(mut self, c: RGB8) -> Self {
        self.high = c;
        self
    }

    /// Same palette with low color `c`.
    pub fn with_low(mut self, c: RGB8) -> Self {
        self.low = c;
        self
    }

    /// Same palette with null color `c`.
    pub fn with_null(mut self, c: RGB8) -> Self {
        self.null = c;
        self
    }

    /// Same palette, computing text shades iff `on`.
    pub fn with_dynamic_text_color(mut self, on: bool) -> Self {
        self.dynamic_text_color = on;
        self
    }
}

/// Raw configuration, typically deserialized from JSON with the keys
/// `mode`, `highColor`, `lowColor`, `nullColor` and
/// `dynamicTextColor`.  Missing keys take the [`Palette::default`]
/// values.  `styleAttribute` is not used by the mapping; it tells the
/// renderer which style property receives the cell color
/// (`"backgroundColor"` by default).
///
/// # Example
///
/// ```
/// use table_compare::{Options, Palette, Mode};
/// let opts = Options { mode: "linear".into(), ..Options::default() };
/// let p = Palette::try_from(&opts).unwrap();
/// assert_eq!(p.mode, Mode::LinearInterp);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub mode: String,
    pub high_color: String,
    pub low_color: String,
    pub null_color: String,
    pub dynamic_text_color: bool,
    pub style_attribute: String,
}

impl Default for Options {
    fn default() -> Self {
        Options { mode: Mode::Binary.name().to_string(),
                  high_color: "#c75".to_string(),
                  low_color: "#7ad".to_string(),
                  null_color: "#fff".to_string(),
                  dynamic_text_color: false,
                  style_attribute: "backgroundColor".to_string() }
    }
}

impl Options {
    /// Parse the colors, leaving the mode unresolved.
    pub(crate) fn colors(&self) -> Result<(RGB8, RGB8, RGB8), Error> {
        let parse = |option: &'static str, s: &str| parse_color(s)
            .map_err(|source| Error::InvalidColor { option, source });
        Ok((parse("highColor", &self.high_color)?,
            parse("lowColor", &self.low_color)?,
            parse("nullColor", &self.null_color)?))
    }
}

impl TryFrom<&Options> for Palette {
    type Error = Error;

    fn try_from(opts: &Options) -> Result<Self, Self::Error> {
        let (high, low, null) = opts.colors()?;
        Ok(Palette { high, low, null, mode: opts.mode.parse()?,
                     dynamic_text_color: opts.dynamic_text_color })
    }
}

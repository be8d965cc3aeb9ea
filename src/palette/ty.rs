use std::{fmt, str::FromStr};
use rgb::RGB8;
use serde::Serialize;

use crate::Error;

/// How a value is compared with its baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Only test whether the value exceeds a single baseline point.
    /// Baseline cells must be [`Baseline::Point`][crate::Baseline::Point]
    /// (or null).
    #[default]
    Binary,
    /// The hue tells whether the value is above or below the center
    /// of the baseline and the lightness how far away, relative to
    /// the spread.  Baseline cells must be
    /// [`Baseline::Range`][crate::Baseline::Range] (or null).
    LinearInterp,
}

impl Mode {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Mode::Binary => "binary",
            Mode::LinearInterp => "linear",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Mode::Binary),
            "linear" | "linear-interp" | "linearInterp" => Ok(Mode::LinearInterp),
            _ => Err(Error::UnsupportedMode(s.to_string())),
        }
    }
}

/// Text color legible on top of a cell color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextShade {
    /// For light backgrounds.
    Dark,
    /// For dark backgrounds.
    Light,
}

impl TextShade {
    /// Shade suited to a background of lightness `l` ∈ \[0, 1\].
    #[inline]
    pub fn for_lightness(l: f64) -> Self {
        if l > 0.5 { TextShade::Dark } else { TextShade::Light }
    }

    pub fn color(self) -> RGB8 {
        match self {
            TextShade::Dark => RGB8::new(0, 0, 0),
            TextShade::Light => RGB8::new(255, 255, 255),
        }
    }
}

//! Color a matrix of values according to how they compare with a
//! baseline matrix.
//!
//! - [`map_matrix`] colors every cell with a [`Palette`];
//!   [`map_matrix_with`] does the same from raw [`Options`].
//! - [`validate`] checks that the two matrices have the same
//!   rectangular shape.
//! - [`rgb_to_hsl`] and [`hsl_to_rgb`] convert between color spaces.
//!
//! Two [`Mode`]s are available.  In [`Mode::Binary`], a cell gets the
//! high color if its value is strictly above the baseline point and
//! the low color otherwise.  In [`Mode::LinearInterp`], the hue tells
//! the direction of the deviation and the lightness its size,
//! measured in baseline spreads.  A null baseline always gives the
//! null color.
//!
//! # Example
//!
//! ```
//! use rgb::RGB8;
//! use table_compare::{map_matrix, Baseline, Palette};
//! let high = RGB8::new(204, 119, 119);
//! let low = RGB8::new(119, 170, 119);
//! let data = [[5., 1.], [2., 8.]];
//! let baseline = [[Baseline::Point(3.); 2]; 2];
//! let map = map_matrix(&data, &baseline, &Palette::new(high, low)).unwrap();
//! assert_eq!(map.colors, vec![vec![high, low], vec![low, high]]);
//! ```

use log::{debug, trace};
use rgb::RGB8;
use serde::Serialize;

mod error;
mod hsl;
mod matrix;
pub mod mode;
mod palette;

pub use error::{Error, ParseColorError, ShapeError};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use matrix::{check_baseline, is_valid, validate, Baseline};
pub use mode::map_cell;
pub use palette::{parse_color, to_hex, Mode, Options, Palette, TextShade};

/// Result of a mapping pass, in the shape of the input matrices.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ColorMap {
    /// Background color of each cell, row-major.
    pub colors: Vec<Vec<RGB8>>,
    /// Text shade of each cell, if the palette asked for it.
    pub text: Option<Vec<Vec<TextShade>>>,
}

impl ColorMap {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize { self.colors.len() }

    /// Color of the cell at row `i`, column `j`, if it exists.
    pub fn get(&self, i: usize, j: usize) -> Option<RGB8> {
        self.colors.get(i)?.get(j).copied()
    }

    /// Text shade of the cell at row `i`, column `j`, if computed.
    pub fn text_shade(&self, i: usize, j: usize) -> Option<TextShade> {
        self.text.as_ref()?.get(i)?.get(j).copied()
    }
}

/// Color each cell of `data` according to the corresponding cell of
/// `baseline` and `palette`.
///
/// The shapes of the matrices, then the baseline cells (see
/// [`check_baseline`]) are checked before any cell is colored; on
/// failure no output is produced.  The inputs are not modified.
pub fn map_matrix<D, B>(data: &[D], baseline: &[B], palette: &Palette)
                        -> Result<ColorMap, Error>
where D: AsRef<[f64]>,
      B: AsRef<[Baseline]> {
    validate(data, baseline)?;
    check_baseline(baseline, palette.mode)?;
    Ok(map_checked(data, baseline, palette))
}

/// Same as [`map_matrix`] but takes raw configuration.  The matrices
/// are validated before the mode and colors are resolved.
///
/// # Example
///
/// ```
/// use table_compare::{map_matrix_with, Baseline, Error, Options};
/// let opts = Options { mode: "heat".into(), ..Options::default() };
/// let r = map_matrix_with(&[[1.]], &[[Baseline::Null]], &opts);
/// assert_eq!(r, Err(Error::UnsupportedMode("heat".into())));
/// ```
pub fn map_matrix_with<D, B>(data: &[D], baseline: &[B], opts: &Options)
                             -> Result<ColorMap, Error>
where D: AsRef<[f64]>,
      B: AsRef<[Baseline]> {
    validate(data, baseline)?;
    let palette = Palette::try_from(opts)?;
    check_baseline(baseline, palette.mode)?;
    Ok(map_checked(data, baseline, &palette))
}

/// Color the cells, assuming `data` and `baseline` passed validation.
fn map_checked<D, B>(data: &[D], baseline: &[B], palette: &Palette)
                     -> ColorMap
where D: AsRef<[f64]>,
      B: AsRef<[Baseline]> {
    let cols = data.first().map_or(0, |r| r.as_ref().len());
    debug!("mapping {}x{} matrix in {} mode", data.len(), cols, palette.mode);
    let color_of = mode::strategy(palette.mode);
    let colors: Vec<Vec<RGB8>> = data.iter().zip(baseline)
        .map(|(d, b)| {
            d.as_ref().iter().zip(b.as_ref())
                .map(|(&v, b)| color_of(v, b, palette))
                .collect() })
        .collect();
    let text = if palette.dynamic_text_color {
        trace!("computing text shades");
        Some(colors.iter()
             .map(|row| row.iter()
                  .map(|&c| TextShade::for_lightness(Hsl::from_rgb(c).l))
                  .collect())
             .collect())
    } else { None };
    ColorMap { colors, text }
}

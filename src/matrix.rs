//! Baseline cells and the validation of matrix shapes.

use serde::{Deserialize, Serialize};

use crate::{Error, Mode, ShapeError};

/// A cell of the baseline matrix.
///
/// Serializes to and deserializes from `null`, a number, or an array
/// `[center, spread]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBaseline", into = "RawBaseline")]
pub enum Baseline {
    /// Do not compare: the cell gets the null color.
    Null,
    /// Comparison point, for [`Mode::Binary`].
    Point(f64),
    /// Center and (positive) spread, for [`Mode::LinearInterp`].
    Range { center: f64, spread: f64 },
}

/// Wire form of [`Baseline`].
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawBaseline {
    Null,
    Point(f64),
    Range((f64, f64)),
}

impl From<RawBaseline> for Baseline {
    fn from(b: RawBaseline) -> Self {
        match b {
            RawBaseline::Null => Baseline::Null,
            RawBaseline::Point(x) => Baseline::Point(x),
            RawBaseline::Range((center, spread)) =>
                Baseline::Range { center, spread },
        }
    }
}

impl From<Baseline> for RawBaseline {
    fn from(b: Baseline) -> Self {
        match b {
            Baseline::Null => RawBaseline::Null,
            Baseline::Point(x) => RawBaseline::Point(x),
            Baseline::Range { center, spread } =>
                RawBaseline::Range((center, spread)),
        }
    }
}

impl From<f64> for Baseline {
    #[inline]
    fn from(x: f64) -> Self { Baseline::Point(x) }
}

impl From<(f64, f64)> for Baseline {
    #[inline]
    fn from((center, spread): (f64, f64)) -> Self {
        Baseline::Range { center, spread }
    }
}

impl<T: Into<Baseline>> From<Option<T>> for Baseline {
    #[inline]
    fn from(x: Option<T>) -> Self {
        match x { Some(x) => x.into(), None => Baseline::Null }
    }
}

impl Baseline {
    /// Whether the cell is not compared.
    #[inline]
    pub fn is_null(&self) -> bool { matches!(self, Baseline::Null) }

    /// Whether this cell has the shape expected by `mode`.
    fn fits(&self, mode: Mode) -> bool {
        match (self, mode) {
            (Baseline::Null, _) => true,
            (Baseline::Point(_), Mode::Binary) => true,
            (Baseline::Range { .. }, Mode::LinearInterp) => true,
            _ => false,
        }
    }
}

/// Check that `data` is rectangular and that `baseline` has the same
/// shape.  An empty `data` (no rows) is valid with an empty
/// `baseline`.
///
/// # Example
///
/// ```
/// use table_compare::{validate, Baseline, ShapeError};
/// let b = |x: f64| Baseline::from(x);
/// assert_eq!(validate(&[[1., 2.], [3., 4.]], &[[b(0.), b(0.)]]),
///            Err(ShapeError::RowCountMismatch { data: 2, baseline: 1 }));
/// assert!(validate(&[[1., 2.], [3., 4.]],
///                  &[[b(0.), b(0.)], [b(0.), b(0.)]]).is_ok());
/// ```
pub fn validate<D, B>(data: &[D], baseline: &[B]) -> Result<(), ShapeError>
where D: AsRef<[f64]>,
      B: AsRef<[Baseline]> {
    let rows = data.len();
    if baseline.len() != rows {
        return Err(ShapeError::RowCountMismatch {
            data: rows, baseline: baseline.len() })
    }
    let cols = match data.first() { Some(r) => r.as_ref().len(),
                                    None => return Ok(()) };
    for (row, (d, b)) in data.iter().zip(baseline).enumerate() {
        let found = d.as_ref().len();
        if found != cols {
            return Err(ShapeError::RaggedDataRow { row, expected: cols, found })
        }
        let found = b.as_ref().len();
        if found != cols {
            return Err(ShapeError::RaggedBaselineRow {
                row, expected: cols, found })
        }
    }
    Ok(())
}

/// Return `true` iff [`validate`] succeeds.
#[inline]
pub fn is_valid<D, B>(data: &[D], baseline: &[B]) -> bool
where D: AsRef<[f64]>,
      B: AsRef<[Baseline]> {
    validate(data, baseline).is_ok()
}

/// Check that every baseline cell has the shape `mode` requires and
/// that spreads are finite and positive.  Stops at the first
/// offending cell in row-major order.
pub fn check_baseline<B>(baseline: &[B], mode: Mode) -> Result<(), Error>
where B: AsRef<[Baseline]> {
    for (row, cells) in baseline.iter().enumerate() {
        for (col, cell) in cells.as_ref().iter().enumerate() {
            if !cell.fits(mode) {
                return Err(Error::BaselineShape { row, col, mode })
            }
            if let &Baseline::Range { spread, .. } = cell {
                if !(spread.is_finite() && spread > 0.) {
                    return Err(Error::InvalidSpread { row, col, spread })
                }
            }
        }
    }
    Ok(())
}

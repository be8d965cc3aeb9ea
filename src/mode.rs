//! Per-cell coloring strategies.

use rgb::RGB8;

use crate::{Baseline, Hsl, Mode, Palette};

/// Lightness of cells at least one spread away from their center.
pub const MIN_LIGHTNESS: f64 = 0.25;
/// Lightness of cells right at their center.
pub const MAX_LIGHTNESS: f64 = 1.;

/// Signature shared by all strategies.
pub type Strategy = fn(f64, &Baseline, &Palette) -> RGB8;

/// Return the strategy of `mode`.
#[inline]
pub fn strategy(mode: Mode) -> Strategy {
    match mode {
        Mode::Binary => binary,
        Mode::LinearInterp => linear_interp,
    }
}

/// Color of `value` compared with `baseline` according to
/// `palette.mode`.  Baseline cells whose shape does not fit the mode
/// are treated as null; use [`crate::map_matrix`] to have them
/// reported instead.
#[inline]
pub fn map_cell(value: f64, baseline: &Baseline, palette: &Palette) -> RGB8 {
    strategy(palette.mode)(value, baseline, palette)
}

/// `palette.high` if `value` is strictly above the baseline point,
/// `palette.low` otherwise.
pub fn binary(value: f64, baseline: &Baseline, palette: &Palette) -> RGB8 {
    match *baseline {
        Baseline::Point(b) =>
            if value > b { palette.high } else { palette.low },
        _ => palette.null,
    }
}

/// Hue and saturation of `palette.high` (above the center) or
/// `palette.low` (at or below), with a lightness decreasing from
/// [`MAX_LIGHTNESS`] linearly with the distance to the center,
/// measured in spreads, down to [`MIN_LIGHTNESS`].
pub fn linear_interp(value: f64, baseline: &Baseline, palette: &Palette)
                     -> RGB8 {
    let (center, spread) = match *baseline {
        Baseline::Range { center, spread } => (center, spread),
        _ => return palette.null,
    };
    let delta = value - center;
    let (base, l) = {
        if delta > 0. { (palette.high, 1. - delta / spread) }
        else { (palette.low, 1. + delta / spread) } };
    // `max` ignores NaN, so an undefined deviation is shown as the
    // largest one.
    let l = l.max(MIN_LIGHTNESS).min(MAX_LIGHTNESS);
    Hsl::from_rgb(base).with_lightness(l).to_rgb()
}


#[cfg(test)]
mod tests {
    use super::*;

    const HIGH: RGB8 = RGB8 { r: 204, g: 119, b: 119 };
    const LOW: RGB8 = RGB8 { r: 119, g: 170, b: 119 };
    const NULL: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

    fn palette(mode: Mode) -> Palette {
        Palette::new(HIGH, LOW).with_null(NULL).with_mode(mode)
    }

    #[test]
    fn binary_threshold() {
        let p = palette(Mode::Binary);
        for b in [-3., 0., 2.5, 1e9] {
            for v in [-1e10, -2., 0., 2.5, 7., 1e10] {
                let c = map_cell(v, &Baseline::Point(b), &p);
                assert_eq!(c, if v > b { HIGH } else { LOW }, "{v} vs {b}");
            }
            assert_eq!(map_cell(b, &Baseline::Point(b), &p), LOW);
        }
        assert_eq!(map_cell(5., &Baseline::Null, &p), NULL);
        assert_eq!(map_cell(f64::NAN, &Baseline::Point(0.), &p), LOW);
    }

    #[test]
    fn linear_at_center_is_white() {
        let p = palette(Mode::LinearInterp);
        let b = Baseline::Range { center: 10., spread: 4. };
        assert_eq!(map_cell(10., &b, &p), RGB8::new(255, 255, 255));
        assert_eq!(map_cell(0., &Baseline::Null, &p), NULL);
    }

    #[test]
    fn linear_hue_follows_direction() {
        let p = palette(Mode::LinearInterp);
        let b = Baseline::Range { center: 0., spread: 4. };
        let hh = Hsl::from_rgb(HIGH);
        let hl = Hsl::from_rgb(LOW);
        let above = Hsl::from_rgb(map_cell(2., &b, &p));
        let below = Hsl::from_rgb(map_cell(-2., &b, &p));
        assert!((above.h - hh.h).abs() < 0.01, "{above:?} vs {hh:?}");
        assert!((below.h - hl.h).abs() < 0.01, "{below:?} vs {hl:?}");
        assert!((above.l - 0.5).abs() < 0.01);
        assert!((below.l - 0.5).abs() < 0.01);
    }

    #[test]
    fn linear_lightness_is_clamped() {
        let p = palette(Mode::LinearInterp);
        let b = Baseline::Range { center: 3., spread: 0.5 };
        let floor_high = Hsl::from_rgb(HIGH).with_lightness(MIN_LIGHTNESS)
            .to_rgb();
        let floor_low = Hsl::from_rgb(LOW).with_lightness(MIN_LIGHTNESS)
            .to_rgb();
        for d in [1., 10., 1e6, 1e300, f64::INFINITY] {
            assert_eq!(map_cell(3. + d, &b, &p), floor_high);
            assert_eq!(map_cell(3. - d, &b, &p), floor_low);
        }
        assert_eq!(map_cell(f64::NAN, &b, &p), floor_low);
        for v in [-5., 0., 2.9, 3.2, 4., 100.] {
            let l = Hsl::from_rgb(map_cell(v, &b, &p)).l;
            assert!((MIN_LIGHTNESS - 0.01 ..= MAX_LIGHTNESS).contains(&l),
                    "lightness {l} for {v}");
        }
    }

    #[test]
    fn mismatched_cells_are_null() {
        assert_eq!(binary(1., &Baseline::Range { center: 0., spread: 1. },
                          &palette(Mode::Binary)), NULL);
        assert_eq!(linear_interp(1., &Baseline::Point(0.),
                                 &palette(Mode::LinearInterp)), NULL);
    }
}

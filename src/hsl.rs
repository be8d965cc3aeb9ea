//! Conversion between RGB and HSL.

use rgb::RGB8;

/// The type for colors in the HSL color space.  All components are
/// in the range \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue, a fraction of the full turn.
    pub h: f64,
    /// The saturation.
    pub s: f64,
    /// The lightness.
    pub l: f64,
}

impl Hsl {
    /// The color with hue `h`, saturation `s` and lightness `l`.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self { Hsl { h, s, l } }

    /// Return the HSL coordinates of the color `c`.
    pub fn from_rgb(c: RGB8) -> Hsl {
        let (h, s, l) = rgb_to_hsl(c.r, c.g, c.b);
        Hsl { h, s, l }
    }

    /// Return the RGB color with these HSL coordinates.
    pub fn to_rgb(&self) -> RGB8 {
        let (r, g, b) = hsl_to_rgb(self.h, self.s, self.l);
        RGB8 { r, g, b }
    }

    /// Same hue and saturation but lightness `l`.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Hsl { Hsl { l, ..self } }
}

/// Convert the channels `r`, `g`, `b` (in \[0, 255\]) to the hue,
/// saturation and lightness, each in \[0, 1\].
///
/// # Example
///
/// ```
/// use table_compare::rgb_to_hsl;
/// let (h, s, l) = rgb_to_hsl(255, 0, 0);
/// assert_eq!((h, s, l), (0., 1., 0.5));
/// ```
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.;
    let g = g as f64 / 255.;
    let b = b as f64 / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;
    // Channels are exact multiples of 1/255 so `==` is reliable.
    if max == min { return (0., 0., l) }
    let d = max - min;
    let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
    let h = {
        if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
        else if max == g { (b - r) / d + 2. }
        else { (r - g) / d + 4. } };
    (h / 6., s, l)
}

/// Convert the hue `h`, saturation `s` and lightness `l` (in \[0, 1\])
/// to RGB channels.  This is the inverse of [`rgb_to_hsl`] up to
/// rounding.
///
/// # Example
///
/// ```
/// use table_compare::hsl_to_rgb;
/// assert_eq!(hsl_to_rgb(2. / 3., 1., 0.5), (0, 0, 255));
/// assert_eq!(hsl_to_rgb(0.3, 0., 1.), (255, 255, 255));
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0. {
        let x = channel(l);
        return (x, x, x)
    }
    let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
    let p = 2. * l - q;
    (channel(hue_to_rgb(p, q, h + 1. / 3.)),
     channel(hue_to_rgb(p, q, h)),
     channel(hue_to_rgb(p, q, h - 1. / 3.)))
}

#[inline]
fn channel(x: f64) -> u8 {
    // `as` saturates, which keeps float noise around 0 and 1 in range.
    (x * 255.).round() as u8
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0. { t += 1. }
    if t > 1. { t -= 1. }
    if t < 1. / 6. { p + (q - p) * 6. * t }
    else if t < 0.5 { q }
    else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
    else { p }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        assert_eq!(rgb_to_hsl(0, 255, 0), (1. / 3., 1., 0.5));
        assert_eq!(hsl_to_rgb(0., 1., 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(1. / 3., 1., 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(0., 0., 0.), (0, 0, 0));
    }

    #[test]
    fn rgb_round_trip() {
        for r in (0 ..= 255).step_by(5) {
            for g in (0 ..= 255).step_by(3) {
                for b in (0 ..= 255).step_by(7) {
                    let (h, s, l) = rgb_to_hsl(r, g, b);
                    let (r1, g1, b1) = hsl_to_rgb(h, s, l);
                    assert!(r.abs_diff(r1) <= 1 && g.abs_diff(g1) <= 1
                            && b.abs_diff(b1) <= 1,
                            "({r},{g},{b}) ≉ ({r1},{g1},{b1})");
                }
            }
        }
    }

    #[test]
    fn hsl_round_trip() {
        for &(h, s, l) in &[(0.1, 0.5, 0.5), (0.6, 0.8, 0.3), (0.9, 0.4, 0.7)] {
            let c = Hsl::new(h, s, l).to_rgb();
            let Hsl { h: h1, s: s1, l: l1 } = Hsl::from_rgb(c);
            assert!((h - h1).abs() < 0.02, "{h} ≉ {h1}");
            assert!((s - s1).abs() < 0.02, "{s} ≉ {s1}");
            assert!((l - l1).abs() < 0.02, "{l} ≉ {l1}");
        }
    }

    #[test]
    fn achromatic() {
        for x in 0 ..= 255 {
            let (h, s, l) = rgb_to_hsl(x, x, x);
            assert_eq!((h, s), (0., 0.));
            assert_eq!(hsl_to_rgb(h, s, l), (x, x, x));
        }
        for l in [0., 0.25, 0.5, 0.8, 1.] {
            assert_eq!(hsl_to_rgb(0., 0., l), hsl_to_rgb(0.7, 0., l));
        }
    }
}

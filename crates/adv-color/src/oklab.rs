// SPDX-License-Identifier: MIT
//
// Oklab: Björn Ottosson's perceptual color space.
// Reference: https://bottosson.github.io/posts/oklab/
//
// Used for terminal-index matching: the xterm table has 256 entries and
// deltaE-OK (plain Euclidean distance in Oklab) is cheap enough to run over
// all of them for every `ctermfg`/`ctermbg` value in a template.

use crate::rgb::Rgb;

/// A color in Oklab coordinates.
///
/// `l` is perceptual lightness (0.0 black to 1.0 white); `a` and `b` are
/// the green–red and blue–yellow opponent axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    /// Convert an 8-bit sRGB color.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_linear();

        // Linear sRGB → LMS cone response
        let l = 0.051_445_995_f64.mul_add(b, 0.412_221_470_8_f64.mul_add(r, 0.536_332_536_3 * g));
        let m = 0.107_396_956_f64.mul_add(b, 0.211_903_498_2_f64.mul_add(r, 0.680_699_545_1 * g));
        let s = 0.629_978_700_5_f64.mul_add(b, 0.088_302_461_9_f64.mul_add(r, 0.281_718_837_6 * g));

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.004_072_046_8_f64.mul_add(-s_, 0.210_454_255_3_f64.mul_add(l_, 0.793_617_785 * m_)),
            a: 0.450_593_709_9_f64.mul_add(s_, 1.977_998_495_1_f64.mul_add(l_, -(2.428_592_205 * m_))),
            b: 0.808_675_766_f64.mul_add(-s_, 0.025_904_037_1_f64.mul_add(l_, 0.782_771_766_2 * m_)),
        }
    }

    /// Squared deltaE-OK (Euclidean distance in Oklab). Preserves ordering,
    /// so nearest-match loops never take the square root.
    #[inline]
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da))
    }
}

impl From<Rgb> for Oklab {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn black_is_origin() {
        let k = Oklab::from_rgb(Rgb::new(0, 0, 0));
        assert!(approx(k.l, 0.0, 1e-6));
        assert!(approx(k.a, 0.0, 1e-6));
        assert!(approx(k.b, 0.0, 1e-6));
    }

    #[test]
    fn white_has_unit_lightness() {
        let w = Oklab::from_rgb(Rgb::new(255, 255, 255));
        assert!(approx(w.l, 1.0, 1e-3), "L = {}", w.l);
        assert!(approx(w.a, 0.0, 1e-3));
        assert!(approx(w.b, 0.0, 1e-3));
    }

    #[test]
    fn red_matches_reference() {
        // Reference values from Ottosson's post: sRGB red → (0.6280, 0.2249, 0.1258).
        let red = Oklab::from_rgb(Rgb::new(255, 0, 0));
        assert!(approx(red.l, 0.628, 1e-3), "L = {}", red.l);
        assert!(approx(red.a, 0.2249, 1e-3), "a = {}", red.a);
        assert!(approx(red.b, 0.1258, 1e-3), "b = {}", red.b);
    }

    #[test]
    fn identical_colors_have_zero_distance() {
        let c = Oklab::from(Rgb::new(0x27, 0x7b, 0xd3));
        assert!(c.distance_squared(c).abs() < f64::EPSILON);
    }

    #[test]
    fn similar_colors_are_closer_than_different_ones() {
        let base = Oklab::from(Rgb::new(200, 40, 40));
        let near = Oklab::from(Rgb::new(205, 45, 40));
        let far = Oklab::from(Rgb::new(40, 40, 200));
        assert!(base.distance_squared(near) < base.distance_squared(far));
    }
}

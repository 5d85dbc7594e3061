// SPDX-License-Identifier: MIT
//
// CIE L*a*b* (D65) and the CIEDE2000 color difference.
//
// Palette snapping compares every template color against a handful of
// hand-picked reference colors, so the cost of the full CIEDE2000 formula
// is irrelevant and its better handling of blues and near-grays is worth
// having. Formula and test pairs follow Sharma, Wu & Dalal (2005),
// "The CIEDE2000 Color-Difference Formula: Implementation Notes".
//
// Pipeline: sRGB → linear sRGB → XYZ (D65) → L*a*b*

use crate::rgb::Rgb;

/// D65 reference white in XYZ, Y normalized to 1.
const WHITE_X: f64 = 0.950_47;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.088_83;

/// `25^7`, the chroma pivot in the G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// A color in CIE L*a*b* coordinates (D65 white point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, 0.0 (black) to 100.0 (diffuse white).
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert an 8-bit sRGB color.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_linear();

        let x = 0.180_437_5_f64.mul_add(b, 0.412_456_4_f64.mul_add(r, 0.357_576_1 * g));
        let y = 0.072_175_f64.mul_add(b, 0.212_672_9_f64.mul_add(r, 0.715_152_2 * g));
        let z = 0.950_304_1_f64.mul_add(b, 0.019_333_9_f64.mul_add(r, 0.119_192 * g));

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Self::new(116.0f64.mul_add(fy, -16.0), 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// CIEDE2000 difference between two colors (kL = kC = kH = 1).
    ///
    /// A value around 1.0 is the just-noticeable difference; identical
    /// inputs give exactly 0.0.
    #[must_use]
    pub fn delta_e(self, other: Self) -> f64 {
        let c1 = self.a.hypot(self.b);
        let c2 = other.a.hypot(other.b);
        let c_bar7 = ((c1 + c2) / 2.0).powi(7);
        let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

        let a1 = (1.0 + g) * self.a;
        let a2 = (1.0 + g) * other.a;
        let c1 = a1.hypot(self.b);
        let c2 = a2.hypot(other.b);
        let h1 = hue_degrees(self.b, a1);
        let h2 = hue_degrees(other.b, a2);

        let chroma_product = c1 * c2;

        let dl = other.l - self.l;
        let dc = c2 - c1;
        let dh = if chroma_product == 0.0 {
            0.0
        } else {
            let d = h2 - h1;
            if d > 180.0 {
                d - 360.0
            } else if d < -180.0 {
                d + 360.0
            } else {
                d
            }
        };
        let d_big_h = 2.0 * chroma_product.sqrt() * (dh / 2.0).to_radians().sin();

        let l_bar = (self.l + other.l) / 2.0;
        let c_bar = (c1 + c2) / 2.0;
        let h_bar = if chroma_product == 0.0 {
            h1 + h2
        } else if (h1 - h2).abs() <= 180.0 {
            (h1 + h2) / 2.0
        } else if h1 + h2 < 360.0 {
            (h1 + h2 + 360.0) / 2.0
        } else {
            (h1 + h2 - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
            + 0.24 * (2.0 * h_bar).to_radians().cos()
            + 0.32 * 3.0f64.mul_add(h_bar, 6.0).to_radians().cos()
            - 0.20 * 4.0f64.mul_add(h_bar, -63.0).to_radians().cos();

        let d_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
        let c_bar7 = c_bar.powi(7);
        let r_c = 2.0 * (c_bar7 / (c_bar7 + POW25_7)).sqrt();
        let l_off = (l_bar - 50.0).powi(2);
        let s_l = 1.0 + 0.015 * l_off / (20.0 + l_off).sqrt();
        let s_c = 0.045f64.mul_add(c_bar, 1.0);
        let s_h = (0.015 * c_bar).mul_add(t, 1.0);
        let r_t = -(2.0 * d_theta).to_radians().sin() * r_c;

        let tl = dl / s_l;
        let tc = dc / s_c;
        let th = d_big_h / s_h;

        (r_t * tc).mul_add(th, th.mul_add(th, tl.mul_add(tl, tc * tc))).sqrt()
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

/// The L*a*b* companding function.
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Hue angle of `(a, b)` in `[0, 360)`, zero for achromatic input.
#[inline]
fn hue_degrees(b: f64, a: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

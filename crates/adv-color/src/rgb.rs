// SPDX-License-Identifier: MIT
//
// 8-bit sRGB colors and their textual hex encoding.
//
// Vim accepts GUI colors as `#rrggbb`; older templates also use the CSS
// shorthand `#rgb`. Both parse into the same `Rgb`. Output is always the
// six-digit lowercase form, which is what Vim itself prints back.

use std::fmt;

/// A color as three 8-bit sRGB channels.
///
/// This is the interchange type between the text codecs (hex, xterm index)
/// and the perceptual spaces ([`Oklab`](crate::Oklab), [`Lab`](crate::Lab)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rgb` or `#rrggbb` string.
    ///
    /// The leading `#` is required: a bare word such as `bad` or `fade` is a
    /// Vim color *name*, not hex, and must not be decoded as one. Digits are
    /// case-insensitive. Returns `None` for anything else.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?.as_bytes();

        match digits.len() {
            3 => {
                let r = hex_digit(digits[0])?;
                let g = hex_digit(digits[1])?;
                let b = hex_digit(digits[2])?;
                Some(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => Some(Self::new(
                hex_byte(digits[0], digits[1])?,
                hex_byte(digits[2], digits[3])?,
                hex_byte(digits[4], digits[5])?,
            )),
            _ => None,
        }
    }

    /// Render as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as linear-light sRGB in `0.0..=1.0`.
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        (
            srgb_to_linear(f64::from(self.r) / 255.0),
            srgb_to_linear(f64::from(self.g) / 255.0),
            srgb_to_linear(f64::from(self.b) / 255.0),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Remove the sRGB transfer curve from one gamma-encoded component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
const fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    match (hex_digit(hi), hex_digit(lo)) {
        (Some(hi), Some(lo)) => Some(hi << 4 | lo),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

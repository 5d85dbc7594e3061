// SPDX-License-Identifier: MIT
//
// adv-color: color primitives for the adventurous theme generator.
//
// Everything the rewriter needs to treat a Vim color value as a color:
//
//   rgb    → 8-bit sRGB triple with `#rgb` / `#rrggbb` parsing and rendering
//   oklab  → Oklab coordinates and deltaE-OK distance
//   lab    → CIE L*a*b* (D65) coordinates and CIEDE2000 distance
//   xterm  → the 256-color terminal table and nearest-index search
//
// Conversions are pure functions over small `Copy` values. Nothing here
// allocates except `Rgb::to_hex`.

// Single-character variable names (r, g, b, l, a, x, y, z) are the standard
// notation in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod lab;
pub mod oklab;
pub mod rgb;
pub mod xterm;

pub use lab::Lab;
pub use oklab::Oklab;
pub use rgb::Rgb;

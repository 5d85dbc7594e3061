// SPDX-License-Identifier: MIT
//
// The xterm 256-color table, as addressed by Vim's `ctermfg`/`ctermbg`.
//
//   0–15    system colors (xterm defaults; terminals may override these)
//   16–231  6×6×6 RGB cube with channel levels 0, 95, 135, 175, 215, 255
//   232–255 24-step gray ramp from 8 to 238
//
// Index → RGB is a pure function; RGB → index is a perceptual nearest-match
// over the whole table with the Oklab coordinates computed once.

use std::sync::LazyLock;

use crate::oklab::Oklab;
use crate::rgb::Rgb;

/// xterm's default system colors.
const SYSTEM: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

static TABLE_OKLAB: LazyLock<[Oklab; 256]> =
    LazyLock::new(|| std::array::from_fn(|i| Oklab::from_rgb(to_rgb(index_u8(i)))));

/// RGB value of a terminal color index.
#[must_use]
pub fn to_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => Rgb::from(SYSTEM[usize::from(index)]),
        16..=231 => {
            let i = index - 16;
            Rgb::new(
                CUBE_LEVELS[usize::from(i / 36)],
                CUBE_LEVELS[usize::from((i % 36) / 6)],
                CUBE_LEVELS[usize::from(i % 6)],
            )
        }
        232..=255 => {
            let v = 8 + 10 * (index - 232);
            Rgb::new(v, v, v)
        }
    }
}

/// Parse a `ctermfg`/`ctermbg` value as a table index.
///
/// Only plain decimal `0`–`255` is accepted. Vim's color names (`Red`,
/// `DarkBlue`, ...) depend on the terminal's palette and are left alone.
#[must_use]
pub fn parse_index(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Nearest terminal color index by deltaE-OK.
///
/// A color that is exactly in the table maps to its own (lowest) index;
/// among equally distant entries the lowest index wins.
#[must_use]
pub fn nearest(rgb: Rgb) -> u8 {
    let target = Oklab::from_rgb(rgb);

    let mut best_idx = 0u8;
    let mut best_dist = f64::MAX;

    for (i, entry) in TABLE_OKLAB.iter().enumerate() {
        let dist = target.distance_squared(*entry);
        if dist < best_dist {
            best_dist = dist;
            best_idx = index_u8(i);
        }
    }

    best_idx
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn index_u8(i: usize) -> u8 {
    // Table iteration never exceeds 255.
    i as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn system_colors() {
        assert_eq!(to_rgb(0), Rgb::new(0, 0, 0));
        assert_eq!(to_rgb(1), Rgb::new(128, 0, 0));
        assert_eq!(to_rgb(7), Rgb::new(192, 192, 192));
        assert_eq!(to_rgb(15), Rgb::new(255, 255, 255));
    }

    #[test]
    fn color_cube() {
        assert_eq!(to_rgb(16), Rgb::new(0, 0, 0));
        assert_eq!(to_rgb(196), Rgb::new(255, 0, 0));
        assert_eq!(to_rgb(21), Rgb::new(0, 0, 255));
        assert_eq!(to_rgb(67), Rgb::new(95, 135, 175));
        assert_eq!(to_rgb(231), Rgb::new(255, 255, 255));
    }

    #[test]
    fn gray_ramp() {
        assert_eq!(to_rgb(232), Rgb::new(8, 8, 8));
        assert_eq!(to_rgb(244), Rgb::new(128, 128, 128));
        assert_eq!(to_rgb(255), Rgb::new(238, 238, 238));
    }

    #[test]
    fn parse_accepts_decimal_in_range() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("196"), Some(196));
        assert_eq!(parse_index("255"), Some(255));
        assert_eq!(parse_index("007"), Some(7));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for s in ["", "256", "-1", "+3", "Red", "#ff0000", "12a", " 12", "NONE"] {
            assert_eq!(parse_index(s), None, "{s:?} should not parse");
        }
    }

    #[test]
    fn exact_entries_map_to_themselves() {
        for idx in [1u8, 9, 67, 208, 240] {
            assert_eq!(nearest(to_rgb(idx)), idx);
        }
    }

    #[test]
    fn duplicate_entries_resolve_to_lowest_index() {
        // Pure black is both 0 and 16; pure white is both 15 and 231.
        assert_eq!(nearest(Rgb::new(0, 0, 0)), 0);
        assert_eq!(nearest(Rgb::new(255, 255, 255)), 15);
    }

    #[test]
    fn near_miss_finds_close_entry() {
        let idx = nearest(Rgb::new(250, 5, 5));
        assert!(idx == 9 || idx == 196, "got {idx}");
    }

    #[test]
    fn near_gray_picks_closest_gray() {
        assert_eq!(nearest(Rgb::new(127, 127, 127)), 8);
        assert_eq!(nearest(Rgb::new(29, 29, 29)), 234);
    }
}

//! The fixed target palette and nearest-color search.
//!
//! Thirteen hand-picked colors. Every color in a generated theme is one of
//! these (or, for terminal values, the xterm index closest to one of these).
//! The palette is built once per process; each entry carries its
//! precomputed L*a*b* coordinates so a lookup is thirteen CIEDE2000 calls.

use std::sync::LazyLock;

use adv_color::{Lab, Rgb};

/// The process-wide palette.
pub static PALETTE: LazyLock<Palette> = LazyLock::new(Palette::adventurous);

const ADVENTUROUS: [(&str, Rgb); 13] = [
    ("normal", Rgb::new(0xF8, 0xF8, 0xF2)),
    ("darkness", Rgb::new(0x19, 0x1B, 0x1F)),
    ("ghostly", Rgb::new(0x40, 0x44, 0x49)),
    ("jake", Rgb::new(0xF5, 0xBB, 0x12)),
    ("rawr", Rgb::new(0xFF, 0xC6, 0x20)),
    ("peppermint", Rgb::new(0xD3, 0x42, 0x2E)),
    ("finns-bag", Rgb::new(0x4B, 0xAE, 0x16)),
    ("ice-king", Rgb::new(0x7F, 0xD6, 0xFA)),
    ("finn", Rgb::new(0x27, 0x7B, 0xD3)),
    ("heartbreaker", Rgb::new(0xF2, 0x5A, 0x55)),
    ("bubblegum", Rgb::new(0xDE, 0x34, 0x7A)),
    ("adventure-time", Rgb::new(0x32, 0x99, 0xCC)),
    ("cyan", Rgb::new(0x8A, 0xBE, 0xB7)),
];

// ---------------------------------------------------------------------------
// NearestColor
// ---------------------------------------------------------------------------

/// Snaps an arbitrary color to a palette entry.
///
/// This is the only thing the rewriter needs from a palette, so tests can
/// substitute a smaller one.
pub trait NearestColor {
    fn nearest(&self, color: Rgb) -> &PaletteEntry;
}

// ---------------------------------------------------------------------------
// PaletteEntry
// ---------------------------------------------------------------------------

/// One named palette color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub rgb: Rgb,
    lab: Lab,
}

impl PaletteEntry {
    #[must_use]
    pub fn new(name: &'static str, rgb: Rgb) -> Self {
        Self {
            name,
            rgb,
            lab: Lab::from_rgb(rgb),
        }
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// An ordered, immutable set of reference colors.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// The adventurous palette. Prefer the shared [`PALETTE`] static.
    #[must_use]
    pub fn adventurous() -> Self {
        Self::from_entries(ADVENTUROUS.iter().map(|&(name, rgb)| PaletteEntry::new(name, rgb)))
    }

    /// Build a palette from entries, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty; a palette with nothing to snap to has
    /// no meaningful `nearest`.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = PaletteEntry>) -> Self {
        let palette = Self {
            entries: entries.into_iter().collect(),
        };
        assert!(!palette.is_empty(), "palette must have at least one entry");
        palette
    }

    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `color` is exactly one of the palette colors.
    #[must_use]
    pub fn contains(&self, color: Rgb) -> bool {
        self.entries.iter().any(|e| e.rgb == color)
    }
}

impl NearestColor for Palette {
    /// Closest entry by CIEDE2000. Ties go to the earlier entry.
    fn nearest(&self, color: Rgb) -> &PaletteEntry {
        let target = Lab::from_rgb(color);

        let mut best = &self.entries[0];
        let mut best_dist = target.delta_e(best.lab);

        for entry in &self.entries[1..] {
            let dist = target.delta_e(entry.lab);
            if dist < best_dist {
                best = entry;
                best_dist = dist;
            }
        }

        best
    }
}

impl<T: NearestColor + ?Sized> NearestColor for &T {
    fn nearest(&self, color: Rgb) -> &PaletteEntry {
        (**self).nearest(color)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! # adv-theme: palette-snapping rewriter for Vim colorschemes
//!
//! Reads a colorscheme template line by line and rewrites every color in
//! its `hi` directives to the nearest entry of a fixed 13-color palette,
//! keeping the template's structure and separating comment and highlight
//! blocks with blank lines.
//!
//! # Architecture
//!
//! ```text
//! template (BufRead)
//!     │
//!     ▼
//! generate.rs:   line source, drops zero-length lines
//!     │
//!     ▼
//! directive.rs:  classify (comment / hi / other), split `hi` lines
//!     │
//!     ▼
//! assignment.rs: decode key=value, snap through the palette, re-encode
//!     │
//!     ▼
//! rewriter.rs:   reassemble, insert separator blank lines
//!     │
//!     ▼
//! output (Write)
//! ```
//!
//! Color math lives in `adv-color`; this crate only decides *which* values
//! are colors and how the result is laid out.

pub mod assignment;
pub mod directive;
pub mod generate;
pub mod palette;
pub mod rewriter;

pub use generate::{GenerateError, generate, generate_file, rewrite_template};
pub use palette::{NearestColor, PALETTE, Palette, PaletteEntry};
pub use rewriter::{LineRewriter, RewriteStats};

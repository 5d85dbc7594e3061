//! The per-assignment color rewrite.
//!
//! A `hi` line carries `key=value` tokens. Keys starting with `cterm` hold
//! xterm-256 indices, every other key is treated as a GUI hex color. The
//! value is decoded, snapped to the palette and re-encoded in the form it
//! arrived in. Anything that is not a decodable color comes back verbatim:
//! `gui=`/`cterm=` attribute lists, `NONE`, color names, bare words.

use std::fmt;

use adv_color::{Rgb, xterm};
use tracing::{debug, trace};

use crate::palette::NearestColor;

/// How a color value is spelled in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// `ctermfg=196`: decimal xterm-256 index.
    Terminal,
    /// `guifg=#ff0000`: hex RGB.
    TrueColor,
}

impl Encoding {
    /// Encoding implied by an assignment key.
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        if key.starts_with("cterm") {
            Self::Terminal
        } else {
            Self::TrueColor
        }
    }

    #[must_use]
    pub fn decode(self, value: &str) -> Option<Rgb> {
        match self {
            Self::Terminal => xterm::parse_index(value).map(xterm::to_rgb),
            Self::TrueColor => Rgb::from_hex(value),
        }
    }

    #[must_use]
    pub fn encode(self, color: Rgb) -> String {
        match self {
            Self::Terminal => xterm::nearest(color).to_string(),
            Self::TrueColor => color.to_hex(),
        }
    }
}

/// Why an assignment token was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeepReason {
    /// The bare `gui` or `cterm` attribute key.
    ExcludedKey,
    /// Value is the literal `NONE`.
    NoneValue,
    /// No `=` in the token.
    MissingValue,
    /// Value does not decode as a color in the key's encoding.
    Undecodable,
}

impl fmt::Display for KeepReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExcludedKey => "attribute key",
            Self::NoneValue => "NONE",
            Self::MissingValue => "no value",
            Self::Undecodable => "not a color",
        })
    }
}

/// Result of rewriting one assignment token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite<'a> {
    /// The value was a color and now names a palette color.
    Snapped {
        token: String,
        /// Name of the palette entry the value snapped to.
        entry: &'static str,
    },
    /// The token is emitted exactly as it arrived.
    Kept { token: &'a str, reason: KeepReason },
}

impl Rewrite<'_> {
    /// The token to emit.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Snapped { token, .. } => token.as_str(),
            Self::Kept { token, .. } => *token,
        }
    }

    #[must_use]
    pub const fn is_snapped(&self) -> bool {
        matches!(self, Self::Snapped { .. })
    }
}

/// Rewrite one `key=value` token against `palette`.
pub fn rewrite<'a, P: NearestColor + ?Sized>(token: &'a str, palette: &P) -> Rewrite<'a> {
    let kept = |reason: KeepReason| {
        trace!(token, %reason, "kept assignment");
        Rewrite::Kept { token, reason }
    };

    let Some((key, value)) = token.split_once('=') else {
        return kept(KeepReason::MissingValue);
    };
    if key == "gui" || key == "cterm" {
        return kept(KeepReason::ExcludedKey);
    }
    if value == "NONE" {
        return kept(KeepReason::NoneValue);
    }

    let encoding = Encoding::for_key(key);
    let Some(color) = encoding.decode(value) else {
        return kept(KeepReason::Undecodable);
    };

    let entry = palette.nearest(color);
    let snapped = encoding.encode(entry.rgb);
    debug!(key, from = value, to = %snapped, entry = entry.name, "snapped color");

    Rewrite::Snapped {
        token: format!("{key}={snapped}"),
        entry: entry.name,
    }
}

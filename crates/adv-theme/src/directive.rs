//! Template line classification and `hi` directive splitting.
//!
//! Only two line shapes matter to the rewriter: Vim comments (leading `"`)
//! and highlight definitions (leading `hi `). Everything else is copied
//! through untouched.

/// What a template line is, decided by its first characters only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Starts with `"`.
    Comment,
    /// Starts with `hi `.
    Highlight,
    /// Anything else, including `hi!`, `highlight` and `hi` with no
    /// trailing space.
    Other,
}

impl LineKind {
    #[must_use]
    pub fn of(line: &str) -> Self {
        if line.starts_with('"') {
            Self::Comment
        } else if line.starts_with("hi ") {
            Self::Highlight
        } else {
            Self::Other
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::Comment)
    }

    #[inline]
    #[must_use]
    pub const fn is_highlight(self) -> bool {
        matches!(self, Self::Highlight)
    }
}

/// A `hi <Group> <key=value>...` line split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightLine<'a> {
    /// Token 1: the group name (or a subcommand such as `link`/`clear`).
    pub group: &'a str,
    /// Tokens 2..: assignments, plus any bare words (`hi link A B`).
    pub assignments: Vec<&'a str>,
}

impl<'a> HighlightLine<'a> {
    /// Split a highlight line. Returns `None` unless the first token is
    /// exactly `hi` and a group name follows it.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        if tokens.next()? != "hi" {
            return None;
        }
        let group = tokens.next()?;
        Some(Self {
            group,
            assignments: tokens.collect(),
        })
    }
}

//! The line rewriter: one template line in, one output chunk out.
//!
//! The only state carried between lines is what the previous line was:
//!
//! - a `hi` line that follows a non-`hi` line gets a blank line before it,
//!   so each run of highlight definitions starts a visual block;
//! - the first non-comment, non-`hi` line after a comment is set off by a
//!   blank line on both sides.
//!
//! Nothing is ever dropped or reordered. A chunk is the rewritten line plus
//! its terminator plus any separator blank lines.

use crate::assignment;
use crate::directive::{HighlightLine, LineKind};
use crate::palette::NearestColor;

// ---------------------------------------------------------------------------
// RewriteStats
// ---------------------------------------------------------------------------

/// Counters accumulated over a run, reported once at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Lines consumed.
    pub lines: usize,
    pub comments: usize,
    pub highlights: usize,
    /// Assignments whose color was replaced by a palette color.
    pub snapped: usize,
    /// Assignments emitted verbatim.
    pub kept: usize,
}

// ---------------------------------------------------------------------------
// LineRewriter
// ---------------------------------------------------------------------------

/// Stateful per-line transform over a colorscheme template.
#[derive(Debug)]
pub struct LineRewriter<P> {
    palette: P,
    prev_comment: bool,
    prev_highlight: bool,
    stats: RewriteStats,
}

impl<P: NearestColor> LineRewriter<P> {
    /// A rewriter at the start of a file.
    ///
    /// The initial state suppresses both separators, so output never begins
    /// with an inserted blank line.
    #[must_use]
    pub fn new(palette: P) -> Self {
        Self {
            palette,
            prev_comment: false,
            prev_highlight: true,
            stats: RewriteStats::default(),
        }
    }

    #[must_use]
    pub const fn stats(&self) -> RewriteStats {
        self.stats
    }

    /// Rewrite one line (without its terminator) into an output chunk.
    pub fn rewrite_line(&mut self, line: &str) -> String {
        let kind = LineKind::of(line);
        let prev_comment = self.prev_comment;
        let prev_highlight = self.prev_highlight;
        self.prev_comment = kind.is_comment();
        self.prev_highlight = kind.is_highlight();

        self.stats.lines += 1;
        match kind {
            LineKind::Comment => self.stats.comments += 1,
            LineKind::Highlight => self.stats.highlights += 1,
            LineKind::Other => {}
        }

        if kind.is_highlight() {
            let separator = if prev_highlight { "" } else { "\n" };
            match HighlightLine::parse(line) {
                Some(hi) => self.rewrite_highlight(separator, &hi),
                None => format!("{separator}{line}\n"),
            }
        } else if prev_comment && !kind.is_comment() {
            format!("\n{line}\n\n")
        } else {
            format!("{line}\n")
        }
    }

    /// Adapt a line iterator into an iterator of output chunks.
    pub fn chunks<I>(&mut self, lines: I) -> Chunks<'_, I::IntoIter, P>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Chunks {
            lines: lines.into_iter(),
            rewriter: self,
        }
    }

    fn rewrite_highlight(&mut self, separator: &str, hi: &HighlightLine<'_>) -> String {
        let mut out = String::with_capacity(separator.len() + 64);
        out.push_str(separator);
        out.push_str("hi ");
        out.push_str(hi.group);

        for token in &hi.assignments {
            let rewrite = assignment::rewrite(token, &self.palette);
            if rewrite.is_snapped() {
                self.stats.snapped += 1;
            } else {
                self.stats.kept += 1;
            }
            out.push(' ');
            out.push_str(rewrite.as_str());
        }

        out.push('\n');
        out
    }
}

// ---------------------------------------------------------------------------
// Chunks
// ---------------------------------------------------------------------------

/// Iterator returned by [`LineRewriter::chunks`].
#[derive(Debug)]
pub struct Chunks<'r, I, P> {
    lines: I,
    rewriter: &'r mut LineRewriter<P>,
}

impl<I, P> Iterator for Chunks<'_, I, P>
where
    I: Iterator,
    I::Item: AsRef<str>,
    P: NearestColor,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = self.lines.next()?;
        Some(self.rewriter.rewrite_line(line.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

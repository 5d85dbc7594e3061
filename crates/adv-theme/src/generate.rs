//! Streaming driver: template in, generated colorscheme out.
//!
//! Lines are read one at a time, rewritten, and written before the next one
//! is read. Zero-length template lines are not handed to the rewriter; the
//! output's blank lines all come from its separator rules.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::palette::PALETTE;
use crate::rewriter::{LineRewriter, RewriteStats};

/// Fatal errors while generating a theme.
///
/// Bad color values are not errors: they are copied through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to open template {path}")]
    OpenTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create output {path}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read template line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output")]
    Write {
        #[source]
        source: io::Error,
    },
}

/// Rewrite a whole template from `reader` into `writer`.
///
/// # Errors
///
/// Returns [`GenerateError::Read`] if a line cannot be read (including
/// invalid UTF-8) and [`GenerateError::Write`] if output cannot be written
/// or flushed.
pub fn generate<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<RewriteStats, GenerateError> {
    let mut rewriter = LineRewriter::new(&*PALETTE);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| GenerateError::Read { line: idx + 1, source })?;
        if line.is_empty() {
            continue;
        }
        let chunk = rewriter.rewrite_line(&line);
        writer
            .write_all(chunk.as_bytes())
            .map_err(|source| GenerateError::Write { source })?;
    }

    writer.flush().map_err(|source| GenerateError::Write { source })?;

    let stats = rewriter.stats();
    debug!(?stats, palette = PALETTE.len(), "template rewritten");
    Ok(stats)
}

/// Rewrite the template at `template` into a new file at `output`.
///
/// The output's parent directory is created if it does not exist. The theme
/// is written to a temporary file next to `output` and renamed over it only
/// once the whole template has been rewritten, so a failed run leaves any
/// previous output in place.
///
/// # Errors
///
/// [`GenerateError::OpenTemplate`] / [`GenerateError::CreateOutput`] when
/// either path cannot be opened or the finished file cannot be moved into
/// place, otherwise as for [`generate`].
pub fn generate_file(template: &Path, output: &Path) -> Result<RewriteStats, GenerateError> {
    let input = File::open(template).map_err(|source| GenerateError::OpenTemplate {
        path: template.to_path_buf(),
        source,
    })?;

    let create_err = |source: io::Error| GenerateError::CreateOutput {
        path: output.to_path_buf(),
        source,
    };
    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(create_err)?;
            dir
        }
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(create_err)?;

    let stats = generate(BufReader::new(input), BufWriter::new(staged.as_file_mut()))?;
    staged.persist(output).map_err(|e| create_err(e.error))?;

    info!(
        template = %template.display(),
        output = %output.display(),
        lines = stats.lines,
        snapped = stats.snapped,
        "generated theme"
    );
    Ok(stats)
}

/// Rewrite an in-memory template. Same line handling as [`generate`].
#[must_use]
pub fn rewrite_template(template: &str) -> String {
    let mut rewriter = LineRewriter::new(&*PALETTE);
    rewriter.chunks(template.lines().filter(|l| !l.is_empty())).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn generate_str(input: &str) -> (String, RewriteStats) {
        let mut out = Vec::new();
        let stats = generate(input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn drops_blank_template_lines() {
        let (out, stats) = generate_str("\" a\n\n\nhi X gui=bold\n\n");
        assert_eq!(out, "\" a\n\nhi X gui=bold\n");
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn handles_crlf_and_missing_final_newline() {
        let (out, _) = generate_str("let a = 1\r\nhi X guibg=NONE\r\nlet b = 2");
        assert_eq!(out, "let a = 1\n\nhi X guibg=NONE\nlet b = 2\n");
    }

    #[test]
    fn whitespace_only_lines_are_kept() {
        let (out, _) = generate_str("a\n  \nb\n");
        assert_eq!(out, "a\n  \nb\n");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let (out, stats) = generate_str("");
        assert_eq!(out, "");
        assert_eq!(stats, RewriteStats::default());
    }

    #[test]
    fn matches_in_memory_rewrite() {
        let template = "\" Vim color file\n\nhi clear\nlet g:colors_name = \"x\"\n\nhi Normal guifg=#ffffff ctermfg=15\n";
        let (out, _) = generate_str(template);
        assert_eq!(out, rewrite_template(template));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let input: &[u8] = b"\" ok\nhi X guifg=\xff\xfe\n";
        let err = generate(input, Vec::new()).unwrap_err();
        assert!(matches!(err, GenerateError::Read { line: 2, .. }), "{err}");
    }

    #[test]
    fn write_failure_is_reported() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = generate("x\n".as_bytes(), Broken).unwrap_err();
        assert!(matches!(err, GenerateError::Write { .. }));
        assert_eq!(err.to_string(), "failed to write output");
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "disk full");
    }
}

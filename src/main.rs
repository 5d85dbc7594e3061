// SPDX-License-Identifier: MIT
//
// adventurous: generates the adventurous Vim colorscheme.
//
// Reads a colorscheme template and writes a copy in which every color of
// every `hi` directive is snapped to the 13-color adventurous palette:
//
//   template.vim → adv-theme (classify, snap, lay out) → colors/adventurous.vim
//
// Both paths can be given as positional arguments; the defaults match the
// repository layout the theme is built in. `RUST_LOG` controls logging.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Snap a Vim colorscheme template to the adventurous palette.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Template to read.
    #[arg(default_value = "template.vim")]
    template: PathBuf,

    /// Colorscheme file to write. Missing parent directories are created.
    #[arg(default_value = "colors/adventurous.vim")]
    output: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    adv_theme::generate_file(&cli.template, &cli.output).with_context(|| {
        format!(
            "generating {} from {}",
            cli.output.display(),
            cli.template.display()
        )
    })?;
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging();
    tracing::debug!(
        template = %cli.template.display(),
        output = %cli.output.display(),
        "starting"
    );

    if let Err(e) = run(&cli) {
        eprintln!("adventurous: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_repository_layout() {
        let cli = Cli::try_parse_from(["adventurous"]).unwrap();
        assert_eq!(cli.template, PathBuf::from("template.vim"));
        assert_eq!(cli.output, PathBuf::from("colors/adventurous.vim"));
    }

    #[test]
    fn positional_paths_override_defaults() {
        let cli = Cli::try_parse_from(["adventurous", "in.vim", "out/x.vim"]).unwrap();
        assert_eq!(cli.template, PathBuf::from("in.vim"));
        assert_eq!(cli.output, PathBuf::from("out/x.vim"));
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["adventurous", "a", "b", "c"]).is_err());
    }

    #[test]
    fn missing_template_is_reported_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            template: dir.path().join("nope.vim"),
            output: dir.path().join("out.vim"),
        };
        let msg = format!("{:#}", run(&cli).unwrap_err());
        assert!(msg.starts_with("generating "), "{msg}");
        assert!(msg.contains("failed to open template"), "{msg}");
        assert!(!cli.output.exists());
    }
}

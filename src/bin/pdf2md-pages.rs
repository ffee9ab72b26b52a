//! CLI binary for pdf2md-pages.
//!
//! A thin shim over the library crate that maps arguments to
//! `ConversionConfig`, prints progress, and maps errors to exit codes.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use pdf2md_pages::{
    convert, inspect, ConversionConfig, ConversionProgressCallback, ErrorKind, SplitError,
    StdoutProgress,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"OUTPUT LAYOUT:
  <output_dir>/<name>_page_001.md
  <output_dir>/<name>_page_002.md
  ...
  <output_dir>/images/<name>_page_001_img_001.png

  If output_dir is not given, files are written next to the PDF.

EXAMPLES:
  # Pages next to the source
  pdf2md-pages report.pdf

  # Pages into a separate directory (created if missing)
  pdf2md-pages report.pdf out/report

  # Encrypted document
  pdf2md-pages --password s3cret statement.pdf

  # Page count and document info only
  pdf2md-pages --inspect-only report.pdf

PDFIUM:
  libpdfium is loaded from the current directory first, then from the
  system library path.
"#;

/// Convert a PDF into one Markdown file per page, extracting images.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2md-pages",
    version,
    about = "Convert a PDF into one Markdown file per page, extracting images",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input PDF file.
    input: PathBuf,

    /// Directory for the Markdown files (default: the PDF's directory).
    output_dir: Option<PathBuf>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true)]
    extra: Vec<String>,

    /// PDF user password for encrypted documents.
    #[arg(long)]
    password: Option<String>,

    /// Do not extract embedded images.
    #[arg(long)]
    no_images: bool,

    /// Print the conversion report (or metadata) as JSON instead of progress lines.
    #[arg(long)]
    json: bool,

    /// Print PDF metadata only, no conversion.
    #[arg(long)]
    inspect_only: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress progress output; errors are still printed.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    // Bare invocation prints usage to stdout and fails.
    if std::env::args_os().len() < 2 {
        println!("{}", Cli::command().render_long_help());
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version succeed; usage errors fail with 1 like every
            // other error.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(&cli);

    if !cli.extra.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.extra);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// The message printed for a failed run.
///
/// Validation failures read `Error: …`; anything after validation reads
/// `Error during conversion: …`.
fn error_line(e: &anyhow::Error) -> String {
    match e.downcast_ref::<SplitError>() {
        Some(err) if err.kind() != ErrorKind::ConversionFailure => format!("Error: {err}"),
        Some(err) => format!("Error during conversion: {err}"),
        None => format!("Error during conversion: {e:#}"),
    }
}

fn init_logging(cli: &Cli) {
    // Progress lines own stdout; logs stay on stderr and quiet by default.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let meta = inspect(&cli.input, cli.password.as_deref())?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&meta).context("Failed to serialize metadata")?
            );
        } else {
            println!("File:         {}", cli.input.display());
            if let Some(ref t) = meta.title {
                println!("Title:        {}", t);
            }
            if let Some(ref a) = meta.author {
                println!("Author:       {}", a);
            }
            if let Some(ref s) = meta.subject {
                println!("Subject:      {}", s);
            }
            println!("Pages:        {}", meta.page_count);
            println!("PDF Version:  {}", meta.pdf_version);
            if let Some(ref p) = meta.producer {
                println!("Producer:     {}", p);
            }
            if let Some(ref c) = meta.creator {
                println!("Creator:      {}", c);
            }
        }
        return Ok(());
    }

    // ── Conversion ───────────────────────────────────────────────────────
    let config = build_config(cli)?;
    let report = convert(&cli.input, &config)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialise report")?
        );
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder().extract_images(!cli.no_images);

    if let Some(ref dir) = cli.output_dir {
        builder = builder.output_dir(dir);
    }
    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd);
    }
    if !cli.quiet && !cli.json {
        builder = builder.progress_callback(
            Arc::new(StdoutProgress::new()) as Arc<dyn ConversionProgressCallback>
        );
    }

    builder.build().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_plain_prefix() {
        let e = anyhow::Error::from(SplitError::FileNotFound {
            path: PathBuf::from("missing.pdf"),
        });
        assert_eq!(error_line(&e), "Error: PDF file not found: missing.pdf");
    }

    #[test]
    fn invalid_input_uses_plain_prefix() {
        let e = anyhow::Error::from(SplitError::NotAPdf {
            path: PathBuf::from("r.txt"),
        });
        assert_eq!(error_line(&e), "Error: File does not appear to be a PDF: r.txt");
    }

    #[test]
    fn conversion_failure_uses_conversion_prefix() {
        let e = anyhow::Error::from(SplitError::PageRenderFailed {
            page: 2,
            detail: "broken stream".into(),
        });
        assert_eq!(
            error_line(&e),
            "Error during conversion: Rendering failed for page 2: broken stream"
        );

        let e = anyhow::Error::from(SplitError::PdfiumBindingFailed("no library".into()));
        assert!(error_line(&e).starts_with("Error during conversion: Failed to bind"));
    }

    #[test]
    fn other_errors_use_conversion_prefix() {
        let e = anyhow::anyhow!("disk on fire").context("Failed to serialise report");
        assert_eq!(
            error_line(&e),
            "Error during conversion: Failed to serialise report: disk on fire"
        );
    }

    #[test]
    fn positional_forms_parse() {
        let cli = Cli::try_parse_from(["pdf2md-pages", "a.pdf"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a.pdf"));
        assert!(cli.output_dir.is_none());

        let cli = Cli::try_parse_from(["pdf2md-pages", "a.pdf", "out"]).unwrap();
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn extra_positionals_are_ignored() {
        let cli = Cli::try_parse_from(["pdf2md-pages", "a.pdf", "out", "extra", "more"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a.pdf"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.extra, vec!["extra", "more"]);
    }

    #[test]
    fn usage_errors_report_as_failures() {
        let err = Cli::try_parse_from(["pdf2md-pages", "a.pdf", "--no-such-flag"]).unwrap_err();
        assert!(err.use_stderr());

        let help = Cli::try_parse_from(["pdf2md-pages", "--help"]).unwrap_err();
        assert!(!help.use_stderr());
    }
}

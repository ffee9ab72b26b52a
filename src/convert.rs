//! Conversion entry points.
//!
//! One run walks the document strictly in page order: render a page, write
//! its file, report it, move on. The first error stops the run; files written
//! for earlier pages are left in place.

use crate::config::ConversionConfig;
use crate::error::SplitError;
use crate::output::{ConversionReport, DocumentMetadata};
use crate::pipeline::input::{self, SourceDocument};
use crate::pipeline::render::{PageRenderer, PdfiumRenderer};
use crate::pipeline::write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a PDF into one Markdown file per page using pdfium.
///
/// The source is validated before pdfium is bound, so a missing or
/// non-PDF input fails without loading the library or touching the disk.
///
/// # Errors
/// - [`SplitError::FileNotFound`] / [`SplitError::NotAPdf`] from validation
/// - any pdfium, directory or write failure during the run
pub fn convert(
    source: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionReport, SplitError> {
    let doc = input::validate_source(source)?;
    let renderer = PdfiumRenderer::bind()?
        .with_password(config.password.clone())
        .with_image_extraction(config.extract_images);
    run(&doc, config, &renderer)
}

/// Convert a PDF using a caller-supplied [`PageRenderer`].
pub fn convert_with<R: PageRenderer + ?Sized>(
    source: impl AsRef<Path>,
    config: &ConversionConfig,
    renderer: &R,
) -> Result<ConversionReport, SplitError> {
    let doc = input::validate_source(source)?;
    run(&doc, config, renderer)
}

/// Extract PDF metadata without converting content.
pub fn inspect(
    source: impl AsRef<Path>,
    password: Option<&str>,
) -> Result<DocumentMetadata, SplitError> {
    let doc = input::validate_source(source)?;
    PdfiumRenderer::bind()?
        .with_password(password.map(str::to_string))
        .metadata(doc.path())
}

// ── Internal helpers ─────────────────────────────────────────────────────

fn run<R: PageRenderer + ?Sized>(
    doc: &SourceDocument,
    config: &ConversionConfig,
    renderer: &R,
) -> Result<ConversionReport, SplitError> {
    let start = Instant::now();
    let source = doc.path();
    info!("Starting conversion: {}", source.display());

    // ── Step 1: Output directory ─────────────────────────────────────────
    let output_dir = match config.output_dir {
        Some(ref dir) => dir.clone(),
        None => doc.parent_dir(),
    };
    write::ensure_dir(&output_dir)?;

    // ── Step 2: Page count (document closed again before the loop) ───────
    let total_pages = renderer.page_count(source)?;

    // ── Step 3: Images directory ─────────────────────────────────────────
    let images_dir = write::ensure_images_dir(&output_dir)?;

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(source, total_pages, &output_dir, &images_dir);
    }

    // ── Step 4: One page at a time ───────────────────────────────────────
    let mut files = Vec::with_capacity(total_pages);
    for page_index in 0..total_pages {
        let page_num = page_index + 1;
        let markdown = renderer.render_page(source, page_index, &images_dir)?;

        let file_name = write::page_file_name(doc.stem(), page_num);
        let path = output_dir.join(&file_name);
        write::write_page(&path, &markdown)?;
        debug!("Wrote page {} → {}", page_num, path.display());

        files.push(path);

        if let Some(ref cb) = config.progress_callback {
            cb.on_page_complete(page_num, total_pages, &file_name);
        }
    }

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(total_pages);
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "Conversion complete: {} pages → {} in {}ms",
        total_pages,
        output_dir.display(),
        duration_ms
    );

    Ok(ConversionReport {
        source: source.to_path_buf(),
        output_dir,
        images_dir,
        total_pages,
        files,
        duration_ms,
    })
}

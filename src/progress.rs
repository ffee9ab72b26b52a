//! Progress-callback trait for run and per-page conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the converter walks the pages. The library itself never prints;
//! [`StdoutProgress`] is the implementation the command line installs to
//! produce its interactive progress lines.
//!
//! # Example
//!
//! ```rust
//! use pdf2md_pages::{ConversionProgressCallback, ConversionConfig};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     written: AtomicUsize,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_page_complete(&self, _page_num: usize, _total_pages: usize, _file_name: &str) {
//!         self.written.fetch_add(1, Ordering::SeqCst);
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { written: AtomicUsize::new(0) });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Called by the converter as it processes a document.
///
/// Pages are processed strictly in ascending order on the calling thread, so
/// events arrive in page order. All methods default to no-ops.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after the page count is known and the directories exist,
    /// before the first page is rendered.
    fn on_conversion_start(
        &self,
        source: &Path,
        total_pages: usize,
        output_dir: &Path,
        images_dir: &Path,
    ) {
        let _ = (source, total_pages, output_dir, images_dir);
    }

    /// Called after a page's Markdown file has been written.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    /// * `file_name`   — bare file name of the written Markdown file
    fn on_page_complete(&self, page_num: usize, total_pages: usize, file_name: &str) {
        let _ = (page_num, total_pages, file_name);
    }

    /// Called once after every page has been written.
    fn on_conversion_complete(&self, total_pages: usize) {
        let _ = total_pages;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

/// Writes the interactive progress lines to a sink (stdout by default).
///
/// ```text
/// Converting: doc.pdf
/// Total pages: 2
/// Output directory: out
/// Images directory: out/images
///   Page 1/2 -> doc_page_001.md
///   Page 2/2 -> doc_page_002.md
/// Successfully converted 2 pages.
/// ```
pub struct StdoutProgress<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl StdoutProgress {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for StdoutProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> StdoutProgress<W> {
    /// Write progress lines to `out` instead of stdout.
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the sink, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // Progress output is best effort: a closed stdout must not fail the run.
    fn line(&self, text: std::fmt::Arguments<'_>) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }
}

impl<W: Write + Send> ConversionProgressCallback for StdoutProgress<W> {
    fn on_conversion_start(
        &self,
        source: &Path,
        total_pages: usize,
        output_dir: &Path,
        images_dir: &Path,
    ) {
        self.line(format_args!("Converting: {}", source.display()));
        self.line(format_args!("Total pages: {total_pages}"));
        self.line(format_args!("Output directory: {}", output_dir.display()));
        self.line(format_args!("Images directory: {}", images_dir.display()));
    }

    fn on_page_complete(&self, page_num: usize, total_pages: usize, file_name: &str) {
        self.line(format_args!("  Page {page_num}/{total_pages} -> {file_name}"));
    }

    fn on_conversion_complete(&self, total_pages: usize) {
        self.line(format_args!("Successfully converted {total_pages} pages."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_conversion_start(Path::new("a.pdf"), 5, Path::new("."), Path::new("images"));
        cb.on_page_complete(1, 5, "a_page_001.md");
        cb.on_conversion_complete(5);
    }

    #[test]
    fn stdout_progress_lines() {
        let progress = StdoutProgress::with_writer(Vec::<u8>::new());
        let out_dir = PathBuf::from("out");
        progress.on_conversion_start(
            Path::new("doc.pdf"),
            2,
            &out_dir,
            &out_dir.join("images"),
        );
        progress.on_page_complete(1, 2, "doc_page_001.md");
        progress.on_page_complete(2, 2, "doc_page_002.md");
        progress.on_conversion_complete(2);

        let text = String::from_utf8(progress.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Converting: doc.pdf");
        assert_eq!(lines[1], "Total pages: 2");
        assert_eq!(lines[2], "Output directory: out");
        assert!(lines[3].starts_with("Images directory: out"));
        assert!(lines[3].ends_with("images"));
        assert_eq!(lines[4], "  Page 1/2 -> doc_page_001.md");
        assert_eq!(lines[5], "  Page 2/2 -> doc_page_002.md");
        assert_eq!(lines[6], "Successfully converted 2 pages.");
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn ConversionProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_page_complete(1, 10, "x_page_001.md");
    }
}

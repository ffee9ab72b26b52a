//! # pdf2md-pages
//!
//! Split a PDF into one Markdown file per page, extracting embedded images
//! into an `images/` directory alongside.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate the path exists and ends in .pdf
//!  ├─ 2. Count    open once for the page count, close again
//!  ├─ 3. Render   per page: text layer, font-size headings, images (pdfium)
//!  ├─ 4. Polish   whitespace / Unicode cleanup
//!  └─ 5. Output   {stem}_page_001.md … plus images/{stem}_page_001_img_001.png
//! ```
//!
//! Pages are processed strictly in order, one at a time. The first failure
//! stops the run; pages already written stay on disk.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2md_pages::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder().output_dir("out").build()?;
//!     let report = convert("document.pdf", &config)?;
//!     for file in report.files() {
//!         println!("{}", file.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom backends
//!
//! [`convert_with`] accepts any [`PageRenderer`], which is how the
//! orchestration is tested without a pdfium library.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2md-pages` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, IMAGES_DIR_NAME};
pub use convert::{convert, convert_with, inspect};
pub use error::{ErrorKind, SplitError};
pub use output::{ConversionReport, DocumentMetadata};
pub use pipeline::render::{PageRenderer, PdfiumRenderer};
pub use progress::{
    ConversionProgressCallback, NoopProgressCallback, ProgressCallback, StdoutProgress,
};
